//! Poison-tolerant lock acquisition
//!
//! Engine state lives behind `RwLock`s, and `resolve` must never panic.
//! A poisoned lock therefore recovers the inner guard instead of
//! propagating: the guarded data is plain style/config state that stays
//! structurally valid even if a writer panicked mid-update.

use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Extension trait for acquiring locks without panicking on poison.
///
/// Poison events are logged with `tracing` and the guard is recovered
/// via `into_inner`.
pub(crate) trait LockExt<T> {
    type ReadGuard<'a>
    where
        Self: 'a;
    type WriteGuard<'a>
    where
        Self: 'a;

    /// Acquire a shared guard, recovering a poisoned lock.
    fn read_or_recover(&self) -> Self::ReadGuard<'_>;

    /// Acquire an exclusive guard, recovering a poisoned lock.
    fn write_or_recover(&self) -> Self::WriteGuard<'_>;
}

impl<T> LockExt<T> for RwLock<T> {
    type ReadGuard<'a>
        = RwLockReadGuard<'a, T>
    where
        T: 'a;
    type WriteGuard<'a>
        = RwLockWriteGuard<'a, T>
    where
        T: 'a;

    fn read_or_recover(&self) -> RwLockReadGuard<'_, T> {
        self.read().unwrap_or_else(|poisoned| {
            tracing::error!("RwLock poisoned during read; recovering inner guard");
            poisoned.into_inner()
        })
    }

    fn write_or_recover(&self) -> RwLockWriteGuard<'_, T> {
        self.write().unwrap_or_else(|poisoned| {
            tracing::error!("RwLock poisoned during write; recovering inner guard");
            poisoned.into_inner()
        })
    }
}

/// Same recovery behavior for plain mutexes (subscriber list).
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        tracing::error!("Mutex poisoned; recovering inner guard");
        poisoned.into_inner()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_read_or_recover_success() {
        let lock = RwLock::new(42);
        assert_eq!(*lock.read_or_recover(), 42);
    }

    #[test]
    fn test_write_or_recover_with_modification() {
        let lock = RwLock::new(0);
        {
            let mut guard = lock.write_or_recover();
            *guard = 100;
        }
        assert_eq!(*lock.read_or_recover(), 100);
    }

    #[test]
    fn test_recovers_after_poison() {
        let lock = Arc::new(RwLock::new(vec![1, 2, 3]));
        let writer = Arc::clone(&lock);

        let handle = thread::spawn(move || {
            let _guard = writer.write().unwrap();
            panic!("intentional panic to poison the lock");
        });
        let _ = handle.join();

        // Recovery still yields the pre-panic data.
        let guard = lock.read_or_recover();
        assert_eq!(*guard, vec![1, 2, 3], "poisoned lock should recover its data");
    }

    #[test]
    fn test_mutex_recovers_after_poison() {
        let mutex = Arc::new(Mutex::new(7));
        let holder = Arc::clone(&mutex);

        let handle = thread::spawn(move || {
            let _guard = holder.lock().unwrap();
            panic!("intentional panic to poison the mutex");
        });
        let _ = handle.join();

        assert_eq!(*lock_or_recover(&mutex), 7);
    }
}
