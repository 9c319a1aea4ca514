use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::sync::Arc;

/// A shared value published as immutable snapshots.
///
/// Readers load the current snapshot without locking and keep a consistent
/// view for as long as they hold the returned `Arc`. Writers are serialized
/// with each other and swap in a complete new snapshot at once.
#[derive(Debug)]
pub struct SnapshotCell<T> {
    current: ArcSwap<T>,
    write: Mutex<()>,
}

impl<T: Default> Default for SnapshotCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> SnapshotCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: ArcSwap::from_pointee(value),
            write: Mutex::new(()),
        }
    }

    /// Returns the current snapshot.
    pub fn load(&self) -> Arc<T> {
        self.current.load_full()
    }

    /// Replaces the current snapshot and returns the published one.
    pub fn store(&self, value: T) -> Arc<T> {
        let _guard = self.write.lock();
        let next = Arc::new(value);
        self.current.store(Arc::clone(&next));
        next
    }

    /// Builds the next snapshot from the current one while holding the
    /// writer lock, so no other write can land in between.
    pub fn update<F>(&self, f: F) -> Arc<T>
    where
        F: FnOnce(&T) -> T,
    {
        let _guard = self.write.lock();
        let prev = self.current.load_full();
        let next = Arc::new(f(&prev));
        self.current.store(Arc::clone(&next));
        next
    }
}
