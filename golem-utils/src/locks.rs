//! Lock alias so callers do not depend on the lock crate directly.

/// Synchronous reader/writer lock.
pub type SyncRwLock<T> = parking_lot::RwLock<T>;
