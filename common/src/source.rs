use std::sync::Arc;

use crate::network::entry::NetMap;

/// Defines the contract for capturing the connection table.
pub trait ConnectionSource: Send + Sync {
    /// Captures or shares a snapshot of the connection table.
    ///
    /// Each call returns an immutable view that stays valid for as long as the
    /// caller holds it. Dropping the `Arc` releases it.
    ///
    /// # Returns
    /// * `Some(Arc<NetMap>)` - The current table, possibly empty.
    /// * `None` - If the table cannot be produced right now.
    fn acquire(&self) -> Option<Arc<NetMap>>;
}
