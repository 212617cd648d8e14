//! Capabilities the host client provides to the helper
//!
//! Implementations are called from the UI context and must not block.

/// The host toolbar entry that carries the helper panel.
pub trait NavigationHost: Send + Sync {
    /// Mount the panel's navigation entry. Adding an entry that is already
    /// present is a no-op for the host.
    fn add_navigation(&self);

    /// Deselect and unmount the panel's navigation entry.
    fn remove_navigation(&self);

    /// Select the entry so the panel is shown. No-op if already selected.
    fn select_navigation(&self);
}

/// Where the local player currently is.
pub trait LocationProvider: Send + Sync {
    /// Map region of the local player, or `None` when there is no player
    /// (logged out, loading).
    fn current_region(&self) -> Option<u32>;
}
