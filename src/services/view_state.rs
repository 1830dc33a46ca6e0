use crate::domain::view::ViewState;

/// Durable home of the single persisted board configuration.
pub trait ViewStateStore: Send + Sync {
    /// Returns the last saved state. Absent or unreadable records yield `None`.
    fn load(&self) -> Option<ViewState>;

    /// Overwrites the persisted record. Failures are logged, not returned.
    fn save(&self, state: &ViewState);

    /// Removes the persisted record so defaults apply on the next load.
    fn clear(&self);
}
