use crate::domain::entities::interaction_event::InteractionEvent;
use crate::domain::error::DomainError;

/// Append-only store of user interaction events.
pub trait InteractionLog: Send + Sync {
    fn append(&self, event: &InteractionEvent) -> Result<(), DomainError>;
    /// All events for `user_id` in insertion order. A store that does not exist yet
    /// holds no history.
    fn read_by_user(&self, user_id: &str) -> Result<Vec<InteractionEvent>, DomainError>;
}
