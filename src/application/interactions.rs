use crate::domain::entities::interaction_event::InteractionEvent;
use crate::domain::error::DomainError;
use crate::domain::ports::interaction_log::InteractionLog;
use crate::domain::values::action::Action;
use std::sync::Arc;

pub struct InteractionUseCase {
    log: Arc<dyn InteractionLog>,
}

impl InteractionUseCase {
    pub fn new(log: Arc<dyn InteractionLog>) -> Self {
        Self { log }
    }

    /// Appends one event stamped with the current time. Repeated calls log repeated events.
    pub fn record(&self, user_id: &str, action: Action, book_title: &str) -> Result<InteractionEvent, DomainError> {
        let event = InteractionEvent::new(user_id, action, book_title);
        self.log.append(&event)?;
        Ok(event)
    }

    pub fn history(&self, user_id: &str) -> Result<Vec<InteractionEvent>, DomainError> {
        self.log.read_by_user(user_id)
    }
}
