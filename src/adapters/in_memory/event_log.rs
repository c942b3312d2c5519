use crate::domain::events::DomainEvent;
use crate::ports::{Result, event_log::EventLog as EventLogTrait};
use async_trait::async_trait;
use std::sync::Mutex;

use super::lock;

/// In-memory append-only event log
pub struct EventLog {
    events: Mutex<Vec<DomainEvent>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventLogTrait for EventLog {
    async fn append(&self, events: Vec<DomainEvent>) -> Result<()> {
        lock(&self.events)?.extend(events);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<DomainEvent>> {
        Ok(lock(&self.events)?.clone())
    }
}
