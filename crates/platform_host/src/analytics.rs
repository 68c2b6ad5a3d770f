//! Analytics sink contracts.
//!
//! The storefront emits a handful of named events with flat JSON payloads. A missing or failing
//! analytics backend never affects the UI; failures are returned so the runtime can log them.

use std::{cell::RefCell, rc::Rc};

use serde_json::Value;

/// One event as handed to an [`AnalyticsSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedEvent {
    /// Event name (for example `book_view`).
    pub name: String,
    /// Flat JSON object payload.
    pub payload: Value,
}

/// Host service receiving analytics events.
pub trait AnalyticsSink {
    /// Records one event. Implementations must not panic on backend failure.
    ///
    /// # Errors
    ///
    /// Returns a message when the backend rejected or failed to receive the event.
    fn track(&self, name: &str, payload: &Value) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Sink that drops every event.
pub struct NoopAnalyticsSink;

impl AnalyticsSink for NoopAnalyticsSink {
    fn track(&self, _name: &str, _payload: &Value) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Sink that keeps events in memory; clones share the same buffer.
pub struct MemoryAnalyticsSink {
    events: Rc<RefCell<Vec<TrackedEvent>>>,
}

impl MemoryAnalyticsSink {
    /// Events recorded so far, oldest first.
    pub fn events(&self) -> Vec<TrackedEvent> {
        self.events.borrow().clone()
    }
}

impl AnalyticsSink for MemoryAnalyticsSink {
    fn track(&self, name: &str, payload: &Value) -> Result<(), String> {
        self.events.borrow_mut().push(TrackedEvent {
            name: name.to_string(),
            payload: payload.clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn memory_sink_clones_share_recorded_events() {
        let sink = MemoryAnalyticsSink::default();
        let handle = sink.clone();

        handle
            .track("book_view", &json!({ "book_id": 7 }))
            .expect("track");

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "book_view");
        assert_eq!(events[0].payload["book_id"], json!(7));
    }
}
