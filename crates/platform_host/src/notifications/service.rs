//! Notification service contracts plus no-op and recording adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`NotificationService`].
pub type NotificationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for blocking, user-visible notices (the browser adapter uses `window.alert`).
pub trait NotificationService {
    /// Shows `message` to the user.
    fn notify<'a>(&'a self, message: &'a str) -> NotificationFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op notification service for unsupported targets.
pub struct NoopNotificationService;

impl NotificationService for NoopNotificationService {
    fn notify<'a>(&'a self, _message: &'a str) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Notification service that records every message, for tests and headless runs.
pub struct MemoryNotificationService {
    delivered: Rc<RefCell<Vec<String>>>,
}

impl MemoryNotificationService {
    /// Messages delivered so far, oldest first.
    pub fn delivered(&self) -> Vec<String> {
        self.delivered.borrow().clone()
    }
}

impl NotificationService for MemoryNotificationService {
    fn notify<'a>(&'a self, message: &'a str) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.delivered.borrow_mut().push(message.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_service_records_messages_in_order() {
        let service = MemoryNotificationService::default();
        block_on(service.notify("first")).expect("notify");
        block_on(service.notify("second")).expect("notify");
        assert_eq!(service.delivered(), vec!["first", "second"]);
    }
}
