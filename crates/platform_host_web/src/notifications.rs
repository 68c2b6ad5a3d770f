//! Notification host-service adapter backed by `window.alert`.

use platform_host::{NotificationFuture, NotificationService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser notification adapter showing a blocking alert dialog.
pub struct WebNotificationService;

impl NotificationService for WebNotificationService {
    fn notify<'a>(&'a self, message: &'a str) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::alert(message) })
    }
}
