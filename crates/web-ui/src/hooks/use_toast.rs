//! Toast notification hook for Dioxus frontend

use std::collections::VecDeque;

use dioxus::prelude::*;

/// Maximum number of toasts to keep in history
const MAX_TOAST_HISTORY: usize = 10;

/// Toast notification with display properties
#[derive(Clone, Debug, PartialEq)]
pub struct ToastNotification {
    pub id: uuid::Uuid,
    pub title: String,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub dismissed: bool,
    pub auto_dismiss_after: Option<chrono::Duration>,
}

impl ToastNotification {
    /// Build a toast that auto-dismisses after five seconds
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            timestamp: chrono::Utc::now(),
            dismissed: false,
            auto_dismiss_after: Some(chrono::Duration::seconds(5)),
        }
    }

    /// Check if the toast should be auto-dismissed
    pub fn should_auto_dismiss(&self) -> bool {
        self.auto_dismiss_after.is_some() && !self.dismissed
    }
}

/// Toast queue state shared through context
#[derive(Clone)]
pub struct Toaster {
    pub toasts: Signal<VecDeque<ToastNotification>>,
}

impl Toaster {
    /// Show a new toast
    pub fn notify(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let notification = ToastNotification::new(title, message);

        let mut toasts = self.toasts.write();
        toasts.push_back(notification);
        trim_history(&mut toasts);
    }

    /// Dismiss a toast by ID
    pub fn dismiss(&mut self, id: uuid::Uuid) {
        let mut toasts = self.toasts.write();
        if let Some(notification) = toasts.iter_mut().find(|n| n.id == id) {
            notification.dismissed = true;
        }
    }

    /// Clear all toasts
    pub fn clear_all(&mut self) {
        self.toasts.write().clear();
    }

    /// Get active (non-dismissed) toasts
    pub fn active_toasts(&self) -> Vec<ToastNotification> {
        self.toasts
            .read()
            .iter()
            .filter(|n| !n.dismissed)
            .cloned()
            .collect()
    }

    /// Get the most recent active toast
    pub fn latest(&self) -> Option<ToastNotification> {
        self.toasts
            .read()
            .iter()
            .filter(|n| !n.dismissed)
            .last()
            .cloned()
    }

    /// Check if there are any active toasts
    pub fn has_toasts(&self) -> bool {
        self.toasts.read().iter().any(|n| !n.dismissed)
    }
}

/// Keep only the most recent toasts
fn trim_history(toasts: &mut VecDeque<ToastNotification>) {
    while toasts.len() > MAX_TOAST_HISTORY {
        toasts.pop_front();
    }
}

/// Hook for toast notifications in Dioxus components
pub fn use_toaster() -> Toaster {
    // The queue is provided at the app root so every page shares it
    let toasts = use_context::<Signal<VecDeque<ToastNotification>>>();

    Toaster { toasts }
}
