//! Feedback components for errors, empty results and toast notifications

use dioxus::prelude::*;

/// Props for the ErrorMessage component
#[derive(Props, Clone, PartialEq)]
pub struct ErrorMessageProps {
    /// Error message to display
    pub message: String,
}

/// Error message component for load failures
#[component]
pub fn ErrorMessage(props: ErrorMessageProps) -> Element {
    rsx! {
        div { class: "error-message",
            span { class: "error-icon", "⚠" }
            span { class: "error-text", "{props.message}" }
        }
    }
}

/// Props for the EmptyState component
#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    /// Icon shown above the title
    #[props(default = "🔍".to_string())]
    pub icon: String,
    /// State title
    pub title: String,
    /// Optional explanation under the title
    #[props(default = None)]
    pub message: Option<String>,
}

/// Placeholder shown when a listing has nothing to display
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div { class: "empty-state text-center py-12",
            div { class: "text-4xl mb-3", "{props.icon}" }
            p { class: "text-lg font-medium text-gray-900", "{props.title}" }
            if let Some(message) = &props.message {
                p { class: "mt-1 text-sm text-gray-500", "{message}" }
            }
        }
    }
}

/// Props for the Toast component
#[derive(Props, Clone, PartialEq)]
pub struct ToastProps {
    /// Toast title
    pub title: String,
    /// Toast message body
    pub message: String,
    /// Callback when the toast is dismissed
    #[props(default = EventHandler::default())]
    pub ondismiss: EventHandler<()>,
}

/// Single toast notification card
#[component]
pub fn Toast(props: ToastProps) -> Element {
    rsx! {
        div { class: "toast bg-white border border-gray-200 rounded-lg shadow-lg px-4 py-3",
            div { class: "flex items-start justify-between",
                div { class: "min-w-0",
                    p { class: "toast-title text-sm font-semibold text-gray-900", "{props.title}" }
                    p { class: "toast-message mt-0.5 text-sm text-gray-600", "{props.message}" }
                }
                button {
                    class: "toast-close ml-3 text-gray-400 hover:text-gray-600",
                    onclick: move |_| props.ondismiss.call(()),
                    "×"
                }
            }
        }
    }
}
