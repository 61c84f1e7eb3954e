//! Loading indicators

use dioxus::prelude::*;

use super::feedback::ErrorMessage;

/// Props for the Spinner component
#[derive(Props, Clone, PartialEq)]
pub struct SpinnerProps {
    /// Spinner size (small, medium, large)
    #[props(default = "medium".to_string())]
    pub size: String,
    /// Optional loading message
    #[props(default = None)]
    pub message: Option<String>,
}

/// Spinner loading indicator
#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    let spinner_class = format!("spinner spinner-{}", props.size);

    rsx! {
        div { class: "spinner-container",
            div { class: "{spinner_class}" }
            if let Some(message) = &props.message {
                div { class: "spinner-message", "{message}" }
            }
        }
    }
}

/// Branch rendered by the LoadingState wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadingPhase {
    Loading,
    Failed,
    Empty,
    Ready,
}

/// Decide which branch to render. Loading wins over errors, errors win
/// over data.
fn loading_phase(loading: bool, error: Option<&str>, has_data: bool) -> LoadingPhase {
    if loading {
        LoadingPhase::Loading
    } else if error.is_some() {
        LoadingPhase::Failed
    } else if !has_data {
        LoadingPhase::Empty
    } else {
        LoadingPhase::Ready
    }
}

/// Props for the LoadingState component
#[derive(Props, Clone, PartialEq)]
pub struct LoadingStateProps {
    /// Loading state
    pub loading: bool,
    /// Error message if any
    pub error: Option<String>,
    /// Whether the wrapped data has arrived
    pub has_data: bool,
    /// Content rendered once the data is available
    pub children: Element,
}

/// Wrapper that handles loading, error and empty states. The children
/// close over whatever data the caller gated `has_data` on.
#[component]
pub fn LoadingState(props: LoadingStateProps) -> Element {
    match loading_phase(props.loading, props.error.as_deref(), props.has_data) {
        LoadingPhase::Loading => rsx! {
            div { class: "loading-state",
                Spinner { message: Some("Chargement...".to_string()) }
            }
        },
        LoadingPhase::Failed => rsx! {
            div { class: "error-state",
                ErrorMessage { message: props.error.clone().unwrap_or_default() }
            }
        },
        LoadingPhase::Empty => rsx! {
            div { class: "empty-state",
                "Aucune donnée disponible"
            }
        },
        LoadingPhase::Ready => rsx! {
            {props.children}
        },
    }
}
