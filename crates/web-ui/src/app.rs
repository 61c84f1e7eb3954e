//! Application root: shared state, routes and the router shell

use std::collections::VecDeque;

use dioxus::prelude::*;

use crate::components::AppLayout;
use crate::hooks::ToastNotification;
use crate::models::{ContentRecord, CreatorProfile, MediaAlbum};
use crate::pages::{DashboardPage, GalleryPage, MediaDetailPage, NotFoundPage};

/// Global application state shared through context
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Creator profile shown in the gallery header
    pub profile: Option<CreatorProfile>,
    /// Media album backing the grid and the detail viewer
    pub album: Option<MediaAlbum>,
    /// Moderation records backing the dashboard listing
    pub records: Option<Vec<ContentRecord>>,
    /// Whether a catalog load is in flight
    pub is_loading: bool,
    /// User-facing message for the last load failure
    pub error: Option<String>,
}

/// Application routes
#[derive(Routable, Clone, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    GalleryPage {},
    #[route("/media/:index")]
    MediaDetailPage { index: i64 },
    #[route("/dashboard")]
    DashboardPage {},
    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}

/// Application root component
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(AppState::default()));
    use_context_provider(|| Signal::new(VecDeque::<ToastNotification>::new()));

    rsx! {
        Router::<Route> {}
    }
}
