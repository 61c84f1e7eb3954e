//! Media detail page: single-entry viewer with playback controls

use dioxus::prelude::*;

use crate::components::{Button, LoadingState};
use crate::hooks::{run_media_command, use_catalog_loader};
use crate::models::{CreatorProfile, ResolvedEntry};
use crate::utils::dates::format_long_date;
use crate::utils::playback::PlaybackController;

/// DOM id of the viewer's media element
const MEDIA_ELEMENT_ID: &str = "media-player";

/// Detail page at `/media/:index`
///
/// The index is positional within the album. Anything that does not
/// resolve, negative values included, renders the not-found card.
#[component]
pub fn MediaDetailPage(index: i64) -> Element {
    let catalog = use_catalog_loader();

    rsx! {
        LoadingState {
            loading: catalog.is_loading(),
            error: catalog.error(),
            has_data: catalog.album().is_some(),

            if let (Some(profile), Some(album)) = (catalog.profile(), catalog.album()) {
                match album.resolve_entry(index, &profile.cover_url) {
                    Some(entry) => rsx! {
                        // Keyed so moving between entries rebinds the player
                        MediaViewer { key: "{entry.index}", entry, profile: profile.clone() }
                    },
                    None => rsx! {
                        MediaNotFound {}
                    },
                }
            }
        }
    }
}

/// Viewer surface plus the metadata sidebar
#[component]
fn MediaViewer(entry: ResolvedEntry, profile: CreatorProfile) -> Element {
    let navigator = use_navigator();
    let mut playback = use_signal(PlaybackController::new);
    let is_video = entry.kind.is_video();

    // One-shot autoplay once the surface is bound
    use_effect(move || {
        if is_video {
            let command = playback.write().request_autoplay();
            if let Some(command) = command {
                run_media_command(playback, MEDIA_ELEMENT_ID, command);
            }
        }
    });

    rsx! {
        div { class: "bg-white shadow rounded-lg overflow-hidden",
            // Viewer header
            div { class: "flex items-center justify-between px-4 py-3 border-b border-gray-200",
                div { class: "flex items-center space-x-3",
                    button {
                        class: "text-gray-500 hover:text-gray-700",
                        onclick: move |_| {
                            navigator.go_back();
                        },
                        "← Retour"
                    }
                    h2 { class: "text-base font-medium text-gray-900", "{entry.kind.viewer_title()}" }
                }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-3",
                // Media surface
                div { class: "lg:col-span-2 bg-black flex items-center justify-center",
                    if is_video {
                        video {
                            id: MEDIA_ELEMENT_ID,
                            class: "w-full max-h-[70vh]",
                            src: "{entry.url}",
                        }
                    } else {
                        img {
                            class: "w-full max-h-[70vh] object-contain",
                            src: "{entry.url}",
                            alt: "{entry.title}",
                        }
                    }
                }

                // Metadata sidebar
                div { class: "p-4 sm:p-6 space-y-4",
                    div {
                        h3 { class: "text-lg font-semibold text-gray-900", "{entry.title}" }
                        p { class: "text-sm text-gray-500", {format_long_date(&entry.date)} }
                    }

                    if is_video {
                        div { class: "flex items-center space-x-2",
                            button {
                                class: "px-3 py-2 text-sm font-medium text-white bg-orange-600 rounded-md hover:bg-orange-700",
                                onclick: move |_| {
                                    let command = playback.write().toggle_play_pause();
                                    run_media_command(playback, MEDIA_ELEMENT_ID, command);
                                },
                                if playback.read().is_playing() { "⏸ Pause" } else { "▶ Lecture" }
                            }
                            button {
                                class: "px-3 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-md hover:bg-gray-50",
                                onclick: move |_| {
                                    let command = playback.write().toggle_mute();
                                    run_media_command(playback, MEDIA_ELEMENT_ID, command);
                                },
                                if playback.read().is_muted() { "🔇 Son coupé" } else { "🔊 Son" }
                            }
                        }
                    }

                    div { class: "flex items-center space-x-4 text-sm text-gray-600",
                        span { "❤️ {entry.likes} j'aime" }
                        span { "💬 {entry.comments} commentaires" }
                    }

                    // Creator
                    div { class: "flex items-center space-x-3 pt-4 border-t border-gray-200",
                        img {
                            class: "w-10 h-10 rounded-full object-cover",
                            src: "{profile.avatar_url}",
                            alt: "{profile.creator_name}",
                        }
                        div {
                            p { class: "text-sm font-medium text-gray-900", "{profile.creator_name}" }
                            p { class: "text-xs text-gray-500", "{profile.category}" }
                        }
                    }

                    p { class: "text-sm text-gray-700", "{profile.description_text()}" }
                }
            }
        }
    }
}

/// Card shown when the index resolves to nothing
#[component]
fn MediaNotFound() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "bg-white shadow rounded-lg",
            div { class: "px-4 py-12 sm:p-12 text-center",
                div { class: "text-4xl mb-3", "🎬" }
                h2 { class: "text-lg font-semibold text-gray-900", "Média non trouvé" }
                p { class: "mt-1 text-sm text-gray-500",
                    "Le média que vous recherchez n'existe pas ou a été supprimé."
                }
                div { class: "mt-6 flex justify-center",
                    Button {
                        onclick: move |_| {
                            navigator.go_back();
                        },
                        "Retour à la galerie"
                    }
                }
            }
        }
    }
}
