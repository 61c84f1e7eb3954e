//! Gallery page: creator profile header and the album media grid

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{EmptyState, LoadingState};
use crate::hooks::use_catalog_loader;
use crate::models::{CreatorProfile, MediaAlbum};
use crate::utils::dates::{days_since, format_long_date};

const GALLERY_SCROLL_ID: &str = "gallery-scroll";

/// Scroll offset after which the back-to-top button appears
const SCROLL_TOP_THRESHOLD: i32 = 300;

/// Gallery tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GalleryTab {
    Medias,
    Infos,
}

impl GalleryTab {
    fn label(&self) -> &'static str {
        match self {
            GalleryTab::Medias => "Médias",
            GalleryTab::Infos => "Infos",
        }
    }
}

/// Gallery page at `/`
#[component]
pub fn GalleryPage() -> Element {
    let catalog = use_catalog_loader();
    let mut active_tab = use_signal(|| GalleryTab::Medias);
    let mut show_scroll_top = use_signal(|| false);
    let navigator = use_navigator();

    rsx! {
        div {
            id: GALLERY_SCROLL_ID,
            class: "h-[calc(100vh-7rem)] overflow-y-auto",
            onscroll: move |_| {
                let scrolled = scroll_container()
                    .map(|el| past_scroll_threshold(el.scroll_top()))
                    .unwrap_or(false);
                show_scroll_top.set(scrolled);
            },

            LoadingState {
                loading: catalog.is_loading(),
                error: catalog.error(),
                has_data: catalog.album().is_some(),

                if let (Some(profile), Some(album)) = (catalog.profile(), catalog.album()) {
                    div { class: "space-y-6",
                        ProfileHeader { profile: profile.clone() }

                        // Tab switcher
                        div { class: "bg-white shadow rounded-lg",
                            div { class: "border-b border-gray-200 px-4",
                                nav { class: "flex space-x-6",
                                    for tab in [GalleryTab::Medias, GalleryTab::Infos] {
                                        button {
                                            class: format!(
                                                "py-3 text-sm font-medium border-b-2 transition-colors {}",
                                                if active_tab() == tab {
                                                    "border-orange-600 text-orange-700"
                                                } else {
                                                    "border-transparent text-gray-500 hover:text-gray-700"
                                                }
                                            ),
                                            onclick: move |_| active_tab.set(tab),
                                            "{tab.label()}"
                                        }
                                    }
                                }
                            }

                            div { class: "px-4 py-5 sm:p-6",
                                match active_tab() {
                                    GalleryTab::Medias => rsx! {
                                        MediaGrid {
                                            album: album.clone(),
                                            cover: profile.cover_url.clone(),
                                            on_select: move |index| {
                                                navigator.push(Route::MediaDetailPage { index });
                                            },
                                        }
                                    },
                                    GalleryTab::Infos => rsx! {
                                        AlbumInfo { album: album.clone() }
                                    },
                                }
                            }
                        }
                    }
                }
            }

            // Back to top
            if show_scroll_top() {
                button {
                    class: "fixed bottom-6 right-6 z-40 w-10 h-10 rounded-full bg-orange-600 text-white shadow-lg hover:bg-orange-700",
                    onclick: move |_| {
                        if let Some(el) = scroll_container() {
                            el.set_scroll_top(0);
                        }
                        show_scroll_top.set(false);
                    },
                    "↑"
                }
            }
        }
    }
}

/// Creator profile header with cover, avatar and collection stats
#[component]
fn ProfileHeader(profile: CreatorProfile) -> Element {
    rsx! {
        div { class: "bg-white shadow rounded-lg overflow-hidden",
            // Cover area, with the ambiance video when the collection ships one
            div { class: "relative h-48 bg-gray-200",
                if let Some(video_url) = &profile.background_video_url {
                    video {
                        class: "absolute inset-0 w-full h-full object-cover",
                        src: "{video_url}",
                        autoplay: true,
                        muted: true,
                        r#loop: true,
                    }
                } else {
                    img {
                        class: "absolute inset-0 w-full h-full object-cover",
                        src: "{profile.cover_url}",
                        alt: "{profile.name}",
                    }
                }
            }

            div { class: "px-4 py-5 sm:p-6",
                div { class: "flex items-start space-x-4",
                    img {
                        class: "w-16 h-16 rounded-full border-2 border-white shadow -mt-12 bg-white object-cover",
                        src: "{profile.avatar_url}",
                        alt: "{profile.creator_name}",
                    }

                    div { class: "flex-1 min-w-0",
                        div { class: "flex items-center space-x-3",
                            h1 { class: "text-xl font-semibold text-gray-900 truncate", "{profile.name}" }
                            span {
                                class: "px-3 py-1 rounded-full text-xs font-medium {profile.status.badge_class()}",
                                "{profile.status.display_text()}"
                            }
                        }
                        p { class: "text-sm text-gray-500", "par {profile.creator_name}" }

                        div { class: "mt-2 flex items-center space-x-4 text-sm text-gray-600",
                            span { class: "px-2 py-0.5 bg-gray-100 rounded-full text-xs font-medium",
                                "{profile.category}"
                            }
                            span { "👁 {profile.views} vues" }
                            span { "❤️ {profile.likes} j'aime" }
                        }

                        p { class: "mt-3 text-sm text-gray-700", "{profile.description_text()}" }
                    }
                }
            }
        }
    }
}

/// Responsive grid over the album entries
#[component]
fn MediaGrid(album: MediaAlbum, cover: String, on_select: EventHandler<i64>) -> Element {
    let entries = album.resolved_entries(&cover);

    if entries.is_empty() {
        return rsx! {
            EmptyState {
                icon: "🖼️".to_string(),
                title: "Aucun média".to_string(),
                message: Some("Cette collection ne contient encore aucun média.".to_string()),
            }
        };
    }

    rsx! {
        div { class: "grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4",
            for entry in entries {
                div {
                    key: "{entry.index}",
                    class: "group cursor-pointer",
                    onclick: move |_| on_select.call(entry.index as i64),

                    div { class: "relative aspect-square rounded-lg overflow-hidden bg-gray-100",
                        img {
                            class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-200",
                            src: "{entry.thumbnail}",
                            alt: "{entry.title}",
                        }
                        if entry.kind.is_video() {
                            div { class: "absolute inset-0 flex items-center justify-center",
                                span { class: "w-10 h-10 rounded-full bg-black bg-opacity-50 text-white flex items-center justify-center",
                                    "▶"
                                }
                            }
                        }
                    }

                    div { class: "mt-2",
                        p { class: "text-sm font-medium text-gray-900 truncate", "{entry.title}" }
                        p { class: "text-xs text-gray-500", {format_long_date(&entry.date)} }
                        p { class: "text-xs text-gray-500",
                            "❤️ {entry.likes} · 💬 {entry.comments}"
                        }
                    }
                }
            }
        }
    }
}

/// Infos tab with album facts
#[component]
fn AlbumInfo(album: MediaAlbum) -> Element {
    let created = format_long_date(&album.created_at);
    let age_days = days_since(&album.created_at);

    rsx! {
        dl { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
            div {
                dt { class: "text-sm font-medium text-gray-500", "Nom" }
                dd { class: "mt-1 text-sm text-gray-900", "{album.name}" }
            }
            div {
                dt { class: "text-sm font-medium text-gray-500", "Créé le" }
                dd { class: "mt-1 text-sm text-gray-900", "{created}" }
            }
            div {
                dt { class: "text-sm font-medium text-gray-500", "Ancienneté" }
                dd { class: "mt-1 text-sm text-gray-900", "{age_days} jours" }
            }
            div {
                dt { class: "text-sm font-medium text-gray-500", "Vues" }
                dd { class: "mt-1 text-sm text-gray-900", "{album.views}" }
            }
            div {
                dt { class: "text-sm font-medium text-gray-500", "Médias" }
                dd { class: "mt-1 text-sm text-gray-900", "{album.media_count()}" }
            }
        }
    }
}

/// Whether a scroll offset is far enough down to show the back-to-top
/// button
pub fn past_scroll_threshold(scroll_top: i32) -> bool {
    scroll_top > SCROLL_TOP_THRESHOLD
}

/// Find the gallery scroll container in the document
fn scroll_container() -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(GALLERY_SCROLL_ID)
}
