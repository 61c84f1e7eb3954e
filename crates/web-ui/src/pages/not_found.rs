//! Catch-all page for unknown routes

use dioxus::prelude::*;

use crate::app::Route;

/// Not-found page for any unmatched path
#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "bg-white shadow rounded-lg",
            div { class: "px-4 py-12 sm:p-12 text-center",
                div { class: "text-4xl mb-3", "🧭" }
                h2 { class: "text-lg font-semibold text-gray-900", "Page introuvable" }
                p { class: "mt-1 text-sm text-gray-500",
                    "La page \"/{path}\" n'existe pas ou a été déplacée."
                }
                div { class: "mt-6",
                    Link {
                        to: Route::GalleryPage {},
                        class: "inline-flex items-center px-4 py-2 text-sm font-medium text-white bg-orange-600 rounded-md hover:bg-orange-700",
                        "Retour à la galerie"
                    }
                }
            }
        }
    }
}
