//! Layout components for the Laala web app
//!
//! This module provides the core layout structure:
//! - AppLayout: top navigation bar, breadcrumbs and the routed page outlet
//! - ToastStack: fixed overlay rendering the shared toast queue

use dioxus::prelude::*;

use super::feedback::Toast;
use crate::app::Route;
use crate::hooks::{use_toaster, ToastNotification};

/// Navigation item definition
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub route: String,
}

/// Breadcrumb item definition
#[derive(Clone, Debug, PartialEq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub route: Option<String>,
}

/// Main layout wrapper with top navigation and toast overlay
#[component]
pub fn AppLayout() -> Element {
    let route = use_route::<Route>();
    let breadcrumbs = get_breadcrumbs(&route);

    rsx! {
        div { class: "min-h-screen bg-gray-50 flex flex-col",
            TopNav {}

            main { class: "flex-1",
                div { class: "container mx-auto px-4 sm:px-6 lg:px-8 py-6",
                    Breadcrumb { items: breadcrumbs }
                    Outlet::<Route> {}
                }
            }

            ToastStack {}
        }
    }
}

/// Top navigation bar with the two app sections
#[component]
pub fn TopNav() -> Element {
    let route = use_route::<Route>();

    let nav_items = vec![
        NavItem {
            id: "gallery",
            label: "Galerie",
            icon: "🖼️",
            route: "/".to_string(),
        },
        NavItem {
            id: "dashboard",
            label: "Gestion de Contenu",
            icon: "🛡️",
            route: "/dashboard".to_string(),
        },
    ];

    let current_path = route.to_string();
    let is_active = move |item: &NavItem| match item.id {
        // The media viewer belongs to the gallery section
        "gallery" => current_path == "/" || current_path.starts_with("/media"),
        _ => current_path.starts_with(&item.route),
    };

    rsx! {
        header { class: "bg-white shadow-sm border-b",
            div { class: "container mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between h-16",
                    // Logo and title
                    div { class: "flex items-center",
                        div { class: "w-10 h-10 bg-gradient-to-br from-orange-500 to-pink-600 rounded-lg flex items-center justify-center shadow-md",
                            span { class: "text-white font-bold text-lg", "L" }
                        }
                        span { class: "ml-3 text-xl font-semibold text-gray-900", "Laala" }
                    }

                    // Navigation links
                    nav { class: "flex items-center space-x-2",
                        for item in nav_items {
                            Link {
                                key: "{item.id}",
                                to: item.route.clone(),
                                class: format!(
                                    "flex items-center px-3 py-2 text-sm font-medium rounded-lg transition-all duration-150 {}",
                                    if is_active(&item) {
                                        "bg-orange-50 text-orange-700 shadow-sm"
                                    } else {
                                        "text-gray-700 hover:bg-gray-50 hover:text-gray-900"
                                    }
                                ),

                                span { class: "text-lg mr-2", "{item.icon}" }
                                span { "{item.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Breadcrumb navigation component
#[component]
pub fn Breadcrumb(items: Vec<BreadcrumbItem>) -> Element {
    if items.len() <= 1 {
        return rsx! { div {} };
    }

    rsx! {
        nav { class: "flex mb-4", "aria-label": "Breadcrumb",
            ol { class: "flex items-center space-x-2 text-sm",
                for (index, item) in items.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: "flex items-center",

                        if index > 0 {
                            span { class: "mx-2 text-gray-400", "/" }
                        }

                        if let Some(route) = &item.route {
                            Link {
                                to: route.clone(),
                                class: "text-gray-500 hover:text-gray-700 transition-colors",
                                "{item.label}"
                            }
                        } else {
                            span { class: "text-gray-900 font-medium", "{item.label}" }
                        }
                    }
                }
            }
        }
    }
}

/// Fixed overlay rendering every active toast
#[component]
pub fn ToastStack() -> Element {
    let toaster = use_toaster();
    let toasts = toaster.active_toasts();

    if toasts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 w-80 space-y-2",
            for toast in toasts {
                ToastItem { key: "{toast.id}", notification: toast }
            }
        }
    }
}

/// One toast card with its auto-dismiss timer
#[component]
fn ToastItem(notification: ToastNotification) -> Element {
    let toaster = use_toaster();
    let id = notification.id;
    let auto_dismiss = notification.should_auto_dismiss();

    use_effect({
        let toaster = toaster.clone();
        move || {
            if auto_dismiss {
                let mut toaster = toaster.clone();
                spawn(async move {
                    #[cfg(target_arch = "wasm32")]
                    {
                        gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
                    }
                    #[cfg(not(target_arch = "wasm32"))]
                    {
                        tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
                    }
                    toaster.dismiss(id);
                });
            }
        }
    });

    let mut toaster = toaster.clone();

    rsx! {
        Toast {
            title: notification.title.clone(),
            message: notification.message.clone(),
            ondismiss: move |_| toaster.dismiss(id),
        }
    }
}

/// Breadcrumb trail for the current route
fn get_breadcrumbs(route: &Route) -> Vec<BreadcrumbItem> {
    let mut breadcrumbs = vec![BreadcrumbItem {
        label: "Galerie".to_string(),
        route: Some("/".to_string()),
    }];

    match route {
        Route::GalleryPage {} => {
            if let Some(root) = breadcrumbs.last_mut() {
                root.route = None;
            }
        }
        Route::MediaDetailPage { index } => {
            breadcrumbs.push(BreadcrumbItem {
                label: format!("Média {}", index.saturating_add(1)),
                route: None,
            });
        }
        Route::DashboardPage {} => {
            breadcrumbs.push(BreadcrumbItem {
                label: "Gestion de Contenu".to_string(),
                route: None,
            });
        }
        Route::NotFoundPage { .. } => {
            breadcrumbs.push(BreadcrumbItem {
                label: "Page introuvable".to_string(),
                route: None,
            });
        }
    }

    breadcrumbs
}
