//! Catalog state management hook

use dioxus::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppState;
use crate::models::{ContentRecord, CreatorProfile, GalleryError, MediaAlbum};
use crate::services::CatalogService;

/// Catalog context and methods
#[derive(Clone)]
pub struct CatalogContext {
    pub app_state: Signal<AppState>,
    pub catalog_service: CatalogService,
}

impl CatalogContext {
    /// Load the profile, album and moderation records into app state
    pub fn load_catalog(&self) {
        let catalog_service = self.catalog_service.clone();
        let mut app_state = self.app_state;

        spawn_local(async move {
            app_state.with_mut(|state| {
                state.is_loading = true;
                state.error = None;
            });

            let loaded = async {
                let profile = catalog_service.load_profile().await?;
                let album = catalog_service.load_album().await?;
                let records = catalog_service.load_content_records().await?;
                Ok::<_, GalleryError>((profile, album, records))
            }
            .await;

            match loaded {
                Ok((profile, album, records)) => {
                    app_state.with_mut(|state| {
                        state.profile = Some(profile);
                        state.album = Some(album);
                        state.records = Some(records);
                        state.is_loading = false;
                    });
                }
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("Catalog load failed: {}", error).into(),
                    );
                    app_state.with_mut(|state| {
                        state.error = Some(error.user_message());
                        state.is_loading = false;
                    });
                }
            }
        });
    }

    /// Get the loaded creator profile
    pub fn profile(&self) -> Option<CreatorProfile> {
        self.app_state.read().profile.clone()
    }

    /// Get the loaded media album
    pub fn album(&self) -> Option<MediaAlbum> {
        self.app_state.read().album.clone()
    }

    /// Get the loaded moderation records
    pub fn records(&self) -> Option<Vec<ContentRecord>> {
        self.app_state.read().records.clone()
    }

    /// Check whether every catalog document has been loaded
    pub fn is_loaded(&self) -> bool {
        let state = self.app_state.read();
        state.profile.is_some() && state.album.is_some() && state.records.is_some()
    }

    /// Check if loading
    pub fn is_loading(&self) -> bool {
        self.app_state.read().is_loading
    }

    /// Get current error
    pub fn error(&self) -> Option<String> {
        self.app_state.read().error.clone()
    }

    /// Clear error
    pub fn clear_error(&self) {
        let mut app_state = self.app_state;
        app_state.with_mut(|state| {
            state.error = None;
        });
    }
}

/// Hook for catalog access in Dioxus components
pub fn use_catalog() -> CatalogContext {
    // Get the app state from context
    let app_state = use_context::<Signal<AppState>>();
    let catalog_service = CatalogService::default();

    CatalogContext {
        app_state,
        catalog_service,
    }
}

/// Hook for automatically loading the catalog on component mount
pub fn use_catalog_loader() -> CatalogContext {
    let catalog_context = use_catalog();

    // Load the catalog on component mount if not already loaded
    use_effect({
        let catalog_context = catalog_context.clone();
        move || {
            if !catalog_context.is_loaded() && !catalog_context.is_loading() {
                catalog_context.load_catalog();
            }
        }
    });

    catalog_context
}
