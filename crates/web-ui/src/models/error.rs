//! Error types for the Laala web UI

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the web UI.
///
/// None of these are fatal: catalog failures render the page error state,
/// playback failures revert the controller and are logged, date failures fall
/// back to placeholder display values.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum GalleryError {
    /// A catalog document failed to parse
    #[error("Catalog parse error: {message}")]
    CatalogParse { message: String },

    /// A catalog document has not been loaded yet
    #[error("Catalog document missing: {document}")]
    CatalogMissing { document: String },

    /// A media element command failed
    #[error("Playback error: {message}")]
    Playback { message: String },

    /// A date value could not be interpreted
    #[error("Invalid date value: {value}")]
    InvalidDate { value: String },
}

impl GalleryError {
    /// Create a catalog parse error
    pub fn catalog_parse(message: impl Into<String>) -> Self {
        GalleryError::CatalogParse {
            message: message.into(),
        }
    }

    /// Create a missing-document error
    pub fn catalog_missing(document: impl Into<String>) -> Self {
        GalleryError::CatalogMissing {
            document: document.into(),
        }
    }

    /// Create a playback error
    pub fn playback(message: impl Into<String>) -> Self {
        GalleryError::Playback {
            message: message.into(),
        }
    }

    /// Create an invalid-date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        GalleryError::InvalidDate {
            value: value.into(),
        }
    }

    /// Get a user-friendly message for display
    pub fn user_message(&self) -> String {
        match self {
            GalleryError::CatalogParse { .. } => {
                "Impossible de charger les données de la collection.".to_string()
            }
            GalleryError::CatalogMissing { document } => {
                format!("Les données \"{document}\" ne sont pas encore disponibles.")
            }
            GalleryError::Playback { .. } => {
                "La lecture a été bloquée par le navigateur.".to_string()
            }
            GalleryError::InvalidDate { .. } => "Date inconnue".to_string(),
        }
    }

    /// Get a short machine-readable code, used in console logs
    pub fn error_code(&self) -> &'static str {
        match self {
            GalleryError::CatalogParse { .. } => "catalog_parse",
            GalleryError::CatalogMissing { .. } => "catalog_missing",
            GalleryError::Playback { .. } => "playback",
            GalleryError::InvalidDate { .. } => "invalid_date",
        }
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::CatalogParse {
            message: err.to_string(),
        }
    }
}

/// Result type for gallery operations
pub type GalleryResult<T> = Result<T, GalleryError>;
