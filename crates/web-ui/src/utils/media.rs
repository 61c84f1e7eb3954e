//! Media URL classification and thumbnail resolution
//!
//! Classification is purely syntactic: the trailing extension decides the
//! kind, no network probing and no content-type sniffing.

use serde::{Deserialize, Serialize};

/// Extensions recognized as video content, matched case-insensitively
const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "ogg"];

/// Kind of media a URL denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Video,
    Image,
}

impl MediaKind {
    pub fn is_video(&self) -> bool {
        matches!(self, MediaKind::Video)
    }

    /// Header title for the detail viewer
    pub fn viewer_title(&self) -> &'static str {
        match self {
            MediaKind::Video => "Lecteur Vidéo",
            MediaKind::Image => "Visionneuse d'image",
        }
    }
}

/// Classify a media URL by its trailing extension.
///
/// A URL is a video when a recognized extension sits at the end of the
/// string or immediately before a query string. Anything else, including
/// malformed or extensionless URLs, is an image.
pub fn classify(url: &str) -> MediaKind {
    let lower = url.to_ascii_lowercase();
    for ext in VIDEO_EXTENSIONS {
        let marker = format!(".{ext}");
        if lower.ends_with(&marker) || lower.contains(&format!("{marker}?")) {
            return MediaKind::Video;
        }
    }
    MediaKind::Image
}

/// Resolve the display thumbnail for a media URL.
///
/// Every video in an album shares the album cover as its thumbnail; an image
/// is its own thumbnail.
pub fn thumbnail_for(url: &str, album_cover: &str) -> String {
    match classify(url) {
        MediaKind::Video => album_cover.to_string(),
        MediaKind::Image => url.to_string(),
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn classify_works_in_wasm() {
        assert_eq!(classify("clip.mp4"), MediaKind::Video);
        assert_eq!(classify("photo.jpg"), MediaKind::Image);
    }
}
