//! Data models for the creator profile and media album documents

use serde::{Deserialize, Serialize};

use crate::utils::media::{self, MediaKind};

/// Fallback description shown when a profile carries none
pub const DEFAULT_PROFILE_DESCRIPTION: &str = "Ici seront toutes mes photos 😍";

/// Fallback title for album entries without metadata
pub const DEFAULT_ENTRY_TITLE: &str = "Sans titre";

/// Publication status of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionStatus {
    InProgress,
    Completed,
}

impl CollectionStatus {
    /// Get display text for status
    pub fn display_text(&self) -> &'static str {
        match self {
            CollectionStatus::InProgress => "En Cours",
            CollectionStatus::Completed => "Terminé",
        }
    }

    /// Get CSS class for status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            CollectionStatus::InProgress => "bg-green-100 text-green-800",
            CollectionStatus::Completed => "bg-gray-100 text-gray-800",
        }
    }
}

/// Creator profile for a collection (the "collection" document)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorProfile {
    pub name: String,
    pub creator_name: String,
    pub avatar_url: String,
    pub category: String,
    pub status: CollectionStatus,
    pub cover_url: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub background_video_url: Option<String>,
}

impl CreatorProfile {
    /// Description with the fallback applied when the field is empty or absent
    pub fn description_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(DEFAULT_PROFILE_DESCRIPTION)
    }
}

/// Optional per-entry metadata, index-aligned with the album's media URLs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub likes: Option<u32>,
    #[serde(default)]
    pub comments: Option<u32>,
}

/// Media album (the "laala" document): ordered media URLs plus a parallel
/// metadata list. Metadata is looked up by position, never by key, and the
/// metadata list may be shorter than the URL list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaAlbum {
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub views: u32,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub metadata: Vec<EntryMetadata>,
}

/// One album entry with metadata defaults resolved and its media kind
/// classified
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    pub index: usize,
    pub url: String,
    pub kind: MediaKind,
    pub thumbnail: String,
    pub title: String,
    pub date: String,
    pub likes: u32,
    pub comments: u32,
}

impl MediaAlbum {
    /// Number of media entries in the album
    pub fn media_count(&self) -> usize {
        self.media_urls.len()
    }

    /// Whether the signed index denotes an entry of this album
    pub fn contains_index(&self, index: i64) -> bool {
        index >= 0 && (index as usize) < self.media_urls.len()
    }

    /// Resolve one entry by signed positional index.
    ///
    /// Negative and out-of-range indexes yield `None`. Missing metadata at a
    /// valid index is not an error: the title falls back to "Sans titre",
    /// like/comment counts to zero and the date to the album-level date.
    pub fn resolve_entry(&self, index: i64, album_cover: &str) -> Option<ResolvedEntry> {
        if !self.contains_index(index) {
            return None;
        }
        let position = index as usize;
        let url = self.media_urls[position].clone();
        let metadata = self.metadata.get(position);

        Some(ResolvedEntry {
            index: position,
            kind: media::classify(&url),
            thumbnail: media::thumbnail_for(&url, album_cover),
            title: metadata
                .and_then(|m| m.title.clone())
                .unwrap_or_else(|| DEFAULT_ENTRY_TITLE.to_string()),
            date: metadata
                .and_then(|m| m.date.clone())
                .unwrap_or_else(|| self.created_at.clone()),
            likes: metadata.and_then(|m| m.likes).unwrap_or(0),
            comments: metadata.and_then(|m| m.comments).unwrap_or(0),
            url,
        })
    }

    /// Resolve every entry in album order
    pub fn resolved_entries(&self, album_cover: &str) -> Vec<ResolvedEntry> {
        (0..self.media_urls.len() as i64)
            .filter_map(|index| self.resolve_entry(index, album_cover))
            .collect()
    }
}
