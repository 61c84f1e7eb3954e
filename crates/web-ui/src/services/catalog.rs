//! Catalog service: the data-loading collaborator for both flows
//!
//! The pages never reach for module-level data; they go through an injected
//! `CatalogService`, so tests can substitute fixture documents. The shipped
//! service parses the embedded JSON documents below.

use crate::models::{ContentRecord, CreatorProfile, GalleryResult, MediaAlbum};

/// The "collection" document: creator profile for the gallery header
const PROFILE_DOCUMENT: &str = r#"{
    "name": "Maison Canne à Sucre",
    "creator_name": "Kekeli canne à sucre",
    "avatar_url": "https://cdn.laala.app/creators/kekeli/avatar.jpg",
    "category": "Cuisine",
    "status": "in_progress",
    "cover_url": "https://cdn.laala.app/albums/canne-a-sucre/cover.jpg",
    "created_at": "2025-05-09",
    "likes": 42,
    "views": 128,
    "background_video_url": "https://cdn.laala.app/albums/canne-a-sucre/ambiance.mp4"
}"#;

/// The "laala" document: ordered media URLs plus positional metadata.
/// The metadata list is deliberately shorter than the URL list and holds
/// partially filled entries; display falls back field by field.
const ALBUM_DOCUMENT: &str = r#"{
    "name": "Maison Canne à Sucre",
    "created_at": "2025-05-09",
    "views": 128,
    "media_urls": [
        "https://cdn.laala.app/albums/canne-a-sucre/plantation.jpg",
        "https://cdn.laala.app/albums/canne-a-sucre/recolte.mp4",
        "https://cdn.laala.app/albums/canne-a-sucre/atelier.png",
        "https://cdn.laala.app/albums/canne-a-sucre/degustation.webm?token=pub",
        "https://cdn.laala.app/albums/canne-a-sucre/marche.jpg",
        "https://cdn.laala.app/albums/canne-a-sucre/equipe.jpg"
    ],
    "metadata": [
        {
            "title": "La plantation au lever du jour",
            "date": "2025-05-10",
            "likes": 12,
            "comments": 3
        },
        {
            "title": "La récolte",
            "date": "2025-05-12",
            "likes": 27,
            "comments": 8
        },
        {
            "title": "Dans l'atelier"
        },
        {}
    ]
}"#;

/// Moderation sample set for the dashboard listing
const CONTENT_RECORDS_DOCUMENT: &str = r#"[
    {
        "id": "1",
        "name": "Maison Canne à Sucre",
        "creator": "Kekeli canne à sucre",
        "description": "La maison CANNE À SUCRE est disponible pour mettre de la douceur dans vos visuels",
        "contents": 8,
        "views": 0,
        "date": "2025-05-9"
    },
    {
        "id": "2",
        "name": "jock",
        "creator": "etoilevida",
        "description": "mon la-a-la",
        "contents": 1,
        "views": 0,
        "date": "2025-05-9"
    },
    {
        "id": "3",
        "name": "le temps",
        "creator": "Smileys",
        "description": "Le temps qui passe et nous façonne",
        "contents": 1,
        "views": 0,
        "date": "2025-05-9"
    },
    {
        "id": "4",
        "name": "CONSEIL",
        "creator": "SEMEKONAWO",
        "description": "DIEU D'ABORD",
        "contents": 0,
        "views": 0,
        "date": "2025-05-9"
    },
    {
        "id": "5",
        "name": "motivation personnel",
        "creator": "KAGNALE",
        "description": "qui sait l'avenir",
        "contents": 0,
        "views": 0,
        "date": "2025-05-9"
    },
    {
        "id": "6",
        "name": "Honoré le frick",
        "creator": "Honoré le frick",
        "description": "now time",
        "contents": 0,
        "views": 0,
        "date": "2025-05-9"
    },
    {
        "id": "7",
        "name": "Lala",
        "creator": "BALINGA",
        "description": "Lucas",
        "contents": 2,
        "views": 0,
        "date": "2025-05-9"
    }
]"#;

/// Data-loading collaborator for the gallery and dashboard pages
#[derive(Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    /// Create a new catalog service
    pub fn new() -> Self {
        Self
    }

    /// Load the creator profile document
    pub async fn load_profile(&self) -> GalleryResult<CreatorProfile> {
        let profile = serde_json::from_str(PROFILE_DOCUMENT)?;
        Ok(profile)
    }

    /// Load the media album document
    pub async fn load_album(&self) -> GalleryResult<MediaAlbum> {
        let album = serde_json::from_str(ALBUM_DOCUMENT)?;
        Ok(album)
    }

    /// Load the moderation record set
    pub async fn load_content_records(&self) -> GalleryResult<Vec<ContentRecord>> {
        let records = serde_json::from_str(CONTENT_RECORDS_DOCUMENT)?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CollectionStatus, DEFAULT_ENTRY_TITLE, DEFAULT_PROFILE_DESCRIPTION};
    use crate::utils::media::MediaKind;

    #[tokio::test]
    async fn test_profile_document_parses() {
        let profile = CatalogService::new().load_profile().await.unwrap();

        assert_eq!(profile.name, "Maison Canne à Sucre");
        assert_eq!(profile.creator_name, "Kekeli canne à sucre");
        assert_eq!(profile.status, CollectionStatus::InProgress);
        assert_eq!(profile.likes, 42);
        assert!(profile.background_video_url.is_some());
        assert_eq!(
            profile.description_text(),
            DEFAULT_PROFILE_DESCRIPTION,
            "the shipped profile has no description of its own"
        );
    }

    #[tokio::test]
    async fn test_album_document_parses() {
        let album = CatalogService::new().load_album().await.unwrap();

        assert_eq!(album.media_count(), 6);
        assert_eq!(album.metadata.len(), 4, "metadata list is shorter than the URL list");
        assert_eq!(album.created_at, "2025-05-09");
    }

    /// The shipped album exercises every default path: full metadata,
    /// partial metadata, empty metadata and no metadata at all
    #[tokio::test]
    async fn test_album_metadata_falls_back_per_field() {
        let album = CatalogService::new().load_album().await.unwrap();
        let cover = "https://cdn.laala.app/albums/canne-a-sucre/cover.jpg";

        let full = album.resolve_entry(1, cover).unwrap();
        assert_eq!(full.title, "La récolte");
        assert_eq!(full.kind, MediaKind::Video);
        assert_eq!(full.thumbnail, cover);

        let partial = album.resolve_entry(2, cover).unwrap();
        assert_eq!(partial.title, "Dans l'atelier");
        assert_eq!(partial.date, album.created_at);
        assert_eq!(partial.likes, 0);

        let empty = album.resolve_entry(3, cover).unwrap();
        assert_eq!(empty.title, DEFAULT_ENTRY_TITLE);
        assert_eq!(empty.kind, MediaKind::Video, "query string after .webm");

        let beyond = album.resolve_entry(5, cover).unwrap();
        assert_eq!(beyond.title, DEFAULT_ENTRY_TITLE);
        assert_eq!(beyond.date, album.created_at);
    }

    #[tokio::test]
    async fn test_content_records_parse() {
        let records = CatalogService::new().load_content_records().await.unwrap();

        assert_eq!(records.len(), 7);
        assert_eq!(records[0].name, "Maison Canne à Sucre");
        assert_eq!(records[0].contents, 8);
        assert!(records[0].is_rich());
        assert_eq!(records[6].creator, "BALINGA");

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7"]);
    }
}
