use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageUrls {
    pub small: String,
    pub medium: String,
    pub large: String,
}

/// One title as returned by the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub title: String,
    pub images: ImageUrls,
    pub score: f64,      // 0.0 when unrated
    pub media_type: String,
    pub year: u32,       // 0 when unknown
    pub synopsis: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiredRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl AiredRange {
    pub fn start_year(&self) -> Option<i32> {
        let from = self.from.as_deref()?;
        DateTime::parse_from_rfc3339(from).ok().map(|d| d.year())
    }
}

/// Extended record served by the detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntryDetail {
    pub entry: CatalogEntry,
    pub rank: u32,
    pub popularity: u32,
    pub scored_by: u64,
    pub episodes: Option<u32>,
    pub status: String,
    pub aired: AiredRange,
    pub genres: Vec<Tag>,
    pub studios: Vec<Tag>,
}

impl CatalogEntryDetail {
    pub fn id(&self) -> u32 {
        self.entry.id
    }
}

// Wire format of the remote API. Nullable fields are normalized on conversion.

#[derive(Debug, Clone, Deserialize)]
pub struct ListingResponse {
    pub data: Vec<EntryPayload>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub last_visible_page: u32,
    #[serde(default)]
    pub has_next_page: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    pub data: DetailPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSetPayload {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImagesPayload {
    #[serde(default)]
    pub jpg: ImageSetPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryPayload {
    pub mal_id: u32,
    #[serde(default)]
    pub title: String,
    pub url: Option<String>,
    #[serde(default)]
    pub images: ImagesPayload,
    pub score: Option<f64>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub year: Option<u32>,
    pub synopsis: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagPayload {
    pub mal_id: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiredPayload {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetailPayload {
    #[serde(flatten)]
    pub entry: EntryPayload,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub scored_by: Option<u64>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    #[serde(default)]
    pub aired: AiredPayload,
    #[serde(default)]
    pub genres: Vec<TagPayload>,
    #[serde(default)]
    pub studios: Vec<TagPayload>,
}

impl From<EntryPayload> for CatalogEntry {
    fn from(p: EntryPayload) -> Self {
        let jpg = p.images.jpg;
        CatalogEntry {
            id: p.mal_id,
            title: p.title,
            images: ImageUrls {
                small: jpg.small_image_url.unwrap_or_default(),
                medium: jpg.image_url.unwrap_or_default(),
                large: jpg.large_image_url.unwrap_or_default(),
            },
            score: p.score.unwrap_or(0.0),
            media_type: p.media_type.unwrap_or_default(),
            year: p.year.unwrap_or(0),
            synopsis: p.synopsis.unwrap_or_default(),
            url: p.url.unwrap_or_default(),
        }
    }
}

impl From<TagPayload> for Tag {
    fn from(p: TagPayload) -> Self {
        Tag { id: p.mal_id, name: p.name }
    }
}

impl From<DetailPayload> for CatalogEntryDetail {
    fn from(p: DetailPayload) -> Self {
        CatalogEntryDetail {
            entry: p.entry.into(),
            rank: p.rank.unwrap_or(0),
            popularity: p.popularity.unwrap_or(0),
            scored_by: p.scored_by.unwrap_or(0),
            episodes: p.episodes,
            status: p.status.unwrap_or_default(),
            aired: AiredRange { from: p.aired.from, to: p.aired.to },
            genres: p.genres.into_iter().map(Tag::from).collect(),
            studios: p.studios.into_iter().map(Tag::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_payload_normalizes_nulls() {
        let body = r#"{
            "data": [{
                "mal_id": 5114,
                "url": "https://myanimelist.net/anime/5114",
                "title": "Fullmetal Alchemist: Brotherhood",
                "images": { "jpg": {
                    "image_url": "https://cdn/m.jpg",
                    "small_image_url": "https://cdn/s.jpg",
                    "large_image_url": "https://cdn/l.jpg"
                } },
                "score": null,
                "type": "TV",
                "year": null,
                "synopsis": null
            }],
            "pagination": { "last_visible_page": 1100, "has_next_page": true }
        }"#;
        let resp: ListingResponse = serde_json::from_str(body).unwrap();
        assert!(resp.pagination.has_next_page);
        let entry = CatalogEntry::from(resp.data.into_iter().next().unwrap());
        assert_eq!(entry.id, 5114);
        assert_eq!(entry.score, 0.0);
        assert_eq!(entry.year, 0);
        assert_eq!(entry.synopsis, "");
        assert_eq!(entry.media_type, "TV");
        assert_eq!(entry.images.small, "https://cdn/s.jpg");
        assert_eq!(entry.images.medium, "https://cdn/m.jpg");
        assert_eq!(entry.images.large, "https://cdn/l.jpg");
    }

    #[test]
    fn missing_images_and_pagination_default() {
        let resp: ListingResponse =
            serde_json::from_str(r#"{ "data": [{ "mal_id": 1, "title": "Cowboy Bebop" }] }"#).unwrap();
        assert!(!resp.pagination.has_next_page);
        let entry = CatalogEntry::from(resp.data[0].clone());
        assert_eq!(entry.images, ImageUrls::default());
        assert_eq!(entry.url, "");
    }

    #[test]
    fn detail_payload_keeps_tags_and_dates() {
        let body = r#"{ "data": {
            "mal_id": 1,
            "title": "Cowboy Bebop",
            "type": "TV",
            "score": 8.75,
            "scored_by": 1000000,
            "rank": 46,
            "popularity": 43,
            "episodes": 26,
            "status": "Finished Airing",
            "year": 1998,
            "aired": { "from": "1998-04-03T00:00:00+00:00", "to": "1999-04-24T00:00:00+00:00" },
            "genres": [ { "mal_id": 1, "type": "anime", "name": "Action", "url": "x" } ],
            "studios": [ { "mal_id": 14, "type": "anime", "name": "Sunrise", "url": "y" } ]
        } }"#;
        let resp: DetailResponse = serde_json::from_str(body).unwrap();
        let detail = CatalogEntryDetail::from(resp.data);
        assert_eq!(detail.id(), 1);
        assert_eq!(detail.rank, 46);
        assert_eq!(detail.scored_by, 1_000_000);
        assert_eq!(detail.episodes, Some(26));
        assert_eq!(detail.aired.start_year(), Some(1998));
        assert_eq!(detail.genres, vec![Tag { id: 1, name: "Action".into() }]);
        assert_eq!(detail.studios[0].name, "Sunrise");
    }

    #[test]
    fn detail_with_null_rank_and_episodes() {
        let body = r#"{ "data": { "mal_id": 7, "title": "Ongoing", "rank": null, "episodes": null, "aired": { "from": null, "to": null } } }"#;
        let detail = CatalogEntryDetail::from(serde_json::from_str::<DetailResponse>(body).unwrap().data);
        assert_eq!(detail.rank, 0);
        assert_eq!(detail.episodes, None);
        assert_eq!(detail.aired.start_year(), None);
        assert!(detail.genres.is_empty());
    }
}
