use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;
use crate::models::{CatalogEntry, CatalogEntryDetail, DetailResponse, ListingResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// One page of the popularity listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogPage {
    pub entries: Vec<CatalogEntry>,
    pub has_next_page: bool,
}

/// Remote catalog the screens read from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<CatalogPage, FetchError>;

    async fn fetch_detail(&self, id: u32) -> Result<CatalogEntryDetail, FetchError>;
}

/// HTTP client for the Jikan v4 API.
#[derive(Debug, Clone)]
pub struct JikanClient {
    http: reqwest::Client,
    base_url: String,
}

impl JikanClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("animeviewer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn listing_url(&self, page: u32, limit: u32) -> String {
        format!("{}/top/anime?filter=bypopularity&page={}&limit={}", self.base_url, page, limit)
    }

    pub fn detail_url(&self, id: u32) -> String {
        format!("{}/anime/{}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url, "GET");
        let res = self.http.get(url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }
        let body = res.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CatalogSource for JikanClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<CatalogPage, FetchError> {
        let resp: ListingResponse = self.get_json(&self.listing_url(page, limit)).await?;
        Ok(CatalogPage {
            entries: resp.data.into_iter().map(CatalogEntry::from).collect(),
            has_next_page: resp.pagination.has_next_page,
        })
    }

    async fn fetch_detail(&self, id: u32) -> Result<CatalogEntryDetail, FetchError> {
        match self.get_json::<DetailResponse>(&self.detail_url(id)).await {
            Ok(resp) => Ok(resp.data.into()),
            Err(FetchError::Status { status: 404 }) => Err(FetchError::NotFound { id }),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_remote_layout() {
        let client = JikanClient::new("https://api.jikan.moe/v4/").unwrap();
        assert_eq!(client.base_url(), "https://api.jikan.moe/v4");
        assert_eq!(
            client.listing_url(3, 25),
            "https://api.jikan.moe/v4/top/anime?filter=bypopularity&page=3&limit=25"
        );
        assert_eq!(client.detail_url(1), "https://api.jikan.moe/v4/anime/1");
    }
}
