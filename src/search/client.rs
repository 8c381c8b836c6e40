// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the Unsplash photo search endpoint.
//!
//! One search is exactly one GET against the endpoint followed by the
//! thumbnail downloads for that page. There is no retry and no caching;
//! stale-response handling lives with the caller via request ids.

use crate::error::{Error, Result};
use crate::search::thumbnail::ThumbnailImage;
use crate::search::types::{Photo, PhotoTile, ResultPage, PER_PAGE};
use futures_util::stream::{self, StreamExt};
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

/// Production search endpoint; overridable through the config file.
pub const DEFAULT_ENDPOINT: &str = "https://api.unsplash.com/search/photos";

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// How many thumbnails of one page are downloaded at the same time.
const THUMBNAIL_CONCURRENCY: usize = 4;

#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
    access_key: String,
}

impl SearchClient {
    /// Creates a client against the production endpoint.
    #[must_use]
    pub fn new(access_key: impl Into<String>) -> Self {
        Self::with_endpoint(access_key, DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
    }

    /// Creates a client against a custom endpoint (stub servers, tests).
    pub fn with_endpoint(access_key: impl Into<String>, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("invalid search endpoint: {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self {
            http,
            endpoint,
            access_key: access_key.into(),
        })
    }

    /// Builds the request URL for one `(query, page)` pair.
    #[must_use]
    pub fn page_url(&self, query: &str, page: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &PER_PAGE.to_string())
            .append_pair("client_id", &self.access_key);
        url
    }

    /// Fetches one result page: the search response plus every thumbnail of
    /// that page, in result order.
    pub async fn fetch_page(&self, query: &str, page: u32) -> Result<ResultPage> {
        let (photos, total_pages) = self.search(query, page).await?;
        let tiles = stream::iter(photos)
            .map(|photo| self.load_tile(photo))
            .buffered(THUMBNAIL_CONCURRENCY)
            .collect::<Vec<_>>()
            .await;
        Ok(ResultPage { tiles, total_pages })
    }

    async fn search(&self, query: &str, page: u32) -> Result<(Vec<Photo>, u32)> {
        let url = self.page_url(query, page);
        tracing::debug!(%query, page, "requesting search page");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        let payload: ApiSearchResponse = response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))?;
        Ok(project_response(payload))
    }

    /// Downloads and decodes one thumbnail. A failure degrades the tile to a
    /// placeholder rather than failing the whole page.
    async fn load_tile(&self, photo: Photo) -> PhotoTile {
        match self.fetch_thumbnail(&photo.thumbnail_url).await {
            Ok(image) => PhotoTile {
                photo,
                image: Some(image),
            },
            Err(error) => {
                tracing::warn!(id = %photo.id, %error, "thumbnail fetch failed");
                PhotoTile { photo, image: None }
            }
        }
    }

    async fn fetch_thumbnail(&self, url: &str) -> Result<ThumbnailImage> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        ThumbnailImage::from_encoded(&bytes)
    }
}

/// Wire shape of the search response; only the consumed fields are modeled.
#[derive(Debug, Deserialize)]
struct ApiSearchResponse {
    #[serde(default)]
    results: Vec<ApiPhoto>,
    #[serde(default)]
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct ApiPhoto {
    id: String,
    urls: ApiPhotoUrls,
    #[serde(default)]
    alt_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiPhotoUrls {
    small: String,
}

/// Projects the wire payload into domain photos, truncating over-long
/// responses to the requested page size.
fn project_response(payload: ApiSearchResponse) -> (Vec<Photo>, u32) {
    let mut results = payload.results;
    if results.len() > PER_PAGE as usize {
        tracing::warn!(
            count = results.len(),
            "endpoint returned more results than requested, truncating"
        );
        results.truncate(PER_PAGE as usize);
    }
    let photos = results
        .into_iter()
        .map(|item| Photo {
            id: item.id,
            thumbnail_url: item.urls.small,
            alt_description: item.alt_description,
        })
        .collect();
    (photos, payload.total_pages)
}
