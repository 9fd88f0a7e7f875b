//! Reqwest-backed gallery source.
//!
//! Owns transport details only: URL construction, the request timeout, status
//! mapping, and JSON decoding into domain records.

use std::time::Duration;

use async_trait::async_trait;
use pagination::PageRequest;
use reqwest::header::{ACCEPT, HeaderMap};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::dto::{AlbumDto, PhotoDto, UserDto};
use crate::domain::ports::{AlbumPage, GallerySource, GallerySourceError};
use crate::domain::{Album, AlbumId, Photo, User, UserId};

/// Album total assumed when the upstream omits `X-Total-Count`.
pub const DEFAULT_TOTAL_COUNT: usize = 100;

const TOTAL_COUNT_HEADER: &str = "x-total-count";
const USER_AGENT: &str = concat!("gallery/", env!("CARGO_PKG_VERSION"));

/// Gallery source issuing GET requests against one base URL.
pub struct GalleryHttpSource {
    client: Client,
    base: Url,
}

impl GalleryHttpSource {
    /// Build an adapter whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GallerySourceError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                GallerySourceError::transport(format!("base URL {} cannot carry a path", self.base))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        resource: &str,
    ) -> Result<(HeaderMap, T), GallerySourceError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref(), resource));
        }

        let decoded = serde_json::from_slice(body.as_ref()).map_err(|error| {
            GallerySourceError::decode(format!("invalid {resource} payload: {error}"))
        })?;
        Ok((headers, decoded))
    }
}

#[async_trait]
impl GallerySource for GalleryHttpSource {
    async fn albums_page(&self, request: PageRequest) -> Result<AlbumPage, GallerySourceError> {
        let mut url = self.endpoint(&["albums"])?;
        url.query_pairs_mut()
            .append_pair("_page", &request.page().to_string())
            .append_pair("_limit", &request.size().get().to_string());
        let (headers, albums): (_, Vec<AlbumDto>) = self.fetch(url, "albums").await?;
        Ok(AlbumPage {
            albums: albums.into_iter().map(Album::from).collect(),
            total: total_count(&headers),
        })
    }

    async fn album(&self, id: AlbumId) -> Result<Album, GallerySourceError> {
        let url = self.endpoint(&["albums", &id.to_string()])?;
        let (_, album): (_, AlbumDto) = self.fetch(url, &format!("album {id}")).await?;
        Ok(album.into())
    }

    async fn albums_by_user(&self, user: UserId) -> Result<Vec<Album>, GallerySourceError> {
        let mut url = self.endpoint(&["albums"])?;
        url.query_pairs_mut()
            .append_pair("userId", &user.to_string());
        let (_, albums): (_, Vec<AlbumDto>) = self.fetch(url, "albums").await?;
        Ok(albums.into_iter().map(Album::from).collect())
    }

    async fn photos_by_album(&self, album: AlbumId) -> Result<Vec<Photo>, GallerySourceError> {
        let mut url = self.endpoint(&["photos"])?;
        url.query_pairs_mut()
            .append_pair("albumId", &album.to_string());
        let (_, photos): (_, Vec<PhotoDto>) = self.fetch(url, "photos").await?;
        Ok(photos.into_iter().map(Photo::from).collect())
    }

    async fn users(&self) -> Result<Vec<User>, GallerySourceError> {
        let url = self.endpoint(&["users"])?;
        let (_, users): (_, Vec<UserDto>) = self.fetch(url, "users").await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    async fn user(&self, id: UserId) -> Result<User, GallerySourceError> {
        let url = self.endpoint(&["users", &id.to_string()])?;
        let (_, user): (_, UserDto) = self.fetch(url, &format!("user {id}")).await?;
        Ok(user.into())
    }
}

fn total_count(headers: &HeaderMap) -> usize {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_TOTAL_COUNT)
}

fn map_transport_error(error: reqwest::Error) -> GallerySourceError {
    if error.is_timeout() {
        GallerySourceError::timeout(error.to_string())
    } else {
        GallerySourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8], resource: &str) -> GallerySourceError {
    match status {
        StatusCode::NOT_FOUND => GallerySourceError::not_found(resource),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            GallerySourceError::timeout(format!("status {}", status.as_u16()))
        }
        _ => GallerySourceError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
