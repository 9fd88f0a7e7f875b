//! Driven port caching the cover photo of each album.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{AlbumId, Photo};

define_port_error! {
    /// Errors surfaced by a cover cache adapter.
    pub enum CoverCacheError {
        /// The cache could not be read or written.
        Backend { message: String } => "cover cache backend failure: {message}",
    }
}

/// Album id to cover photo cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoverCache: Send + Sync {
    /// Cached cover for `album`, if present.
    async fn get(&self, album: AlbumId) -> Result<Option<Photo>, CoverCacheError>;

    /// Store `cover` for `album`, replacing any previous entry.
    async fn put(&self, album: AlbumId, cover: Photo) -> Result<(), CoverCacheError>;
}

/// Cache that never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCoverCache;

#[async_trait]
impl CoverCache for NoCoverCache {
    async fn get(&self, _album: AlbumId) -> Result<Option<Photo>, CoverCacheError> {
        Ok(None)
    }

    async fn put(&self, _album: AlbumId, _cover: Photo) -> Result<(), CoverCacheError> {
        Ok(())
    }
}
