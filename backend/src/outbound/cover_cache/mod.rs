//! In-process LRU implementation of the `CoverCache` port.
//!
//! The map is shared by every Actix worker, so it sits behind a mutex. The
//! lock is never held across an await point.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use lru::LruCache;

use crate::domain::ports::{CoverCache, CoverCacheError};
use crate::domain::{AlbumId, Photo};

/// Bounded album cover cache evicting the least recently used album.
pub struct LruCoverCache {
    entries: Mutex<LruCache<AlbumId, Photo>>,
}

impl LruCoverCache {
    /// Cache holding at most `capacity` covers.
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of cached covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |entries| entries.len())
    }

    /// Whether no cover is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, LruCache<AlbumId, Photo>>, CoverCacheError> {
        self.entries
            .lock()
            .map_err(|_| CoverCacheError::backend("cover cache lock poisoned"))
    }
}

#[async_trait]
impl CoverCache for LruCoverCache {
    async fn get(&self, album: AlbumId) -> Result<Option<Photo>, CoverCacheError> {
        Ok(self.lock()?.get(&album).cloned())
    }

    async fn put(&self, album: AlbumId, cover: Photo) -> Result<(), CoverCacheError> {
        self.lock()?.put(album, cover);
        Ok(())
    }
}
