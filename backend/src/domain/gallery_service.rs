//! Read-side use cases behind the HTML views and the JSON API.
//!
//! The service composes [`GallerySource`] calls into view models, resolves
//! album owners concurrently, and keeps the album cover cache up to date.
//! Source errors are logged here, once, and converted into [`Error`].

use std::collections::{BTreeSet, HashMap};
use std::num::NonZeroUsize;
use std::sync::Arc;

use futures_util::future::try_join_all;
use futures_util::try_join;
use pagination::{Page, PageRequest, PageSize, Paginated};
use tracing::{debug, warn};

use super::ports::{CoverCache, GallerySource, GallerySourceError};
use super::{Album, AlbumId, Error, Photo, PhotoId, User, UserId};

/// Albums shown on the home page.
pub const FEATURED_ALBUMS: PageSize = page_size(4);
/// Photos per page on the album detail view.
pub const PHOTOS_PER_PAGE: PageSize = page_size(10);
/// Albums per page on the user detail view.
pub const USER_ALBUMS_PER_PAGE: PageSize = page_size(10);

const fn page_size(size: usize) -> PageSize {
    match NonZeroUsize::new(size) {
        Some(size) => PageSize::from_non_zero(size),
        None => PageSize::from_non_zero(NonZeroUsize::MIN),
    }
}

/// An album paired with its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumCard {
    /// The album.
    pub album: Album,
    /// Its owner.
    pub owner: User,
}

/// Everything the album detail view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumDetail {
    /// The album.
    pub album: Album,
    /// Its owner.
    pub owner: User,
    /// The requested page of photos; `total` is the album's photo count.
    pub photos: Paginated<Photo>,
    /// Photo opened in the full-size viewer, if any.
    pub selected: Option<Photo>,
}

/// Everything the user detail view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetail {
    /// The user.
    pub user: User,
    /// The requested page of the user's albums.
    pub albums: Paginated<Album>,
}

/// Gallery read service.
#[derive(Clone)]
pub struct GalleryService {
    source: Arc<dyn GallerySource>,
    covers: Arc<dyn CoverCache>,
}

fn source_failure(operation: &'static str) -> impl FnOnce(GallerySourceError) -> Error {
    move |error| {
        if matches!(error, GallerySourceError::NotFound { .. }) {
            debug!(operation, %error, "gallery entity missing");
        } else {
            warn!(operation, %error, "gallery source call failed");
        }
        Error::from(error)
    }
}

impl GalleryService {
    /// Service over a source and a cover cache.
    pub fn new(source: Arc<dyn GallerySource>, covers: Arc<dyn CoverCache>) -> Self {
        Self { source, covers }
    }

    /// First albums of the catalogue with their owners.
    pub async fn featured_albums(&self) -> Result<Vec<AlbumCard>, Error> {
        let request = PageRequest::new(Page::FIRST, FEATURED_ALBUMS);
        let page = self
            .source
            .albums_page(request)
            .await
            .map_err(source_failure("albums_page"))?;
        self.with_owners(page.albums).await
    }

    /// One page of albums with their owners. Owners are fetched
    /// concurrently; any failed lookup fails the page.
    pub async fn album_listing(&self, request: PageRequest) -> Result<Paginated<AlbumCard>, Error> {
        let page = self.albums_page(request).await?;
        let total = page.total;
        let cards = self.with_owners(page.data).await?;
        Ok(Paginated::from_page(cards, request, total))
    }

    /// One page of albums, paged by the upstream.
    pub async fn albums_page(&self, request: PageRequest) -> Result<Paginated<Album>, Error> {
        let page = self
            .source
            .albums_page(request)
            .await
            .map_err(source_failure("albums_page"))?;
        Ok(Paginated::from_page(page.albums, request, page.total))
    }

    /// A single album.
    pub async fn album(&self, id: AlbumId) -> Result<Album, Error> {
        self.source
            .album(id)
            .await
            .map_err(source_failure("album"))
    }

    /// Photos of an existing album.
    pub async fn album_photos(&self, id: AlbumId) -> Result<Vec<Photo>, Error> {
        let (_, photos) = try_join!(self.album(id), self.photos(id))?;
        Ok(photos)
    }

    /// Album with owner, one page of photos, and the optional selection.
    ///
    /// The selection is looked up across every photo of the album, not just
    /// the requested page; unknown ids select nothing.
    pub async fn album_detail(
        &self,
        id: AlbumId,
        page: Page,
        selected: Option<PhotoId>,
    ) -> Result<AlbumDetail, Error> {
        let (album, photos) = try_join!(self.album(id), self.photos(id))?;
        let owner = self.user(album.user_id).await?;
        let selected =
            selected.and_then(|wanted| photos.iter().find(|photo| photo.id == wanted).cloned());
        Ok(AlbumDetail {
            album,
            owner,
            photos: Paginated::from_slice(&photos, PageRequest::new(page, PHOTOS_PER_PAGE)),
            selected,
        })
    }

    /// Every user.
    pub async fn users(&self) -> Result<Vec<User>, Error> {
        self.source.users().await.map_err(source_failure("users"))
    }

    /// A single user.
    pub async fn user(&self, id: UserId) -> Result<User, Error> {
        self.source.user(id).await.map_err(source_failure("user"))
    }

    /// Albums of an existing user.
    pub async fn user_albums(&self, id: UserId) -> Result<Vec<Album>, Error> {
        let (_, albums) = try_join!(self.user(id), self.albums_by_user(id))?;
        Ok(albums)
    }

    /// User with one page of their albums.
    pub async fn user_detail(&self, id: UserId, page: Page) -> Result<UserDetail, Error> {
        let (user, albums) = try_join!(self.user(id), self.albums_by_user(id))?;
        Ok(UserDetail {
            user,
            albums: Paginated::from_slice(&albums, PageRequest::new(page, USER_ALBUMS_PER_PAGE)),
        })
    }

    /// Cover photo of an album.
    ///
    /// Cache hits skip the upstream entirely. On a miss the album's first
    /// photo is used, or a synthetic cover when the album is empty, and the
    /// result is cached. When the photo lookup fails the synthetic cover is
    /// returned uncached. Cache failures are logged and treated as misses.
    pub async fn album_cover(&self, id: AlbumId) -> Result<Photo, Error> {
        match self.covers.get(id).await {
            Ok(Some(cover)) => return Ok(cover),
            Ok(None) => {}
            Err(error) => warn!(album_id = %id, %error, "cover cache read failed"),
        }

        let album = self.album(id).await?;
        let cover = match self.source.photos_by_album(id).await {
            Ok(photos) => photos
                .into_iter()
                .next()
                .unwrap_or_else(|| Photo::synthetic_cover(id, album.title.as_str())),
            Err(error) => {
                warn!(album_id = %id, %error, "cover lookup failed, using synthetic cover");
                return Ok(Photo::synthetic_cover(id, album.title));
            }
        };
        if let Err(error) = self.covers.put(id, cover.clone()).await {
            warn!(album_id = %id, %error, "cover cache write failed");
        }
        Ok(cover)
    }

    async fn photos(&self, id: AlbumId) -> Result<Vec<Photo>, Error> {
        self.source
            .photos_by_album(id)
            .await
            .map_err(source_failure("photos_by_album"))
    }

    async fn albums_by_user(&self, id: UserId) -> Result<Vec<Album>, Error> {
        self.source
            .albums_by_user(id)
            .await
            .map_err(source_failure("albums_by_user"))
    }

    async fn with_owners(&self, albums: Vec<Album>) -> Result<Vec<AlbumCard>, Error> {
        let owner_ids: BTreeSet<UserId> = albums.iter().map(|album| album.user_id).collect();
        let owners: HashMap<UserId, User> = try_join_all(owner_ids.into_iter().map(|id| self.user(id)))
            .await?
            .into_iter()
            .map(|user| (user.id, user))
            .collect();
        albums
            .into_iter()
            .map(|album| {
                let owner = owners.get(&album.user_id).cloned().ok_or_else(|| {
                    Error::internal(format!("owner {} missing from lookup", album.user_id))
                })?;
                Ok(AlbumCard { album, owner })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "gallery_service_tests.rs"]
mod tests;
