//! Driven port for the remote albums, photos, and users API.
//!
//! The domain owns the entity shapes; adapters translate upstream payloads
//! and attach synthesized image candidates before returning them.

use async_trait::async_trait;
use pagination::PageRequest;

use super::define_port_error;
use crate::domain::{Album, AlbumId, Error, Photo, PhotoId, User, UserId};

/// One page of albums and the upstream's total album count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlbumPage {
    /// Albums on the requested page.
    pub albums: Vec<Album>,
    /// Total albums across every page.
    pub total: usize,
}

define_port_error! {
    /// Errors surfaced while talking to the gallery API.
    pub enum GallerySourceError {
        /// The upstream answered 404 for a single resource.
        NotFound { resource: String } =>
            "{resource} not found",
        /// The request never produced a response.
        Transport { message: String } =>
            "gallery transport failed: {message}",
        /// The request exceeded the configured timeout.
        Timeout { message: String } =>
            "gallery request timed out: {message}",
        /// The upstream answered with a non-success status.
        Status { status: u16, message: String } =>
            "gallery returned status {status}: {message}",
        /// The response body was not the expected JSON.
        Decode { message: String } =>
            "gallery response decode failed: {message}",
    }
}

impl From<GallerySourceError> for Error {
    fn from(err: GallerySourceError) -> Self {
        match err {
            GallerySourceError::NotFound { .. } => Self::not_found(err.to_string()),
            GallerySourceError::Decode { .. } => {
                Self::upstream_unavailable("gallery API returned an unexpected payload")
            }
            GallerySourceError::Transport { .. }
            | GallerySourceError::Timeout { .. }
            | GallerySourceError::Status { .. } => {
                Self::upstream_unavailable("gallery API is unavailable")
            }
        }
    }
}

/// Read-only access to albums, photos, and users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GallerySource: Send + Sync {
    /// One page of albums, paged by the upstream.
    async fn albums_page(&self, request: PageRequest) -> Result<AlbumPage, GallerySourceError>;

    /// A single album.
    async fn album(&self, id: AlbumId) -> Result<Album, GallerySourceError>;

    /// Every album owned by `user`.
    async fn albums_by_user(&self, user: UserId) -> Result<Vec<Album>, GallerySourceError>;

    /// Every photo in `album`, in upstream order.
    async fn photos_by_album(&self, album: AlbumId) -> Result<Vec<Photo>, GallerySourceError>;

    /// Every user.
    async fn users(&self) -> Result<Vec<User>, GallerySourceError>;

    /// A single user.
    async fn user(&self, id: UserId) -> Result<User, GallerySourceError>;
}

/// In-memory gallery used by tests and local demos.
///
/// [`FixtureGallerySource::sample`] holds three users owning 25 albums.
/// Album 1 has 23 photos, album 2 is empty, and every other album has a
/// single photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureGallerySource {
    albums: Vec<Album>,
    photos: Vec<Photo>,
    users: Vec<User>,
}

impl Default for FixtureGallerySource {
    fn default() -> Self {
        Self::sample()
    }
}

const SAMPLE_USERS: [(&str, &str, &str); 3] = [
    ("Leanne Graham", "Bret", "hildegard.org"),
    ("Ervin Howell", "Antonette", "anastasia.net"),
    ("Clementine Bauch", "Samantha", "ramiro.info"),
];

impl FixtureGallerySource {
    /// Fixture over explicit data.
    #[must_use]
    pub fn new(albums: Vec<Album>, photos: Vec<Photo>, users: Vec<User>) -> Self {
        Self {
            albums,
            photos,
            users,
        }
    }

    /// The deterministic sample dataset.
    #[must_use]
    pub fn sample() -> Self {
        let users = (1_u64..)
            .zip(SAMPLE_USERS)
            .map(|(id, (name, username, website))| User {
                id: UserId::new(id),
                name: name.to_owned(),
                username: Some(username.to_owned()),
                email: format!("{}@example.org", username.to_lowercase()),
                phone: format!("555-010{id}"),
                website: website.to_owned(),
            })
            .collect();
        let albums = (1_u64..=25)
            .map(|id| Album {
                id: AlbumId::new(id),
                title: format!("sample album {id}"),
                user_id: UserId::new((id - 1) / 10 + 1),
            })
            .collect();
        let first_album = (1_u64..=23)
            .map(|id| Photo::new(PhotoId::new(id), AlbumId::new(1), format!("sample photo {id}")));
        let singles = (3_u64..=25).map(|album| {
            let id = album + 21;
            Photo::new(PhotoId::new(id), AlbumId::new(album), format!("sample photo {id}"))
        });
        Self::new(albums, first_album.chain(singles).collect(), users)
    }
}

#[async_trait]
impl GallerySource for FixtureGallerySource {
    async fn albums_page(&self, request: PageRequest) -> Result<AlbumPage, GallerySourceError> {
        Ok(AlbumPage {
            albums: request.slice(&self.albums).to_vec(),
            total: self.albums.len(),
        })
    }

    async fn album(&self, id: AlbumId) -> Result<Album, GallerySourceError> {
        self.albums
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or_else(|| GallerySourceError::not_found(format!("album {id}")))
    }

    async fn albums_by_user(&self, user: UserId) -> Result<Vec<Album>, GallerySourceError> {
        Ok(self
            .albums
            .iter()
            .filter(|album| album.user_id == user)
            .cloned()
            .collect())
    }

    async fn photos_by_album(&self, album: AlbumId) -> Result<Vec<Photo>, GallerySourceError> {
        Ok(self
            .photos
            .iter()
            .filter(|photo| photo.album_id == album)
            .cloned()
            .collect())
    }

    async fn users(&self) -> Result<Vec<User>, GallerySourceError> {
        Ok(self.users.clone())
    }

    async fn user(&self, id: UserId) -> Result<User, GallerySourceError> {
        self.users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| GallerySourceError::not_found(format!("user {id}")))
    }
}
