//! Wire shapes of the upstream gallery API.
//!
//! Payloads are decoded into these DTOs and mapped into domain records in one
//! pass. Photos drop the upstream `url` and `thumbnailUrl` fields in favour of
//! the synthesized candidate lists.

use serde::Deserialize;

use crate::domain::{Album, AlbumId, Photo, PhotoId, User, UserId};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AlbumDto {
    pub(super) id: u64,
    pub(super) user_id: u64,
    pub(super) title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PhotoDto {
    pub(super) id: u64,
    pub(super) album_id: u64,
    pub(super) title: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: u64,
    pub(super) name: String,
    #[serde(default)]
    pub(super) username: Option<String>,
    #[serde(default)]
    pub(super) email: String,
    #[serde(default)]
    pub(super) phone: String,
    #[serde(default)]
    pub(super) website: String,
}

impl From<AlbumDto> for Album {
    fn from(dto: AlbumDto) -> Self {
        Self {
            id: AlbumId::new(dto.id),
            title: dto.title,
            user_id: UserId::new(dto.user_id),
        }
    }
}

impl From<PhotoDto> for Photo {
    fn from(dto: PhotoDto) -> Self {
        Self::new(PhotoId::new(dto.id), AlbumId::new(dto.album_id), dto.title)
    }
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            id: UserId::new(dto.id),
            name: dto.name,
            username: dto.username,
            email: dto.email,
            phone: dto.phone,
            website: dto.website,
        }
    }
}
