//! Gallery domain: read models, image fallback logic, and use cases.
//!
//! Public surface:
//! - `Album`, `Photo`, `User` and their id newtypes, deserialised from and
//!   serialised to camelCase JSON.
//! - `candidate_urls` and `PlaceholderColors`, the deterministic image
//!   synthesis used for every photo and synthetic cover.
//! - `FallbackImage` and `ImageResolver`, the candidate state machine and its
//!   probe-driven runner.
//! - `GalleryService`, the use cases called by inbound adapters.
//! - `Error` and `ErrorCode`, the transport-agnostic failure payload.

mod entity_id;

pub mod album;
pub mod avatar;
pub mod error;
pub mod fallback;
pub mod gallery_service;
pub mod image_resolver;
pub mod image_sources;
pub mod photo;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::album::{Album, AlbumId};
pub use self::avatar::{Avatar, AvatarUrls, DEFAULT_AVATAR_SIZE, initials};
pub use self::entity_id::EntityIdParseError;
pub use self::error::{Error, ErrorCode};
pub use self::fallback::{FallbackImage, FallbackState, Rendering};
pub use self::gallery_service::{
    AlbumCard, AlbumDetail, FEATURED_ALBUMS, GalleryService, PHOTOS_PER_PAGE,
    USER_ALBUMS_PER_PAGE, UserDetail,
};
pub use self::image_resolver::{ImageResolver, Resolution};
pub use self::image_sources::{
    CANDIDATE_COUNT, HexColor, HexColorParseError, ImageSize, ImageSizeParseError,
    PlaceholderColors, candidate_urls,
};
pub use self::photo::{Photo, PhotoId};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId};

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
