//! Album read model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity_id::define_entity_id;
use super::user::UserId;

define_entity_id! {
    /// Upstream album identifier.
    AlbumId, "album"
}

/// A titled collection of photos owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Album identifier.
    pub id: AlbumId,
    /// Display title.
    #[schema(example = "quidem molestiae enim")]
    pub title: String,
    /// Owning user.
    pub user_id: UserId,
}

impl Album {
    /// Path of the album detail view.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/albums/{}", self.id)
    }
}
