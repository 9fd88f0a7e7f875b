//! User read model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entity_id::define_entity_id;

define_entity_id! {
    /// Upstream user identifier.
    UserId, "user"
}

/// Public profile of an album owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Full display name.
    #[schema(example = "Leanne Graham")]
    pub name: String,
    /// Handle, when the upstream provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Bret")]
    pub username: Option<String>,
    /// Contact email.
    #[schema(example = "Sincere@april.biz")]
    pub email: String,
    /// Contact phone number, free-form.
    #[schema(example = "1-770-736-8031 x56442")]
    pub phone: String,
    /// Website host without scheme.
    #[schema(example = "hildegard.org")]
    pub website: String,
}

impl User {
    /// Path of the user detail view.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/users/{}", self.id)
    }

    /// `mailto:` link for the email address.
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link for the phone number.
    #[must_use]
    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// Absolute website link. Upstream values carry no scheme.
    #[must_use]
    pub fn website_href(&self) -> String {
        if self.website.starts_with("http://") || self.website.starts_with("https://") {
            self.website.clone()
        } else {
            format!("https://{}", self.website)
        }
    }
}
