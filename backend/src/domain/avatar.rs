//! Avatar image URLs and initials.

use serde::Serialize;
use url::{Url, form_urlencoded};
use utoipa::ToSchema;

/// Avatar edge length used when the caller does not ask for one.
pub const DEFAULT_AVATAR_SIZE: u32 = 100;

/// Builds avatar image URLs against a ui-avatars compatible service.
///
/// # Examples
/// ```
/// use gallery::domain::AvatarUrls;
/// use url::{Url, form_urlencoded};
///
/// let base = Url::parse("https://ui-avatars.com/api/").expect("static url");
/// let avatars = AvatarUrls::new(base);
/// assert_eq!(
///     avatars.url("Jane Doe", 100).as_str(),
///     "https://ui-avatars.com/api/?name=Jane%20Doe&size=100&background=random"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUrls {
    base: Url,
}

impl AvatarUrls {
    /// Wrap the service base URL. A trailing slash is added to the path when
    /// missing so `https://host/api` and `https://host/api/` behave alike.
    #[must_use]
    pub fn new(mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);
        Self { base }
    }

    /// Avatar URL for `name` rendered at `size` pixels.
    ///
    /// Spaces in the name are sent as `%20` rather than `+`.
    #[must_use]
    pub fn url(&self, name: &str, size: u32) -> Url {
        let mut url = self.base.clone();
        let query = format!(
            "name={}&size={size}&background=random",
            encode_component(name)
        );
        url.set_query(Some(&query));
        url
    }

    /// URL plus initials for `name`.
    #[must_use]
    pub fn avatar(&self, name: &str, size: u32) -> Avatar {
        Avatar {
            url: self.url(name, size).into(),
            initials: initials(name),
        }
    }
}

// Form encoding writes a literal `+` as `%2B`, so every remaining `+` is a space.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Avatar image location and its text fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    /// Remote image URL.
    #[schema(example = "https://ui-avatars.com/api/?name=Jane%20Doe&size=100&background=random")]
    pub url: String,
    /// Up to two upper-case initials.
    #[schema(example = "JD")]
    pub initials: String,
}

/// First letter of the first two whitespace-separated words, upper-cased.
///
/// # Examples
/// ```
/// use gallery::domain::initials;
///
/// assert_eq!(initials("Leanne Graham"), "LG");
/// assert_eq!(initials("Mrs. Dennis Schulist"), "MD");
/// assert_eq!(initials("  "), "");
/// ```
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
