//! Cache-control policies shared by handlers.

use actix_web::http::header::{CACHE_CONTROL, HeaderName};

/// Probes and other responses that must never be reused.
pub const NO_STORE: &str = "no-store";

/// Resolved image redirects and placeholders, reusable for an hour.
pub const IMAGE_MAX_AGE: &str = "public, max-age=3600";

/// Header tuple for [`NO_STORE`].
#[must_use]
pub fn no_store_header() -> (HeaderName, &'static str) {
    (CACHE_CONTROL, NO_STORE)
}

/// Header tuple for [`IMAGE_MAX_AGE`].
#[must_use]
pub fn image_cache_header() -> (HeaderName, &'static str) {
    (CACHE_CONTROL, IMAGE_MAX_AGE)
}
