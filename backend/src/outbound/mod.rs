//! Outbound adapters implementing the gallery's driven ports.
//!
//! - **gallery_api**: reqwest client for the upstream albums/photos/users API
//! - **image_probe**: reqwest check that a candidate image URL loads
//! - **cover_cache**: bounded in-process LRU for album covers
//!
//! Adapters translate between wire formats and domain types and hold no
//! business logic.

pub mod cover_cache;
pub mod gallery_api;
pub mod image_probe;
