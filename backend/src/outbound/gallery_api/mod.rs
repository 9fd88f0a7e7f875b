//! JSONPlaceholder-compatible gallery API adapter.
//!
//! Provides a reqwest implementation of the `GallerySource` port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_TOTAL_COUNT, GalleryHttpSource};
