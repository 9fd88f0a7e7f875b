//! Driven ports at the edge of the gallery domain.

mod macros;
pub(crate) use macros::define_port_error;

mod cover_cache;
mod gallery_source;
mod image_probe;

#[cfg(test)]
pub use cover_cache::MockCoverCache;
pub use cover_cache::{CoverCache, CoverCacheError, NoCoverCache};
#[cfg(test)]
pub use gallery_source::MockGallerySource;
pub use gallery_source::{AlbumPage, FixtureGallerySource, GallerySource, GallerySourceError};
#[cfg(test)]
pub use image_probe::MockImageProbe;
pub use image_probe::{FixtureImageProbe, ImageProbe, ImageProbeError};
