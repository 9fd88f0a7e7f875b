//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! domain services and stay testable with fixture ports.

use std::sync::Arc;

use url::Url;

use crate::domain::ports::{CoverCache, GallerySource, ImageProbe};
use crate::domain::{AvatarUrls, GalleryService, ImageResolver};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Album, photo, and user use cases.
    pub gallery: GalleryService,
    /// Candidate image resolver behind the image routes.
    pub images: ImageResolver,
    /// Avatar URL builder.
    pub avatars: AvatarUrls,
}

/// Port implementations and switches used to assemble [`HttpState`].
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Upstream gallery API.
    pub source: Arc<dyn GallerySource>,
    /// Album cover cache.
    pub covers: Arc<dyn CoverCache>,
    /// Candidate image probe.
    pub probe: Arc<dyn ImageProbe>,
    /// Avatar service base URL.
    pub avatar_base: Url,
    /// Serve the placeholder once every candidate fails.
    pub show_placeholder: bool,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self {
            gallery: GalleryService::new(ports.source, ports.covers),
            images: ImageResolver::new(ports.probe).with_placeholder(ports.show_placeholder),
            avatars: AvatarUrls::new(ports.avatar_base),
        }
    }
}
