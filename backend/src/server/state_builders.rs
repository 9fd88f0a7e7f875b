//! Builds the HTTP state from validated configuration.

use std::sync::Arc;

use actix_web::web;
use gallery::inbound::http::state::{HttpState, HttpStatePorts};
use gallery::outbound::cover_cache::LruCoverCache;
use gallery::outbound::gallery_api::GalleryHttpSource;
use gallery::outbound::image_probe::HttpImageProbe;

use super::ServerConfig;

/// Wire the reqwest adapters and the LRU cover cache into [`HttpState`].
///
/// # Errors
///
/// Returns [`std::io::Error`] when an HTTP client cannot be constructed.
pub fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let source = GalleryHttpSource::new(config.api_base_url.clone(), config.request_timeout)
        .map_err(|err| std::io::Error::other(format!("gallery API client: {err}")))?;
    let probe = HttpImageProbe::new(config.probe_timeout)
        .map_err(|err| std::io::Error::other(format!("image probe client: {err}")))?;
    let state: HttpState = HttpStatePorts {
        source: Arc::new(source),
        covers: Arc::new(LruCoverCache::new(config.cover_cache_capacity)),
        probe: Arc::new(probe),
        avatar_base: config.avatar_base_url.clone(),
        show_placeholder: config.show_placeholder,
    }
    .into();
    Ok(web::Data::new(state))
}
