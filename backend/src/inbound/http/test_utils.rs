//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use url::Url;

use super::state::{HttpState, HttpStatePorts};
use crate::domain::ports::{FixtureGallerySource, FixtureImageProbe, NoCoverCache};

/// State over the sample gallery with the given probe.
pub fn fixture_state(probe: FixtureImageProbe, show_placeholder: bool) -> HttpState {
    HttpStatePorts {
        source: Arc::new(FixtureGallerySource::sample()),
        covers: Arc::new(NoCoverCache),
        probe: Arc::new(probe),
        avatar_base: Url::parse("https://ui-avatars.com/api/").expect("static avatar url"),
        show_placeholder,
    }
    .into()
}
