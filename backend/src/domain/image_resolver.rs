//! Drives [`FallbackImage`] through its candidates with an [`ImageProbe`].

use std::sync::Arc;

use tracing::debug;

use super::fallback::{FallbackImage, Rendering};
use super::image_sources::PlaceholderColors;
use super::ports::ImageProbe;

/// Outcome of resolving one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Send the client to this candidate.
    Redirect(String),
    /// Every candidate failed; draw the placeholder.
    Placeholder(PlaceholderColors),
    /// Every candidate failed and the placeholder is disabled.
    Hidden,
}

/// Sequential candidate resolver.
#[derive(Clone)]
pub struct ImageResolver {
    probe: Arc<dyn ImageProbe>,
    show_placeholder: bool,
}

impl ImageResolver {
    /// Resolver with the placeholder enabled.
    pub fn new(probe: Arc<dyn ImageProbe>) -> Self {
        Self {
            probe,
            show_placeholder: true,
        }
    }

    /// Toggle the placeholder shown once candidates are exhausted.
    #[must_use]
    pub fn with_placeholder(mut self, show_placeholder: bool) -> Self {
        self.show_placeholder = show_placeholder;
        self
    }

    /// Probe candidates in order, one at a time, until one loads.
    pub async fn resolve(&self, image: FallbackImage) -> Resolution {
        let mut image = image.with_placeholder(self.show_placeholder);
        while !image.state().is_settled() {
            let outcome = match image.current_url() {
                Some(url) => self.probe.probe(url).await.map_err(|error| (url.to_owned(), error)),
                None => break,
            };
            match outcome {
                Ok(()) => image.record_load(),
                Err((url, error)) => {
                    debug!(%url, %error, "image candidate failed");
                    image.record_error();
                }
            }
        }
        match image.render() {
            Rendering::Image { url, .. } => Resolution::Redirect(url.to_owned()),
            Rendering::Placeholder(colors) => Resolution::Placeholder(colors),
            Rendering::Hidden => Resolution::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Probe ordering and terminal outcomes.

    use super::*;
    use crate::domain::ports::{ImageProbeError, MockImageProbe};
    use mockall::Sequence;
    use rstest::{fixture, rstest};

    #[fixture]
    fn candidates() -> Vec<String> {
        vec![
            "https://a.example/1".to_owned(),
            "https://b.example/1".to_owned(),
            "https://c.example/1".to_owned(),
        ]
    }

    fn image(candidates: Vec<String>) -> FallbackImage {
        FallbackImage::new(candidates, PlaceholderColors::for_id(3))
    }

    #[rstest]
    #[tokio::test]
    async fn probes_in_order_and_redirects_to_first_success(candidates: Vec<String>) {
        let mut probe = MockImageProbe::new();
        let mut seq = Sequence::new();
        probe
            .expect_probe()
            .withf(|url| url.starts_with("https://a.example"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ImageProbeError::timeout("5s")));
        probe
            .expect_probe()
            .withf(|url| url.starts_with("https://b.example"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let resolver = ImageResolver::new(Arc::new(probe));
        let resolution = resolver.resolve(image(candidates)).await;
        assert_eq!(
            resolution,
            Resolution::Redirect("https://b.example/1".to_owned())
        );
    }

    #[rstest]
    #[case(true, Resolution::Placeholder(PlaceholderColors::for_id(3)))]
    #[case(false, Resolution::Hidden)]
    #[tokio::test]
    async fn exhausted_candidates_follow_placeholder_switch(
        candidates: Vec<String>,
        #[case] show_placeholder: bool,
        #[case] expected: Resolution,
    ) {
        let mut probe = MockImageProbe::new();
        probe
            .expect_probe()
            .times(3)
            .returning(|_| Err(ImageProbeError::status(404_u16)));

        let resolver = ImageResolver::new(Arc::new(probe)).with_placeholder(show_placeholder);
        assert_eq!(resolver.resolve(image(candidates)).await, expected);
    }

    #[tokio::test]
    async fn empty_candidate_list_never_probes() {
        let mut probe = MockImageProbe::new();
        probe.expect_probe().never();

        let resolver = ImageResolver::new(Arc::new(probe));
        assert_eq!(
            resolver.resolve(image(Vec::new())).await,
            Resolution::Placeholder(PlaceholderColors::for_id(3))
        );
    }
}
