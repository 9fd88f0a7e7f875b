//! Driven port checking whether a remote image loads.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Reasons a candidate image failed to load.
    pub enum ImageProbeError {
        /// No response was received.
        Transport { message: String } => "image request failed: {message}",
        /// The host did not answer within the probe timeout.
        Timeout { message: String } => "image request timed out: {message}",
        /// The host answered with a non-success status.
        Status { status: u16 } => "image host returned status {status}",
        /// The response was not an image.
        NotAnImage { content_type: String } =>
            "image host returned non-image content type {content_type:?}",
    }
}

/// Loads a candidate URL and reports whether it produced an image.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageProbe: Send + Sync {
    /// `Ok` when `url` serves an image.
    async fn probe(&self, url: &str) -> Result<(), ImageProbeError>;
}

/// Offline probe accepting URLs that start with one of a set of prefixes.
///
/// # Examples
/// ```
/// use gallery::domain::ports::{FixtureImageProbe, ImageProbe};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let probe = FixtureImageProbe::accepting(["https://picsum.photos/"]);
/// assert!(probe.probe("https://picsum.photos/id/2/150/150").await.is_ok());
/// assert!(probe.probe("https://placebear.com/150/150").await.is_err());
/// # });
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureImageProbe {
    prefixes: Vec<String>,
}

impl FixtureImageProbe {
    /// Probe accepting URLs under the given prefixes.
    pub fn accepting<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Probe rejecting everything.
    #[must_use]
    pub fn unreachable() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ImageProbe for FixtureImageProbe {
    async fn probe(&self, url: &str) -> Result<(), ImageProbeError> {
        if self.prefixes.iter().any(|prefix| url.starts_with(prefix.as_str())) {
            Ok(())
        } else {
            Err(ImageProbeError::status(404_u16))
        }
    }
}
