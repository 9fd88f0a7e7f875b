//! Reqwest-backed image probe.
//!
//! A candidate loads when a GET succeeds and the response declares an
//! `image/*` content type. Redirects are followed, as a browser would.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap};

use crate::domain::ports::{ImageProbe, ImageProbeError};

/// Image probe issuing one GET per candidate.
pub struct HttpImageProbe {
    client: Client,
}

impl HttpImageProbe {
    /// Build a probe whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn probe(&self, url: &str) -> Result<(), ImageProbeError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "image/*")
            .send()
            .await
            .map_err(|error| {
                if error.is_timeout() {
                    ImageProbeError::timeout(error.to_string())
                } else {
                    ImageProbeError::transport(error.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageProbeError::status(status.as_u16()));
        }
        check_content_type(response.headers())
    }
}

fn check_content_type(headers: &HeaderMap) -> Result<(), ImageProbeError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if content_type
        .trim_start()
        .to_ascii_lowercase()
        .starts_with("image/")
    {
        Ok(())
    } else {
        Err(ImageProbeError::not_an_image(content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use rstest::rstest;

    #[rstest]
    #[case(Some("image/jpeg"), true)]
    #[case(Some("Image/PNG"), true)]
    #[case(Some("text/html; charset=utf-8"), false)]
    #[case(None, false)]
    fn only_image_content_types_load(#[case] content_type: Option<&str>, #[case] loads: bool) {
        let mut headers = HeaderMap::new();
        if let Some(value) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_str(value).expect("header"));
        }
        assert_eq!(check_content_type(&headers).is_ok(), loads);
    }
}
