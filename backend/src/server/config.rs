//! Layered server configuration.
//!
//! [`GallerySettings`] is loaded through `ortho_config` from CLI flags,
//! `GALLERY_*` environment variables, and an optional config file.
//! [`ServerConfig`] is the validated form the server is built from.

use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_AVATAR_BASE_URL: &str = "https://ui-avatars.com/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_COVER_CACHE_CAPACITY: usize = 256;
const DEFAULT_SHOW_PLACEHOLDER: bool = true;

/// Raw settings as supplied by the operator.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GALLERY")]
pub struct GallerySettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Base URL of the albums/photos/users API.
    pub api_base_url: Option<String>,
    /// Base URL of the avatar service.
    pub avatar_base_url: Option<String>,
    /// Upstream API request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Per-candidate image probe timeout in seconds.
    pub probe_timeout_secs: Option<u64>,
    /// Maximum number of cached album covers.
    pub cover_cache_capacity: Option<usize>,
    /// Serve a placeholder once every image candidate fails.
    pub show_placeholder: Option<bool>,
}

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A value could not be parsed.
    #[error("invalid {field}: {message}")]
    Invalid {
        /// Setting name.
        field: &'static str,
        /// Parser message.
        message: String,
    },
    /// A count or duration was zero.
    #[error("{field} must be greater than zero")]
    Zero {
        /// Setting name.
        field: &'static str,
    },
}

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) api_base_url: Url,
    pub(crate) avatar_base_url: Url,
    pub(crate) request_timeout: Duration,
    pub(crate) probe_timeout: Duration,
    pub(crate) cover_cache_capacity: NonZeroUsize,
    pub(crate) show_placeholder: bool,
}

fn http_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|err| ConfigError::Invalid {
        field,
        message: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" if !url.cannot_be_a_base() => Ok(url),
        scheme => Err(ConfigError::Invalid {
            field,
            message: format!("expected an http(s) URL, got scheme {scheme:?}"),
        }),
    }
}

fn seconds(field: &'static str, value: u64) -> Result<Duration, ConfigError> {
    if value == 0 {
        return Err(ConfigError::Zero { field });
    }
    Ok(Duration::from_secs(value))
}

impl TryFrom<&GallerySettings> for ServerConfig {
    type Error = ConfigError;

    fn try_from(settings: &GallerySettings) -> Result<Self, Self::Error> {
        let bind_addr = settings
            .bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
            .map_err(|err: std::net::AddrParseError| ConfigError::Invalid {
                field: "bind_addr",
                message: err.to_string(),
            })?;
        let capacity = settings
            .cover_cache_capacity
            .unwrap_or(DEFAULT_COVER_CACHE_CAPACITY);
        Ok(Self {
            bind_addr,
            api_base_url: http_url(
                "api_base_url",
                settings.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL),
            )?,
            avatar_base_url: http_url(
                "avatar_base_url",
                settings
                    .avatar_base_url
                    .as_deref()
                    .unwrap_or(DEFAULT_AVATAR_BASE_URL),
            )?,
            request_timeout: seconds(
                "request_timeout_secs",
                settings
                    .request_timeout_secs
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            )?,
            probe_timeout: seconds(
                "probe_timeout_secs",
                settings
                    .probe_timeout_secs
                    .unwrap_or(DEFAULT_PROBE_TIMEOUT_SECS),
            )?,
            cover_cache_capacity: NonZeroUsize::new(capacity).ok_or(ConfigError::Zero {
                field: "cover_cache_capacity",
            })?,
            show_placeholder: settings.show_placeholder.unwrap_or(DEFAULT_SHOW_PLACEHOLDER),
        })
    }
}

impl ServerConfig {
    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    //! Defaults, environment overrides, and validation.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "GALLERY_BIND_ADDR",
        "GALLERY_API_BASE_URL",
        "GALLERY_AVATAR_BASE_URL",
        "GALLERY_REQUEST_TIMEOUT_SECS",
        "GALLERY_PROBE_TIMEOUT_SECS",
        "GALLERY_COVER_CACHE_CAPACITY",
        "GALLERY_SHOW_PLACEHOLDER",
    ];

    fn load_with(overrides: &[(&str, &str)]) -> GallerySettings {
        let _guard = lock_env(VARS.map(|name| {
            let value = overrides
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned());
            (name, value)
        }));
        GallerySettings::load_from_iter([OsString::from("gallery")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let settings = load_with(&[]);
        let config = ServerConfig::try_from(&settings).expect("defaults are valid");
        assert_eq!(config.bind_addr().to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.api_base_url.as_str(), "https://jsonplaceholder.typicode.com/");
        assert_eq!(config.avatar_base_url.as_str(), "https://ui-avatars.com/api");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.probe_timeout, Duration::from_secs(5));
        assert_eq!(config.cover_cache_capacity.get(), 256);
        assert!(config.show_placeholder);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let settings = load_with(&[
            ("GALLERY_BIND_ADDR", "127.0.0.1:9000"),
            ("GALLERY_API_BASE_URL", "http://localhost:3000/api"),
            ("GALLERY_REQUEST_TIMEOUT_SECS", "2"),
            ("GALLERY_COVER_CACHE_CAPACITY", "8"),
            ("GALLERY_SHOW_PLACEHOLDER", "false"),
        ]);
        let config = ServerConfig::try_from(&settings).expect("overrides are valid");
        assert_eq!(config.bind_addr().port(), 9000);
        assert_eq!(config.api_base_url.as_str(), "http://localhost:3000/api");
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.cover_cache_capacity.get(), 8);
        assert!(!config.show_placeholder);
    }

    #[rstest]
    #[case("GALLERY_COVER_CACHE_CAPACITY", "0", "cover_cache_capacity must be greater than zero")]
    #[case("GALLERY_PROBE_TIMEOUT_SECS", "0", "probe_timeout_secs must be greater than zero")]
    #[case("GALLERY_API_BASE_URL", "not a url", "invalid api_base_url")]
    #[case("GALLERY_AVATAR_BASE_URL", "ftp://example.org", "invalid avatar_base_url")]
    #[case("GALLERY_BIND_ADDR", "localhost", "invalid bind_addr")]
    fn invalid_values_fail_with_the_setting_name(
        #[case] name: &str,
        #[case] value: &str,
        #[case] expected: &str,
    ) {
        let settings = load_with(&[(name, value)]);
        let err = ServerConfig::try_from(&settings).expect_err("value should be rejected");
        assert!(err.to_string().starts_with(expected), "{err}");
    }
}
