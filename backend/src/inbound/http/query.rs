//! Query-string and path parameter parsing.
//!
//! HTML views are forgiving: unparsable page numbers fall back to the first
//! page and unknown view modes fall back to the grid. The JSON API is strict
//! and answers `invalid_request` instead.

use std::fmt;
use std::str::FromStr;

use pagination::{Page, PageRequest, PageSize};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::domain::{DEFAULT_AVATAR_SIZE, EntityIdParseError, Error, PhotoId};

/// Album listing layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Card grid, 12 albums per page.
    #[default]
    Grid,
    /// Table, 20 albums per page.
    Table,
}

impl ViewMode {
    /// Albums per page for this layout.
    #[must_use]
    pub fn page_size(self) -> PageSize {
        let size = match self {
            Self::Grid => 12,
            Self::Table => 20,
        };
        PageSize::new(size).unwrap_or(PageSize::from_non_zero(std::num::NonZeroUsize::MIN))
    }

    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Table => "table",
        }
    }

    /// Parse a query value, defaulting to [`ViewMode::Grid`].
    #[must_use]
    pub fn parse_or_grid(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("table") => Self::Table,
            _ => Self::Grid,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `GET /albums` query.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    page: Option<String>,
    view: Option<String>,
}

impl ListingQuery {
    /// Requested layout.
    #[must_use]
    pub fn view(&self) -> ViewMode {
        ViewMode::parse_or_grid(self.view.as_deref())
    }

    /// Requested page sized by the layout.
    #[must_use]
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(Page::parse_or_first(self.page.as_deref()), self.view().page_size())
    }
}

/// `GET /albums/{id}` query.
#[derive(Debug, Default, Deserialize)]
pub struct AlbumDetailQuery {
    page: Option<String>,
    photo: Option<String>,
}

impl AlbumDetailQuery {
    /// Requested photo page.
    #[must_use]
    pub fn page(&self) -> Page {
        Page::parse_or_first(self.page.as_deref())
    }

    /// Photo to open in the viewer; unparsable ids open nothing.
    #[must_use]
    pub fn selected(&self) -> Option<PhotoId> {
        self.photo.as_deref().and_then(|raw| raw.parse().ok())
    }
}

/// `GET /users/{id}` query.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Requested page.
    #[must_use]
    pub fn page(&self) -> Page {
        Page::parse_or_first(self.page.as_deref())
    }
}

/// Largest page the JSON API will request from the upstream.
pub const MAX_API_LIMIT: usize = 100;
const DEFAULT_API_LIMIT: usize = 12;

/// `GET /api/v1/albums` query.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ApiPageQuery {
    /// One-indexed page, default 1.
    #[param(minimum = 1, example = 1)]
    page: Option<usize>,
    /// Items per page, default 12, at most 100.
    #[param(minimum = 1, maximum = 100, example = 12)]
    limit: Option<usize>,
}

impl ApiPageQuery {
    /// Validated page request.
    ///
    /// # Errors
    ///
    /// Returns `invalid_request` for a zero page, a zero limit, or a limit
    /// above [`MAX_API_LIMIT`].
    pub fn page_request(&self) -> Result<PageRequest, Error> {
        let page = Page::new(self.page.unwrap_or(1)).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "page" }))
        })?;
        let limit = self.limit.unwrap_or(DEFAULT_API_LIMIT);
        if limit > MAX_API_LIMIT {
            return Err(Error::invalid_request(format!(
                "limit must be at most {MAX_API_LIMIT}"
            ))
            .with_details(json!({ "field": "limit" })));
        }
        let size = PageSize::new(limit).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "limit" }))
        })?;
        Ok(PageRequest::new(page, size))
    }
}

/// Largest avatar edge the API accepts.
pub const MAX_AVATAR_SIZE: u32 = 512;

/// `GET /api/v1/avatar` query.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvatarQuery {
    /// Display name to render.
    #[param(example = "Jane Doe")]
    pub name: String,
    /// Edge length in pixels, default 100.
    #[param(minimum = 1, maximum = 512, example = 100)]
    pub size: Option<u32>,
}

impl AvatarQuery {
    /// Validated `(name, size)`.
    ///
    /// # Errors
    ///
    /// Returns `invalid_request` for a blank name or a size outside
    /// `1..=512`.
    pub fn validated(&self) -> Result<(&str, u32), Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::invalid_request("name must not be blank")
                .with_details(json!({ "field": "name" })));
        }
        let size = self.size.unwrap_or(DEFAULT_AVATAR_SIZE);
        if !(1..=MAX_AVATAR_SIZE).contains(&size) {
            return Err(Error::invalid_request(format!(
                "size must be between 1 and {MAX_AVATAR_SIZE}"
            ))
            .with_details(json!({ "field": "size" })));
        }
        Ok((name, size))
    }
}

/// Parse an entity id from a path segment.
///
/// # Errors
///
/// Returns `invalid_request` when the segment is not a non-negative integer.
pub fn parse_id<T>(raw: &str) -> Result<T, Error>
where
    T: FromStr<Err = EntityIdParseError>,
{
    raw.parse().map_err(|err: EntityIdParseError| {
        Error::invalid_request(err.to_string()).with_details(json!({ "field": "id" }))
    })
}

#[cfg(test)]
mod tests {
    //! Lenient HTML parsing and strict API validation.

    use super::*;
    use crate::domain::{AlbumId, ErrorCode};
    use rstest::rstest;

    fn listing(page: Option<&str>, view: Option<&str>) -> ListingQuery {
        ListingQuery {
            page: page.map(str::to_owned),
            view: view.map(str::to_owned),
        }
    }

    #[rstest]
    #[case(None, None, 1, 12)]
    #[case(Some("3"), Some("table"), 3, 20)]
    #[case(Some("zero"), Some("mosaic"), 1, 12)]
    #[case(Some("0"), Some("grid"), 1, 12)]
    #[case(Some("-2"), None, 1, 12)]
    fn listing_queries_fall_back_leniently(
        #[case] page: Option<&str>,
        #[case] view: Option<&str>,
        #[case] expected_page: usize,
        #[case] expected_size: usize,
    ) {
        let request = listing(page, view).page_request();
        assert_eq!(request.page().get(), expected_page);
        assert_eq!(request.size().get(), expected_size);
    }

    #[rstest]
    #[case(Some("17"), Some(17))]
    #[case(Some("x"), None)]
    #[case(None, None)]
    fn selected_photo_ignores_garbage(#[case] raw: Option<&str>, #[case] expected: Option<u64>) {
        let query = AlbumDetailQuery {
            page: None,
            photo: raw.map(str::to_owned),
        };
        assert_eq!(query.selected(), expected.map(PhotoId::new));
    }

    #[rstest]
    #[case(Some(0), None, "page")]
    #[case(None, Some(0), "limit")]
    #[case(None, Some(101), "limit")]
    fn api_page_queries_are_strict(
        #[case] page: Option<usize>,
        #[case] limit: Option<usize>,
        #[case] field: &str,
    ) {
        let err = ApiPageQuery { page, limit }
            .page_request()
            .expect_err("invalid query");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.details(), Some(&json!({ "field": field })));
    }

    #[test]
    fn api_page_query_defaults() {
        let request = ApiPageQuery::default().page_request().expect("defaults");
        assert_eq!(request.page(), Page::FIRST);
        assert_eq!(request.size().get(), 12);
    }

    #[rstest]
    #[case("  ", Some(10))]
    #[case("Jane", Some(0))]
    #[case("Jane", Some(513))]
    fn avatar_queries_reject_bad_input(#[case] name: &str, #[case] size: Option<u32>) {
        let query = AvatarQuery {
            name: name.to_owned(),
            size,
        };
        assert!(query.validated().is_err());
    }

    #[test]
    fn avatar_query_defaults_size() {
        let query = AvatarQuery {
            name: " Jane Doe ".to_owned(),
            size: None,
        };
        assert_eq!(query.validated().expect("valid"), ("Jane Doe", 100));
    }

    #[test]
    fn path_ids_must_be_numeric() {
        assert_eq!(parse_id::<AlbumId>("12").expect("id"), AlbumId::new(12));
        let err = parse_id::<AlbumId>("twelve").expect_err("not numeric");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
