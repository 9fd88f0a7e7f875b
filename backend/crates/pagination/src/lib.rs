//! Page arithmetic and pagination envelopes shared by gallery endpoints.
//!
//! Pages are one-indexed. The visible window of a collection for page `p`
//! and size `s` is `[(p - 1) * s, p * s)`, clamped to the collection bounds,
//! and the page count is `ceil(total / s)`. Out-of-range pages are not an
//! error: they select an empty window and the caller decides how to present
//! that.

use std::num::NonZeroUsize;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Name of the query parameter carrying the one-indexed page number.
pub const PAGE_QUERY_PARAM: &str = "page";

/// Errors raised while constructing pagination primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// Page numbers start at one.
    #[error("page number must be at least 1")]
    ZeroPage,
    /// Page sizes must be positive.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// One-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Page(NonZeroUsize);

impl Page {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Validate and construct a page number.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPage`] when `number` is zero.
    pub const fn new(number: usize) -> Result<Self, PaginationError> {
        match NonZeroUsize::new(number) {
            Some(value) => Ok(Self(value)),
            None => Err(PaginationError::ZeroPage),
        }
    }

    /// Parse a raw query value, falling back to the first page when the value
    /// is missing, blank, non-numeric or zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::Page;
    ///
    /// assert_eq!(Page::parse_or_first(Some("3")).get(), 3);
    /// assert_eq!(Page::parse_or_first(Some("abc")), Page::FIRST);
    /// assert_eq!(Page::parse_or_first(None), Page::FIRST);
    /// ```
    #[must_use]
    pub fn parse_or_first(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<usize>().ok())
            .and_then(|number| Self::new(number).ok())
            .unwrap_or(Self::FIRST)
    }

    /// Return the page number.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for Page {
    type Error = PaginationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Page> for usize {
    fn from(value: Page) -> Self {
        value.get()
    }
}

/// Positive number of items per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Validate and construct a page size.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPageSize`] when `size` is zero.
    pub const fn new(size: usize) -> Result<Self, PaginationError> {
        match NonZeroUsize::new(size) {
            Some(value) => Ok(Self(value)),
            None => Err(PaginationError::ZeroPageSize),
        }
    }

    /// Construct a page size from a non-zero value.
    #[must_use]
    pub const fn from_non_zero(size: NonZeroUsize) -> Self {
        Self(size)
    }

    /// Return the number of items per page.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Number of pages needed to show `total` items, rounding up.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::PageSize;
    ///
    /// let size = PageSize::new(10).expect("non-zero size");
    /// assert_eq!(size.total_pages(25), 3);
    /// assert_eq!(size.total_pages(0), 0);
    /// ```
    #[must_use]
    pub const fn total_pages(self, total: usize) -> usize {
        total.div_ceil(self.0.get())
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PaginationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

/// A page number paired with a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: Page,
    size: PageSize,
}

impl PageRequest {
    /// Pair a page with a page size.
    #[must_use]
    pub const fn new(page: Page, size: PageSize) -> Self {
        Self { page, size }
    }

    /// The requested page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// The requested page size.
    #[must_use]
    pub const fn size(&self) -> PageSize {
        self.size
    }

    /// Zero-based index of the first item on this page, saturating on
    /// overflow.
    #[must_use]
    pub const fn offset(&self) -> usize {
        (self.page.get() - 1).saturating_mul(self.size.get())
    }

    /// Unclamped item window `[(page - 1) * size, page * size)`.
    #[must_use]
    pub const fn window(&self) -> Range<usize> {
        let start = self.offset();
        start..start.saturating_add(self.size.get())
    }

    /// Item window clamped to a collection of `len` items. Pages past the
    /// end yield an empty range positioned at `len`.
    #[must_use]
    pub fn window_within(&self, len: usize) -> Range<usize> {
        let Range { start, end } = self.window();
        start.min(len)..end.min(len)
    }

    /// Borrow the items visible on this page.
    ///
    /// # Examples
    ///
    /// ```
    /// use pagination::{Page, PageRequest, PageSize};
    ///
    /// let items: Vec<u32> = (0..25).collect();
    /// let request = PageRequest::new(
    ///     Page::new(2).expect("valid page"),
    ///     PageSize::new(10).expect("valid size"),
    /// );
    /// assert_eq!(request.slice(&items), &items[10..20]);
    /// ```
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        items.get(self.window_within(items.len())).unwrap_or_default()
    }

    /// Number of pages needed to show `total` items at this page size.
    #[must_use]
    pub const fn total_pages(&self, total: usize) -> usize {
        self.size.total_pages(total)
    }
}

/// One page of items together with the counts needed for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Items on the current page.
    pub data: Vec<T>,
    /// One-indexed page number.
    pub page: usize,
    /// Page size used to compute the page.
    pub limit: usize,
    /// Total number of items across all pages.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Wrap items that were already paged by the producer.
    #[must_use]
    pub const fn from_page(data: Vec<T>, request: PageRequest, total: usize) -> Self {
        Self {
            data,
            page: request.page().get(),
            limit: request.size().get(),
            total,
            total_pages: request.total_pages(total),
        }
    }

    /// Page an in-memory collection.
    #[must_use]
    pub fn from_slice(items: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        Self::from_page(request.slice(items).to_vec(), request, items.len())
    }

    /// Whether navigation controls are needed.
    #[must_use]
    pub const fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }
}

/// Build a link to `page`, replacing any existing `page` parameter and
/// preserving every other query parameter in order.
///
/// # Examples
///
/// ```
/// use pagination::{Page, page_link};
/// use url::Url;
///
/// let base = Url::parse("http://gallery.test/albums?view=table&page=4")
///     .expect("valid url");
/// let link = page_link(&base, Page::new(2).expect("valid page"));
/// assert_eq!(link.as_str(), "http://gallery.test/albums?view=table&page=2");
/// ```
#[must_use]
pub fn page_link(base: &Url, page: Page) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| key != PAGE_QUERY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut link = base.clone();
    link.set_query(None);
    {
        let mut pairs = link.query_pairs_mut();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(PAGE_QUERY_PARAM, &page.to_string());
    }
    link
}

#[cfg(test)]
mod tests {
    //! Unit coverage for page arithmetic and link building.

    use super::*;
    use rstest::rstest;

    fn request(page: usize, size: usize) -> Result<PageRequest, PaginationError> {
        Ok(PageRequest::new(Page::new(page)?, PageSize::new(size)?))
    }

    #[rstest]
    #[case(25, 10, 3)]
    #[case(20, 10, 2)]
    #[case(0, 10, 0)]
    #[case(1, 12, 1)]
    #[case(100, 12, 9)]
    fn total_pages_rounds_up(#[case] total: usize, #[case] size: usize, #[case] expected: usize) {
        let size = PageSize::new(size);
        assert_eq!(size.map(|value| value.total_pages(total)), Ok(expected));
    }

    #[test]
    fn second_page_of_twenty_five_is_items_ten_to_twenty() -> Result<(), PaginationError> {
        let items: Vec<usize> = (0..25).collect();
        let slice = request(2, 10)?.slice(&items);
        let expected: Vec<usize> = (10..20).collect();
        assert_eq!(slice, expected.as_slice());
        Ok(())
    }

    #[test]
    fn last_page_is_partial() -> Result<(), PaginationError> {
        let items: Vec<usize> = (0..25).collect();
        let slice = request(3, 10)?.slice(&items);
        assert_eq!(slice, &[20, 21, 22, 23, 24]);
        Ok(())
    }

    #[test]
    fn page_past_the_end_is_empty() -> Result<(), PaginationError> {
        let items: Vec<usize> = (0..25).collect();
        let page = request(7, 10)?;
        assert!(page.slice(&items).is_empty());
        assert_eq!(page.window_within(items.len()), 25..25);
        Ok(())
    }

    #[test]
    fn zero_values_are_rejected() {
        assert_eq!(Page::new(0), Err(PaginationError::ZeroPage));
        assert_eq!(PageSize::new(0), Err(PaginationError::ZeroPageSize));
    }

    #[rstest]
    #[case(Some("2"), 2)]
    #[case(Some(" 5 "), 5)]
    #[case(Some("0"), 1)]
    #[case(Some("-3"), 1)]
    #[case(Some("two"), 1)]
    #[case(Some(""), 1)]
    #[case(None, 1)]
    fn parse_or_first_falls_back_to_page_one(#[case] raw: Option<&str>, #[case] expected: usize) {
        assert_eq!(Page::parse_or_first(raw).get(), expected);
    }

    #[test]
    fn offset_saturates_instead_of_overflowing() -> Result<(), PaginationError> {
        let page = request(usize::MAX, 2)?;
        assert_eq!(page.offset(), usize::MAX);
        assert!(page.slice(&[1, 2, 3]).is_empty());
        Ok(())
    }

    #[test]
    fn envelope_from_slice_reports_counts() -> Result<(), PaginationError> {
        let items: Vec<usize> = (0..25).collect();
        let envelope = Paginated::from_slice(&items, request(3, 10)?);
        assert_eq!(envelope.data, vec![20, 21, 22, 23, 24]);
        assert_eq!(envelope.total, 25);
        assert_eq!(envelope.total_pages, 3);
        assert!(envelope.has_multiple_pages());
        Ok(())
    }

    #[test]
    fn envelope_serialises_camel_case() -> Result<(), Box<dyn std::error::Error>> {
        let envelope = Paginated::from_page(vec!["a"], request(1, 4)?, 9);
        let value = serde_json::to_value(&envelope)?;
        assert_eq!(value.get("totalPages"), Some(&serde_json::json!(3)));
        assert!(value.get("total_pages").is_none());
        Ok(())
    }

    #[rstest]
    #[case("http://gallery.test/albums", "http://gallery.test/albums?page=2")]
    #[case(
        "http://gallery.test/albums?page=9&view=table",
        "http://gallery.test/albums?view=table&page=2"
    )]
    fn page_link_replaces_page_parameter(
        #[case] base: &str,
        #[case] expected: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let link = page_link(&Url::parse(base)?, Page::new(2)?);
        assert_eq!(link.as_str(), expected);
        Ok(())
    }
}
