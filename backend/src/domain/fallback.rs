//! Image fallback state machine.
//!
//! An image walks its ordered candidate list one URL at a time. Each load
//! attempt either succeeds, which settles on the current candidate, or fails,
//! which advances to the next one. Once every candidate has failed the image
//! degrades to a coloured placeholder. Transitions are pure so the machine can
//! be driven by the HTTP probe in [`super::ImageResolver`] or stepped directly
//! in tests.

use super::image_sources::{ImageSize, PlaceholderColors};
use super::photo::Photo;

/// Position of an image in its candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackState {
    /// Attempting the candidate at this index.
    Loading(usize),
    /// The candidate at this index loaded. Terminal.
    Loaded(usize),
    /// Every candidate failed, or there were none. Terminal.
    Exhausted,
}

impl FallbackState {
    /// Starting state for a list of `len` candidates.
    ///
    /// # Examples
    /// ```
    /// use gallery::domain::FallbackState;
    ///
    /// assert_eq!(FallbackState::initial(3), FallbackState::Loading(0));
    /// assert_eq!(FallbackState::initial(0), FallbackState::Exhausted);
    /// ```
    #[must_use]
    pub const fn initial(len: usize) -> Self {
        if len == 0 {
            Self::Exhausted
        } else {
            Self::Loading(0)
        }
    }

    /// Transition after the current candidate loaded.
    #[must_use]
    pub const fn on_load(self) -> Self {
        match self {
            Self::Loading(index) => Self::Loaded(index),
            settled => settled,
        }
    }

    /// Transition after the current candidate failed, given `len` candidates.
    #[must_use]
    pub const fn on_error(self, len: usize) -> Self {
        match self {
            Self::Loading(index) if index + 1 < len => Self::Loading(index + 1),
            Self::Loading(_) => Self::Exhausted,
            settled => settled,
        }
    }

    /// Whether no further events can change the state.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Loading(_))
    }
}

/// What an image should currently display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering<'a> {
    /// Show `url`, with a loading indicator while the attempt is pending.
    Image {
        /// Candidate being shown.
        url: &'a str,
        /// Attempt still pending.
        loading: bool,
    },
    /// Solid box with an image icon in these colours.
    Placeholder(PlaceholderColors),
    /// Nothing at all; the placeholder is switched off.
    Hidden,
}

/// Candidate list, placeholder colours, and current state for one image.
///
/// # Examples
/// ```
/// use gallery::domain::{FallbackImage, PlaceholderColors, Rendering};
///
/// let mut image = FallbackImage::new(
///     vec!["https://a.example/1.jpg".to_owned(), "https://b.example/1.jpg".to_owned()],
///     PlaceholderColors::for_id(1),
/// );
/// image.record_error();
/// image.record_load();
/// assert_eq!(
///     image.render(),
///     Rendering::Image { url: "https://b.example/1.jpg", loading: false }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImage {
    candidates: Vec<String>,
    colors: PlaceholderColors,
    show_placeholder: bool,
    state: FallbackState,
}

impl FallbackImage {
    /// Start a new image with the placeholder enabled.
    #[must_use]
    pub fn new(candidates: Vec<String>, colors: PlaceholderColors) -> Self {
        let state = FallbackState::initial(candidates.len());
        Self {
            candidates,
            colors,
            show_placeholder: true,
            state,
        }
    }

    /// Image for one rendition of a photo.
    #[must_use]
    pub fn for_photo(photo: &Photo, size: ImageSize) -> Self {
        Self::new(photo.candidates(size).to_vec(), photo.placeholder_colors())
    }

    /// Toggle the placeholder shown after exhaustion.
    #[must_use]
    pub fn with_placeholder(mut self, show_placeholder: bool) -> Self {
        self.show_placeholder = show_placeholder;
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> FallbackState {
        self.state
    }

    /// Candidate currently being attempted or displayed.
    #[must_use]
    pub fn current_url(&self) -> Option<&str> {
        match self.state {
            FallbackState::Loading(index) | FallbackState::Loaded(index) => {
                self.candidates.get(index).map(String::as_str)
            }
            FallbackState::Exhausted => None,
        }
    }

    /// The current candidate loaded.
    pub fn record_load(&mut self) {
        self.state = self.state.on_load();
    }

    /// The current candidate failed.
    pub fn record_error(&mut self) {
        self.state = self.state.on_error(self.candidates.len());
    }

    /// Display decision for the current state.
    #[must_use]
    pub fn render(&self) -> Rendering<'_> {
        match (self.state, self.current_url()) {
            (FallbackState::Loading(_), Some(url)) => Rendering::Image { url, loading: true },
            (FallbackState::Loaded(_), Some(url)) => Rendering::Image {
                url,
                loading: false,
            },
            _ if self.show_placeholder => Rendering::Placeholder(self.colors),
            _ => Rendering::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Transition table and rendering decisions.

    use super::*;
    use rstest::{fixture, rstest};

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://img.example/{i}.jpg")).collect()
    }

    #[fixture]
    fn colors() -> PlaceholderColors {
        PlaceholderColors::for_id(4)
    }

    #[rstest]
    #[case(FallbackState::Loading(0), 3, FallbackState::Loading(1))]
    #[case(FallbackState::Loading(1), 3, FallbackState::Loading(2))]
    #[case(FallbackState::Loading(2), 3, FallbackState::Exhausted)]
    #[case(FallbackState::Loading(0), 1, FallbackState::Exhausted)]
    #[case(FallbackState::Loaded(1), 3, FallbackState::Loaded(1))]
    #[case(FallbackState::Exhausted, 3, FallbackState::Exhausted)]
    fn errors_advance_until_exhausted(
        #[case] from: FallbackState,
        #[case] len: usize,
        #[case] to: FallbackState,
    ) {
        assert_eq!(from.on_error(len), to);
    }

    #[rstest]
    #[case(FallbackState::Loading(4), FallbackState::Loaded(4))]
    #[case(FallbackState::Loaded(2), FallbackState::Loaded(2))]
    #[case(FallbackState::Exhausted, FallbackState::Exhausted)]
    fn loads_settle_on_the_current_candidate(
        #[case] from: FallbackState,
        #[case] to: FallbackState,
    ) {
        assert_eq!(from.on_load(), to);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(6)]
    fn n_minus_one_failures_then_success_shows_last_candidate(
        #[case] n: usize,
        colors: PlaceholderColors,
    ) {
        let candidates = urls(n);
        let last = candidates.last().cloned().unwrap_or_default();
        let mut image = FallbackImage::new(candidates, colors);
        for _ in 1..n {
            image.record_error();
        }
        image.record_load();
        assert_eq!(image.state(), FallbackState::Loaded(n - 1));
        assert_eq!(
            image.render(),
            Rendering::Image {
                url: &last,
                loading: false
            }
        );
    }

    #[rstest]
    #[case(1)]
    #[case(6)]
    fn all_failures_render_placeholder_in_configured_colours(
        #[case] n: usize,
        colors: PlaceholderColors,
    ) {
        let mut image = FallbackImage::new(urls(n), colors);
        for _ in 0..n {
            image.record_error();
        }
        assert_eq!(image.state(), FallbackState::Exhausted);
        assert_eq!(image.render(), Rendering::Placeholder(colors));

        image.record_load();
        assert_eq!(image.state(), FallbackState::Exhausted);
    }

    #[rstest]
    fn empty_list_goes_straight_to_placeholder(colors: PlaceholderColors) {
        let image = FallbackImage::new(Vec::new(), colors);
        assert_eq!(image.state(), FallbackState::Exhausted);
        assert_eq!(image.current_url(), None);
        assert_eq!(image.render(), Rendering::Placeholder(colors));
    }

    #[rstest]
    fn disabled_placeholder_renders_nothing(colors: PlaceholderColors) {
        let image = FallbackImage::new(Vec::new(), colors).with_placeholder(false);
        assert_eq!(image.render(), Rendering::Hidden);
    }

    #[rstest]
    fn pending_attempt_shows_loading_indicator(colors: PlaceholderColors) {
        let image = FallbackImage::new(urls(2), colors);
        assert_eq!(
            image.render(),
            Rendering::Image {
                url: "https://img.example/0.jpg",
                loading: true
            }
        );
        assert!(!image.state().is_settled());
    }
}
