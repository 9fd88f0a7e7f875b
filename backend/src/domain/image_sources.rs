//! Deterministic candidate image URLs and placeholder colours.
//!
//! Every photo (and every synthetic album cover) carries an ordered list of
//! third-party image URLs derived from its numeric id. The list is tried in
//! order by the fallback resolver; when every candidate fails, the placeholder
//! colours derived from the same id are used instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of candidate URLs produced for each id and size.
pub const CANDIDATE_COUNT: usize = 6;

/// Background palette, indexed by `id % PALETTE.len()`.
const PALETTE: [HexColor; 10] = [
    HexColor::from_static("f44336"),
    HexColor::from_static("2196F3"),
    HexColor::from_static("4CAF50"),
    HexColor::from_static("FFC107"),
    HexColor::from_static("9C27B0"),
    HexColor::from_static("FF5722"),
    HexColor::from_static("795548"),
    HexColor::from_static("607D8B"),
    HexColor::from_static("E91E63"),
    HexColor::from_static("03A9F4"),
];

/// Palette entries dark enough to need white text.
const DARK_BACKGROUNDS: [&str; 6] = ["f44336", "2196F3", "9C27B0", "FF5722", "795548", "E91E63"];

const WHITE: HexColor = HexColor::from_static("FFFFFF");
const BLACK: HexColor = HexColor::from_static("000000");

/// Requested rendition of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    /// Square grid thumbnail.
    Thumbnail,
    /// Full-size landscape rendition.
    Large,
}

impl ImageSize {
    /// Pixel dimensions as `(width, height)`.
    #[must_use]
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Thumbnail => (150, 150),
            Self::Large => (600, 400),
        }
    }

    /// Path segment used by the image routes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised for unknown image size names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("image size must be `thumbnail` or `large`, got {0:?}")]
pub struct ImageSizeParseError(String);

impl FromStr for ImageSize {
    type Err = ImageSizeParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "thumbnail" => Ok(Self::Thumbnail),
            "large" => Ok(Self::Large),
            other => Err(ImageSizeParseError(other.to_owned())),
        }
    }
}

/// Six hexadecimal digits describing an RGB colour, without the leading `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 6]);

/// Raised when a colour is not exactly six hexadecimal digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("colour must be six hexadecimal digits, got {0:?}")]
pub struct HexColorParseError(String);

impl HexColor {
    const fn from_static(raw: &'static str) -> Self {
        match raw.as_bytes() {
            [a, b, c, d, e, f] => Self([*a, *b, *c, *d, *e, *f]),
            _ => panic!("palette colours are six digits"),
        }
    }

    /// Borrow the digits as text, preserving their original case.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII hex digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("000000")
    }

    /// CSS notation with the leading `#`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("#{}", self.as_str())
    }
}

impl FromStr for HexColor {
    type Err = HexColorParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let digits = raw.strip_prefix('#').unwrap_or(raw);
        let bytes: [u8; 6] = digits
            .as_bytes()
            .try_into()
            .map_err(|_| HexColorParseError(raw.to_owned()))?;
        if bytes.iter().all(u8::is_ascii_hexdigit) {
            Ok(Self(bytes))
        } else {
            Err(HexColorParseError(raw.to_owned()))
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Background and foreground colours for the placeholder box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderColors {
    /// Box background.
    #[schema(value_type = String, example = "2196F3")]
    pub background: HexColor,
    /// Icon and text colour.
    #[schema(value_type = String, example = "FFFFFF")]
    pub text: HexColor,
}

impl PlaceholderColors {
    /// Palette colours for an entity id.
    ///
    /// # Examples
    /// ```
    /// use gallery::domain::PlaceholderColors;
    ///
    /// let colors = PlaceholderColors::for_id(1);
    /// assert_eq!(colors.background.as_str(), "2196F3");
    /// assert_eq!(colors.text.as_str(), "FFFFFF");
    /// ```
    #[must_use]
    pub fn for_id(id: u64) -> Self {
        let background = palette_color(id);
        Self {
            background,
            text: text_color_for(background),
        }
    }
}

/// Background colour for an id, taken from the fixed palette.
#[must_use]
pub fn palette_color(id: u64) -> HexColor {
    let len = PALETTE.len() as u64;
    PALETTE
        .get(usize::try_from(id % len).unwrap_or_default())
        .copied()
        .unwrap_or(BLACK)
}

/// White on the dark palette entries, black everywhere else.
#[must_use]
pub fn text_color_for(background: HexColor) -> HexColor {
    if DARK_BACKGROUNDS.contains(&background.as_str()) {
        WHITE
    } else {
        BLACK
    }
}

/// Ordered candidate image URLs for an entity id.
///
/// # Examples
/// ```
/// use gallery::domain::{ImageSize, candidate_urls};
///
/// let urls = candidate_urls(7, ImageSize::Thumbnail);
/// assert_eq!(urls[1], "https://picsum.photos/id/8/150/150");
/// ```
#[must_use]
pub fn candidate_urls(id: u64, size: ImageSize) -> Vec<String> {
    let (w, h) = size.dimensions();
    let PlaceholderColors { background, text } = PlaceholderColors::for_id(id);
    vec![
        format!("https://source.unsplash.com/random/{w}x{h}?sig={id}"),
        format!("https://picsum.photos/id/{}/{w}/{h}", id % 50 + 1),
        format!("https://picsum.photos/{w}/{h}?random={id}"),
        format!("https://via.placeholder.com/{w}x{h}/{background}/{text}?text=Image+{id}"),
        format!("https://placebear.com/{w}/{h}?image={}", id % 20),
        format!("https://placekitten.com/{w}/{h}?image={}", id % 16),
    ]
}
