//! Photo read model with synthesized image candidates.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::album::AlbumId;
use super::entity_id::define_entity_id;
use super::image_sources::{HexColor, ImageSize, PlaceholderColors, candidate_urls};

define_entity_id! {
    /// Upstream photo identifier.
    PhotoId, "photo"
}

/// A photo enriched with candidate image URLs and placeholder colours.
///
/// Candidate lists and colours are derived from the photo id alone, so the
/// same photo always renders the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Photo identifier.
    pub id: PhotoId,
    /// Owning album.
    pub album_id: AlbumId,
    /// Caption.
    #[schema(example = "accusamus beatae ad facilis cum similique qui sunt")]
    pub title: String,
    /// Ordered 150x150 candidates.
    pub thumbnail_urls: Vec<String>,
    /// Ordered 600x400 candidates.
    pub image_urls: Vec<String>,
    /// Placeholder background.
    #[schema(value_type = String, example = "2196F3")]
    pub color: HexColor,
    /// Placeholder foreground.
    #[schema(value_type = String, example = "FFFFFF")]
    pub text_color: HexColor,
}

impl Photo {
    /// Build a photo from its upstream identity, synthesizing candidates.
    ///
    /// # Examples
    /// ```
    /// use gallery::domain::{AlbumId, Photo, PhotoId};
    ///
    /// let photo = Photo::new(PhotoId::new(1), AlbumId::new(1), "first");
    /// assert_eq!(photo.thumbnail_urls.len(), 6);
    /// assert_eq!(photo.color.as_str(), "2196F3");
    /// ```
    #[must_use]
    pub fn new(id: PhotoId, album_id: AlbumId, title: impl Into<String>) -> Self {
        Self::with_candidates_for(id.get(), id, album_id, title.into())
    }

    /// Stand-in cover for an album with no photos, keyed by the album id.
    #[must_use]
    pub fn synthetic_cover(album_id: AlbumId, album_title: impl Into<String>) -> Self {
        Self::with_candidates_for(
            album_id.get(),
            PhotoId::new(album_id.get()),
            album_id,
            album_title.into(),
        )
    }

    fn with_candidates_for(seed: u64, id: PhotoId, album_id: AlbumId, title: String) -> Self {
        let PlaceholderColors { background, text } = PlaceholderColors::for_id(seed);
        Self {
            id,
            album_id,
            title,
            thumbnail_urls: candidate_urls(seed, ImageSize::Thumbnail),
            image_urls: candidate_urls(seed, ImageSize::Large),
            color: background,
            text_color: text,
        }
    }

    /// Candidates for the requested rendition.
    #[must_use]
    pub fn candidates(&self, size: ImageSize) -> &[String] {
        match size {
            ImageSize::Thumbnail => &self.thumbnail_urls,
            ImageSize::Large => &self.image_urls,
        }
    }

    /// Placeholder colours as a pair.
    #[must_use]
    pub fn placeholder_colors(&self) -> PlaceholderColors {
        PlaceholderColors {
            background: self.color,
            text: self.text_color,
        }
    }

    /// Path of the image resolution endpoint for this photo.
    #[must_use]
    pub fn image_href(&self, size: ImageSize) -> String {
        format!("/images/photos/{}/{size}", self.id)
    }
}

#[cfg(test)]
mod tests {
    //! Candidate and colour synthesis for photos and synthetic covers.

    use super::*;
    use rstest::rstest;

    fn is_hex6(color: HexColor) -> bool {
        color.as_str().len() == 6 && color.as_str().chars().all(|c| c.is_ascii_hexdigit())
    }

    #[rstest]
    #[case(1)]
    #[case(42)]
    #[case(4999)]
    fn photos_carry_two_candidate_lists_and_contrasting_colours(#[case] id: u64) {
        let photo = Photo::new(PhotoId::new(id), AlbumId::new(1), "t");
        assert!(!photo.thumbnail_urls.is_empty());
        assert!(!photo.image_urls.is_empty());
        assert!(is_hex6(photo.color));
        assert!(is_hex6(photo.text_color));
        assert_ne!(photo.color, photo.text_color);
        assert_eq!(photo, Photo::new(PhotoId::new(id), AlbumId::new(1), "t"));
    }

    #[test]
    fn synthetic_cover_is_keyed_by_album_id() {
        let cover = Photo::synthetic_cover(AlbumId::new(7), "empty album");
        assert_eq!(cover.album_id, AlbumId::new(7));
        assert_eq!(cover.title, "empty album");
        assert_eq!(cover.thumbnail_urls, candidate_urls(7, ImageSize::Thumbnail));
        assert_eq!(cover.placeholder_colors(), PlaceholderColors::for_id(7));
    }

    #[test]
    fn candidates_select_the_rendition() {
        let photo = Photo::new(PhotoId::new(3), AlbumId::new(1), "t");
        assert_eq!(photo.candidates(ImageSize::Thumbnail), photo.thumbnail_urls.as_slice());
        assert_eq!(photo.candidates(ImageSize::Large), photo.image_urls.as_slice());
        assert_eq!(photo.image_href(ImageSize::Large), "/images/photos/3/large");
    }
}
