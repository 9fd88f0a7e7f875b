//! Image resolution endpoints.
//!
//! ```text
//! GET /images/photos/{id}/{size}     size = thumbnail | large
//! GET /images/albums/{id}/cover
//! ```
//!
//! Each request walks the candidate list with the configured probe and answers
//! with a redirect to the first candidate that loads, an SVG placeholder, or
//! 404 when the placeholder is disabled.

use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, get, web};
use serde_json::json;

use super::ApiResult;
use super::cache_control::image_cache_header;
use super::query::parse_id;
use super::state::HttpState;
use crate::domain::{
    AlbumId, Error, FallbackImage, ImageSize, ImageSizeParseError, PhotoId, PlaceholderColors,
    Resolution, candidate_urls,
};

const IMAGE_ICON_PATH: &str = "M21 19V5c0-1.1-.9-2-2-2H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 \
0 2-.9 2-2zM8.5 13.5l2.5 3.01L14.5 12l4.5 6H5l3.5-4.5z";

/// Solid box in the placeholder colours with a centred image icon.
///
/// # Examples
/// ```
/// use gallery::domain::{ImageSize, PlaceholderColors};
/// use gallery::inbound::http::images::placeholder_svg;
///
/// let svg = placeholder_svg(PlaceholderColors::for_id(1), ImageSize::Thumbnail);
/// assert!(svg.contains(r##"fill="#2196F3""##));
/// assert!(svg.contains(r#"width="150""#));
/// ```
#[must_use]
pub fn placeholder_svg(colors: PlaceholderColors, size: ImageSize) -> String {
    let (width, height) = size.dimensions();
    let icon = width.min(height) / 3;
    let x = (width - icon) / 2;
    let y = (height - icon) / 2;
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\" role=\"img\" aria-label=\"Image unavailable\">\
         <rect width=\"{width}\" height=\"{height}\" fill=\"{background}\"/>\
         <svg x=\"{x}\" y=\"{y}\" width=\"{icon}\" height=\"{icon}\" viewBox=\"0 0 24 24\">\
         <path fill=\"{text}\" d=\"{IMAGE_ICON_PATH}\"/></svg></svg>",
        background = colors.background.css(),
        text = colors.text.css(),
    )
}

fn respond(resolution: Resolution, size: ImageSize) -> HttpResponse {
    match resolution {
        Resolution::Redirect(url) => HttpResponse::Found()
            .insert_header((LOCATION, url))
            .insert_header(image_cache_header())
            .finish(),
        Resolution::Placeholder(colors) => HttpResponse::Ok()
            .content_type("image/svg+xml")
            .insert_header(image_cache_header())
            .body(placeholder_svg(colors, size)),
        Resolution::Hidden => HttpResponse::NotFound().finish(),
    }
}

/// Resolve one rendition of a photo.
#[utoipa::path(
    get,
    path = "/images/photos/{id}/{size}",
    params(
        ("id" = u64, Path, description = "Photo id"),
        ("size" = ImageSize, Path, description = "Rendition")
    ),
    responses(
        (status = 302, description = "Redirect to the first candidate that loads"),
        (status = 200, description = "SVG placeholder", body = String, content_type = "image/svg+xml"),
        (status = 400, description = "Malformed id or size", body = Error),
        (status = 404, description = "No candidate loaded and the placeholder is disabled")
    ),
    tags = ["images"],
    operation_id = "resolvePhotoImage"
)]
#[get("/images/photos/{id}/{size}")]
pub async fn photo_image(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (raw_id, raw_size) = path.into_inner();
    let id: PhotoId = parse_id(&raw_id)?;
    let size: ImageSize = raw_size.parse().map_err(|err: ImageSizeParseError| {
        Error::invalid_request(err.to_string()).with_details(json!({ "field": "size" }))
    })?;
    let image = FallbackImage::new(
        candidate_urls(id.get(), size),
        PlaceholderColors::for_id(id.get()),
    );
    Ok(respond(state.images.resolve(image).await, size))
}

/// Resolve an album's cover thumbnail.
#[utoipa::path(
    get,
    path = "/images/albums/{id}/cover",
    params(("id" = u64, Path, description = "Album id")),
    responses(
        (status = 302, description = "Redirect to the first candidate that loads"),
        (status = 200, description = "SVG placeholder", body = String, content_type = "image/svg+xml"),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "No such album, or nothing loaded and the placeholder is disabled", body = Error),
        (status = 502, description = "Upstream unavailable", body = Error)
    ),
    tags = ["images"],
    operation_id = "resolveAlbumCover"
)]
#[get("/images/albums/{id}/cover")]
pub async fn album_cover(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: AlbumId = parse_id(&path)?;
    let cover = state.gallery.album_cover(id).await?;
    let image = FallbackImage::for_photo(&cover, ImageSize::Thumbnail);
    Ok(respond(state.images.resolve(image).await, ImageSize::Thumbnail))
}

#[cfg(test)]
mod tests {
    //! End-to-end resolution through the Actix service with offline probes.

    use super::*;
    use crate::domain::ports::FixtureImageProbe;
    use crate::inbound::http::test_utils::fixture_state;
    use actix_web::http::StatusCode;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::header::{CONTENT_TYPE, HeaderName};
    use actix_web::{App, test};
    use rstest::rstest;

    async fn call(state: HttpState, uri: &str) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(photo_image)
                .service(album_cover),
        )
        .await;
        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    fn header(response: &ServiceResponse, name: HeaderName) -> Option<String> {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    }

    #[actix_web::test]
    async fn redirects_to_first_loading_candidate() {
        let state = fixture_state(
            FixtureImageProbe::accepting(["https://picsum.photos/"]),
            true,
        );
        let response = call(state, "/images/photos/7/thumbnail").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            header(&response, LOCATION).as_deref(),
            Some("https://picsum.photos/id/8/150/150")
        );
    }

    #[actix_web::test]
    async fn serves_placeholder_when_everything_fails() {
        let state = fixture_state(FixtureImageProbe::unreachable(), true);
        let response = call(state, "/images/photos/1/large").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(header(&response, CONTENT_TYPE).as_deref(), Some("image/svg+xml"));
        let body = test::read_body(response).await;
        let svg = String::from_utf8_lossy(&body);
        assert!(svg.contains("fill=\"#2196F3\""));
        assert!(svg.contains("fill=\"#FFFFFF\""));
        assert!(svg.contains("width=\"600\""));
    }

    #[actix_web::test]
    async fn answers_not_found_when_placeholder_disabled() {
        let state = fixture_state(FixtureImageProbe::unreachable(), false);
        let response = call(state, "/images/photos/1/thumbnail").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case("/images/photos/abc/thumbnail")]
    #[case("/images/photos/3/medium")]
    #[actix_web::test]
    async fn rejects_malformed_paths(#[case] uri: &str) {
        let state = fixture_state(FixtureImageProbe::unreachable(), true);
        let response = call(state, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn empty_album_cover_uses_album_candidates() {
        let state = fixture_state(
            FixtureImageProbe::accepting(["https://source.unsplash.com/"]),
            true,
        );
        let response = call(state, "/images/albums/2/cover").await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            header(&response, LOCATION).as_deref(),
            Some("https://source.unsplash.com/random/150x150?sig=2")
        );
    }

    #[actix_web::test]
    async fn album_cover_uses_first_photo() {
        let state = fixture_state(
            FixtureImageProbe::accepting(["https://source.unsplash.com/"]),
            true,
        );
        let response = call(state, "/images/albums/3/cover").await;
        // Album 3's only photo has id 24.
        assert_eq!(
            header(&response, LOCATION).as_deref(),
            Some("https://source.unsplash.com/random/150x150?sig=24")
        );
    }

    #[actix_web::test]
    async fn unknown_album_cover_is_not_found() {
        let state = fixture_state(FixtureImageProbe::unreachable(), true);
        let response = call(state, "/images/albums/999/cover").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
