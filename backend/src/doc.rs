//! OpenAPI document for the JSON API.
//!
//! Registers the `/api/v1` endpoints, the image routes, and the health
//! probes. Served by Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::domain::{Album, Avatar, Error, ErrorCode, Photo, PlaceholderColors, User};
use crate::inbound::http::albums::AlbumPageResponse;

/// OpenAPI document for the gallery.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gallery API",
        description = "Read-only access to albums, photos, users, and their images."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::albums::list_albums,
        crate::inbound::http::albums::get_album,
        crate::inbound::http::albums::list_album_photos,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::list_user_albums,
        crate::inbound::http::users::get_avatar,
        crate::inbound::http::images::photo_image,
        crate::inbound::http::images::album_cover,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Album,
        AlbumPageResponse,
        Avatar,
        Error,
        ErrorCode,
        Photo,
        PlaceholderColors,
        User
    )),
    tags(
        (name = "albums", description = "Albums and their photos"),
        (name = "users", description = "Users, their albums, and avatars"),
        (name = "images", description = "Image candidate resolution"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Shape of the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn schema_fields(name: &str) -> Vec<String> {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        match schemas.get(name) {
            Some(RefOr::T(Schema::Object(object))) => object.properties.keys().cloned().collect(),
            other => panic!(
                "expected object schema for {name}, registered: {}",
                other.is_some()
            ),
        }
    }

    #[rstest]
    #[case("/api/v1/albums")]
    #[case("/api/v1/albums/{id}/photos")]
    #[case("/api/v1/users/{id}/albums")]
    #[case("/api/v1/avatar")]
    #[case("/images/photos/{id}/{size}")]
    #[case("/health/ready")]
    fn registers_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    #[case("Photo", &["id", "albumId", "thumbnailUrls", "imageUrls", "color", "textColor"])]
    #[case("AlbumPageResponse", &["data", "page", "limit", "total", "totalPages"])]
    #[case("Error", &["code", "message"])]
    fn schemas_use_camel_case_fields(#[case] name: &str, #[case] expected: &[&str]) {
        let fields = schema_fields(name);
        for field in expected {
            assert!(fields.iter().any(|f| f == field), "{name} lacks {field}");
        }
    }
}
