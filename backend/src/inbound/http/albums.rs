//! Album JSON endpoints.
//!
//! ```text
//! GET /api/v1/albums?page=&limit=
//! GET /api/v1/albums/{id}
//! GET /api/v1/albums/{id}/photos
//! ```

use actix_web::{HttpResponse, get, web};
use pagination::Paginated;
use serde::Serialize;
use utoipa::ToSchema;

use super::ApiResult;
use super::query::{ApiPageQuery, parse_id};
use super::state::HttpState;
use crate::domain::{Album, Error, Photo};

/// One page of albums.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumPageResponse {
    /// Albums on this page.
    pub data: Vec<Album>,
    /// One-indexed page number.
    #[schema(example = 1)]
    pub page: usize,
    /// Page size.
    #[schema(example = 12)]
    pub limit: usize,
    /// Albums across every page.
    #[schema(example = 100)]
    pub total: usize,
    /// Number of pages.
    #[schema(example = 9)]
    pub total_pages: usize,
}

impl From<Paginated<Album>> for AlbumPageResponse {
    fn from(page: Paginated<Album>) -> Self {
        Self {
            data: page.data,
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages,
        }
    }
}

/// List albums, paged by the upstream.
#[utoipa::path(
    get,
    path = "/api/v1/albums",
    params(ApiPageQuery),
    responses(
        (status = 200, description = "One page of albums", body = AlbumPageResponse),
        (status = 400, description = "Invalid paging parameters", body = Error),
        (status = 502, description = "Upstream unavailable", body = Error)
    ),
    tags = ["albums"],
    operation_id = "listAlbums"
)]
#[get("/albums")]
pub async fn list_albums(
    state: web::Data<HttpState>,
    query: web::Query<ApiPageQuery>,
) -> ApiResult<web::Json<AlbumPageResponse>> {
    let request = query.page_request()?;
    let page = state.gallery.albums_page(request).await?;
    Ok(web::Json(page.into()))
}

/// Fetch one album.
#[utoipa::path(
    get,
    path = "/api/v1/albums/{id}",
    params(("id" = u64, Path, description = "Album id")),
    responses(
        (status = 200, description = "The album", body = Album),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "No such album", body = Error),
        (status = 502, description = "Upstream unavailable", body = Error)
    ),
    tags = ["albums"],
    operation_id = "getAlbum"
)]
#[get("/albums/{id}")]
pub async fn get_album(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Album>> {
    let id = parse_id(&path)?;
    Ok(web::Json(state.gallery.album(id).await?))
}

/// List an album's photos with their candidate image URLs.
#[utoipa::path(
    get,
    path = "/api/v1/albums/{id}/photos",
    params(("id" = u64, Path, description = "Album id")),
    responses(
        (status = 200, description = "Photos in upstream order", body = [Photo]),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "No such album", body = Error),
        (status = 502, description = "Upstream unavailable", body = Error)
    ),
    tags = ["albums"],
    operation_id = "listAlbumPhotos"
)]
#[get("/albums/{id}/photos")]
pub async fn list_album_photos(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_id(&path)?;
    let photos = state.gallery.album_photos(id).await?;
    Ok(HttpResponse::Ok().json(photos))
}
