//! Server-rendered HTML views.
//!
//! ```text
//! GET /
//! GET /albums?page=&view=grid|table
//! GET /albums/{id}?page=&photo=
//! GET /users
//! GET /users/{id}?page=
//! ```
//!
//! Failures render the shared error page instead of JSON.

pub mod views;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, get, web};
use url::Url;

use super::PageResult;
use super::html::{html_response, layout};
use super::query::{AlbumDetailQuery, ListingQuery, PageQuery, parse_id};
use super::state::HttpState;
use crate::domain::Error;

/// Absolute form of the request URL, used as the base for pagination links.
fn request_url(req: &HttpRequest) -> Result<Url, Error> {
    let origin = format!("http://{}", req.connection_info().host());
    Url::parse(&origin)
        .and_then(|base| base.join(&req.uri().to_string()))
        .map_err(|err| Error::internal(format!("request url: {err}")))
}

fn page(title: &str, body: &str) -> HttpResponse {
    html_response(StatusCode::OK, layout(title, body))
}

/// Featured albums.
#[get("/")]
pub async fn home(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    let cards = state.gallery.featured_albums().await?;
    Ok(page("Home", &views::home(&cards, &state.avatars)))
}

/// Paginated album listing.
#[get("/albums")]
pub async fn albums(
    state: web::Data<HttpState>,
    req: HttpRequest,
    query: web::Query<ListingQuery>,
) -> PageResult<HttpResponse> {
    let listing = state.gallery.album_listing(query.page_request()).await?;
    let base = request_url(&req)?;
    let body = views::album_listing(&listing, query.view(), &base, &state.avatars);
    Ok(page("Albums", &body))
}

/// Album with a page of photos and the optional large viewer.
#[get("/albums/{id}")]
pub async fn album(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<AlbumDetailQuery>,
) -> PageResult<HttpResponse> {
    let id = parse_id(&path.into_inner())?;
    let detail = state
        .gallery
        .album_detail(id, query.page(), query.selected())
        .await?;
    let base = request_url(&req)?;
    let body = views::album_detail(&detail, &base, &state.avatars);
    Ok(page(&detail.album.title, &body))
}

/// Every user in a table.
#[get("/users")]
pub async fn users(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    let users = state.gallery.users().await?;
    Ok(page("Users", &views::users(&users, &state.avatars)))
}

/// User profile with a page of their albums.
#[get("/users/{id}")]
pub async fn user(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> PageResult<HttpResponse> {
    let id = parse_id(&path.into_inner())?;
    let detail = state.gallery.user_detail(id, query.page()).await?;
    let base = request_url(&req)?;
    let body = views::user_detail(&detail, &base, &state.avatars);
    Ok(page(&detail.user.name, &body))
}
