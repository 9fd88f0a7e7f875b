//! User and avatar JSON endpoints.
//!
//! ```text
//! GET /api/v1/users
//! GET /api/v1/users/{id}
//! GET /api/v1/users/{id}/albums
//! GET /api/v1/avatar?name=&size=
//! ```

use actix_web::{get, web};

use super::ApiResult;
use super::query::{AvatarQuery, parse_id};
use super::state::HttpState;
use crate::domain::{Album, Avatar, Error, User};

/// List every user.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 502, description = "Upstream unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.gallery.users().await?))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "No such user", body = Error),
        (status = 502, description = "Upstream unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_id(&path)?;
    Ok(web::Json(state.gallery.user(id).await?))
}

/// List the albums a user owns.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/albums",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user's albums", body = [Album]),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "No such user", body = Error),
        (status = 502, description = "Upstream unavailable", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUserAlbums"
)]
#[get("/users/{id}/albums")]
pub async fn list_user_albums(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Album>>> {
    let id = parse_id(&path)?;
    Ok(web::Json(state.gallery.user_albums(id).await?))
}

/// Avatar image URL and initials for a display name.
#[utoipa::path(
    get,
    path = "/api/v1/avatar",
    params(AvatarQuery),
    responses(
        (status = 200, description = "Avatar URL and initials", body = Avatar),
        (status = 400, description = "Blank name or size out of range", body = Error)
    ),
    tags = ["users"],
    operation_id = "getAvatar"
)]
#[get("/avatar")]
pub async fn get_avatar(
    state: web::Data<HttpState>,
    query: web::Query<AvatarQuery>,
) -> ApiResult<web::Json<Avatar>> {
    let (name, size) = query.validated()?;
    Ok(web::Json(state.avatars.avatar(name, size)))
}
