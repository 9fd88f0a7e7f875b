//! HTTP inbound adapter: HTML views, image routes, and the JSON API.

pub mod albums;
pub mod cache_control;
pub mod error;
pub mod health;
pub mod html;
pub mod images;
pub mod pages;
pub mod query;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

use actix_web::web;
use serde_json::json;

use crate::domain::Error;

pub use error::{ApiResult, PageError, PageResult};

/// Query extraction failures on the JSON API answer with the error envelope.
fn api_query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "query" }))
            .into()
    })
}

/// Register the gallery routes.
///
/// Application data for [`state::HttpState`] must be provided by the caller.
/// Health probes are registered separately because they carry their own state.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use gallery::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(api_query_config())
            .service(albums::list_albums)
            .service(albums::get_album)
            .service(albums::list_album_photos)
            .service(users::list_users)
            .service(users::get_user)
            .service(users::list_user_albums)
            .service(users::get_avatar),
    )
    .service(images::photo_image)
    .service(images::album_cover)
    .service(pages::home)
    .service(pages::albums)
    .service(pages::album)
    .service(pages::users)
    .service(pages::user);
}
