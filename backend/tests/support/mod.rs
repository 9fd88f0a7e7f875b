//! Fake JSONPlaceholder upstream served over a real socket.
//!
//! Album 1 belongs to user 1 and holds two photos. Album 7 answers 500,
//! album 13's photos are not JSON, and user 2 answers too slowly for short
//! client timeouts. Everything else is 404.

use std::net::TcpListener;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpResponse, HttpServer, web};
use serde::Deserialize;
use serde_json::json;
use url::Url;

/// Delay applied to the slow user.
pub const SLOW_RESPONSE: Duration = Duration::from_millis(1500);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlbumsQuery {
    #[serde(rename = "_page")]
    page: Option<usize>,
    user_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhotosQuery {
    album_id: u64,
}

fn album(id: u64) -> serde_json::Value {
    json!({ "userId": 1, "id": id, "title": format!("upstream album {id}") })
}

fn user(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "address": { "city": "Gwenborough" }
    })
}

async fn albums(query: web::Query<AlbumsQuery>) -> HttpResponse {
    if query.user_id.is_some() {
        return HttpResponse::Ok().json(json!([album(1), album(2)]));
    }
    match query.page {
        // Second and later pages omit the total header.
        Some(page) if page > 1 => HttpResponse::Ok().json(json!([album(3)])),
        _ => HttpResponse::Ok()
            .insert_header(("X-Total-Count", "42"))
            .json(json!([album(1), album(2)])),
    }
}

async fn album_by_id(path: web::Path<u64>) -> HttpResponse {
    match path.into_inner() {
        id @ 1..=2 => HttpResponse::Ok().json(album(id)),
        7 => HttpResponse::InternalServerError().body("exploded"),
        _ => HttpResponse::NotFound().json(json!({})),
    }
}

async fn photos(query: web::Query<PhotosQuery>) -> HttpResponse {
    match query.album_id {
        1 => HttpResponse::Ok().json(json!([
            {
                "albumId": 1,
                "id": 1,
                "title": "accusamus beatae",
                "url": "https://via.placeholder.com/600/92c952",
                "thumbnailUrl": "https://via.placeholder.com/150/92c952"
            },
            { "albumId": 1, "id": 2, "title": "reprehenderit est" }
        ])),
        13 => HttpResponse::Ok()
            .content_type("application/json")
            .body("not json"),
        _ => HttpResponse::Ok().json(json!([])),
    }
}

async fn users() -> HttpResponse {
    HttpResponse::Ok().json(json!([user(1)]))
}

async fn user_by_id(path: web::Path<u64>) -> HttpResponse {
    match path.into_inner() {
        1 => HttpResponse::Ok().json(user(1)),
        2 => {
            tokio::time::sleep(SLOW_RESPONSE).await;
            HttpResponse::Ok().json(user(2))
        }
        _ => HttpResponse::NotFound().json(json!({})),
    }
}

/// Start the fake upstream and return its base URL.
///
/// # Panics
/// Panics when the listener cannot be bound.
pub fn spawn_upstream() -> (Url, ServerHandle) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake upstream");
    let addr = listener.local_addr().expect("local addr");
    let server = HttpServer::new(|| {
        App::new()
            .route("/albums", web::get().to(albums))
            .route("/albums/{id}", web::get().to(album_by_id))
            .route("/photos", web::get().to(photos))
            .route("/users", web::get().to(users))
            .route("/users/{id}", web::get().to(user_by_id))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("listen on fake upstream")
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);
    let base = Url::parse(&format!("http://{addr}")).expect("upstream url");
    (base, handle)
}
