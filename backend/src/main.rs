#[cfg(test)]
mod api_tests;
mod auth;
mod config;
mod db;
mod error;
mod files;
mod forms;
mod services;

use std::fs;
use std::io;

use actix_files::Files;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;

use crate::config::Config;
use crate::services::carousel::store::GalleryStore;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded frontend bundle; unknown non-API paths fall back to
/// `index.html` so client-side navigation deep-links work.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    if path.starts_with("api/") {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }));
    }
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::load();

    fs::create_dir_all(config.uploads_dir())?;
    fs::create_dir_all(config.gallery_dir())?;

    {
        let conn = db::open(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        db::init(&conn).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        match (&config.admin_email, &config.admin_password) {
            (Some(email), Some(password)) => {
                if let Err(err) = auth::seed_admin(&conn, email, password) {
                    warn!("failed to seed admin user: {err}");
                }
            }
            _ => info!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin seed"),
        }
    }

    let gallery = web::Data::new(GalleryStore::new(config.gallery_dir()));
    let uploads_dir = config.uploads_dir();
    let gallery_dir = config.gallery_dir();
    let bind_addr = (config.host.clone(), config.port);
    let cfg_data = web::Data::new(config);

    info!("Server running at http://{}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(cfg_data.clone())
            .app_data(gallery.clone())
            .service(services::events::configure_routes())
            .service(services::blogs::configure_routes())
            .service(services::alumni::configure_routes())
            .service(services::projects::configure_routes())
            .service(services::carousel::configure_routes())
            .service(services::admin::configure_routes())
            .service(Files::new("/uploads", uploads_dir.clone()))
            .service(Files::new("/gallery", gallery_dir.clone()))
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind_addr)?
    .run()
    .await
}
