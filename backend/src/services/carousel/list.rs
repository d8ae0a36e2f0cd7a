use actix_web::{web, HttpResponse};
use log::error;

use common::model::gallery::GalleryImage;

use crate::error::ApiError;
use crate::services::carousel::store::{GalleryEntry, GalleryStore};

/// `GET /api/carousel`: reconciled, ordered gallery listing.
pub async fn process(store: web::Data<GalleryStore>) -> Result<HttpResponse, ApiError> {
    let entries = store.list().map_err(|err| {
        error!("failed to scan gallery directory: {err}");
        ApiError::Storage("Failed to load images".to_string())
    })?;
    let images: Vec<GalleryImage> = entries.iter().map(GalleryEntry::to_public).collect();
    Ok(HttpResponse::Ok().json(images))
}
