use actix_web::{web, HttpResponse};

use common::model::gallery::GalleryImage;
use common::requests::ReorderRequest;

use crate::error::ApiError;
use crate::services::carousel::store::{GalleryEntry, GalleryStore};

/// `POST /api/carousel/reorder`: bulk resequencing by id list.
///
/// A body whose `ids` is not an array of strings never reaches the store —
/// typed deserialization rejects it with a 400 first.
pub async fn process(
    store: web::Data<GalleryStore>,
    body: web::Json<ReorderRequest>,
) -> Result<HttpResponse, ApiError> {
    let entries = store.reorder(&body.ids);
    let images: Vec<GalleryImage> = entries.iter().map(GalleryEntry::to_public).collect();
    Ok(HttpResponse::Ok().json(images))
}
