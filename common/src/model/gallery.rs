use serde::{Deserialize, Serialize};

/// A gallery image as served by `/api/carousel`.
///
/// `_id` doubles as the file name under the gallery directory and `image` is
/// the public path the browser loads. `order` is always a dense `1..N`
/// sequence after any mutation on the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryImage {
    #[serde(rename = "_id")]
    pub id: String,
    pub image: String,
    pub title: String,
    pub caption: String,
    pub order: i64,
}
