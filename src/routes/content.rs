use axum::Json;

use crate::content;
use crate::models::{Article, Program, SiteMeta};

pub async fn meta() -> Json<SiteMeta> {
    Json(content::meta())
}

pub async fn programs() -> Json<Vec<Program>> {
    Json(content::programs())
}

pub async fn articles() -> Json<Vec<Article>> {
    Json(content::articles())
}
