pub mod contact;
pub mod content;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Site content
        .route("/api/v1/meta", get(content::meta))
        .route("/api/v1/programs", get(content::programs))
        .route("/api/v1/articles", get(content::articles))
        // Contact relay
        .route("/api/v1/contact", post(contact::submit))
}
