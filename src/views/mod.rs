pub mod pages;
pub mod partials;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/vision", get(pages::vision))
        .route("/services", get(pages::services))
        .route("/leadership", get(pages::leadership))
        .route("/offices", get(pages::offices))
        .route("/contact", get(pages::contact))
        // HTMX partials
        .route(
            "/forms/{variant}",
            get(partials::form_idle).post(partials::form_submit),
        )
        .route("/partials/contact-modal", get(partials::contact_modal))
        .route(
            "/partials/contact-modal/close",
            get(partials::contact_modal_closed),
        )
}
