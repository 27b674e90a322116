use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::villas::handlers;
use crate::features::villas::services::VillaService;

/// Create routes for the villas feature
///
/// Item routes also answer with a trailing slash (`/api/VillaAPI/{id}/`).
pub fn routes(service: Arc<VillaService>) -> Router {
    let item = get(handlers::get_villa)
        .put(handlers::replace_villa)
        .patch(handlers::patch_villa)
        .delete(handlers::delete_villa);

    Router::new()
        .route(
            "/api/VillaAPI",
            get(handlers::list_villas).post(handlers::create_villa),
        )
        .route("/api/VillaAPI/{id}", item.clone())
        .route("/api/VillaAPI/{id}/", item)
        .with_state(service)
}
