pub mod auth;
pub mod prescription;

use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Builds the full route table. Everything under `/api` and the root page
/// sits behind the authentication gate; the login flow, logout, and the
/// storage console page stay public.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route(
            "/prescriptions",
            get(prescription::list).post(prescription::create),
        )
        .route("/prescriptions/analytics", get(prescription::analytics))
        .route(
            "/prescriptions/:id",
            get(prescription::get_by_id)
                .put(prescription::update)
                .delete(prescription::delete),
        )
        .layer(middleware::from_fn(auth::require_auth));

    Router::new()
        .route(
            "/",
            get(auth::index).layer(middleware::from_fn(auth::require_auth)),
        )
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/console", get(auth::console_page))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
