pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::analysis::handlers;
use crate::state::AppState;
use crate::uploads::request_body_limit;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(request_body_limit(state.config.max_upload_bytes));
    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        .route("/health", get(health::health_handler))
        // Form flow (HTML in, HTML out)
        .route("/api/upload", post(handlers::handle_upload))
        // Analysis API
        .route(
            "/api/v1/analyses",
            post(handlers::handle_create_analysis).get(handlers::handle_recent_analyses),
        )
        .route("/api/v1/roles", get(handlers::handle_list_roles));

    // A built frontend owns `/` and every other unmatched path; otherwise serve the built-in form.
    let router = match static_dir {
        Some(dir) => {
            let index = ServeFile::new(dir.join("index.html"));
            router.fallback_service(ServeDir::new(dir).fallback(index))
        }
        None => router.route("/", get(handlers::handle_upload_form)),
    };

    router.layer(body_limit).with_state(state)
}
