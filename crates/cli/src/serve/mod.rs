//! `riskwise serve` -- HTTP JSON API over the interactors, using
//! `axum` + `tokio`.
//!
//! Endpoints:
//! - GET  /health                       - Server status
//! - GET  /categories?only_root=bool    - List categories
//! - GET  /categories/{id}              - One category
//! - GET  /categories/{id}/parent       - Its parent, or null
//! - GET  /categories/{id}/children     - Its direct children
//! - GET  /risks?category=&include_descendants=bool - List risks
//! - GET  /risks/{id}                   - One risk
//! - GET  /risks/{id}/parent            - Its parent, or null
//! - GET  /risks/{id}/children          - Its direct children
//! - POST /risks                        - Create a risk
//! - GET  /updated?count=n              - Recently updated entries
//!
//! All responses use Content-Type: application/json. CORS is permissive
//! (`Any` origin) for local use.

mod handlers;
mod state;

use std::path::Path;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use riskwise_storage::{shared, CategoryRepository, JsonStore, RiskRepository};
use riskwise_usecase::{
    CategoryInteractor, IdentityTranspiler, RiskInteractor, UpdatedInteractor,
};

use self::handlers::{
    handle_create_risk, handle_get_category, handle_get_category_children,
    handle_get_category_parent, handle_get_risk, handle_get_risk_children,
    handle_get_risk_parent, handle_health, handle_list_categories, handle_list_risks,
    handle_list_updated, handle_not_found,
};
use self::state::AppState;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({ "error": message })))
}

pub async fn run(store_path: &Path, port: u16) -> Result<(), String> {
    let store = JsonStore::load(store_path).map_err(|e| e.to_string())?;
    tracing::info!(
        categories = store.category.len(),
        risks = store.risk.len(),
        "loaded store"
    );
    let store = shared(store);

    let categories = Arc::new(CategoryRepository::new(store.clone()));
    let risks = Arc::new(RiskRepository::new(store));
    let transpiler = Arc::new(IdentityTranspiler);
    let state = Arc::new(AppState {
        categories: CategoryInteractor::new(categories.clone()),
        risks: RiskInteractor::new(risks.clone(), transpiler.clone()),
        updated: UpdatedInteractor::new(categories, risks),
        transpiler,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/categories", get(handle_list_categories))
        .route("/categories/{id}", get(handle_get_category))
        .route("/categories/{id}/parent", get(handle_get_category_parent))
        .route("/categories/{id}/children", get(handle_get_category_children))
        .route("/risks", get(handle_list_risks).post(handle_create_risk))
        .route("/risks/{id}", get(handle_get_risk))
        .route("/risks/{id}/parent", get(handle_get_risk_parent))
        .route("/risks/{id}/children", get(handle_get_risk_children))
        .route("/updated", get(handle_list_updated))
        .fallback(handle_not_found)
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("failed to bind to {addr}: {e}"))?;
    tracing::info!("riskwise listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server error: {e}"))
}
