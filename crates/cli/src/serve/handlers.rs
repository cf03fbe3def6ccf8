//! HTTP route handlers over the interactors.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use riskwise_core::{Fault, FaultKind, Outcome};
use riskwise_usecase::{mapper, RiskInput};

use super::json_error;
use super::state::AppState;

/// Map a fault to the HTTP status its kind implies.
fn status_of(fault: &Fault) -> StatusCode {
    match fault.kind() {
        FaultKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        FaultKind::NotFound => StatusCode::NOT_FOUND,
        FaultKind::Conflict => StatusCode::CONFLICT,
        FaultKind::Unhandled | FaultKind::Other => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn fault_response(fault: &Fault) -> Response {
    let mut body = serde_json::json!({ "error": fault.message() });
    if !fault.metadata().is_empty() {
        body["metadata"] = serde_json::json!(fault.metadata());
    }
    (status_of(fault), Json(body)).into_response()
}

fn respond<T: serde::Serialize>(status: StatusCode, outcome: Outcome<T>) -> Response {
    match outcome {
        Ok(value) => (status, Json(value)).into_response(),
        Err(fault) => fault_response(&fault),
    }
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

#[derive(Deserialize)]
pub(crate) struct CategoriesQuery {
    #[serde(default)]
    only_root: bool,
}

/// GET /categories
pub(crate) async fn handle_list_categories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoriesQuery>,
) -> Response {
    respond(StatusCode::OK, state.categories.list(query.only_root).await)
}

/// GET /categories/{id}
pub(crate) async fn handle_get_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    respond(StatusCode::OK, state.categories.fetch(&id).await)
}

/// GET /categories/{id}/parent -- `null` body when the category is a root.
pub(crate) async fn handle_get_category_parent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    respond(StatusCode::OK, state.categories.fetch_parent(&id).await)
}

/// GET /categories/{id}/children
pub(crate) async fn handle_get_category_children(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    respond(StatusCode::OK, state.categories.fetch_children(&id).await)
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
pub(crate) struct RisksQuery {
    category: Option<String>,
    #[serde(default = "default_true")]
    include_descendants: bool,
}

/// GET /risks
pub(crate) async fn handle_list_risks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RisksQuery>,
) -> Response {
    respond(
        StatusCode::OK,
        state
            .risks
            .list(query.category.as_deref(), query.include_descendants)
            .await,
    )
}

/// GET /risks/{id}
pub(crate) async fn handle_get_risk(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    respond(StatusCode::OK, state.risks.fetch(&id).await)
}

/// GET /risks/{id}/parent -- `null` body when the risk has no parent.
pub(crate) async fn handle_get_risk_parent(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    respond(StatusCode::OK, state.risks.fetch_parent(&id).await)
}

/// GET /risks/{id}/children
pub(crate) async fn handle_get_risk_children(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    respond(StatusCode::OK, state.risks.fetch_children(&id).await)
}

/// POST /risks
pub(crate) async fn handle_create_risk(
    State(state): State<Arc<AppState>>,
    Json(input): Json<RiskInput>,
) -> Response {
    respond(StatusCode::CREATED, state.risks.create(&input).await)
}

fn default_count() -> usize {
    10
}

#[derive(Deserialize)]
pub(crate) struct UpdatedQuery {
    #[serde(default = "default_count")]
    count: usize,
}

/// GET /updated
pub(crate) async fn handle_list_updated(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UpdatedQuery>,
) -> Response {
    let outcome = state
        .updated
        .list(query.count)
        .await
        .into_outcome()
        .and_then(|entries| {
            entries
                .iter()
                .map(|entry| mapper::updated_to_view(entry, state.transpiler.as_ref()))
                .collect::<Outcome<Vec<_>>>()
        });
    respond(StatusCode::OK, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_kinds_map_to_expected_statuses() {
        assert_eq!(
            status_of(&Fault::validation("v")),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_of(&Fault::not_found("n")), StatusCode::NOT_FOUND);
        assert_eq!(status_of(&Fault::conflict("c")), StatusCode::CONFLICT);
        assert_eq!(
            status_of(&Fault::unhandled("u")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(&Fault::new("o")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
