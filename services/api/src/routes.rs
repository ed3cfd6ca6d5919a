use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use codda::error::AppError;
use codda::scoring::{import_evidence, CompletenessScorer, EvidenceSummary, GapScan};
use codda::workspace::{workspace_router, CaseRepository, CaseWorkspaceService};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct EvidenceRegisterRequest {
    /// Evidence register export, header row included.
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvidenceRegisterResponse {
    pub(crate) summary: EvidenceSummary,
    pub(crate) gap_scan: GapScan,
}

pub(crate) fn with_service_routes<R>(service: Arc<CaseWorkspaceService<R>>) -> axum::Router
where
    R: CaseRepository + 'static,
{
    let scorer = Arc::new(service.scorer().clone());
    workspace_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/scoring/evidence/register",
            axum::routing::post(evidence_register_endpoint).layer(Extension(scorer)),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evidence_register_endpoint(
    Extension(scorer): Extension<Arc<CompletenessScorer>>,
    Json(payload): Json<EvidenceRegisterRequest>,
) -> Result<Json<EvidenceRegisterResponse>, AppError> {
    let items = import_evidence(Cursor::new(payload.csv.into_bytes()))?;

    Ok(Json(EvidenceRegisterResponse {
        summary: scorer.score_evidence(&items),
        gap_scan: scorer.gap_scan(&items),
    }))
}
