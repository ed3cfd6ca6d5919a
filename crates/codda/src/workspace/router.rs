use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{CaseAssessment, CaseDocument, CaseId, NewCase};
use super::repository::{CaseRepository, RepositoryError};
use super::service::{CaseServiceError, CaseWorkspaceService};
use crate::language::substitution::has_placeholder_marker;
use crate::language::{LanguageTemplate, RenderedTemplate, TemplateCategory};
use crate::scoring::{
    DraftOutline, EvidenceItem, EvidenceSummary, GapScan, LintFlag, QaStatus, SectionReport,
};

/// Router exposing the language library, the scorers, and case drafting endpoints.
pub fn workspace_router<R>(service: Arc<CaseWorkspaceService<R>>) -> Router
where
    R: CaseRepository + 'static,
{
    Router::new()
        .route("/api/v1/templates", get(list_templates_handler::<R>))
        .route("/api/v1/templates/validation", get(validation_handler::<R>))
        .route("/api/v1/templates/:template_id", get(template_handler::<R>))
        .route(
            "/api/v1/templates/:template_id/render",
            post(render_handler::<R>),
        )
        .route("/api/v1/regulations", get(regulations_handler::<R>))
        .route("/api/v1/scoring/sections", post(score_sections_handler::<R>))
        .route("/api/v1/scoring/evidence", post(score_evidence_handler::<R>))
        .route("/api/v1/scoring/bias", post(bias_handler::<R>))
        .route("/api/v1/scoring/rule-paths", post(rule_paths_handler::<R>))
        .route(
            "/api/v1/cases",
            post(open_case_handler::<R>).get(list_cases_handler::<R>),
        )
        .route("/api/v1/cases/:case_id", get(case_handler::<R>))
        .route(
            "/api/v1/cases/:case_id/sections/:section",
            put(update_section_handler::<R>),
        )
        .route(
            "/api/v1/cases/:case_id/templates",
            post(insert_template_handler::<R>),
        )
        .route(
            "/api/v1/cases/:case_id/evidence",
            post(add_evidence_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TemplateQuery {
    category: Option<String>,
    q: Option<String>,
    subcategory: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RenderRequest {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SectionScoreRequest {
    #[serde(default)]
    sections: BTreeMap<String, String>,
    /// Markdown draft split on `## ` headings; its sections override `sections`.
    #[serde(default)]
    document: Option<String>,
}

#[derive(Debug, Serialize)]
struct SectionScoreView {
    completeness: u8,
    qa_status: QaStatus,
    template_fidelity: bool,
    report: SectionReport,
    lint_flags: Vec<LintFlag>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EvidenceScoreRequest {
    #[serde(default)]
    items: Vec<EvidenceItem>,
}

#[derive(Debug, Serialize)]
struct EvidenceScoreView {
    summary: EvidenceSummary,
    gap_scan: GapScan,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BiasRequest {
    text: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RulePathRequest {
    #[serde(default)]
    facts: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SectionUpdate {
    text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TemplateInsertion {
    section: String,
    template_id: String,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct CaseView {
    case: CaseDocument,
    assessment: CaseAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    rendered: Option<RenderedTemplate>,
}

pub(crate) async fn list_templates_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    Query(query): Query<TemplateQuery>,
) -> Response
where
    R: CaseRepository + 'static,
{
    let library = service.library();
    let text = query.q.as_deref().unwrap_or_default();
    let subcategory = query.subcategory.as_deref();

    let categories: Vec<TemplateCategory> = match query.category.as_deref() {
        Some(key) => TemplateCategory::from_key(key).into_iter().collect(),
        None => TemplateCategory::all().to_vec(),
    };

    let templates: Vec<&LanguageTemplate> = categories
        .into_iter()
        .flat_map(|category| library.search(category, text, subcategory))
        .collect();

    (StatusCode::OK, axum::Json(templates)).into_response()
}

pub(crate) async fn template_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    Path(template_id): Path<String>,
) -> Response
where
    R: CaseRepository + 'static,
{
    match service.library().by_id(&template_id) {
        Some(template) => (StatusCode::OK, axum::Json(template)).into_response(),
        None => unknown_template(&template_id),
    }
}

pub(crate) async fn render_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    Path(template_id): Path<String>,
    axum::Json(request): axum::Json<RenderRequest>,
) -> Response
where
    R: CaseRepository + 'static,
{
    match service.library().render(&template_id, &request.values) {
        Some(rendered) => (StatusCode::OK, axum::Json(rendered)).into_response(),
        None => unknown_template(&template_id),
    }
}

pub(crate) async fn regulations_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
) -> Response
where
    R: CaseRepository + 'static,
{
    let citations = service.library().regulation_citations();
    (StatusCode::OK, axum::Json(citations)).into_response()
}

pub(crate) async fn validation_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
) -> Response
where
    R: CaseRepository + 'static,
{
    let issues = service.library().validate();
    let payload = json!({
        "templates": service.library().len(),
        "issue_count": issues.len(),
        "issues": issues,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn score_sections_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    axum::Json(request): axum::Json<SectionScoreRequest>,
) -> Response
where
    R: CaseRepository + 'static,
{
    let mut sections = request.sections;
    if let Some(document) = request.document.as_deref() {
        sections.extend(DraftOutline::parse(document).into_sections());
    }

    let scorer = service.scorer();
    let report = scorer.section_report(&sections);
    let lint_flags = scorer.lint(&sections, &report, &[]);
    let view = SectionScoreView {
        completeness: report.completeness,
        qa_status: QaStatus::from_completeness(report.completeness),
        template_fidelity: !sections.values().any(|text| has_placeholder_marker(text)),
        report,
        lint_flags,
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn score_evidence_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    axum::Json(request): axum::Json<EvidenceScoreRequest>,
) -> Response
where
    R: CaseRepository + 'static,
{
    let scorer = service.scorer();
    let view = EvidenceScoreView {
        summary: scorer.score_evidence(&request.items),
        gap_scan: scorer.gap_scan(&request.items),
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

pub(crate) async fn bias_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    axum::Json(request): axum::Json<BiasRequest>,
) -> Response
where
    R: CaseRepository + 'static,
{
    let report = service.scorer().bias_scan(&request.text);
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn rule_paths_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    axum::Json(request): axum::Json<RulePathRequest>,
) -> Response
where
    R: CaseRepository + 'static,
{
    let paths = service.scorer().suggest_rule_paths(&request.facts);
    (StatusCode::OK, axum::Json(paths)).into_response()
}

pub(crate) async fn open_case_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    axum::Json(new_case): axum::Json<NewCase>,
) -> Response
where
    R: CaseRepository + 'static,
{
    match service.open(new_case) {
        Ok(case) => case_response(&service, StatusCode::CREATED, case, None),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_cases_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
) -> Response
where
    R: CaseRepository + 'static,
{
    match service.list() {
        Ok(cases) => {
            let assessments: Vec<CaseAssessment> = cases
                .iter()
                .map(|case| service.assess_document(case))
                .collect();
            (StatusCode::OK, axum::Json(assessments)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn case_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    Path(case_id): Path<String>,
) -> Response
where
    R: CaseRepository + 'static,
{
    match service.get(&CaseId(case_id)) {
        Ok(case) => case_response(&service, StatusCode::OK, case, None),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_section_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    Path((case_id, section)): Path<(String, String)>,
    axum::Json(update): axum::Json<SectionUpdate>,
) -> Response
where
    R: CaseRepository + 'static,
{
    match service.update_section(&CaseId(case_id), &section, update.text) {
        Ok(case) => case_response(&service, StatusCode::OK, case, None),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn insert_template_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    Path(case_id): Path<String>,
    axum::Json(insertion): axum::Json<TemplateInsertion>,
) -> Response
where
    R: CaseRepository + 'static,
{
    let result = service.insert_template(
        &CaseId(case_id),
        &insertion.section,
        &insertion.template_id,
        &insertion.values,
    );
    match result {
        Ok((case, rendered)) => case_response(&service, StatusCode::OK, case, Some(rendered)),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_evidence_handler<R>(
    State(service): State<Arc<CaseWorkspaceService<R>>>,
    Path(case_id): Path<String>,
    axum::Json(item): axum::Json<EvidenceItem>,
) -> Response
where
    R: CaseRepository + 'static,
{
    match service.add_evidence(&CaseId(case_id), item) {
        Ok(case) => case_response(&service, StatusCode::OK, case, None),
        Err(error) => error_response(error),
    }
}

fn case_response<R>(
    service: &CaseWorkspaceService<R>,
    status: StatusCode,
    case: CaseDocument,
    rendered: Option<RenderedTemplate>,
) -> Response
where
    R: CaseRepository + 'static,
{
    let assessment = service.assess_document(&case);
    let view = CaseView {
        case,
        assessment,
        rendered,
    };
    (status, axum::Json(view)).into_response()
}

fn unknown_template(template_id: &str) -> Response {
    let payload = json!({
        "error": format!("unknown template '{template_id}'"),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn error_response(error: CaseServiceError) -> Response {
    let status = match &error {
        CaseServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        CaseServiceError::Repository(
            RepositoryError::Conflict | RepositoryError::StaleRevision { .. },
        ) => StatusCode::CONFLICT,
        CaseServiceError::UnknownTemplate(_) | CaseServiceError::InvalidSection(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        CaseServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
