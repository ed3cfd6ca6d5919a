use codda::config::DraftingConfig;
use codda::error::AppError;
use codda::language::TemplateLibrary;
use codda::workspace::{CaseDocument, CaseId, CaseRepository, RepositoryError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCaseRepository {
    cases: Arc<Mutex<HashMap<CaseId, CaseDocument>>>,
}

impl CaseRepository for InMemoryCaseRepository {
    fn insert(&self, case: CaseDocument) -> Result<CaseDocument, RepositoryError> {
        let mut guard = self.cases.lock().expect("repository mutex poisoned");
        if guard.contains_key(&case.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(case.id.clone(), case.clone());
        Ok(case)
    }

    fn update(&self, case: CaseDocument, expected_revision: u32) -> Result<(), RepositoryError> {
        let mut guard = self.cases.lock().expect("repository mutex poisoned");
        let stored = guard.get_mut(&case.id).ok_or(RepositoryError::NotFound)?;
        if stored.revision != expected_revision {
            return Err(RepositoryError::StaleRevision {
                expected: expected_revision,
                found: stored.revision,
            });
        }
        *stored = case;
        Ok(())
    }

    fn fetch(&self, id: &CaseId) -> Result<Option<CaseDocument>, RepositoryError> {
        let guard = self.cases.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<CaseDocument>, RepositoryError> {
        let guard = self.cases.lock().expect("repository mutex poisoned");
        let mut cases: Vec<CaseDocument> = guard.values().cloned().collect();
        cases.sort_by(|left, right| left.id.cmp(&right.id));
        Ok(cases)
    }
}

/// Load the configured catalog, falling back to the built-in templates.
pub(crate) fn load_library(config: &DraftingConfig) -> Result<TemplateLibrary, AppError> {
    let library = TemplateLibrary::load(config.catalog_path.as_deref())?;
    let issues = library.validate();
    if !issues.is_empty() {
        warn!(
            templates = library.len(),
            issues = issues.len(),
            "template catalog has placeholder inconsistencies"
        );
    }
    Ok(library)
}

/// Parse a `KEY=VALUE` placeholder assignment. The value may itself contain `=`.
pub(crate) fn parse_var(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("placeholder name missing in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
