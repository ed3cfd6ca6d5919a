use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Barrier, Mutex};

use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;

use crate::language::TemplateLibrary;
use crate::scoring::{EvidenceItem, EvidenceKind, EvidenceSource, Reliability, ScoringConfig};
use crate::workspace::domain::{CaseDocument, CaseId, NewCase};
use crate::workspace::repository::{CaseRepository, RepositoryError};
use crate::workspace::{workspace_router, CaseWorkspaceService};

pub(super) const REQUIRED: [&str; 5] = ["issue", "evidence", "laws-regs", "decision", "reasons-bases"];

pub(super) fn written(section: &str) -> String {
    format!(
        "The {section} section has been drafted in full for the claimant's period of service \
         and cites the service personnel records reviewed for this determination."
    )
}

pub(super) fn complete_sections() -> BTreeMap<String, String> {
    REQUIRED
        .iter()
        .map(|id| (id.to_string(), written(id)))
        .collect()
}

pub(super) fn new_case() -> NewCase {
    NewCase {
        claimant: "J. Rivera".to_string(),
        ipr_required: true,
        sections: BTreeMap::new(),
        evidence: Vec::new(),
    }
}

pub(super) fn service_record() -> EvidenceItem {
    EvidenceItem {
        id: "ev-1".to_string(),
        kind: EvidenceKind::ServicePersonnel,
        title: "Service Personnel Records".to_string(),
        date: NaiveDate::from_ymd_opt(2019, 3, 14),
        source: EvidenceSource::EFolder,
        reliability: Reliability::High,
        summary: Some("Complete SPR including DD-214".to_string()),
        tags: vec!["personnel".to_string()],
        is_gap: false,
    }
}

pub(super) fn missing_statement() -> EvidenceItem {
    EvidenceItem {
        id: "ev-gap-1".to_string(),
        kind: EvidenceKind::Lay,
        title: "Command Statement".to_string(),
        date: None,
        source: EvidenceSource::External,
        reliability: Reliability::Medium,
        summary: Some("Statement from commanding officer".to_string()),
        tags: Vec::new(),
        is_gap: true,
    }
}

pub(super) fn build_service() -> (CaseWorkspaceService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = CaseWorkspaceService::new(
        repository.clone(),
        Arc::new(TemplateLibrary::builtin()),
        ScoringConfig::default(),
    );
    (service, repository)
}

pub(super) fn router_with_service<R>(service: CaseWorkspaceService<R>) -> Router
where
    R: CaseRepository + 'static,
{
    workspace_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) cases: Arc<Mutex<HashMap<CaseId, CaseDocument>>>,
}

impl CaseRepository for MemoryRepository {
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
        let mut cases: Vec<_> = guard.values().cloned().collect();
        cases.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(cases)
    }
}

pub(super) struct ConflictRepository;

impl CaseRepository for ConflictRepository {
    fn insert(&self, _case: CaseDocument) -> Result<CaseDocument, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _case: CaseDocument, _expected: u32) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &CaseId) -> Result<Option<CaseDocument>, RepositoryError> {
        Ok(None)
    }

    fn list(&self) -> Result<Vec<CaseDocument>, RepositoryError> {
        Ok(Vec::new())
    }
}

/// Holds every `fetch` until `readers` callers have arrived, so concurrent edits all
/// start from the same stored revision.
pub(super) struct RendezvousRepository {
    pub(super) inner: MemoryRepository,
    gate: Barrier,
}

impl RendezvousRepository {
    pub(super) fn new(readers: usize) -> Self {
        Self {
            inner: MemoryRepository::default(),
            gate: Barrier::new(readers),
        }
    }
}

impl CaseRepository for RendezvousRepository {
    fn insert(&self, case: CaseDocument) -> Result<CaseDocument, RepositoryError> {
        self.inner.insert(case)
    }

    fn update(&self, case: CaseDocument, expected_revision: u32) -> Result<(), RepositoryError> {
        self.inner.update(case, expected_revision)
    }

    fn fetch(&self, id: &CaseId) -> Result<Option<CaseDocument>, RepositoryError> {
        let case = self.inner.fetch(id)?;
        self.gate.wait();
        Ok(case)
    }

    fn list(&self) -> Result<Vec<CaseDocument>, RepositoryError> {
        self.inner.list()
    }
}

/// Accepts new cases but reports every update as overtaken by another writer.
#[derive(Default)]
pub(super) struct StaleRepository {
    inner: MemoryRepository,
}

impl CaseRepository for StaleRepository {
    fn insert(&self, case: CaseDocument) -> Result<CaseDocument, RepositoryError> {
        self.inner.insert(case)
    }

    fn update(&self, _case: CaseDocument, expected_revision: u32) -> Result<(), RepositoryError> {
        Err(RepositoryError::StaleRevision {
            expected: expected_revision,
            found: expected_revision + 1,
        })
    }

    fn fetch(&self, id: &CaseId) -> Result<Option<CaseDocument>, RepositoryError> {
        self.inner.fetch(id)
    }

    fn list(&self) -> Result<Vec<CaseDocument>, RepositoryError> {
        self.inner.list()
    }
}

pub(super) struct UnavailableRepository;

impl CaseRepository for UnavailableRepository {
    fn insert(&self, _case: CaseDocument) -> Result<CaseDocument, RepositoryError> {
        Err(RepositoryError::Unavailable("case store offline".to_string()))
    }

    fn update(&self, _case: CaseDocument, _expected: u32) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("case store offline".to_string()))
    }

    fn fetch(&self, _id: &CaseId) -> Result<Option<CaseDocument>, RepositoryError> {
        Err(RepositoryError::Unavailable("case store offline".to_string()))
    }

    fn list(&self) -> Result<Vec<CaseDocument>, RepositoryError> {
        Err(RepositoryError::Unavailable("case store offline".to_string()))
    }
}

pub(super) fn service_with<R>(repository: R) -> CaseWorkspaceService<R>
where
    R: CaseRepository + 'static,
{
    CaseWorkspaceService::new(
        Arc::new(repository),
        Arc::new(TemplateLibrary::builtin()),
        ScoringConfig::default(),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
