use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{CaseAssessment, CaseDocument, CaseId, NewCase};
use super::repository::{CaseRepository, RepositoryError};
use crate::language::substitution::has_placeholder_marker;
use crate::language::{RenderedTemplate, TemplateLibrary};
use crate::scoring::{CompletenessScorer, EvidenceItem, QaStatus, ScoringConfig};

/// Service composing the case store, the language library, and the completeness scorer.
pub struct CaseWorkspaceService<R> {
    repository: Arc<R>,
    library: Arc<TemplateLibrary>,
    scorer: Arc<CompletenessScorer>,
}

static CASE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_case_id() -> CaseId {
    let id = CASE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CaseId(format!("COD-{id:06}"))
}

impl<R> CaseWorkspaceService<R>
where
    R: CaseRepository + 'static,
{
    pub fn new(repository: Arc<R>, library: Arc<TemplateLibrary>, config: ScoringConfig) -> Self {
        Self {
            repository,
            library,
            scorer: Arc::new(CompletenessScorer::new(config)),
        }
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    pub fn scorer(&self) -> &CompletenessScorer {
        &self.scorer
    }

    /// Open a new case and store it under a freshly issued id.
    pub fn open(&self, new_case: NewCase) -> Result<CaseDocument, CaseServiceError> {
        if let Some(id) = new_case.sections.keys().find(|id| id.trim().is_empty()) {
            return Err(CaseServiceError::InvalidSection(id.clone()));
        }

        let case = CaseDocument {
            id: next_case_id(),
            claimant: new_case.claimant,
            ipr_required: new_case.ipr_required,
            sections: new_case.sections,
            evidence: new_case.evidence,
            revision: 1,
        };

        let stored = self.repository.insert(case)?;
        info!(case_id = stored.id.as_str(), "opened case");
        Ok(stored)
    }

    pub fn get(&self, case_id: &CaseId) -> Result<CaseDocument, CaseServiceError> {
        let case = self
            .repository
            .fetch(case_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(case)
    }

    pub fn list(&self) -> Result<Vec<CaseDocument>, CaseServiceError> {
        Ok(self.repository.list()?)
    }

    /// Replace the text of one section.
    pub fn update_section(
        &self,
        case_id: &CaseId,
        section_id: &str,
        text: String,
    ) -> Result<CaseDocument, CaseServiceError> {
        let section_id = normalize_section_id(section_id)?;
        let mut case = self.get(case_id)?;
        case.sections.insert(section_id.clone(), text);
        self.store(&mut case)?;
        debug!(case_id = case.id.as_str(), section = %section_id, "section updated");
        Ok(case)
    }

    /// Render a template and append it to a section, separated by a blank line.
    pub fn insert_template(
        &self,
        case_id: &CaseId,
        section_id: &str,
        template_id: &str,
        values: &BTreeMap<String, String>,
    ) -> Result<(CaseDocument, RenderedTemplate), CaseServiceError> {
        let section_id = normalize_section_id(section_id)?;
        let rendered = self
            .library
            .render(template_id, values)
            .ok_or_else(|| CaseServiceError::UnknownTemplate(template_id.to_string()))?;

        let mut case = self.get(case_id)?;
        let section = case.sections.entry(section_id.clone()).or_default();
        if !section.trim().is_empty() {
            section.push_str("\n\n");
        }
        section.push_str(&rendered.text);
        self.store(&mut case)?;

        debug!(
            case_id = case.id.as_str(),
            section = %section_id,
            template = template_id,
            unresolved = rendered.unresolved.len(),
            "template inserted"
        );
        Ok((case, rendered))
    }

    /// Attach an evidence item. An item whose id is already on the case replaces it,
    /// which is how a requested gap is marked as received.
    pub fn add_evidence(
        &self,
        case_id: &CaseId,
        item: EvidenceItem,
    ) -> Result<CaseDocument, CaseServiceError> {
        let mut case = self.get(case_id)?;
        debug!(case_id = case.id.as_str(), evidence = %item.id, gap = item.is_gap, "evidence added");
        match case.evidence.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => case.evidence.push(item),
        }
        self.store(&mut case)?;
        Ok(case)
    }

    pub fn assess(&self, case_id: &CaseId) -> Result<CaseAssessment, CaseServiceError> {
        let case = self.get(case_id)?;
        Ok(self.assess_document(&case))
    }

    /// Recompute every derived figure for `case`.
    pub fn assess_document(&self, case: &CaseDocument) -> CaseAssessment {
        let report = self.scorer.section_report(&case.sections);
        let evidence = self.scorer.score_evidence(&case.evidence);
        let lint_flags = self.scorer.lint(&case.sections, &report, &case.evidence);
        let template_fidelity = !case
            .sections
            .values()
            .any(|text| has_placeholder_marker(text));
        let completeness = report.completeness;
        let gates = self
            .scorer
            .readiness(completeness, case.ipr_required, template_fidelity);

        CaseAssessment {
            case_id: case.id.clone(),
            revision: case.revision,
            completeness,
            issue_count: lint_flags.len(),
            qa_status: QaStatus::from_completeness(completeness),
            template_fidelity,
            can_run_ipr: gates.can_run_ipr,
            can_upload: gates.can_upload,
            sections: report,
            evidence,
            lint_flags,
        }
    }

    fn store(&self, case: &mut CaseDocument) -> Result<(), CaseServiceError> {
        let expected = case.revision;
        case.revision = expected.saturating_add(1);
        if let Err(error) = self.repository.update(case.clone(), expected) {
            warn!(case_id = case.id.as_str(), expected, %error, "case update rejected");
            return Err(error.into());
        }
        Ok(())
    }
}

fn normalize_section_id(section_id: &str) -> Result<String, CaseServiceError> {
    let trimmed = section_id.trim();
    if trimmed.is_empty() {
        return Err(CaseServiceError::InvalidSection(section_id.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Error raised by the case workspace service.
#[derive(Debug, thiserror::Error)]
pub enum CaseServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("unknown template '{0}'")]
    UnknownTemplate(String),
    #[error("invalid section id '{0}'")]
    InvalidSection(String),
}
