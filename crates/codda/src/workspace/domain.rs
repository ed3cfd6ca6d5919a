use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scoring::{EvidenceItem, EvidenceSummary, LintFlag, QaStatus, SectionReport};

/// Identifier wrapper for a Character of Discharge case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CaseId(pub String);

impl CaseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Draft decision being written for a case: section text plus attached evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDocument {
    pub id: CaseId,
    pub claimant: String,
    /// Whether an adverse finding will need Individual Personnel Review.
    pub ipr_required: bool,
    pub sections: BTreeMap<String, String>,
    pub evidence: Vec<EvidenceItem>,
    /// Bumped on every stored mutation.
    pub revision: u32,
}

/// Payload for opening a new case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCase {
    pub claimant: String,
    #[serde(default)]
    pub ipr_required: bool,
    #[serde(default)]
    pub sections: BTreeMap<String, String>,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
}

/// Derived view of a case's progress; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseAssessment {
    pub case_id: CaseId,
    pub revision: u32,
    pub completeness: u8,
    pub issue_count: usize,
    pub qa_status: QaStatus,
    pub template_fidelity: bool,
    pub can_run_ipr: bool,
    pub can_upload: bool,
    pub sections: SectionReport,
    pub evidence: EvidenceSummary,
    pub lint_flags: Vec<LintFlag>,
}
