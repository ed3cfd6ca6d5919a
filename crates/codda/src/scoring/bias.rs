use serde::{Deserialize, Serialize};

use super::sections::DocumentSection;

/// Words that assert a conclusion instead of weighing the record.
pub const CONCLUSORY_TERMS: [&str; 5] = [
    "clearly",
    "obviously",
    "definitely",
    "without question",
    "undoubtedly",
];

const TERM_PENALTY: usize = 20;

const GENERAL_ADVICE: [&str; 3] = [
    "Use objective language",
    "Avoid conclusory statements",
    "Support assertions with evidence",
];

/// One conclusory term found in a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasFinding {
    pub section: String,
    pub term: String,
    pub suggestion: String,
}

/// Neutral-tone check over decision text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasReport {
    /// `100 - 20` per distinct conclusory term, floored at zero.
    pub score: u8,
    pub findings: Vec<BiasFinding>,
    pub suggestions: Vec<String>,
}

impl BiasReport {
    pub fn is_neutral(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Scan a whole draft. Findings are filed against the reasons and bases, where
/// conclusory reasoning does its damage.
pub(crate) fn scan_bias(text: &str) -> BiasReport {
    let findings = find_terms(text, DocumentSection::ReasonsBases.label());
    let penalty = findings.len().saturating_mul(TERM_PENALTY).min(100);
    let suggestions = if findings.is_empty() {
        Vec::new()
    } else {
        GENERAL_ADVICE.iter().map(|advice| advice.to_string()).collect()
    };

    BiasReport {
        score: (100 - penalty) as u8,
        findings,
        suggestions,
    }
}

/// Each conclusory term appearing in `text`, matched case-insensitively and reported once.
pub(crate) fn find_terms(text: &str, section: &str) -> Vec<BiasFinding> {
    let lowered = text.to_lowercase();
    CONCLUSORY_TERMS
        .iter()
        .filter(|term| lowered.contains(*term))
        .map(|term| BiasFinding {
            section: section.to_string(),
            term: term.to_string(),
            suggestion: format!("Replace \"{term}\" with more neutral language"),
        })
        .collect()
}
