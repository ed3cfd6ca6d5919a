use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::bias::find_terms;
use super::evidence::EvidenceItem;
use super::sections::{DocumentSection, SectionReport, SectionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintKind {
    Error,
    Warning,
    Info,
}

/// Quality finding shown next to a decision section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintFlag {
    pub id: String,
    pub kind: LintKind,
    pub section: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

pub(crate) fn lint_case(
    sections: &BTreeMap<String, String>,
    report: &SectionReport,
    evidence: &[EvidenceItem],
    min_chars: usize,
) -> Vec<LintFlag> {
    let mut findings: Vec<(LintKind, String, String, Option<String>)> = Vec::new();

    for check in &report.checks {
        let label = check.label();
        match (check.status, check.required) {
            (SectionStatus::Missing, true) | (SectionStatus::Empty, true) => findings.push((
                LintKind::Error,
                label.clone(),
                format!("{label} section has not been written"),
                Some("Insert a template from the language library".to_string()),
            )),
            (SectionStatus::Placeholder, _) => findings.push((
                LintKind::Warning,
                label.clone(),
                format!("{label} section still contains unfilled placeholders"),
                Some("Replace every [PLACEHOLDER] with case-specific facts".to_string()),
            )),
            (SectionStatus::TooShort, true) => findings.push((
                LintKind::Info,
                label.clone(),
                format!(
                    "{label} section is {} characters; more than {min_chars} expected",
                    check.characters
                ),
                None,
            )),
            _ => {}
        }
    }

    for item in evidence.iter().filter(|item| item.is_gap) {
        findings.push((
            LintKind::Warning,
            DocumentSection::Evidence.label().to_string(),
            format!("Missing evidence: {}", item.title),
            item.summary.as_ref().map(|summary| format!("Request: {summary}")),
        ));
    }

    for check in &report.checks {
        let Some(text) = sections.get(&check.section) else {
            continue;
        };
        for finding in find_terms(text, &check.label()) {
            findings.push((
                LintKind::Warning,
                finding.section,
                format!("Conclusory language: \"{}\"", finding.term),
                Some(finding.suggestion),
            ));
        }
    }

    findings
        .into_iter()
        .enumerate()
        .map(|(index, (kind, section, message, suggestion))| LintFlag {
            id: format!("lint-{}", index + 1),
            kind,
            section,
            message,
            suggestion,
        })
        .collect()
}
