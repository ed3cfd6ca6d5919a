use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;
use crate::language::substitution::has_placeholder_marker;

/// Sections of a Character of Discharge decision letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentSection {
    Issue,
    Evidence,
    LawsRegs,
    Decision,
    ReasonsBases,
    Favorable,
}

impl DocumentSection {
    const ALL: [DocumentSection; 6] = [
        DocumentSection::Issue,
        DocumentSection::Evidence,
        DocumentSection::LawsRegs,
        DocumentSection::Decision,
        DocumentSection::ReasonsBases,
        DocumentSection::Favorable,
    ];

    pub const fn all() -> &'static [DocumentSection] {
        &Self::ALL
    }

    pub const fn id(self) -> &'static str {
        match self {
            DocumentSection::Issue => "issue",
            DocumentSection::Evidence => "evidence",
            DocumentSection::LawsRegs => "laws-regs",
            DocumentSection::Decision => "decision",
            DocumentSection::ReasonsBases => "reasons-bases",
            DocumentSection::Favorable => "favorable",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DocumentSection::Issue => "ISSUE",
            DocumentSection::Evidence => "EVIDENCE",
            DocumentSection::LawsRegs => "LAWS/REGS",
            DocumentSection::Decision => "DECISION",
            DocumentSection::ReasonsBases => "REASONS & BASES",
            DocumentSection::Favorable => "FAVORABLE FINDINGS",
        }
    }

    /// Favorable findings are optional; every other section must be written.
    pub const fn required(self) -> bool {
        !matches!(self, DocumentSection::Favorable)
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|section| section.id() == id)
    }

    /// Map a `## HEADING` line body onto a known section.
    pub fn from_heading(heading: &str) -> Option<Self> {
        let normalized = heading
            .trim()
            .to_ascii_uppercase()
            .replace('&', "AND")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        match normalized.as_str() {
            "ISSUE" | "ISSUES" => Some(DocumentSection::Issue),
            "EVIDENCE" => Some(DocumentSection::Evidence),
            "LAWS/REGS"
            | "LAWS AND REGULATIONS"
            | "PERTINENT LAWS AND REGULATIONS"
            | "LAWS AND REGS" => Some(DocumentSection::LawsRegs),
            "DECISION" => Some(DocumentSection::Decision),
            "REASONS AND BASES" | "REASONS AND BASES FOR DECISION" => {
                Some(DocumentSection::ReasonsBases)
            }
            "FAVORABLE FINDINGS" | "FAVORABLE" => Some(DocumentSection::Favorable),
            _ => None,
        }
    }
}

/// Outcome of checking a single section's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Missing,
    Empty,
    /// Text still carries a `[` marker left by an unfilled template.
    Placeholder,
    TooShort,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCheck {
    pub section: String,
    pub required: bool,
    pub status: SectionStatus,
    pub characters: usize,
}

impl SectionCheck {
    /// Display label, falling back to the raw id for sections outside the letter layout.
    pub fn label(&self) -> String {
        DocumentSection::from_id(&self.section)
            .map(|section| section.label().to_string())
            .unwrap_or_else(|| self.section.to_ascii_uppercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionReport {
    pub completeness: u8,
    pub checks: Vec<SectionCheck>,
}

impl SectionReport {
    pub fn complete_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|check| check.required && check.status == SectionStatus::Complete)
            .count()
    }
}

pub(crate) fn check_text(text: Option<&str>, min_chars: usize) -> (SectionStatus, usize) {
    let Some(text) = text else {
        return (SectionStatus::Missing, 0);
    };

    let trimmed = text.trim();
    let characters = trimmed.chars().count();
    let status = if trimmed.is_empty() {
        SectionStatus::Empty
    } else if has_placeholder_marker(trimmed) {
        SectionStatus::Placeholder
    } else if characters <= min_chars {
        SectionStatus::TooShort
    } else {
        SectionStatus::Complete
    };

    (status, characters)
}

pub(crate) fn report_sections(
    sections: &BTreeMap<String, String>,
    config: &ScoringConfig,
) -> SectionReport {
    let mut checks = Vec::new();

    for id in &config.required_sections {
        let (status, characters) =
            check_text(sections.get(id).map(String::as_str), config.min_section_chars);
        checks.push(SectionCheck {
            section: id.clone(),
            required: true,
            status,
            characters,
        });
    }

    for (id, text) in sections {
        if config.is_required(id) {
            continue;
        }
        let (status, characters) = check_text(Some(text), config.min_section_chars);
        checks.push(SectionCheck {
            section: id.clone(),
            required: false,
            status,
            characters,
        });
    }

    let complete = checks
        .iter()
        .filter(|check| check.required && check.status == SectionStatus::Complete)
        .count();

    SectionReport {
        completeness: percentage(complete, config.required_sections.len()),
        checks,
    }
}

/// `round(100 * part / whole)`, zero when nothing is required.
pub(crate) fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let ratio = (part.min(whole) as f64) / (whole as f64);
    (ratio * 100.0).round() as u8
}
