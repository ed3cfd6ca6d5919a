use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reliability rating assigned to a piece of evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reliability {
    High,
    Medium,
    Low,
}

impl Reliability {
    pub const fn label(self) -> &'static str {
        match self {
            Reliability::High => "high",
            Reliability::Medium => "medium",
            Reliability::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Reliability::High),
            "medium" | "med" => Some(Reliability::Medium),
            "low" => Some(Reliability::Low),
            _ => None,
        }
    }
}

/// Record types found in a claims folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EvidenceKind {
    #[serde(rename = "STR")]
    ServiceTreatment,
    #[serde(rename = "SPR")]
    ServicePersonnel,
    ChargeSheet,
    CourtMartial,
    SeparationPacket,
    Lay,
    Treatment,
    #[default]
    Other,
}

impl EvidenceKind {
    /// Lenient parse; unrecognised kinds fall back to `Other`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "str" => EvidenceKind::ServiceTreatment,
            "spr" => EvidenceKind::ServicePersonnel,
            "chargesheet" | "charge sheet" => EvidenceKind::ChargeSheet,
            "courtmartial" | "court martial" | "court-martial" => EvidenceKind::CourtMartial,
            "separationpacket" | "separation packet" => EvidenceKind::SeparationPacket,
            "lay" => EvidenceKind::Lay,
            "treatment" => EvidenceKind::Treatment,
            _ => EvidenceKind::Other,
        }
    }
}

/// Where an evidence item was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EvidenceSource {
    #[serde(rename = "eFolder")]
    EFolder,
    #[serde(rename = "HENRY")]
    Henry,
    Upload,
    #[default]
    External,
}

impl EvidenceSource {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "efolder" => EvidenceSource::EFolder,
            "henry" => EvidenceSource::Henry,
            "upload" => EvidenceSource::Upload,
            _ => EvidenceSource::External,
        }
    }
}

/// Evidence record attached to a case. Gap items are requested but not yet obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub id: String,
    #[serde(default)]
    pub kind: EvidenceKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub source: EvidenceSource,
    pub reliability: Reliability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_gap: bool,
}

/// Plain counts over a case's evidence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSummary {
    pub total: usize,
    pub gaps: usize,
    /// Non-gap items per reliability; ratings with no items are absent.
    pub by_reliability: BTreeMap<Reliability, usize>,
}

/// Outstanding evidence requests and the resulting evidence completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapScan {
    pub detected_gaps: Vec<EvidenceItem>,
    pub completeness: u8,
}

const GAP_PENALTY: usize = 25;

pub(crate) fn summarize(items: &[EvidenceItem]) -> EvidenceSummary {
    let mut summary = EvidenceSummary {
        total: items.len(),
        ..EvidenceSummary::default()
    };

    for item in items {
        if item.is_gap {
            summary.gaps += 1;
        } else {
            *summary.by_reliability.entry(item.reliability).or_insert(0) += 1;
        }
    }

    summary
}

pub(crate) fn scan_gaps(items: &[EvidenceItem]) -> GapScan {
    let detected_gaps: Vec<EvidenceItem> =
        items.iter().filter(|item| item.is_gap).cloned().collect();
    let penalty = detected_gaps.len().saturating_mul(GAP_PENALTY);
    let completeness = 100usize.saturating_sub(penalty) as u8;

    GapScan {
        detected_gaps,
        completeness,
    }
}
