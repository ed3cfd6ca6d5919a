use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::evidence::{EvidenceItem, EvidenceKind, EvidenceSource, Reliability};

/// Errors raised while reading an evidence register export.
#[derive(Debug, thiserror::Error)]
pub enum EvidenceImportError {
    #[error("failed to read evidence register: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid evidence register CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown reliability '{value}' (expected high, medium, or low)")]
    InvalidReliability { row: usize, value: String },
    #[error("row {row}: date '{value}' is not YYYY-MM-DD")]
    InvalidDate { row: usize, value: String },
}

pub fn import_evidence_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<EvidenceItem>, EvidenceImportError> {
    let file = std::fs::File::open(path)?;
    import_evidence(file)
}

/// Parse an evidence register with the columns
/// `Id, Kind, Title, Date, Source, Reliability, Summary, Gap`.
pub fn import_evidence<R: Read>(reader: R) -> Result<Vec<EvidenceItem>, EvidenceImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut items = Vec::new();

    for (index, record) in csv_reader.deserialize::<EvidenceRow>().enumerate() {
        let row = record?;
        // Header is line 1.
        items.push(row.into_item(index + 2)?);
    }

    Ok(items)
}

#[derive(Debug, Deserialize)]
struct EvidenceRow {
    #[serde(rename = "Id")]
    id: String,
    #[serde(rename = "Kind", default, deserialize_with = "empty_string_as_none")]
    kind: Option<String>,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Date", default, deserialize_with = "empty_string_as_none")]
    date: Option<String>,
    #[serde(rename = "Source", default, deserialize_with = "empty_string_as_none")]
    source: Option<String>,
    #[serde(rename = "Reliability")]
    reliability: String,
    #[serde(rename = "Summary", default, deserialize_with = "empty_string_as_none")]
    summary: Option<String>,
    #[serde(rename = "Gap", default, deserialize_with = "empty_string_as_none")]
    gap: Option<String>,
}

impl EvidenceRow {
    fn into_item(self, row: usize) -> Result<EvidenceItem, EvidenceImportError> {
        let reliability = Reliability::parse(&self.reliability).ok_or_else(|| {
            EvidenceImportError::InvalidReliability {
                row,
                value: self.reliability.clone(),
            }
        })?;

        let date = match self.date {
            Some(raw) => Some(NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                EvidenceImportError::InvalidDate {
                    row,
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(EvidenceItem {
            id: self.id,
            kind: self
                .kind
                .as_deref()
                .map(EvidenceKind::parse)
                .unwrap_or_default(),
            title: self.title,
            date,
            source: self
                .source
                .as_deref()
                .map(EvidenceSource::parse)
                .unwrap_or_default(),
            reliability,
            summary: self.summary,
            tags: Vec::new(),
            is_gap: self.gap.as_deref().map(truthy).unwrap_or(false),
        })
    }
}

fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "x" | "gap"
    )
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
