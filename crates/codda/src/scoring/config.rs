use serde::{Deserialize, Serialize};

use super::sections::DocumentSection;

pub const DEFAULT_MIN_SECTION_CHARS: usize = 100;

/// Thresholds applied when deciding whether a decision section is filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// A section must be strictly longer than this many characters after trimming.
    pub min_section_chars: usize,
    pub required_sections: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::with_min_chars(DEFAULT_MIN_SECTION_CHARS)
    }
}

impl ScoringConfig {
    pub fn with_min_chars(min_section_chars: usize) -> Self {
        Self {
            min_section_chars,
            required_sections: DocumentSection::all()
                .iter()
                .filter(|section| section.required())
                .map(|section| section.id().to_string())
                .collect(),
        }
    }

    pub fn is_required(&self, section_id: &str) -> bool {
        self.required_sections.iter().any(|id| id == section_id)
    }
}
