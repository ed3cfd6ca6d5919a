use serde::{Deserialize, Serialize};

/// Progress band shown for a draft's completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QaStatus {
    Incomplete,
    InProgress,
    ReviewReady,
    Complete,
}

impl QaStatus {
    pub fn from_completeness(completeness: u8) -> Self {
        match completeness {
            0..=29 => QaStatus::Incomplete,
            30..=69 => QaStatus::InProgress,
            70..=89 => QaStatus::ReviewReady,
            _ => QaStatus::Complete,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            QaStatus::Incomplete => "Incomplete",
            QaStatus::InProgress => "In Progress",
            QaStatus::ReviewReady => "Review Ready",
            QaStatus::Complete => "Complete",
        }
    }
}

const IPR_MIN_COMPLETENESS: u8 = 80;
const UPLOAD_MIN_COMPLETENESS: u8 = 90;

/// Gates controlling whether a draft may move to Individual Personnel Review or upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessGates {
    pub can_run_ipr: bool,
    pub can_upload: bool,
}

pub(crate) fn decide_readiness(
    completeness: u8,
    ipr_required: bool,
    template_fidelity: bool,
) -> ReadinessGates {
    ReadinessGates {
        can_run_ipr: ipr_required && completeness > IPR_MIN_COMPLETENESS,
        can_upload: template_fidelity && completeness > UPLOAD_MIN_COMPLETENESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_bands_match_thresholds() {
        assert_eq!(QaStatus::from_completeness(0), QaStatus::Incomplete);
        assert_eq!(QaStatus::from_completeness(29), QaStatus::Incomplete);
        assert_eq!(QaStatus::from_completeness(30), QaStatus::InProgress);
        assert_eq!(QaStatus::from_completeness(70), QaStatus::ReviewReady);
        assert_eq!(QaStatus::from_completeness(89), QaStatus::ReviewReady);
        assert_eq!(QaStatus::from_completeness(90), QaStatus::Complete);
        assert_eq!(QaStatus::from_completeness(100), QaStatus::Complete);
    }

    #[test]
    fn ipr_requires_flag_and_strictly_more_than_eighty() {
        assert!(!decide_readiness(80, true, true).can_run_ipr);
        assert!(decide_readiness(81, true, true).can_run_ipr);
        assert!(!decide_readiness(100, false, true).can_run_ipr);
    }

    #[test]
    fn upload_requires_template_fidelity() {
        assert!(!decide_readiness(100, false, false).can_upload);
        assert!(!decide_readiness(90, false, true).can_upload);
        assert!(decide_readiness(91, false, true).can_upload);
    }
}
