//! Completeness heuristics for decision drafts and their evidence.
//!
//! Every function here is total: partial or missing input degrades to a lower score or
//! an empty summary and never to an error. Scores are advisory progress signals, not a
//! statement of legal sufficiency.

mod bias;
mod config;
pub mod evidence;
pub mod import;
mod lint;
mod outline;
mod policy;
mod rule_paths;
pub mod sections;

pub use bias::{BiasFinding, BiasReport, CONCLUSORY_TERMS};
pub use config::{ScoringConfig, DEFAULT_MIN_SECTION_CHARS};
pub use evidence::{
    EvidenceItem, EvidenceKind, EvidenceSource, EvidenceSummary, GapScan, Reliability,
};
pub use import::{import_evidence, import_evidence_path, EvidenceImportError};
pub use lint::{LintFlag, LintKind};
pub use outline::DraftOutline;
pub use policy::{QaStatus, ReadinessGates};
pub use rule_paths::{rule_paths, RulePath};
pub use sections::{DocumentSection, SectionCheck, SectionReport, SectionStatus};

use std::collections::BTreeMap;

/// Stateless scorer applying a [`ScoringConfig`] to section text and evidence.
#[derive(Debug, Clone, Default)]
pub struct CompletenessScorer {
    config: ScoringConfig,
}

impl CompletenessScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Share of required sections that are written out, as `0..=100`.
    pub fn score_sections(&self, sections: &BTreeMap<String, String>) -> u8 {
        self.section_report(sections).completeness
    }

    pub fn section_report(&self, sections: &BTreeMap<String, String>) -> SectionReport {
        sections::report_sections(sections, &self.config)
    }

    pub fn score_evidence(&self, items: &[EvidenceItem]) -> EvidenceSummary {
        evidence::summarize(items)
    }

    pub fn gap_scan(&self, items: &[EvidenceItem]) -> GapScan {
        evidence::scan_gaps(items)
    }

    /// Quality flags for a draft. `report` must come from [`Self::section_report`] over
    /// the same `sections`.
    pub fn lint(
        &self,
        sections: &BTreeMap<String, String>,
        report: &SectionReport,
        evidence: &[EvidenceItem],
    ) -> Vec<LintFlag> {
        lint::lint_case(sections, report, evidence, self.config.min_section_chars)
    }

    pub fn bias_scan(&self, text: &str) -> BiasReport {
        bias::scan_bias(text)
    }

    pub fn suggest_rule_paths<S: AsRef<str>>(&self, facts: &[S]) -> Vec<&'static RulePath> {
        rule_paths::suggest_rule_paths(facts)
    }

    pub fn readiness(
        &self,
        completeness: u8,
        ipr_required: bool,
        template_fidelity: bool,
    ) -> ReadinessGates {
        policy::decide_readiness(completeness, ipr_required, template_fidelity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(len: usize) -> String {
        "x".repeat(len)
    }

    fn all_required(text: &str) -> BTreeMap<String, String> {
        ScoringConfig::default()
            .required_sections
            .iter()
            .map(|id| (id.clone(), text.to_string()))
            .collect()
    }

    #[test]
    fn no_sections_scores_zero() {
        let scorer = CompletenessScorer::default();
        assert_eq!(scorer.score_sections(&BTreeMap::new()), 0);
    }

    #[test]
    fn fully_written_draft_scores_one_hundred() {
        let scorer = CompletenessScorer::default();
        assert_eq!(scorer.score_sections(&all_required(&filled(101))), 100);
    }

    #[test]
    fn threshold_is_exclusive() {
        let scorer = CompletenessScorer::default();
        assert_eq!(scorer.score_sections(&all_required(&filled(100))), 0);
    }

    #[test]
    fn placeholder_marker_blocks_completion() {
        let scorer = CompletenessScorer::default();
        let text = format!("{} [END_DATE]", filled(150));
        assert_eq!(scorer.score_sections(&all_required(&text)), 0);
    }

    #[test]
    fn half_of_required_sections_scores_fifty() {
        let mut config = ScoringConfig::with_min_chars(10);
        config.required_sections = vec![
            "issue".to_string(),
            "evidence".to_string(),
            "decision".to_string(),
            "reasons-bases".to_string(),
        ];
        let scorer = CompletenessScorer::new(config);

        let mut sections = BTreeMap::new();
        sections.insert("issue".to_string(), filled(20));
        sections.insert("evidence".to_string(), filled(20));
        sections.insert("decision".to_string(), "short".to_string());

        assert_eq!(scorer.score_sections(&sections), 50);
    }

    #[test]
    fn optional_sections_do_not_raise_the_score() {
        let scorer = CompletenessScorer::default();
        let mut sections = BTreeMap::new();
        sections.insert("favorable".to_string(), filled(500));
        sections.insert("issue".to_string(), filled(500));

        let report = scorer.section_report(&sections);
        assert_eq!(report.completeness, 20);
        assert_eq!(report.complete_count(), 1);
        let favorable = report
            .checks
            .iter()
            .find(|check| check.section == "favorable")
            .expect("favorable check");
        assert!(!favorable.required);
        assert_eq!(favorable.status, SectionStatus::Complete);
    }

    #[test]
    fn evidence_gap_count_matches_flags() {
        let scorer = CompletenessScorer::default();
        let empty = scorer.score_evidence(&[]);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.gaps, 0);
        assert!(empty.by_reliability.is_empty());
    }

    #[test]
    fn lint_reports_missing_placeholder_and_gap_findings() {
        let scorer = CompletenessScorer::default();
        let mut sections = all_required(&filled(150));
        sections.remove("decision");
        sections.insert("issue".to_string(), "From [START_DATE]".to_string());
        sections.insert("laws-regs".to_string(), "38 CFR 3.12".to_string());

        let evidence = vec![EvidenceItem {
            id: "ev-gap-1".to_string(),
            kind: EvidenceKind::Lay,
            title: "Command Statement".to_string(),
            date: None,
            source: EvidenceSource::External,
            reliability: Reliability::High,
            summary: Some("Statement from commanding officer".to_string()),
            tags: Vec::new(),
            is_gap: true,
        }];

        let report = scorer.section_report(&sections);
        let flags = scorer.lint(&sections, &report, &evidence);

        let kinds: Vec<_> = flags
            .iter()
            .map(|flag| (flag.kind, flag.section.as_str()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (LintKind::Warning, "ISSUE"),
                (LintKind::Info, "LAWS/REGS"),
                (LintKind::Error, "DECISION"),
                (LintKind::Warning, "EVIDENCE"),
            ]
        );
        assert_eq!(flags[0].id, "lint-1");
        assert_eq!(flags[3].message, "Missing evidence: Command Statement");
        assert_eq!(
            flags[3].suggestion.as_deref(),
            Some("Request: Statement from commanding officer")
        );
    }

    #[test]
    fn complete_draft_has_no_lint() {
        let scorer = CompletenessScorer::default();
        let sections = all_required(&filled(150));
        let report = scorer.section_report(&sections);
        assert!(scorer.lint(&sections, &report, &[]).is_empty());
    }

    #[test]
    fn conclusory_language_is_flagged_on_its_section() {
        let scorer = CompletenessScorer::default();
        let mut sections = all_required(&filled(150));
        sections.insert(
            "reasons-bases".to_string(),
            format!("The veteran clearly understood the orders. {}", filled(120)),
        );
        sections.insert(
            "decision".to_string(),
            format!("Obviously the bar applies. {}", filled(120)),
        );

        let report = scorer.section_report(&sections);
        let flags = scorer.lint(&sections, &report, &[]);

        let found: Vec<_> = flags
            .iter()
            .map(|flag| (flag.kind, flag.section.as_str(), flag.message.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                (LintKind::Warning, "DECISION", "Conclusory language: \"obviously\""),
                (LintKind::Warning, "REASONS & BASES", "Conclusory language: \"clearly\""),
            ]
        );
        assert_eq!(
            flags[1].suggestion.as_deref(),
            Some("Replace \"clearly\" with more neutral language")
        );
        assert_eq!(report.completeness, 100);
    }

    #[test]
    fn bias_scan_and_rule_paths_are_exposed_on_the_scorer() {
        let scorer = CompletenessScorer::default();
        assert_eq!(scorer.bias_scan("It is undoubtedly so.").score, 80);

        let paths = scorer.suggest_rule_paths(&["Found AWOL for 200 days"]);
        let citations: Vec<_> = paths.iter().map(|path| path.citation).collect();
        assert_eq!(citations, vec!["38 CFR 3.12(d)", "38 CFR 3.360"]);
    }
}
