use serde::Serialize;

/// A regulatory analysis track a character of discharge decision can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RulePath {
    pub id: &'static str,
    pub citation: &'static str,
    pub label: &'static str,
    pub branches: &'static [&'static str],
    pub requires_insanity_check: bool,
    pub requires_compelling_circumstances: bool,
    pub description: &'static str,
}

const MISCONDUCT: RulePath = RulePath {
    id: "rp-1",
    citation: "38 CFR 3.12(d)",
    label: "3.12(d) - Pattern of Misconduct",
    branches: &["3.12(d)(1)", "3.12(d)(2)"],
    requires_insanity_check: true,
    requires_compelling_circumstances: true,
    description: "Discharge under dishonorable conditions due to pattern of misconduct",
};

const INSANITY: RulePath = RulePath {
    id: "rp-2",
    citation: "38 CFR 3.354",
    label: "3.354 - Insanity Exception",
    branches: &["3.354(a)", "3.354(b)"],
    requires_insanity_check: true,
    requires_compelling_circumstances: false,
    description: "Exception for insanity during service period",
};

const HEALTHCARE: RulePath = RulePath {
    id: "rp-3",
    citation: "38 CFR 3.360",
    label: "3.360 - Healthcare Eligibility",
    branches: &["3.360(a)", "3.360(c)"],
    requires_insanity_check: false,
    requires_compelling_circumstances: false,
    description: "Healthcare eligibility determination despite character of discharge bar",
};

static RULE_PATHS: [RulePath; 3] = [MISCONDUCT, INSANITY, HEALTHCARE];

const MISCONDUCT_CUES: [&str; 2] = ["misconduct", "awol"];
const INSANITY_CUES: [&str; 2] = ["mental", "insanity"];

pub fn rule_paths() -> &'static [RulePath] {
    &RULE_PATHS
}

/// Rule paths worth analysing for a set of service facts.
///
/// Misconduct or AWOL facts open the 3.12(d) path, mental health or insanity facts open
/// the 3.354 exception, and healthcare eligibility under 3.360 is always considered.
/// Cues match case-insensitively anywhere in a fact.
pub(crate) fn suggest_rule_paths<S: AsRef<str>>(facts: &[S]) -> Vec<&'static RulePath> {
    let facts: Vec<String> = facts
        .iter()
        .map(|fact| fact.as_ref().to_lowercase())
        .collect();
    let mentions = |cues: &[&str]| {
        facts
            .iter()
            .any(|fact| cues.iter().any(|cue| fact.contains(cue)))
    };

    let mut paths = Vec::with_capacity(RULE_PATHS.len());
    if mentions(&MISCONDUCT_CUES[..]) {
        paths.push(&RULE_PATHS[0]);
    }
    if mentions(&INSANITY_CUES[..]) {
        paths.push(&RULE_PATHS[1]);
    }
    paths.push(&RULE_PATHS[2]);
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(paths: &[&RulePath]) -> Vec<&'static str> {
        paths.iter().map(|path| path.id).collect()
    }

    #[test]
    fn healthcare_path_is_always_suggested() {
        let paths = suggest_rule_paths::<&str>(&[]);
        assert_eq!(ids(&paths), vec!["rp-3"]);
        assert_eq!(paths[0].citation, "38 CFR 3.360");
    }

    #[test]
    fn misconduct_and_mental_health_facts_open_their_paths() {
        let facts = [
            "Two periods of AWOL in 2014",
            "Diagnosed with a Mental health condition after deployment",
        ];
        assert_eq!(ids(&suggest_rule_paths(&facts)), vec!["rp-1", "rp-2", "rp-3"]);
    }

    #[test]
    fn one_fact_can_open_a_single_path() {
        let facts = vec!["Pattern of misconduct documented by command".to_string()];
        let paths = suggest_rule_paths(&facts);
        assert_eq!(ids(&paths), vec!["rp-1", "rp-3"]);
        assert!(paths[0].requires_compelling_circumstances);
    }

    #[test]
    fn catalog_cites_each_regulation_once() {
        let citations: Vec<_> = rule_paths().iter().map(|path| path.citation).collect();
        assert_eq!(citations, vec!["38 CFR 3.12(d)", "38 CFR 3.354", "38 CFR 3.360"]);
    }
}
