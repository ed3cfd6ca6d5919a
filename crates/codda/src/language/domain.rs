use std::fmt;

use serde::{Deserialize, Serialize};

/// Decision section a language template is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Issue,
    Evidence,
    Regulations,
    Analysis,
    Decision,
    Reasoning,
    Favorable,
    Special,
}

impl TemplateCategory {
    const ALL: [TemplateCategory; 8] = [
        TemplateCategory::Issue,
        TemplateCategory::Evidence,
        TemplateCategory::Regulations,
        TemplateCategory::Analysis,
        TemplateCategory::Decision,
        TemplateCategory::Reasoning,
        TemplateCategory::Favorable,
        TemplateCategory::Special,
    ];

    /// Categories in the order the decision letter presents them.
    pub const fn all() -> &'static [TemplateCategory] {
        &Self::ALL
    }

    pub const fn key(self) -> &'static str {
        match self {
            TemplateCategory::Issue => "issue",
            TemplateCategory::Evidence => "evidence",
            TemplateCategory::Regulations => "regulations",
            TemplateCategory::Analysis => "analysis",
            TemplateCategory::Decision => "decision",
            TemplateCategory::Reasoning => "reasoning",
            TemplateCategory::Favorable => "favorable",
            TemplateCategory::Special => "special",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TemplateCategory::Issue => "Issue Statements",
            TemplateCategory::Evidence => "Evidence",
            TemplateCategory::Regulations => "Laws & Regulations",
            TemplateCategory::Analysis => "Analysis",
            TemplateCategory::Decision => "Decisions",
            TemplateCategory::Reasoning => "Reasons & Bases",
            TemplateCategory::Favorable => "Favorable Findings",
            TemplateCategory::Special => "Special Circumstances",
        }
    }

    /// Resolve a category key; unknown keys resolve to `None` rather than an error.
    pub fn from_key(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.key().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Pre-approved block of decision language with `[NAME]` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTemplate {
    pub id: String,
    pub category: TemplateCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub title: String,
    pub content: String,
    /// Declared placeholder names. Informational only; substitution does not consult it.
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(default)]
    pub regulations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Result of filling a template, with anything the caller left unfilled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTemplate {
    pub template_id: String,
    pub text: String,
    pub unresolved: Vec<String>,
}

impl RenderedTemplate {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}
