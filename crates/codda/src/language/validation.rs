use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::domain::LanguageTemplate;
use super::substitution::placeholders;

/// Data-quality finding raised while checking a template catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    /// Content carries a `[NAME]` token that `variables` does not declare.
    UndeclaredPlaceholder { template_id: String, name: String },
    /// `variables` declares a name that never appears in content.
    UnusedVariable { template_id: String, name: String },
    DuplicateId { template_id: String },
}

impl CatalogIssue {
    pub fn template_id(&self) -> &str {
        match self {
            CatalogIssue::UndeclaredPlaceholder { template_id, .. }
            | CatalogIssue::UnusedVariable { template_id, .. }
            | CatalogIssue::DuplicateId { template_id } => template_id,
        }
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::UndeclaredPlaceholder { template_id, name } => {
                write!(f, "{template_id}: placeholder [{name}] is not declared")
            }
            CatalogIssue::UnusedVariable { template_id, name } => {
                write!(f, "{template_id}: variable {name} never appears in content")
            }
            CatalogIssue::DuplicateId { template_id } => {
                write!(f, "{template_id}: id is used by more than one template")
            }
        }
    }
}

pub(crate) fn validate_templates(templates: &[LanguageTemplate]) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for template in templates {
        if !seen.insert(template.id.as_str()) {
            issues.push(CatalogIssue::DuplicateId {
                template_id: template.id.clone(),
            });
        }

        let tokens = placeholders(&template.content);
        for name in &tokens {
            if !template.variables.iter().any(|declared| declared == name) {
                issues.push(CatalogIssue::UndeclaredPlaceholder {
                    template_id: template.id.clone(),
                    name: name.clone(),
                });
            }
        }

        for declared in &template.variables {
            if !tokens.iter().any(|name| name == declared) {
                issues.push(CatalogIssue::UnusedVariable {
                    template_id: template.id.clone(),
                    name: declared.clone(),
                });
            }
        }
    }

    issues
}
