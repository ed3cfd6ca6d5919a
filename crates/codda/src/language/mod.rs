//! Pre-approved decision language for Character of Discharge determinations.
//!
//! A [`TemplateLibrary`] is an immutable catalog built once at startup, either from
//! the built-in seeds or from a JSON file. Lookups never fail: unknown categories
//! list nothing and unknown ids resolve to `None`.

mod catalog;
pub mod domain;
mod loader;
pub mod substitution;
mod validation;

pub use domain::{LanguageTemplate, RenderedTemplate, TemplateCategory};
pub use loader::CatalogError;
pub use substitution::{apply_substitution, placeholders, unresolved_placeholders};
pub use validation::CatalogIssue;

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

/// Immutable template catalog with category and id lookups.
#[derive(Debug, Clone)]
pub struct TemplateLibrary {
    templates: Vec<LanguageTemplate>,
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateLibrary {
    pub fn builtin() -> Self {
        Self {
            templates: catalog::builtin_templates(),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let templates = loader::parse_templates(reader)?;
        debug!(count = templates.len(), "parsed template catalog");
        Ok(Self { templates })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let library = Self::from_json_reader(file)?;
        info!(path = %path.display(), templates = library.len(), "loaded template catalog");
        Ok(library)
    }

    /// Load from `path` when given, otherwise fall back to the built-in catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn templates(&self) -> &[LanguageTemplate] {
        &self.templates
    }

    /// Templates in `category`, in declaration order.
    pub fn by_category(&self, category: TemplateCategory) -> Vec<&LanguageTemplate> {
        self.templates
            .iter()
            .filter(|template| template.category == category)
            .collect()
    }

    /// Category lookup by key. Unknown keys yield an empty list.
    pub fn by_category_key(&self, key: &str) -> Vec<&LanguageTemplate> {
        TemplateCategory::from_key(key)
            .map(|category| self.by_category(category))
            .unwrap_or_default()
    }

    pub fn by_id(&self, id: &str) -> Option<&LanguageTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }

    /// Every citation referenced by the catalog, sorted and de-duplicated.
    pub fn regulation_citations(&self) -> BTreeSet<String> {
        self.templates
            .iter()
            .flat_map(|template| template.regulations.iter().cloned())
            .collect()
    }

    /// Distinct subcategories within `category`, in first-seen order.
    pub fn subcategories(&self, category: TemplateCategory) -> Vec<&str> {
        let mut subcategories: Vec<&str> = Vec::new();
        for template in self.by_category(category) {
            if let Some(sub) = template.subcategory.as_deref() {
                if !subcategories.contains(&sub) {
                    subcategories.push(sub);
                }
            }
        }
        subcategories
    }

    /// Case-insensitive title/content search within a category.
    ///
    /// An empty query matches everything; `subcategory`, when given, must match exactly.
    pub fn search(
        &self,
        category: TemplateCategory,
        query: &str,
        subcategory: Option<&str>,
    ) -> Vec<&LanguageTemplate> {
        let needle = query.trim().to_lowercase();
        self.by_category(category)
            .into_iter()
            .filter(|template| {
                needle.is_empty()
                    || template.title.to_lowercase().contains(&needle)
                    || template.content.to_lowercase().contains(&needle)
            })
            .filter(|template| match subcategory {
                Some(sub) => template.subcategory.as_deref() == Some(sub),
                None => true,
            })
            .collect()
    }

    /// Fill template `id` with `values`. Unknown ids resolve to `None`.
    pub fn render(&self, id: &str, values: &BTreeMap<String, String>) -> Option<RenderedTemplate> {
        let template = self.by_id(id)?;
        let text = apply_substitution(&template.content, values);
        let unresolved = unresolved_placeholders(&text);
        Some(RenderedTemplate {
            template_id: template.id.clone(),
            text,
            unresolved,
        })
    }

    /// Check declared variables against content tokens and ids for uniqueness.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let issues = validation::validate_templates(&self.templates);
        for issue in &issues {
            warn!(template = issue.template_id(), %issue, "catalog issue");
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn by_id_finds_every_template() {
        let library = TemplateLibrary::builtin();
        for template in library.templates() {
            assert_eq!(library.by_id(&template.id), Some(template));
        }
    }

    #[test]
    fn by_id_misses_return_none() {
        let library = TemplateLibrary::builtin();
        assert!(library.by_id("does-not-exist").is_none());
    }

    #[test]
    fn by_category_filters_and_keeps_order() {
        let library = TemplateLibrary::builtin();
        for category in TemplateCategory::all() {
            let templates = library.by_category(*category);
            assert!(templates.iter().all(|template| template.category == *category));
        }

        let ids: Vec<_> = library
            .by_category(TemplateCategory::Issue)
            .iter()
            .map(|template| template.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "issue-standard",
                "issue-multiple-periods",
                "issue-insanity",
                "issue-healthcare-eligibility",
            ]
        );
    }

    #[test]
    fn unknown_category_key_lists_nothing() {
        let library = TemplateLibrary::builtin();
        assert!(library.by_category_key("appendix").is_empty());
        assert_eq!(library.by_category_key("decision").len(), 4);
    }

    #[test]
    fn regulation_citations_are_sorted_and_unique() {
        let library = TemplateLibrary::builtin();
        let citations: Vec<_> = library.regulation_citations().into_iter().collect();
        assert_eq!(
            citations,
            vec![
                "38 CFR 3.12",
                "38 CFR 3.12(d)",
                "38 CFR 3.354",
                "38 CFR 3.360",
                "38 CFR 3.361",
                "38 U.S.C. § 1710",
                "38 U.S.C. § 5303",
                "M21-1, Part III, Subpart v, Chapter 1, Section B.7",
                "VAOPGCPREC 20-90",
            ]
        );
    }

    #[test]
    fn subcategories_are_distinct_in_first_seen_order() {
        let library = TemplateLibrary::builtin();
        assert_eq!(
            library.subcategories(TemplateCategory::Analysis),
            vec!["oth", "compelling", "insanity"]
        );
        assert!(library.subcategories(TemplateCategory::Favorable) == vec!["medical"]);
    }

    #[test]
    fn search_matches_title_or_content_case_insensitively() {
        let library = TemplateLibrary::builtin();
        let hits = library.search(TemplateCategory::Special, "DESERTION", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "special-desertion");

        let by_content = library.search(TemplateCategory::Evidence, "purple heart", None);
        assert_eq!(by_content.len(), 1);
        assert_eq!(by_content[0].id, "evidence-combat-related");
    }

    #[test]
    fn search_respects_subcategory_filter() {
        let library = TemplateLibrary::builtin();
        let favorable = library.search(TemplateCategory::Decision, "", Some("favorable"));
        assert_eq!(favorable.len(), 3);
        assert!(favorable
            .iter()
            .all(|template| template.subcategory.as_deref() == Some("favorable")));
    }

    #[test]
    fn render_without_variables_returns_content_unchanged() {
        let library = TemplateLibrary::builtin();
        let template = library
            .by_category(TemplateCategory::Decision)
            .into_iter()
            .find(|template| template.id == "decision-bar-to-benefits")
            .expect("bar to benefits template");
        assert!(template.variables.is_empty());

        let rendered = library
            .render("decision-bar-to-benefits", &BTreeMap::new())
            .expect("rendered");
        assert_eq!(rendered.text, template.content);
        assert!(rendered.is_complete());
    }

    #[test]
    fn render_reports_unresolved_placeholders() {
        let library = TemplateLibrary::builtin();
        let mut values = BTreeMap::new();
        values.insert("START_DATE".to_string(), "June 1, 2010".to_string());
        let rendered = library.render("issue-standard", &values).expect("rendered");
        assert!(rendered.text.starts_with(
            "Whether the character of discharge for the service period from June 1, 2010 to [END_DATE]"
        ));
        assert_eq!(rendered.unresolved, vec!["END_DATE".to_string()]);
        assert!(library.render("missing", &values).is_none());
    }

    #[test]
    fn builtin_catalog_validation_flags_known_defects() {
        let library = TemplateLibrary::builtin();
        let issues = library.validate();
        assert_eq!(issues.len(), 7);
        assert!(issues
            .iter()
            .all(|issue| matches!(issue, CatalogIssue::UndeclaredPlaceholder { .. })));
        assert!(issues.contains(&CatalogIssue::UndeclaredPlaceholder {
            template_id: "analysis-compelling-circumstances".to_string(),
            name: "He/She".to_string(),
        }));
        assert!(issues.contains(&CatalogIssue::UndeclaredPlaceholder {
            template_id: "special-desertion".to_string(),
            name: "If 180+ days".to_string(),
        }));
    }

    #[test]
    fn json_catalog_replaces_builtin_entries() {
        let json = r#"[
            {"id": "issue-local", "category": "issue", "title": "Local", "content": "For [STATION]", "variables": ["STATION"]}
        ]"#;
        let library = TemplateLibrary::from_json_reader(Cursor::new(json)).expect("loads");
        assert_eq!(library.len(), 1);
        assert!(library.by_id("issue-standard").is_none());
        assert!(library.validate().is_empty());
    }

    #[test]
    fn load_without_path_uses_builtin() {
        let library = TemplateLibrary::load(None).expect("builtin loads");
        assert_eq!(library.len(), 27);
    }
}
