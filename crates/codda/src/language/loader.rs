use std::collections::HashSet;
use std::io::Read;

use super::domain::LanguageTemplate;

/// Failures raised while loading a catalog from an external file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read template catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid template catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("template id '{0}' appears more than once")]
    DuplicateId(String),
    #[error("template catalog is empty")]
    Empty,
}

pub(crate) fn parse_templates<R: Read>(reader: R) -> Result<Vec<LanguageTemplate>, CatalogError> {
    let templates: Vec<LanguageTemplate> = serde_json::from_reader(reader)?;
    if templates.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for template in &templates {
        if !seen.insert(template.id.as_str()) {
            return Err(CatalogError::DuplicateId(template.id.clone()));
        }
    }

    Ok(templates)
}
