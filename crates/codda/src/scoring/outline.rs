use std::collections::BTreeMap;

use super::sections::DocumentSection;

/// Section map recovered from a `## HEADING` style draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftOutline {
    sections: BTreeMap<String, String>,
}

impl DraftOutline {
    /// Split `text` on level-two headings.
    ///
    /// Known headings map onto their section id, anything else is kept under a slug of
    /// the heading. Text before the first heading is dropped and repeated headings are
    /// concatenated.
    pub fn parse(text: &str) -> Self {
        let mut sections: BTreeMap<String, String> = BTreeMap::new();
        let mut current: Option<(String, Vec<&str>)> = None;

        for line in text.lines() {
            if let Some(heading) = line.trim_start().strip_prefix("## ") {
                if let Some((id, body)) = current.take() {
                    push_section(&mut sections, id, &body);
                }
                current = Some((section_id_for(heading), Vec::new()));
            } else if let Some((_, body)) = current.as_mut() {
                body.push(line);
            }
        }

        if let Some((id, body)) = current {
            push_section(&mut sections, id, &body);
        }

        Self { sections }
    }

    pub fn sections(&self) -> &BTreeMap<String, String> {
        &self.sections
    }

    pub fn into_sections(self) -> BTreeMap<String, String> {
        self.sections
    }
}

fn push_section(sections: &mut BTreeMap<String, String>, id: String, body: &[&str]) {
    let text = body.join("\n").trim().to_string();
    sections
        .entry(id)
        .and_modify(|existing| {
            if !text.is_empty() {
                if !existing.is_empty() {
                    existing.push('\n');
                }
                existing.push_str(&text);
            }
        })
        .or_insert(text);
}

fn section_id_for(heading: &str) -> String {
    match DocumentSection::from_heading(heading) {
        Some(section) => section.id().to_string(),
        None => slugify(heading),
    }
}

fn slugify(heading: &str) -> String {
    let mut slug = String::new();
    for ch in heading.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
