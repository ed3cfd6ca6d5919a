use std::collections::HashMap;

/// Replace every `[KEY]` token in `content` with the mapped value.
///
/// The template is scanned once and each token is looked up in the mapping, so inserted
/// values are copied verbatim and never matched again, whatever order the keys arrive in.
/// Matching is literal and case-sensitive. Keys that never appear are ignored and tokens
/// without a value stay in place. When a key repeats, the last value wins.
pub fn apply_substitution<I, K, V>(content: &str, values: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let values: HashMap<String, String> = values
        .into_iter()
        .map(|(key, value)| (key.as_ref().to_string(), value.as_ref().to_string()))
        .collect();
    if values.is_empty() {
        return content.to_string();
    }

    let mut result = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(open) = rest.find('[') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(|ch: char| matches!(ch, '[' | ']' | '\n')) {
            Some(close) if after[close..].starts_with(']') => {
                let name = &after[..close];
                match values.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        result.push('[');
                        result.push_str(name);
                        result.push(']');
                    }
                }
                rest = &after[close + 1..];
            }
            Some(close) => {
                result.push('[');
                result.push_str(&after[..close]);
                rest = &after[close..];
            }
            None => {
                result.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

/// Bracketed placeholder names in order of first appearance, without duplicates.
///
/// A token is any `[...]` run on a single line with a non-blank body and no nested
/// opening bracket.
pub fn placeholders(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in scan_tokens(content) {
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Placeholders still present in already-substituted text.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    placeholders(text)
}

pub(crate) fn has_placeholder_marker(text: &str) -> bool {
    text.contains('[')
}

fn scan_tokens(content: &str) -> impl Iterator<Item = &str> {
    content.lines().flat_map(|line| {
        let mut tokens = Vec::new();
        let mut rest = line;
        while let Some(open) = rest.find('[') {
            let after = &rest[open + 1..];
            match after.find(|ch: char| ch == ']' || ch == '[') {
                Some(close) if after[close..].starts_with(']') => {
                    let body = &after[..close];
                    if !body.trim().is_empty() {
                        tokens.push(body);
                    }
                    rest = &after[close + 1..];
                }
                Some(close) => rest = &after[close..],
                None => break,
            }
        }
        tokens
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = apply_substitution("[A] and [A]", &values(&[("A", "Z")]));
        assert_eq!(out, "Z and Z");
    }

    #[test]
    fn leaves_unmapped_placeholders_intact() {
        let out = apply_substitution("[A] [B]", &values(&[("A", "1")]));
        assert_eq!(out, "1 [B]");
    }

    #[test]
    fn empty_mapping_is_identity() {
        let content = "No placeholders here.";
        assert_eq!(apply_substitution(content, &BTreeMap::<String, String>::new()), content);
        let with_tokens = "Keep [THIS] as is";
        assert_eq!(
            apply_substitution(with_tokens, &BTreeMap::<String, String>::new()),
            with_tokens
        );
    }

    #[test]
    fn keys_are_case_sensitive() {
        let out = apply_substitution("[name] [NAME]", &values(&[("NAME", "Doe")]));
        assert_eq!(out, "[name] Doe");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let out = apply_substitution("Dated [DATE].", &values(&[("BRANCH", "Army")]));
        assert_eq!(out, "Dated [DATE].");
    }

    #[test]
    fn keys_with_slashes_are_literal() {
        let out = apply_substitution(
            "diagnosed with [PTSD/OTHER_CONDITION]",
            &values(&[("PTSD/OTHER_CONDITION", "PTSD")]),
        );
        assert_eq!(out, "diagnosed with PTSD");
    }

    #[test]
    fn accepts_borrowed_pairs() {
        let out = apply_substitution("[A]-[B]", [("A", "x"), ("B", "y")]);
        assert_eq!(out, "x-y");
    }

    #[test]
    fn inserted_values_are_not_substituted_again() {
        let out = apply_substitution("[A] and [B]", &values(&[("A", "[B]"), ("B", "x")]));
        assert_eq!(out, "[B] and x");

        let reversed = apply_substitution("[A] and [B]", [("B", "x"), ("A", "[B]")]);
        assert_eq!(reversed, "[B] and x");
    }

    #[test]
    fn nested_and_unclosed_brackets_survive_substitution() {
        let out = apply_substitution("[[INNER]] and [open", &values(&[("INNER", "x")]));
        assert_eq!(out, "[x] and [open");
        assert_eq!(
            apply_substitution("[FIRST\nSECOND]", &values(&[("FIRST\nSECOND", "x")])),
            "[FIRST\nSECOND]"
        );
    }

    #[test]
    fn placeholders_are_ordered_and_unique() {
        let names = placeholders("from [START] to [END], again [START]");
        assert_eq!(names, vec!["START".to_string(), "END".to_string()]);
    }

    #[test]
    fn placeholders_skip_empty_and_unclosed_brackets() {
        assert!(placeholders("[] and [ ] and [open").is_empty());
        assert_eq!(placeholders("[[INNER]]"), vec!["INNER".to_string()]);
    }

    #[test]
    fn placeholders_do_not_span_lines() {
        assert!(placeholders("[FIRST\nSECOND]").is_empty());
    }

    #[test]
    fn unresolved_reports_leftovers_after_substitution() {
        let out = apply_substitution("[A] [B] [C]", &values(&[("B", "ok")]));
        assert_eq!(
            unresolved_placeholders(&out),
            vec!["A".to_string(), "C".to_string()]
        );
    }
}
