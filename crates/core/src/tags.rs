//! Tag normalization for the submission flow.

/// Turn the form's comma-separated tag string into a stored tag list.
///
/// Tags are trimmed, empty entries dropped, and duplicates within one
/// submission removed keeping the first occurrence. A string that yields
/// no tags (empty or whitespace/comma-only) produces `None` — an untagged
/// bug, not an empty list.
pub fn normalize_tags(raw: &str) -> Option<Vec<String>> {
    let mut tags: Vec<String> = Vec::new();

    for part in raw.split(',') {
        let tag = part.trim();
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        tags.push(tag.to_string());
    }

    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trims_and_drops_empty_entries() {
        assert_eq!(
            normalize_tags(" auth ,  login ,,  "),
            Some(vec!["auth".to_string(), "login".to_string()])
        );
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        assert_eq!(
            normalize_tags("ui, backend, ui"),
            Some(vec!["ui".to_string(), "backend".to_string()])
        );
    }

    #[test]
    fn entry_order_is_preserved() {
        assert_eq!(
            normalize_tags("zeta, alpha"),
            Some(vec!["zeta".to_string(), "alpha".to_string()])
        );
    }

    #[test]
    fn blank_input_yields_no_tags() {
        assert_eq!(normalize_tags(""), None);
        assert_eq!(normalize_tags("   "), None);
        assert_eq!(normalize_tags(" , ,, "), None);
    }
}
