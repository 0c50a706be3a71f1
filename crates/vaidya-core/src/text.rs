/// Entity-encode the five characters that can break out of HTML text or
/// attribute context. Display text coming from the backend is untrusted.
#[must_use]
pub fn escape_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Canonical record identity used for intersection and match-info keying.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[must_use]
pub fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut out = Vec::<String>::with_capacity(values.len());
    let mut seen = std::collections::HashSet::<String>::new();
    for value in values {
        if seen.insert(normalize_name(&value)) {
            out.push(value);
        }
    }
    out
}

/// Split a comma-joined ingredient list into trimmed, non-empty tokens.
#[must_use]
pub fn split_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_replaces_all_five_entities() {
        let raw = "a&b<c>d\"'x";
        assert_eq!(escape_html(raw), "a&amp;b&lt;c&gt;d&quot;&#39;x");
    }

    #[test]
    fn escape_html_is_identity_for_plain_text() {
        let raw = "boil tulsi and ginger";
        assert_eq!(escape_html(raw), raw);
    }

    #[test]
    fn normalize_name_trims_and_lowercases() {
        assert_eq!(normalize_name("  Tulsi Tea "), "tulsi tea");
    }

    #[test]
    fn dedup_preserving_order_keeps_first_spelling() {
        let values = vec![
            "Turmeric".to_string(),
            "ginger".to_string(),
            "turmeric ".to_string(),
        ];
        assert_eq!(
            dedup_preserving_order(values),
            vec!["Turmeric".to_string(), "ginger".to_string()]
        );
    }

    #[test]
    fn split_ingredient_list_drops_blank_tokens() {
        assert_eq!(
            split_ingredient_list(" tulsi , ,ginger,"),
            vec!["tulsi".to_string(), "ginger".to_string()]
        );
    }
}
