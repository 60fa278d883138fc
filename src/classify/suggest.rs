use regex::Regex;

/// Ordered override table mapping common UI phrase shapes to fixed
/// namespaced keys. First matching rule wins.
fn override_rules() -> Vec<(Regex, &'static str)> {
    vec![
        (
            Regex::new(r"(?i)^no\s+.*\b(?:found|entries)\b").unwrap(),
            "timeEntry.noEntries",
        ),
        (
            Regex::new(r"(?i)^add\s+a\s+(?:new\s+)?entry\b").unwrap(),
            "timeEntry.addNewEntry",
        ),
        (Regex::new(r"(?i)^total$").unwrap(), "common.total"),
    ]
}

/// Propose a dot-path key name for a piece of free text.
///
/// Tries the override table first, then falls back to a generic slug:
/// lowercase, punctuation stripped, whitespace runs turned into `.`, capped
/// at 3 segments and prefixed with `ui.`. Advisory only; the caller may
/// always override the suggestion.
pub fn suggest_key(text: &str) -> String {
    let trimmed = text.trim();

    for (pattern, key) in override_rules() {
        if pattern.is_match(trimmed) {
            return key.to_string();
        }
    }

    slug(trimmed)
}

fn slug(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    let segments: Vec<&str> = cleaned.split_whitespace().collect();
    if segments.is_empty() {
        return "ui.text".to_string();
    }

    let kept = if segments.len() > 3 {
        &segments[..3]
    } else {
        &segments[..]
    };
    format!("ui.{}", kept.join("."))
}
