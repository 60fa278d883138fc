use crate::config::{default_deny_list, default_notable_phrases};
use crate::dict::DictionarySet;
use crate::tree::flatten;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which filter rule rejected a candidate string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    TooShort,
    TimeLike,
    DateLike,
    UrlLike,
    HexColor,
    CssClassLike,
    DeniedIdentifier,
    MarkupSyntax,
    NotProse,
}

impl RejectReason {
    /// Stable kebab-case label, usable in host display and test assertions
    pub fn label(&self) -> &'static str {
        match self {
            RejectReason::TooShort => "too-short",
            RejectReason::TimeLike => "time-like",
            RejectReason::DateLike => "date-like",
            RejectReason::UrlLike => "url-like",
            RejectReason::HexColor => "hex-color",
            RejectReason::CssClassLike => "css-class-like",
            RejectReason::DeniedIdentifier => "denied-identifier",
            RejectReason::MarkupSyntax => "markup-syntax",
            RejectReason::NotProse => "not-prose",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of classifying a candidate literal string from markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Translatable prose with no existing dictionary entry
    TranslatableNew,
    /// Translatable prose already present under these keys
    TranslatableExisting { keys: Vec<String> },
    /// Structural or code noise, with the rule that rejected it
    NotTranslatable { reason: RejectReason },
}

/// Heuristic classifier separating translatable prose from structural noise.
///
/// The rule set is compiled once at construction; `classify` is then pure:
/// same text and dictionary state always produce the same verdict.
pub struct Classifier {
    deny_list: Vec<String>,
    notable_phrases: Vec<String>,
    time: Regex,
    date: Regex,
    hex_color: Regex,
    css_class: Regex,
    no_phrase: Regex,
    add_phrase: Regex,
    prose: Regex,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            deny_list: default_deny_list().iter().map(|s| s.to_string()).collect(),
            notable_phrases: default_notable_phrases()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            time: Regex::new(r"^\d{1,2}:\d{2}(?::\d{2})?$").unwrap(),
            date: Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4}$").unwrap(),
            hex_color: Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap(),
            css_class: Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)+$").unwrap(),
            no_phrase: Regex::new(r"(?i)^no\s+\w+").unwrap(),
            add_phrase: Regex::new(r"(?i)^add\s+a\s+\w+").unwrap(),
            prose: Regex::new(r"(?i)[a-z][a-z\s]+").unwrap(),
        }
    }

    /// Extend the identifier deny-list with caller-specific names
    pub fn with_deny_list(mut self, extra: Vec<String>) -> Self {
        self.deny_list.extend(extra);
        self
    }

    /// Add phrases that force-accept any text containing them
    pub fn with_notable_phrases(mut self, extra: Vec<String>) -> Self {
        self.notable_phrases.extend(extra);
        self
    }

    /// Run the filter chain alone, without a dictionary lookup. Returns the
    /// first rule that rejects the text, or `None` when it passes.
    pub fn filter(&self, text: &str) -> Option<RejectReason> {
        let trimmed = text.trim();

        if trimmed.chars().count() <= 1 {
            return Some(RejectReason::TooShort);
        }

        if self.time.is_match(trimmed) {
            return Some(RejectReason::TimeLike);
        }
        if self.date.is_match(trimmed) {
            return Some(RejectReason::DateLike);
        }
        if trimmed.starts_with("http") || trimmed.starts_with("www.") {
            return Some(RejectReason::UrlLike);
        }
        if self.hex_color.is_match(trimmed) {
            return Some(RejectReason::HexColor);
        }
        if self.css_class.is_match(trimmed) {
            return Some(RejectReason::CssClassLike);
        }
        if self.deny_list.iter().any(|d| d == trimmed) {
            return Some(RejectReason::DeniedIdentifier);
        }

        if trimmed.contains('<') || trimmed.contains('{') || trimmed.contains('}') {
            return Some(RejectReason::MarkupSyntax);
        }

        // Positive overrides: common UI-phrase shapes always pass
        if self.no_phrase.is_match(trimmed)
            || self.add_phrase.is_match(trimmed)
            || trimmed.eq_ignore_ascii_case("total")
            || self
                .notable_phrases
                .iter()
                .any(|p| trimmed.contains(p.as_str()))
        {
            return None;
        }

        if self.prose.is_match(trimmed) {
            None
        } else {
            Some(RejectReason::NotProse)
        }
    }

    /// Classify a candidate string and cross-reference accepted text against
    /// the reference language, collecting every key whose leaf value equals
    /// the text (both sides trimmed).
    pub fn classify(&self, text: &str, dictionaries: &DictionarySet) -> Verdict {
        if let Some(reason) = self.filter(text) {
            return Verdict::NotTranslatable { reason };
        }

        let trimmed = text.trim();
        let keys: Vec<String> = match dictionaries.reference() {
            Some(dict) => flatten(&dict.tree)
                .into_iter()
                .filter(|e| e.value.trim() == trimmed)
                .map(|e| e.key)
                .collect(),
            None => Vec::new(),
        };

        if keys.is_empty() {
            Verdict::TranslatableNew
        } else {
            Verdict::TranslatableExisting { keys }
        }
    }
}
