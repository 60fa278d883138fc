use crate::tree::FlatEntry;
use serde::{Deserialize, Serialize};

/// Whether a segment candidate has descendants of its own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateKind {
    /// The candidate path has keys below it
    Category,
    /// The candidate path is a complete key
    Leaf,
}

/// One completion suggestion: the input extended by a single path segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Full dot-path up to and including the suggested segment
    pub path: String,
    pub kind: CandidateKind,
}

/// Result of completing a partial dot-path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Next-segment candidates, in dictionary declaration order
    pub candidates: Vec<Candidate>,
    /// The value when the partial already names a complete key
    pub exact: Option<String>,
}

/// Compute next-segment completion candidates for a partial dot-path.
///
/// A trailing `.` on the partial is stripped for comparison only. Candidates
/// come out in the order their keys appear in `entries` (dictionary
/// declaration order), never re-sorted. A partial that names a complete key
/// AND has descendants surfaces both the exact value and the descendant
/// candidates.
pub fn complete(partial: &str, entries: &[FlatEntry]) -> Completion {
    let normalized = partial.strip_suffix('.').unwrap_or(partial);

    if normalized.is_empty() {
        return complete_top_level(entries);
    }

    let segments: Vec<&str> = normalized.split('.').collect();
    let mut exact = None;
    let mut filtered: Vec<&FlatEntry> = Vec::new();

    for entry in entries {
        if entry.key == normalized {
            exact = Some(entry.value.clone());
            continue;
        }
        if !entry.key.starts_with(normalized) {
            continue;
        }
        // Strict per-segment verification: "form" must not match "formal.x"
        let key_segments: Vec<&str> = entry.key.split('.').collect();
        if key_segments.len() > segments.len() && key_segments[..segments.len()] == segments[..] {
            filtered.push(entry);
        }
    }

    let mut candidates: Vec<Candidate> = Vec::new();
    for entry in &filtered {
        let next = entry.key.split('.').nth(segments.len()).unwrap();
        let path = format!("{}.{}", normalized, next);
        if candidates.iter().any(|c| c.path == path) {
            continue;
        }

        let descendant_prefix = format!("{}.", path);
        let kind = if filtered
            .iter()
            .any(|e| e.key.starts_with(&descendant_prefix))
        {
            CandidateKind::Category
        } else {
            CandidateKind::Leaf
        };
        candidates.push(Candidate { path, kind });
    }

    Completion { candidates, exact }
}

/// Empty partial: candidates are the distinct first segments of every key.
/// A segment derived from key K is a category iff some key other than K
/// starts with `segment.`.
fn complete_top_level(entries: &[FlatEntry]) -> Completion {
    let mut candidates: Vec<Candidate> = Vec::new();

    for entry in entries {
        let first = entry.key.split('.').next().unwrap();
        if candidates.iter().any(|c| c.path == first) {
            continue;
        }

        let descendant_prefix = format!("{}.", first);
        let kind = if entries
            .iter()
            .any(|e| e.key != entry.key && e.key.starts_with(&descendant_prefix))
        {
            CandidateKind::Category
        } else {
            CandidateKind::Leaf
        };
        candidates.push(Candidate {
            path: first.to_string(),
            kind,
        });
    }

    Completion {
        candidates,
        exact: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> Vec<FlatEntry> {
        pairs
            .iter()
            .map(|(k, v)| FlatEntry {
                key: k.to_string(),
                value: v.to_string(),
            })
            .collect()
    }

    fn paths(completion: &Completion) -> Vec<&str> {
        completion
            .candidates
            .iter()
            .map(|c| c.path.as_str())
            .collect()
    }

    #[test]
    fn test_trailing_dot_segment_candidates() {
        let all = entries(&[("common.save", "Save"), ("common.cancel", "Cancel")]);
        let completion = complete("common.", &all);

        assert_eq!(paths(&completion), ["common.save", "common.cancel"]);
        assert!(completion
            .candidates
            .iter()
            .all(|c| c.kind == CandidateKind::Leaf));
        assert_eq!(completion.exact, None);
    }

    #[test]
    fn test_empty_partial_top_level_tags() {
        let all = entries(&[("a.x", "1"), ("a.y", "2"), ("b.z", "3")]);
        let completion = complete("", &all);

        assert_eq!(paths(&completion), ["a", "b"]);
        assert_eq!(completion.candidates[0].kind, CandidateKind::Category);
        assert_eq!(completion.candidates[1].kind, CandidateKind::Leaf);
    }

    #[test]
    fn test_empty_partial_bare_key() {
        let all = entries(&[("title", "Title")]);
        let completion = complete("", &all);

        assert_eq!(paths(&completion), ["title"]);
        assert_eq!(completion.candidates[0].kind, CandidateKind::Leaf);
    }

    #[test]
    fn test_segment_prefix_is_not_string_prefix() {
        // "form" must not complete into "formal.x"
        let all = entries(&[("formal.x", "1"), ("form.y", "2")]);
        let completion = complete("form", &all);

        assert_eq!(paths(&completion), ["form.y"]);
    }

    #[test]
    fn test_exact_match_returned() {
        let all = entries(&[("common.save", "Save")]);
        let completion = complete("common.save", &all);

        assert_eq!(completion.exact.as_deref(), Some("Save"));
        assert!(completion.candidates.is_empty());
    }

    #[test]
    fn test_exact_match_with_trailing_dot() {
        // Normalization strips one trailing dot before the exact comparison
        let all = entries(&[("common.save", "Save")]);
        let completion = complete("common.save.", &all);

        assert_eq!(completion.exact.as_deref(), Some("Save"));
    }

    #[test]
    fn test_leaf_and_node_duality_surfaces_both() {
        // Ill-formed but possible: a.b is a leaf AND has descendants
        let all = entries(&[("a.b", "x"), ("a.b.c", "y")]);
        let completion = complete("a.b", &all);

        assert_eq!(completion.exact.as_deref(), Some("x"));
        assert_eq!(paths(&completion), ["a.b.c"]);
        assert_eq!(completion.candidates[0].kind, CandidateKind::Leaf);
    }

    #[test]
    fn test_category_tag_for_deeper_keys() {
        let all = entries(&[
            ("forms.labels.email", "Email"),
            ("forms.labels.phone", "Phone"),
            ("forms.title", "Form"),
        ]);
        let completion = complete("forms", &all);

        assert_eq!(paths(&completion), ["forms.labels", "forms.title"]);
        assert_eq!(completion.candidates[0].kind, CandidateKind::Category);
        assert_eq!(completion.candidates[1].kind, CandidateKind::Leaf);
    }

    #[test]
    fn test_candidates_deduplicated_in_flatten_order() {
        let all = entries(&[
            ("nav.home", "Home"),
            ("nav.about", "About"),
            ("nav.home.icon", "house"),
        ]);
        let completion = complete("nav.", &all);

        assert_eq!(paths(&completion), ["nav.home", "nav.about"]);
        // nav.home has a descendant among the filtered keys
        assert_eq!(completion.candidates[0].kind, CandidateKind::Category);
        assert_eq!(completion.candidates[1].kind, CandidateKind::Leaf);
    }

    #[test]
    fn test_no_matches_empty_completion() {
        let all = entries(&[("common.save", "Save")]);
        let completion = complete("missing.path", &all);

        assert!(completion.candidates.is_empty());
        assert_eq!(completion.exact, None);
    }

    #[test]
    fn test_candidates_are_prefix_consistent() {
        // Every candidate must itself extend to some real key
        let all = entries(&[
            ("a.b.c", "1"),
            ("a.b.d", "2"),
            ("a.e", "3"),
            ("f.g", "4"),
        ]);
        let completion = complete("a", &all);

        for candidate in &completion.candidates {
            let prefix = format!("{}.", candidate.path);
            assert!(
                all.iter()
                    .any(|e| e.key == candidate.path || e.key.starts_with(&prefix)),
                "candidate {} does not extend to a real key",
                candidate.path
            );
        }
    }
}
