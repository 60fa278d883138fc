/// Top-level section names that mark a JSON file as a translation
/// dictionary during the fallback scan. A qualifying file must have at
/// least one of these as a top-level key, alongside at least one nested
/// object value.
pub fn section_vocabulary() -> Vec<&'static str> {
    vec![
        "common",
        "general",
        "buttons",
        "forms",
        "navigation",
        "errors",
    ]
}

/// Identifier names that are never translatable prose, no matter how they
/// are quoted in markup.
pub fn default_deny_list() -> Vec<&'static str> {
    vec![
        "className",
        "id",
        "key",
        "type",
        "style",
        "name",
        "value",
        "onClick",
        "onChange",
        "onSubmit",
        "src",
        "href",
        "alt",
    ]
}

/// Phrases that force-accept a candidate string as translatable when they
/// occur anywhere in it. Empty by default; callers add project phrasing.
pub fn default_notable_phrases() -> Vec<&'static str> {
    Vec::new()
}
