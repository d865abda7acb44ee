use regex::Regex;

/// Derive a filesystem-safe directory name from a section title: lowercase,
/// non-word characters dropped, whitespace and underscores collapsed to
/// single hyphens, redundant hyphens collapsed, ends trimmed.
///
/// Pure: the same title always yields the same slug. May be empty; callers
/// substitute a placeholder.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();

    let strip = Regex::new(r"[^\w\s-]").expect("strip pattern");
    let hyphenate = Regex::new(r"[\s_]+").expect("hyphenate pattern");
    let collapse = Regex::new(r"-+").expect("collapse pattern");

    let stripped = strip.replace_all(&lowered, "");
    let hyphened = hyphenate.replace_all(&stripped, "-");
    let collapsed = collapse.replace_all(&hyphened, "-");

    collapsed.trim_matches('-').to_string()
}
