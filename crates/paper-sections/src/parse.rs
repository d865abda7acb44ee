use regex::Regex;

/// One node of the section tree.
///
/// Children are strictly deeper than their parent. `intro` holds the text
/// between the section's own heading line and its first child's heading (or
/// the end of the section when childless), trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub level: usize,
    pub title: String,
    pub intro: String,
    pub children: Vec<Section>,
}

struct HeadingMatch {
    /// Offset of the `#` run at line start.
    start: usize,
    /// End of this section's span (next heading start or document end).
    end: usize,
    /// End of the heading line itself.
    heading_end: usize,
    level: usize,
    title: String,
}

/// Parse a flat heading-delimited document into a nested section tree.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let heading = Regex::new(r"(?m)^(#{1,6})[ \t]+(.+)").expect("heading pattern");

    let mut flat: Vec<HeadingMatch> = heading
        .captures_iter(text)
        .map(|captures| {
            let whole = captures.get(0).expect("whole match");
            HeadingMatch {
                start: whole.start(),
                end: text.len(),
                heading_end: whole.end(),
                level: captures[1].len(),
                title: clean_heading(&captures[2]),
            }
        })
        .collect();

    if flat.is_empty() {
        return Vec::new();
    }

    for index in 1..flat.len() {
        flat[index - 1].end = flat[index].start;
    }

    build_tree(&flat, text)
}

/// Drop `{...}` annotation suffixes pandoc attaches to headings
/// (cross-reference ids, attribute lists) and trim.
fn clean_heading(raw: &str) -> String {
    let annotation = Regex::new(r"\{[^}]*\}").expect("annotation pattern");
    annotation.replace_all(raw, "").trim().to_string()
}

/// Single left-to-right pass: a node consumes every immediately following
/// heading that is strictly deeper as its descendant subtree.
fn build_tree(items: &[HeadingMatch], text: &str) -> Vec<Section> {
    let mut result = Vec::new();
    let mut index = 0;

    while index < items.len() {
        let node = &items[index];

        let mut next = index + 1;
        while next < items.len() && items[next].level > node.level {
            next += 1;
        }
        let descendants = &items[index + 1..next];

        let intro_end = descendants.first().map(|d| d.start).unwrap_or(node.end);
        let intro = text[node.heading_end..intro_end].trim().to_string();

        result.push(Section {
            level: node.level,
            title: node.title.clone(),
            intro,
            children: build_tree(descendants, text),
        });

        index = next;
    }

    result
}
