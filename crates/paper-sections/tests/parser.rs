use paper_sections::{parse_sections, Section};
use pretty_assertions::assert_eq;

#[test]
fn three_level_document_round_trips() {
    let text = "# One\n\nintro one\n\n## One-A\n\nchild a\n\n# Two\n\nintro two\n\n## Two-A\n\nchild b\n\n## Two-B\n\nchild c\n";

    let tree = parse_sections(text);
    assert_eq!(
        tree,
        vec![
            Section {
                level: 1,
                title: "One".into(),
                intro: "intro one".into(),
                children: vec![Section {
                    level: 2,
                    title: "One-A".into(),
                    intro: "child a".into(),
                    children: vec![],
                }],
            },
            Section {
                level: 1,
                title: "Two".into(),
                intro: "intro two".into(),
                children: vec![
                    Section {
                        level: 2,
                        title: "Two-A".into(),
                        intro: "child b".into(),
                        children: vec![],
                    },
                    Section {
                        level: 2,
                        title: "Two-B".into(),
                        intro: "child c".into(),
                        children: vec![],
                    },
                ],
            },
        ]
    );
}

#[test]
fn intro_stops_at_first_child() {
    let text = "# Top\nlead paragraph\n## Child\nbody\n### Grandchild\ndeep\n";
    let tree = parse_sections(text);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].intro, "lead paragraph");
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].intro, "body");
    assert_eq!(tree[0].children[0].children[0].intro, "deep");
}

#[test]
fn heading_annotations_are_cleaned() {
    let text = "# Introduction {#sec:intro}\n\ntext\n## Scope {.unnumbered}\nmore\n";
    let tree = parse_sections(text);
    assert_eq!(tree[0].title, "Introduction");
    assert_eq!(tree[0].children[0].title, "Scope");
}

#[test]
fn top_tier_is_the_minimum_level_present() {
    // A document rendered without level-1 headings still gets a flat top tier.
    let text = "## Alpha\na\n### Alpha-1\nnested\n## Beta\nb\n";
    let tree = parse_sections(text);

    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].title, "Alpha");
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[1].title, "Beta");
}

#[test]
fn level_jump_down_still_nests() {
    // 1 -> 4 -> 2: the 4 belongs under the 1, the 2 starts a new subtree
    // under the same 1.
    let text = "# Top\n\n#### Deep\nd\n## Shallower\ns\n";
    let tree = parse_sections(text);

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].children.len(), 2);
    assert_eq!(tree[0].children[0].title, "Deep");
    assert_eq!(tree[0].children[1].title, "Shallower");
}

#[test]
fn preamble_before_first_heading_is_ignored() {
    let text = "stray preamble text\n\n# First\nbody\n";
    let tree = parse_sections(text);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].intro, "body");
}
