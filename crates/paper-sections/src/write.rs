use std::fs;
use std::path::Path;

use crate::error::SectionResult;
use crate::parse::Section;
use crate::slug::slugify;

/// Slug substrings that identify a concluding section. A slug like
/// `inconclusive-results` contains neither and is not a boundary.
const CONCLUSION_KEYWORDS: &[&str] = &["conclusion", "concluding"];

/// Directory name for top-level siblings relocated past the conclusion.
const APPENDIX_SLUG: &str = "appendix";

/// Placeholder directory name when a title slugs to nothing.
const EMPTY_SLUG_FALLBACK: &str = "section";

/// Serialize a section tree into nested directories under `out_dir`.
///
/// Each section becomes `{sibling-index}_{slug}/`, its intro (when non-empty)
/// written as a Markdown file of the same name inside it, its children
/// recursing below. At the top level only, every sibling strictly after the
/// first conclusion-titled section is redirected into a synthetic
/// `{boundary-index + 1}_appendix/` bucket, indices restarting at zero.
pub fn write_sections(sections: &[Section], out_dir: &Path) -> SectionResult<()> {
    let boundary = sections
        .iter()
        .position(|section| is_conclusion_slug(&slugify(&section.title)));

    match boundary {
        Some(index) if index + 1 < sections.len() => {
            write_level(&sections[..=index], out_dir)?;

            let bucket = out_dir.join(format!("{}_{APPENDIX_SLUG}", index + 1));
            fs::create_dir_all(&bucket)?;
            write_level(&sections[index + 1..], &bucket)
        }
        _ => write_level(sections, out_dir),
    }
}

fn is_conclusion_slug(slug: &str) -> bool {
    CONCLUSION_KEYWORDS
        .iter()
        .any(|keyword| slug.contains(keyword))
}

fn write_level(sections: &[Section], parent: &Path) -> SectionResult<()> {
    for (index, section) in sections.iter().enumerate() {
        let mut slug = slugify(&section.title);
        if slug.is_empty() {
            slug = EMPTY_SLUG_FALLBACK.to_string();
        }

        let prefixed = format!("{index}_{slug}");
        let section_dir = parent.join(&prefixed);
        fs::create_dir_all(&section_dir)?;

        if !section.intro.is_empty() {
            let content = format!("# {}\n\n{}\n", section.title, section.intro);
            fs::write(section_dir.join(format!("{prefixed}.md")), content)?;
        }

        write_level(&section.children, &section_dir)?;
    }

    Ok(())
}
