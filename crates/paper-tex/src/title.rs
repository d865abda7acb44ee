use regex::Regex;

use crate::comment::{is_comment_line, strip_inline_comment};

/// Styling wrappers stripped from title text, innermost-last.
const STYLE_WRAPPER: &str = r"\\(?:textbf|textit|emph|textsc|texttt|textrm|textsf|mathrm|mathbf|underline)\{([^{}]*)\}";

/// Upper bound on unwrap passes so pathological nesting cannot loop.
const MAX_UNWRAP_PASSES: usize = 8;

/// Pull a plain-text title out of the `\title{...}` directive in raw,
/// unsanitized source. Returns `None` when no title directive is present;
/// the caller substitutes a fallback identifier.
pub fn extract_title(tex: &str) -> Option<String> {
    let open = Regex::new(r"\\title\s*(?:\[[^\]]*\])?\s*\{").expect("title pattern");
    let found = open.find(tex)?;
    let raw = balanced_span(&tex[found.end()..])?;

    let title = clean_title(raw);
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

/// Text up to the brace matching an already-consumed opener, tracking
/// nesting depth and escapes.
fn balanced_span(text: &str) -> Option<&str> {
    let mut depth = 1usize;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..idx]);
                }
            }
            _ => {}
        }
    }

    None
}

fn clean_title(raw: &str) -> String {
    let mut joined = String::new();
    for line in raw.lines() {
        if is_comment_line(line) {
            continue;
        }
        let piece = strip_inline_comment(line).trim();
        if piece.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(piece);
    }

    // Math-mode delimiters wrap but do not change the words.
    let mut text = joined.replace('$', "");

    let wrapper = Regex::new(STYLE_WRAPPER).expect("style wrapper pattern");
    for _ in 0..MAX_UNWRAP_PASSES {
        let unwrapped = wrapper.replace_all(&text, "${1}").into_owned();
        if unwrapped == text {
            break;
        }
        text = unwrapped;
    }

    let spacing = Regex::new(r"\\[,;:! ]").expect("spacing pattern");
    text = text.replace("\\\\", " ");
    text = spacing.replace_all(&text, " ").into_owned();
    text = text.replace('~', " ");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
