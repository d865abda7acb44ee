use crate::comment::{is_comment_line, strip_inline_comment};

const BODY_START: &str = "\\begin{document}";
const BODY_END: &str = "\\end{document}";

/// The renderable slice of a document, isolated from its preamble.
///
/// The original preamble is discarded and replaced by a single generic
/// document-class declaration; package and macro declarations do not survive
/// extraction.
#[derive(Debug, Clone)]
pub struct DocumentBody {
    body: String,
    unclosed_braces: usize,
    had_markers: bool,
}

/// Isolate the text between the document-body markers. When the markers are
/// absent the full text passes through unchanged.
pub fn extract_body(tex: &str) -> DocumentBody {
    let span = tex.find(BODY_START).and_then(|start| {
        let content_start = start + BODY_START.len();
        tex[content_start..]
            .find(BODY_END)
            .map(|offset| (content_start, content_start + offset))
    });

    let (body, had_markers) = match span {
        Some((start, end)) => (tex[start..end].to_string(), true),
        None => (tex.to_string(), false),
    };

    let unclosed_braces = net_open_braces(&body);
    DocumentBody {
        body,
        unclosed_braces,
        had_markers,
    }
}

impl DocumentBody {
    /// Net count of opening braces left unclosed in the body.
    pub fn unclosed_braces(&self) -> usize {
        self.unclosed_braces
    }

    /// The minimal document as extracted: synthetic preamble plus body, or
    /// the original text verbatim when no body markers were found.
    pub fn document(&self) -> String {
        if self.had_markers {
            format!(
                "\\documentclass{{article}}\n{BODY_START}\n{}\n{BODY_END}\n",
                self.body.trim_matches('\n')
            )
        } else {
            self.body.clone()
        }
    }

    /// The document with exactly `unclosed_braces` closing braces appended
    /// before the end marker. Identical to [`document`](Self::document) when
    /// nothing is unclosed.
    pub fn padded_document(&self) -> String {
        if self.unclosed_braces == 0 {
            return self.document();
        }
        let padding = "}".repeat(self.unclosed_braces);
        if self.had_markers {
            format!(
                "\\documentclass{{article}}\n{BODY_START}\n{}\n{padding}\n{BODY_END}\n",
                self.body.trim_matches('\n')
            )
        } else {
            format!("{}\n{padding}\n", self.body.trim_end_matches('\n'))
        }
    }
}

/// Count net unmatched opening braces, skipping comment lines, trailing
/// inline comments and escaped braces. Clamped at zero: stray closers are a
/// separate problem padding cannot fix.
fn net_open_braces(body: &str) -> usize {
    let mut depth: i64 = 0;

    for line in body.lines() {
        if is_comment_line(line) {
            continue;
        }
        let mut escaped = false;
        for ch in strip_inline_comment(line).chars() {
            if escaped {
                escaped = false;
                continue;
            }
            match ch {
                '\\' => escaped = true,
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
        }
    }

    depth.max(0) as usize
}
