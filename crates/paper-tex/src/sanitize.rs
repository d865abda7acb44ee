use regex::Regex;

use crate::comment::{inline_comment_start, is_comment_line};

/// Rewrite merged LaTeX into a form the converter can parse without a syntax
/// failure. The passes run in a fixed order and are independent; the
/// unmatched-tag repair always runs last, over the output of the others.
pub fn sanitize(tex: &str) -> String {
    let text = rewrite_abstract(tex);
    let text = normalize_verbatim(&text);
    let text = drop_figures(&text);
    let text = unwrap_tables(&text);
    let text = normalize_macro_definitions(&text);
    repair_unmatched_ends(&text)
}

/// `abstract` is not a sectioning construct the converter understands; turn
/// it into an unnumbered section so the content renders instead of vanishing.
fn rewrite_abstract(tex: &str) -> String {
    let pattern =
        Regex::new(r"(?s)\\begin\{abstract\}(.*?)\\end\{abstract\}").expect("abstract pattern");
    pattern
        .replace_all(tex, "\\section*{Abstract}\n${1}")
        .into_owned()
}

/// Normalize the alternate code-block environments to plain `verbatim`,
/// discarding their option arguments. Content is untouched.
fn normalize_verbatim(tex: &str) -> String {
    let open_listing = Regex::new(r"\\begin\{(?:lstlisting|Verbatim)\}(?:\[[^\]]*\])?")
        .expect("listing open pattern");
    let open_minted = Regex::new(r"\\begin\{minted\}(?:\[[^\]]*\])?\{[^}]*\}")
        .expect("minted open pattern");
    let close = Regex::new(r"\\end\{(?:lstlisting|Verbatim|minted)\}").expect("close pattern");

    let text = open_listing.replace_all(tex, "\\begin{verbatim}");
    let text = open_minted.replace_all(&text, "\\begin{verbatim}");
    close.replace_all(&text, "\\end{verbatim}").into_owned()
}

/// Figures carry no textual value downstream; delete them whole, captions
/// and image references included.
fn drop_figures(tex: &str) -> String {
    let pattern = Regex::new(r"(?s)\\begin\{figure\*?\}.*?\\end\{figure\*?\}")
        .expect("figure pattern");
    pattern.replace_all(tex, "").into_owned()
}

/// Strip `table` wrapper tags but keep the interior (caption and tabular
/// content) unwrapped.
fn unwrap_tables(tex: &str) -> String {
    let open = Regex::new(r"\\begin\{table\*?\}(?:\[[^\]]*\])?").expect("table open pattern");
    let close = Regex::new(r"\\end\{table\*?\}").expect("table close pattern");
    let text = open.replace_all(tex, "");
    close.replace_all(&text, "").into_owned()
}

/// The starred macro-definition forms trip the converter; fold them back to
/// the base spellings.
fn normalize_macro_definitions(tex: &str) -> String {
    tex.replace("\\newcommand*", "\\newcommand")
        .replace("\\renewcommand*", "\\renewcommand")
}

/// Remove `\end{...}` tags that close nothing.
///
/// A single stack of open environment names is carried across the whole
/// document. Within each non-comment line, `\begin`/`\end` events are
/// collected in order (text after an unescaped `%` is excluded). An `\end`
/// matching the stack top pops it; a mismatched `\end` is recorded as a drop
/// site and the stack is left alone, so a stray closer can never pop an
/// unrelated open block. Drop sites are removed from the line rightmost
/// first, keeping earlier offsets valid.
fn repair_unmatched_ends(tex: &str) -> String {
    let event = Regex::new(r"\\(begin|end)\{([^}]+)\}").expect("event pattern");

    let mut stack: Vec<String> = Vec::new();
    let mut output = String::with_capacity(tex.len());

    for (index, line) in tex.split('\n').enumerate() {
        if index > 0 {
            output.push('\n');
        }

        if is_comment_line(line) {
            output.push_str(line);
            continue;
        }

        let scan_end = inline_comment_start(line).unwrap_or(line.len());
        let mut drop_sites: Vec<(usize, usize)> = Vec::new();

        for captures in event.captures_iter(&line[..scan_end]) {
            let span = captures.get(0).expect("whole match");
            let name = &captures[2];
            if &captures[1] == "begin" {
                stack.push(name.to_string());
            } else if stack.last().map(String::as_str) == Some(name) {
                stack.pop();
            } else {
                drop_sites.push((span.start(), span.end()));
            }
        }

        if drop_sites.is_empty() {
            output.push_str(line);
            continue;
        }

        let mut repaired = line.to_string();
        for &(start, end) in drop_sites.iter().rev() {
            repaired.replace_range(start..end, "");
        }
        output.push_str(&repaired);
    }

    output
}
