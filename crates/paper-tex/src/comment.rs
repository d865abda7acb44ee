/// Byte offset of the first unescaped `%` on the line, if any.
pub(crate) fn inline_comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    for (idx, &byte) in bytes.iter().enumerate() {
        if byte == b'%' && (idx == 0 || bytes[idx - 1] != b'\\') {
            return Some(idx);
        }
    }
    None
}

pub(crate) fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with('%')
}

/// The portion of the line before any trailing inline comment.
pub(crate) fn strip_inline_comment(line: &str) -> &str {
    match inline_comment_start(line) {
        Some(idx) => &line[..idx],
        None => line,
    }
}
