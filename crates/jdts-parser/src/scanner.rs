//! Lexical scan for doc comments.
//!
//! Skips string literals, text blocks, character literals, and ordinary
//! comments so that `/**` inside them is not mistaken for a doc comment.

use std::ops::Range;

use crate::error::{Error, Result};

/// A doc comment located in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSpan {
    /// Byte range from `/**` through `*/`.
    pub range: Range<usize>,
    /// 1-based line of the opening marker.
    pub line: usize,
    /// 1-based column of the opening marker.
    pub column: usize,
}

pub(crate) fn line_of(source: &str, offset: usize) -> usize {
    source[..offset].matches('\n').count() + 1
}

fn column_of(source: &str, offset: usize) -> usize {
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    source[line_start..offset].chars().count() + 1
}

/// Offset just past the end of a quoted literal starting at `start`.
fn skip_quoted(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'\n' => return i,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn skip_text_block(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 3;
    while i + 2 < bytes.len() {
        if bytes[i] == b'\\' {
            i += 2;
        } else if &bytes[i..i + 3] == b"\"\"\"" {
            return i + 3;
        } else {
            i += 1;
        }
    }
    bytes.len()
}

fn find_from(source: &str, from: usize, needle: &str) -> Option<usize> {
    source[from..].find(needle).map(|pos| from + pos)
}

/// Offset just past the comment, string, or literal that starts at `i`, if one does.
///
/// Doc comments are not skipped here; callers handle them.
pub(crate) fn skip_trivia_at(source: &str, i: usize) -> Result<Option<usize>> {
    let bytes = source.as_bytes();
    let rest = &bytes[i..];

    if rest.starts_with(b"//") {
        return Ok(Some(find_from(source, i, "\n").unwrap_or(source.len())));
    }
    if rest.starts_with(b"/*") {
        return match find_from(source, i + 2, "*/") {
            Some(end) => Ok(Some(end + 2)),
            None => Err(Error::UnterminatedBlockComment {
                line: line_of(source, i),
            }),
        };
    }
    if rest.starts_with(b"\"\"\"") {
        return Ok(Some(skip_text_block(bytes, i)));
    }
    match rest.first() {
        Some(b'"') => Ok(Some(skip_quoted(bytes, i, b'"'))),
        Some(b'\'') => Ok(Some(skip_quoted(bytes, i, b'\''))),
        _ => Ok(None),
    }
}

fn is_doc_comment_start(rest: &[u8]) -> bool {
    rest.starts_with(b"/**") && !rest.starts_with(b"/**/")
}

/// Locate every doc comment in `source`, in order.
pub fn find_doc_comments(source: &str) -> Result<Vec<CommentSpan>> {
    let bytes = source.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if is_doc_comment_start(&bytes[i..]) {
            let end = find_from(source, i + 3, "*/").ok_or(Error::UnterminatedComment {
                line: line_of(source, i),
            })? + 2;
            spans.push(CommentSpan {
                range: i..end,
                line: line_of(source, i),
                column: column_of(source, i),
            });
            i = end;
            continue;
        }

        match skip_trivia_at(source, i)? {
            Some(next) => i = next,
            None => i += 1,
        }
    }

    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        find_doc_comments(source)
            .unwrap()
            .into_iter()
            .map(|span| &source[span.range])
            .collect()
    }

    #[test]
    fn test_finds_doc_comments_in_order() {
        let source = "/** A */\nclass A {\n    /** f */\n    int f;\n}\n";
        assert_eq!(texts(source), vec!["/** A */", "/** f */"]);
    }

    #[test]
    fn test_ignores_plain_and_empty_comments() {
        let source = "/* not doc */ /**/ int x; // /** nope\n/** yes */";
        assert_eq!(texts(source), vec!["/** yes */"]);
    }

    #[test]
    fn test_ignores_markers_inside_literals() {
        let source = r#"String s = "/** not */"; char c = '"'; /** real */"#;
        assert_eq!(texts(source), vec!["/** real */"]);
    }

    #[test]
    fn test_ignores_markers_inside_text_blocks() {
        let source = "String s = \"\"\"\n/** nope */\n\"\"\";\n/** yes */";
        assert_eq!(texts(source), vec!["/** yes */"]);
    }

    #[test]
    fn test_reports_line_and_column() {
        let source = "class A {\n    /** f */\n    int f;\n}";
        let spans = find_doc_comments(source).unwrap();
        assert_eq!(spans[0].line, 2);
        assert_eq!(spans[0].column, 5);
    }

    #[test]
    fn test_unterminated_doc_comment_fails() {
        let err = find_doc_comments("class A {}\n/** open").unwrap_err();
        assert!(matches!(err, Error::UnterminatedComment { line: 2 }));
    }
}
