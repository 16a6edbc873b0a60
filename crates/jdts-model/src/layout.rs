//! Line-oriented layout of a `/** ... */` comment.
//!
//! A [`CommentLayout`] splits a comment into its opening marker, body lines
//! (kept verbatim, prefix included), and closing line. Single-line comments
//! and content sharing a line with a marker are expanded into body lines, so
//! a layout renders to canonical multi-line form. Callers that only need to
//! inspect a comment never re-render it, which keeps untouched text
//! byte-identical.

use std::ops::Range;

use crate::order::canonical_rank;

const OPENING: &str = "/**";
const CLOSING: &str = "*/";

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip the `*` gutter and one following space from a body line.
fn line_content(line: &str) -> &str {
    let trimmed = line.trim_start();
    let rest = trimmed.strip_prefix('*').unwrap_or(trimmed);
    rest.strip_prefix(' ').unwrap_or(rest)
}

fn is_blank(line: &str) -> bool {
    line_content(line).trim().is_empty()
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Tag name if `line` opens a block tag (`@name ...`).
fn tag_id_of(line: &str) -> Option<&str> {
    let rest = line_content(line).trim_start().strip_prefix('@')?;
    let end = rest
        .find(|c: char| c.is_whitespace())
        .unwrap_or(rest.len());
    let id = &rest[..end];
    id.chars()
        .next()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|_| id)
}

/// Normalize verbatim tag text to a single line: gutters stripped, whitespace collapsed.
///
/// The first line is taken as-is (it starts at the `@`); continuation lines
/// lose their `*` gutter.
pub fn normalize_tag_text(text: &str) -> String {
    let joined = text
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            let line = line.trim_end_matches('\r');
            if i == 0 { line } else { line_content(line) }
        })
        .collect::<Vec<_>>()
        .join(" ");
    collapse_whitespace(&joined)
}

/// A tag located in a [`CommentLayout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpan {
    pub tag_id: String,
    /// Body line indices covered by the tag, trailing blank lines excluded.
    pub lines: Range<usize>,
}

impl TagSpan {
    pub fn rank(&self) -> Option<u8> {
        canonical_rank(&self.tag_id)
    }
}

/// Editable line view of one doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLayout {
    eol: &'static str,
    body: Vec<String>,
    closing: String,
    prefix: String,
}

impl CommentLayout {
    /// Split `text` into lines.
    ///
    /// `indent` is used only when the comment has no line to take its gutter
    /// from (single-line comments). Returns `None` if `text` is not a
    /// `/** ... */` comment.
    pub fn parse(text: &str, indent: &str) -> Option<Self> {
        let inner = text.strip_prefix(OPENING)?.strip_suffix(CLOSING)?;
        let eol = if text.contains("\r\n") { "\r\n" } else { "\n" };
        let lines: Vec<&str> = inner
            .split('\n')
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        if lines.len() == 1 {
            let prefix = format!("{indent} * ");
            let content = inner.trim();
            let body = if content.is_empty() {
                Vec::new()
            } else {
                vec![format!("{prefix}{content}")]
            };
            return Some(Self {
                eol,
                body,
                closing: format!("{indent} {CLOSING}"),
                prefix,
            });
        }

        let first = lines[0];
        let last = lines[lines.len() - 1];
        let middle = &lines[1..lines.len() - 1];

        let prefix = middle
            .iter()
            .find(|line| line.trim_start().starts_with('*'))
            .map(|line| format!("{}* ", leading_whitespace(line)))
            .unwrap_or_else(|| format!("{}* ", leading_whitespace(last)));

        let mut body = Vec::with_capacity(lines.len());
        if !first.trim().is_empty() {
            body.push(format!("{prefix}{}", first.trim()));
        }
        body.extend(middle.iter().map(|line| line.to_string()));

        let trailing = line_content(last).trim();
        let closing = if trailing.is_empty() {
            format!("{last}{CLOSING}")
        } else {
            body.push(format!("{prefix}{trailing}"));
            format!("{}{CLOSING}", leading_whitespace(last))
        };

        Some(Self {
            eol,
            body,
            closing,
            prefix,
        })
    }

    /// Body lines, gutters included.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Gutter used for new lines, e.g. `"     * "`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Render back to comment text.
    pub fn render(&self) -> String {
        let mut out = String::from(OPENING);
        for line in &self.body {
            out.push_str(self.eol);
            out.push_str(line);
        }
        out.push_str(self.eol);
        out.push_str(&self.closing);
        out
    }

    /// A body line holding `tag_text` (e.g. `@since 2.0`) under this comment's gutter.
    pub fn tag_line(&self, tag_text: &str) -> String {
        format!("{}{}", self.prefix, tag_text)
    }

    fn blank_line(&self) -> String {
        self.prefix.trim_end().to_string()
    }

    /// All block tags, in order.
    pub fn tags(&self) -> Vec<TagSpan> {
        let starts: Vec<(usize, &str)> = self
            .body
            .iter()
            .enumerate()
            .filter_map(|(i, line)| tag_id_of(line).map(|id| (i, id)))
            .collect();

        starts
            .iter()
            .enumerate()
            .map(|(n, (start, id))| {
                let limit = starts
                    .get(n + 1)
                    .map(|(next, _)| *next)
                    .unwrap_or(self.body.len());
                let mut end = limit;
                while end > start + 1 && is_blank(&self.body[end - 1]) {
                    end -= 1;
                }
                TagSpan {
                    tag_id: id.to_string(),
                    lines: *start..end,
                }
            })
            .collect()
    }

    /// Normalized single-line text of a tag, e.g. `@param count the number`.
    pub fn span_text(&self, span: &TagSpan) -> String {
        let joined = self.body[span.lines.clone()]
            .iter()
            .map(|line| line_content(line))
            .collect::<Vec<_>>()
            .join(" ");
        collapse_whitespace(&joined)
    }

    /// Tag text from its `@` through its last line, joined with the comment's line ending.
    pub fn target_text(&self, span: &TagSpan) -> String {
        let lines = &self.body[span.lines.clone()];
        let first = &lines[0];
        let start = first.find('@').unwrap_or(0);
        std::iter::once(&first[start..])
            .chain(lines[1..].iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(self.eol)
    }

    /// Find the tag whose text matches verbatim `target_text` once normalized.
    pub fn find_tag(&self, target_text: &str) -> Option<TagSpan> {
        let wanted = normalize_tag_text(target_text);
        self.tags()
            .into_iter()
            .find(|span| self.span_text(span) == wanted)
    }

    /// Returns `true` if a ranked tag sits out of canonical order relative to the other tags.
    pub fn is_misplaced(&self, span: &TagSpan) -> bool {
        let Some(rank) = span.rank() else {
            return false;
        };
        self.tags().iter().any(|other| match other.rank() {
            Some(other_rank) if other.lines.start < span.lines.start => other_rank > rank,
            Some(other_rank) if other.lines.start > span.lines.start => other_rank < rank,
            _ => false,
        })
    }

    /// Returns `true` if a `tag_id` tag inserted at body index `at` would sit in canonical order.
    pub fn is_ordered_at(&self, at: usize, tag_id: &str) -> bool {
        let Some(rank) = canonical_rank(tag_id) else {
            return true;
        };
        self.tags().iter().all(|other| match other.rank() {
            Some(other_rank) if other.lines.start < at => other_rank <= rank,
            Some(other_rank) => other_rank >= rank,
            None => true,
        })
    }

    /// Move the tag to its canonical anchor.
    ///
    /// Returns `false` and leaves the layout untouched when the anchor is
    /// where the tag already sits.
    pub fn move_to_canonical(&mut self, span: &TagSpan) -> bool {
        let mut moved = self.clone();
        let lines = moved.remove(span);
        let at = moved.canonical_anchor(&span.tag_id);
        if at == span.lines.start {
            return false;
        }
        moved.insert(at, lines);
        *self = moved;
        true
    }

    /// Remove the tag's lines, returning them verbatim.
    pub fn remove(&mut self, span: &TagSpan) -> Vec<String> {
        let removed: Vec<String> = self.body.drain(span.lines.clone()).collect();
        while self.body.last().is_some_and(|line| is_blank(line)) {
            self.body.pop();
        }
        removed
    }

    /// Replace the tag's lines with a single line holding `tag_text`.
    ///
    /// The gutter of the tag's first line is kept.
    pub fn replace(&mut self, span: &TagSpan, tag_text: &str) {
        let first = &self.body[span.lines.start];
        let gutter_len = first.find('@').unwrap_or(0);
        let line = format!("{}{}", &first[..gutter_len], tag_text);
        self.body.splice(span.lines.clone(), std::iter::once(line));
    }

    /// Index just past the last tag, or past the last non-blank line when there are no tags.
    pub fn end_anchor(&self) -> usize {
        match self.tags().last() {
            Some(span) => span.lines.end,
            None => self
                .body
                .iter()
                .rposition(|line| !is_blank(line))
                .map(|i| i + 1)
                .unwrap_or(0),
        }
    }

    /// Index of the first tag, or the end anchor when there are no tags.
    pub fn beginning_anchor(&self) -> usize {
        self.tags()
            .first()
            .map(|span| span.lines.start)
            .unwrap_or_else(|| self.end_anchor())
    }

    /// Index of the first tag ranked after `tag_id`, or the end anchor.
    ///
    /// Tags of equal rank stay ahead of the anchor, so repeated insertions
    /// append in call order.
    pub fn canonical_anchor(&self, tag_id: &str) -> usize {
        let Some(rank) = canonical_rank(tag_id) else {
            return self.end_anchor();
        };
        self.tags()
            .iter()
            .find(|span| span.rank().is_some_and(|other| other > rank))
            .map(|span| span.lines.start)
            .unwrap_or_else(|| self.end_anchor())
    }

    /// Insert tag lines at body index `at`, returning the index of the first inserted line.
    ///
    /// When the comment has no tags yet, a blank gutter line separates the new
    /// tag from the description.
    pub fn insert(&mut self, at: usize, lines: Vec<String>) -> usize {
        let mut at = at.min(self.body.len());
        if self.tags().is_empty() {
            if self.body.get(at).is_some_and(|line| is_blank(line)) {
                at += 1;
            } else if at > 0 && !is_blank(&self.body[at - 1]) {
                self.body.insert(at, self.blank_line());
                at += 1;
            }
        }
        self.body.splice(at..at, lines);
        at
    }
}
