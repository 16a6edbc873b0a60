//! Classification of the declaration that follows a doc comment.

use std::collections::HashSet;
use std::sync::LazyLock;

use jdts_model::Classification;
use regex::Regex;

use crate::error::Result;
use crate::scanner::skip_trivia_at;

static IDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_$][A-Za-z0-9_$]*").expect("Invalid identifier regex"));

static TYPE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:class|interface|enum|record)\s+([A-Za-z_$][A-Za-z0-9_$]*)")
        .expect("Invalid type name regex")
});

const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "synchronized",
    "native",
    "default",
    "strictfp",
    "transient",
    "volatile",
    "sealed",
    "non",
];

/// A classified declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub classification: Classification,
    pub name: String,
}

/// Names of every type declared anywhere in `source`.
pub fn declared_type_names(source: &str) -> HashSet<String> {
    TYPE_NAME_REGEX
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Skip whitespace, ordinary comments, and annotations.
fn skip_preamble(source: &str, mut i: usize) -> Result<usize> {
    let bytes = source.as_bytes();
    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            return Ok(i);
        }
        if bytes[i] == b'/' && !bytes[i..].starts_with(b"/**") {
            match skip_trivia_at(source, i)? {
                Some(next) => {
                    i = next;
                    continue;
                }
                None => return Ok(i),
            }
        }
        if bytes[i] == b'@' && !source[i + 1..].starts_with("interface") {
            i += 1;
            while i < bytes.len()
                && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'_' | b'$' | b'.'))
            {
                i += 1;
            }
            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'(' {
                i = skip_parenthesized(source, j)?;
            }
            continue;
        }
        return Ok(i);
    }
}

fn skip_parenthesized(source: &str, start: usize) -> Result<usize> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut i = start;
    while i < bytes.len() {
        if let Some(next) = skip_trivia_at(source, i)? {
            i = next;
            continue;
        }
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    Ok(bytes.len())
}

/// Declaration header up to its first top-level terminator, and that terminator.
fn header_at(source: &str, start: usize) -> (String, Option<u8>) {
    let bytes = source.as_bytes();
    let mut header = String::new();
    let mut angle_depth = 0usize;
    let mut i = start;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'<' => angle_depth += 1,
            b'>' => angle_depth = angle_depth.saturating_sub(1),
            b'{' | b';' | b'=' | b'(' | b'}' => return (header, Some(b)),
            b',' if angle_depth == 0 => return (header, Some(b)),
            b'/' if bytes[i..].starts_with(b"/*") || bytes[i..].starts_with(b"//") => {
                return (header, None);
            }
            _ => {}
        }
        if angle_depth == 0 && b != b'>' {
            header.push(b as char);
        } else {
            header.push(' ');
        }
        i += 1;
    }
    (header, None)
}

/// Classify the declaration that starts at or after byte `start`.
///
/// Returns `None` when the comment documents nothing recognizable
/// (initializer blocks, dangling comments, package statements).
pub fn classify_at(
    source: &str,
    start: usize,
    type_names: &HashSet<String>,
) -> Result<Option<Declaration>> {
    let begin = skip_preamble(source, start)?;
    if begin >= source.len() || source.as_bytes()[begin] == b'/' {
        return Ok(None);
    }
    let (header, terminator) = header_at(source, begin);
    Ok(classify_header(&header, terminator, type_names))
}

fn classify_header(
    header: &str,
    terminator: Option<u8>,
    type_names: &HashSet<String>,
) -> Option<Declaration> {
    let words: Vec<&str> = IDENT_REGEX.find_iter(header).map(|m| m.as_str()).collect();
    let declaration = |classification, name: &str| {
        Some(Declaration {
            classification,
            name: name.to_string(),
        })
    };

    if words.first() == Some(&"package") || words.first() == Some(&"import") {
        return None;
    }

    for (keyword, classification) in [
        ("class", Classification::Class),
        ("interface", Classification::Interface),
        ("enum", Classification::Enum),
        ("record", Classification::Record),
    ] {
        let Some(name) = words
            .iter()
            .position(|w| *w == keyword)
            .and_then(|pos| words.get(pos + 1))
        else {
            continue;
        };
        let classification = if keyword == "interface" && header.contains("@interface") {
            Classification::Annotation
        } else {
            classification
        };
        return declaration(classification, name);
    }

    let significant: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| !MODIFIERS.contains(w))
        .collect();
    let name = *significant.last()?;

    match (terminator?, significant.len()) {
        (b'(', 1) if type_names.contains(name) => declaration(Classification::Constructor, name),
        (b'(' | b',' | b';' | b'}' | b'{', 1) => declaration(Classification::EnumConstant, name),
        (b'(', _) => declaration(Classification::Method, name),
        (b';' | b'=' | b',', _) => declaration(Classification::Field, name),
        _ => None,
    }
}
