//! Placeholder scanner for message templates.
//!
//! Recognizes both placeholder syntaxes in a single left-to-right pass:
//! - Brace form: `{identifier}` and `{identifier:formatspec}`
//! - Column form: `[COL:header]` and `[COL:header:formatspec]`
//!
//! Anything that does not parse as a placeholder is literal text, including
//! unmatched delimiters, so scanning never fails.

use std::collections::HashSet;
use std::ops::Range;

use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::stream::LocatingSlice;
use winnow::token::{any, take_while};

type Input<'i> = LocatingSlice<&'i str>;

/// Which placeholder syntax an occurrence was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    /// `{identifier}` form, resolved against program variable names.
    Brace,

    /// `[COL:header]` form, resolved against raw spreadsheet headers.
    Column,
}

/// One placeholder occurrence in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// The syntax this occurrence used.
    pub kind: PlaceholderKind,

    /// The key to resolve, trimmed of surrounding whitespace.
    pub key: String,

    /// Optional format spec after the key, e.g. `,` in `{total_balance:,}`.
    pub format: Option<String>,

    /// Byte range of the whole occurrence within the template.
    pub span: Range<usize>,
}

/// Scans a template for placeholder occurrences in appearance order.
///
/// Total over arbitrary input: malformed candidates are skipped as literal
/// text and scanning resumes at the next character.
///
/// # Example
///
/// ```
/// use munja::{parse_placeholders, PlaceholderKind};
///
/// let found = parse_placeholders("잔금 {total_balance:,}원 / [COL:고객 부담금]");
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].key, "total_balance");
/// assert_eq!(found[0].format.as_deref(), Some(","));
/// assert_eq!(found[1].kind, PlaceholderKind::Column);
/// assert_eq!(found[1].key, "고객 부담금");
/// ```
pub fn parse_placeholders(template: &str) -> Vec<Placeholder> {
    let mut input = LocatingSlice::new(template);
    let scanned: ModalResult<Vec<Option<Placeholder>>> =
        repeat(0.., scan_one).parse_next(&mut input);
    match scanned {
        Ok(found) => found.into_iter().flatten().collect(),
        // repeat(0..) over a scanner that accepts any character cannot fail
        Err(_) => Vec::new(),
    }
}

/// Distinct placeholder keys in first-appearance order.
pub fn placeholder_keys(template: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keys = Vec::new();
    for placeholder in parse_placeholders(template) {
        if seen.insert(placeholder.key.clone()) {
            keys.push(placeholder.key);
        }
    }
    keys
}

/// Parse one placeholder, or consume one literal character.
fn scan_one(input: &mut Input<'_>) -> ModalResult<Option<Placeholder>> {
    alt((
        column_placeholder.map(Some),
        brace_placeholder.map(Some),
        any.value(None),
    ))
    .parse_next(input)
}

/// Parse a brace placeholder: `{key}` or `{key:format}`.
fn brace_placeholder(input: &mut Input<'_>) -> ModalResult<Placeholder> {
    let ((key, format), span) = delimited('{', (brace_key, opt(preceded(':', brace_format))), '}')
        .with_span()
        .parse_next(input)?;

    Ok(Placeholder {
        kind: PlaceholderKind::Brace,
        key: key.to_string(),
        format: format.map(str::to_string),
        span,
    })
}

/// Parse a column placeholder: `[COL:header]` or `[COL:header:format]`.
fn column_placeholder(input: &mut Input<'_>) -> ModalResult<Placeholder> {
    let ((name, format), span) = delimited(
        ('[', column_marker, ':'),
        (column_name, opt(preceded(':', column_format))),
        ']',
    )
    .with_span()
    .parse_next(input)?;

    // A bare trailing colon carries no format spec
    let format = format.filter(|spec| !spec.is_empty());

    Ok(Placeholder {
        kind: PlaceholderKind::Column,
        key: name.trim().to_string(),
        format: format.map(str::to_string),
        span,
    })
}

/// The column marker token. `COL` is canonical; the Korean marker is kept
/// as an alias for templates written against the earlier syntax.
fn column_marker(input: &mut Input<'_>) -> ModalResult<()> {
    alt(("COL", "컬럼")).void().parse_next(input)
}

fn brace_key<'i>(input: &mut Input<'i>) -> ModalResult<&'i str> {
    take_while(1.., is_key_char).parse_next(input)
}

fn brace_format<'i>(input: &mut Input<'i>) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c != '}').parse_next(input)
}

fn column_name<'i>(input: &mut Input<'i>) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c != ']' && c != ':').parse_next(input)
}

fn column_format<'i>(input: &mut Input<'i>) -> ModalResult<&'i str> {
    take_while(0.., |c: char| c != ']').parse_next(input)
}

/// Identifier characters for brace keys. Unicode letters keep Korean
/// variable names like `고객_부담금` valid.
fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
