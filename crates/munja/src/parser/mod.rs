//! Template placeholder parser.
//!
//! This module scans message templates for substitution placeholders and
//! provides pre-render validation. The scanner produces a flat occurrence
//! list rather than a nested AST; occurrences carry byte spans for
//! diagnostics and builder-style substitution.

mod template;
mod validate;

pub use template::{Placeholder, PlaceholderKind, parse_placeholders, placeholder_keys};
pub use validate::{TemplateWarning, validate_template};
