//! Pre-render template validation.
//!
//! Non-fatal checks that catch template authoring mistakes before a batch
//! run. Rendering itself never fails on these; the warnings exist so that
//! tooling can surface problems early.

use thiserror::Error;

use super::template::parse_placeholders;

/// A non-fatal issue found in a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateWarning {
    /// `{` and `}` counts differ.
    #[error("unbalanced braces: {open} opening, {close} closing")]
    UnbalancedBraces { open: usize, close: usize },

    /// `[` and `]` counts differ.
    #[error("unbalanced brackets: {open} opening, {close} closing")]
    UnbalancedBrackets { open: usize, close: usize },

    /// A literal `{}` carries no key.
    #[error("empty placeholder {{}}")]
    EmptyPlaceholder,

    /// Nothing in the template parses as a placeholder.
    #[error("template contains no placeholders")]
    NoPlaceholders,
}

/// Checks a template for authoring mistakes.
///
/// Returns an empty list for a clean template. Warnings never prevent
/// rendering; an unbalanced delimiter simply passes through as literal
/// text.
pub fn validate_template(template: &str) -> Vec<TemplateWarning> {
    let mut warnings = Vec::new();

    let open = template.matches('{').count();
    let close = template.matches('}').count();
    if open != close {
        warnings.push(TemplateWarning::UnbalancedBraces { open, close });
    }

    let open = template.matches('[').count();
    let close = template.matches(']').count();
    if open != close {
        warnings.push(TemplateWarning::UnbalancedBrackets { open, close });
    }

    if template.contains("{}") {
        warnings.push(TemplateWarning::EmptyPlaceholder);
    }

    if parse_placeholders(template).is_empty() {
        warnings.push(TemplateWarning::NoPlaceholders);
    }

    warnings
}
