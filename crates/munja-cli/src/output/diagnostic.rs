//! Miette diagnostic wrapper for unresolved template keys.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use munja::Placeholder;
use munja::render::missing_marker;
use thiserror::Error;

/// A miette-compatible diagnostic for a placeholder key no data source
/// provides.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("unresolved placeholder key `{key}`")]
#[diagnostic(code(munja::unresolved_key))]
pub struct UnresolvedKeyDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("no data source provides this key")]
    span: SourceSpan,

    key: String,

    #[help]
    help: Option<String>,
}

impl UnresolvedKeyDiagnostic {
    /// Create a diagnostic for one placeholder occurrence with source context.
    pub fn new(
        path: &Path,
        template: &str,
        placeholder: &Placeholder,
        suggestions: &[String],
    ) -> Self {
        let help = if suggestions.is_empty() {
            Some(format!(
                "the rendered message will show {}",
                missing_marker(&placeholder.key)
            ))
        } else {
            let quoted: Vec<String> = suggestions
                .iter()
                .map(|suggestion| format!("`{suggestion}`"))
                .collect();
            Some(format!("did you mean {}?", quoted.join(", ")))
        };

        UnresolvedKeyDiagnostic {
            src: NamedSource::new(path.display().to_string(), template.to_string()),
            span: (placeholder.span.start, placeholder.span.len()).into(),
            key: placeholder.key.clone(),
            help,
        }
    }
}
