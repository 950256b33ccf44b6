//! Output formatting for CLI commands.

mod diagnostic;
pub mod table;
pub mod text;

pub use diagnostic::UnresolvedKeyDiagnostic;

use munja::PlaceholderKind;

/// Human-readable label for a placeholder syntax.
pub fn kind_label(kind: PlaceholderKind) -> &'static str {
    match kind {
        PlaceholderKind::Brace => "brace",
        PlaceholderKind::Column => "column",
    }
}
