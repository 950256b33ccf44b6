//! CLI command implementations.

mod check;
mod render;
mod vars;

pub use check::{CheckArgs, run_check};
pub use render::{RenderArgs, run_render};
pub use vars::{VarsArgs, run_vars};
