//! Message rendering: computed variables, key resolution, and the splice
//! loop that turns a template plus group data into final text.

mod computed;
mod engine;
mod error;
mod resolver;

pub use computed::{COMPUTED_KEYS, computed_variables};
pub use engine::{RenderReport, missing_marker, render, render_batch, render_with_report};
pub use error::{BatchError, suggest_keys};
pub use resolver::{Sources, known_keys, resolve};
