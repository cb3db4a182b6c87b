//! CLI command handlers, one per file.

mod compare;
mod completions;
mod list;
mod normalize;
mod sync;

pub use compare::run_compare;
pub use completions::{run_completions, run_man};
pub use list::run_list;
pub use normalize::run_normalize;
pub use sync::run_sync;
