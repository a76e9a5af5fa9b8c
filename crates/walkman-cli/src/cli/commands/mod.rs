//! CLI command handlers, one file per command.

mod completions;
mod extract;
mod man;
mod tree;

pub use completions::run_completions;
pub use extract::{run_extract, ExtractArgs};
pub use man::run_man;
pub use tree::{run_tree, TreeArgs};
