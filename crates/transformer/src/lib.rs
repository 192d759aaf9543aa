#![deny(clippy::all)]

mod collector;
mod replacer;
mod transformer;

pub use collector::collect_module_names;
pub use replacer::{escape_backslashes, AppliedRename, TextReplacer};
pub use transformer::*;
