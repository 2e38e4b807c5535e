//! Source-tree scanning logic

mod classify;
mod walker;

pub use classify::{classify, UNKNOWN_BUCKET};
pub use walker::organize_tree;
