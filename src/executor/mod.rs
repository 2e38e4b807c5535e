//! Executor module for destination-side file operations

pub mod copy;
pub mod resolve;

pub use copy::copy_file;
pub use resolve::unique_destination;
