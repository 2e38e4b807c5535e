//! CLI-facing commands

pub mod organize;
