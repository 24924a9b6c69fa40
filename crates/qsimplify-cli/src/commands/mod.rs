//! CLI command implementations.

pub mod common;
pub mod generate;
pub mod optimize;
pub mod passes;
pub mod rewrite;
pub mod version;
