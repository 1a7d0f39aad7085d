//! CLI command implementations.

pub mod cache;
pub mod favorites;
pub mod show;
