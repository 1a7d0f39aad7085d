//! Showcase Core - Shared types library.
//!
//! This crate provides common types used across all Showcase components:
//! - `carousel` - Product recommendation carousel state manager
//! - `cli` - Command-line host for running and inspecting a carousel
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe product ids and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
