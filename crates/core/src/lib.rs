//! Core types and constants for the pocket guide catalog
//!
//! This crate contains domain types shared across all other crates.

mod catalog;
mod constants;
mod env_config;
mod guide;
mod report;

pub use catalog::*;
pub use constants::*;
pub use env_config::*;
pub use guide::*;
pub use report::*;
