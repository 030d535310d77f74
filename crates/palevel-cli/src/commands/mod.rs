//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod combine;
pub mod detect;
pub mod export;
pub mod import;
pub mod theme;
pub mod versions;
