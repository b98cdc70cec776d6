//! # Quest Rules
//!
//! The "Quest Bible" crate - contains every genre profile, challenge table, and scoring rule.
//! This crate is the single source of truth for game content and holds no session state.

pub mod challenge;
pub mod config;
pub mod genre;
pub mod mechanics;

pub use challenge::*;
pub use config::*;
pub use genre::*;
pub use mechanics::*;
