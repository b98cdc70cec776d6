//! # Quest Core
//!
//! The engine of KiloQuest. This crate consumes the content in `quest_rules`,
//! drives a session through its rounds, and derives the ending a player earns.
//!
//! ## Core Components
//!
//! - **session**: Per-playthrough state (steps, round, tallies, challenge order)
//! - **selection**: Picks the challenge for each round
//! - **machine**: The start → answer → continue → end state machine
//! - **ending**: Ending text, archetype, accuracy, and achievements
//! - **display**: Counting animation frames and step gauges
//! - **share**: Result card text and clipboard fallback
//! - **events**: Events emitted by every transition
//!
//! ## Design Philosophy
//!
//! - **Session-Owned**: Every piece of mutable state lives in the `Session`, so nothing leaks between games
//! - **Deterministic**: Given a seeded RNG and a clock value, a playthrough is fully reproducible
//! - **Presentation-Free**: Front ends render from the values exposed here and never compute outcomes

pub mod display;
pub mod ending;
pub mod events;
pub mod machine;
pub mod selection;
pub mod session;
pub mod share;

pub use display::*;
pub use ending::*;
pub use events::*;
pub use machine::*;
pub use selection::*;
pub use session::*;
pub use share::*;
