//! Turn sequencing on top of the rules.
//!
//! - `turn`: per-turn selection state, intents and click outcomes
//! - `engine`: `GameEngine`, the owned game value presentation layers drive

pub mod turn;
pub mod engine;

pub use turn::{ClickOutcome, Intent, TurnPhase, TurnState};
pub use engine::{GameEngine, GameEngineBuilder, MoveReport, Status, TurnReport};
