//! Find the cheapest way to flip a two-party electoral-college election by
//! relocating voters between states.

pub mod commands;
pub mod config;
pub mod formats;
pub mod model;
pub mod optimize;
pub mod relocate;
pub mod report;
pub mod util;

pub use config::ElectionConfig;
pub use model::{Election, Party, StateRecord};
pub use optimize::{brute_force_swing_states, max_voters_moved, min_voters_moved, SwingMethod};
pub use relocate::{relocate_voters, MoveMap, Relocation, RelocationOutcome};
