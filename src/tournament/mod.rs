//! Single-elimination pairwise voting tournament.
//!
//! This module provides the whole tournament core:
//! - Candidate entries and per-round vote tallies
//! - The three pure transitions (`initialize`, `advance`, `cast_vote`)
//! - An action reducer for dispatch layers
//!
//! ## Example
//!
//! ```
//! use knockout_vote::{Entry, State};
//!
//! let state = State::initialize(["Trainspotting", "28 Days Later"]);
//! let state = state.advance()?;
//! let state = state.cast_vote(&Entry::new("Trainspotting"))?;
//! let state = state.advance()?;
//! assert_eq!(state.winner, Some(Entry::new("Trainspotting")));
//! # Ok::<(), knockout_vote::TournamentError>(())
//! ```

pub mod entities;
pub mod reducer;
pub mod state_machine;

pub use entities::{Entry, Round, Tally};
pub use reducer::{Action, reduce};
pub use state_machine::{State, TournamentError, TournamentResult};
