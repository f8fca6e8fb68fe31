//! # Knockout Vote
//!
//! A single-elimination pairwise voting tournament implemented as a pure
//! state machine.
//!
//! An ordered list of candidate entries is reduced two at a time: each
//! round puts the next two entries head to head, votes accumulate in a
//! tally, and resolving the round appends the winner (or both candidates,
//! on a tie) back onto the end of the pending entries. When a single
//! candidate remains, the tournament concludes with that candidate as
//! winner.
//!
//! ## Design
//!
//! The core is three pure transitions over an immutable [`State`] value:
//!
//! - [`State::initialize`]: seed the tournament from a candidate list
//! - [`State::advance`]: open the next round, or resolve the current tally
//! - [`State::cast_vote`]: record one vote for a member of the current pair
//!
//! Every transition returns a new [`State`] and leaves its input untouched,
//! so states compare structurally, old states stay valid for replay, and
//! concurrent readers of a shared state need no synchronization. There is
//! no I/O, no randomness, and no persistence; holding the current state and
//! scheduling transitions is entirely the caller's job. Dispatch layers can
//! drive the machine through the [`tournament::reducer`] instead of calling
//! the transitions directly.
//!
//! ## Example
//!
//! ```
//! use knockout_vote::{Entry, State};
//!
//! let state = State::initialize(["Sunshine", "Millions", "127 Hours"]);
//! let state = state.advance()?; // Sunshine vs Millions, 127 Hours pending
//! let state = state.cast_vote(&Entry::new("Millions"))?;
//! let state = state.advance()?; // Millions survives: 127 Hours vs Millions
//! let state = state.cast_vote(&Entry::new("Millions"))?;
//! let state = state.advance()?;
//! assert_eq!(state.winner, Some(Entry::new("Millions")));
//! # Ok::<(), knockout_vote::TournamentError>(())
//! ```

/// Tournament core: entities, state machine, and reducer.
pub mod tournament;
pub use tournament::{
    Action, Entry, Round, State, Tally, TournamentError, TournamentResult, reduce,
};
