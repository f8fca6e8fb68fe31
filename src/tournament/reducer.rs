//! Action reducer over the tournament state machine.
//!
//! Dispatch layers (a store, an RPC handler) drive the tournament by
//! submitting [`Action`] values instead of calling the transitions
//! directly. Actions serialize as `{"type": "SET_ENTRIES" | "NEXT" |
//! "VOTE", ...}`, so dispatch payloads can round-trip through JSON
//! untouched.

use serde::{Deserialize, Serialize};

use super::entities::Entry;
use super::state_machine::{State, TournamentResult};

/// One dispatched tournament action.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Seed (or re-seed) the tournament with a candidate list.
    SetEntries { entries: Vec<Entry> },
    /// Open the next round or resolve the current one.
    Next,
    /// Record one vote for a member of the current pair.
    Vote { entry: Entry },
}

/// Apply an action to the current state, producing the next state.
///
/// A `None` state stands for the empty pre-seed state, so a dispatch layer
/// can feed its very first action without constructing a state up front.
pub fn reduce(state: Option<&State>, action: &Action) -> TournamentResult<State> {
    let empty = State::default();
    let current = state.unwrap_or(&empty);
    match action {
        Action::SetEntries { entries } => Ok(State::initialize(entries.iter().cloned())),
        Action::Next => current.advance(),
        Action::Vote { entry } => current.cast_vote(entry),
    }
}
