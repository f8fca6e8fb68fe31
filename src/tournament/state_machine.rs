//! Tournament state machine: the three pure transitions over [`State`].
//!
//! Every operation takes the current state by reference and returns a fresh
//! value; no state is ever mutated in place, so callers can hold on to old
//! states for replay, memoization, or structural comparison.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::{Entry, Round};

/// Errors raised when a transition is attempted out of order.
///
/// Callers that uphold the documented preconditions never see these: every
/// transition is total over well-formed states.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum TournamentError {
    #[error("need 2+ pending entries to open a round, have {available}")]
    NotEnoughEntries { available: usize },

    #[error("no round in progress")]
    NoRoundInProgress,

    #[error("{entry} is not part of the current pair")]
    NotInPair { entry: Entry },

    #[error("tournament already has a winner")]
    TournamentOver,
}

pub type TournamentResult<T> = Result<T, TournamentError>;

/// The whole tournament at a point in time.
///
/// Exactly one of three shapes is ever live:
/// - pending: `entries` holds the candidates still to be paired, no `vote`,
///   no `winner`;
/// - round in progress: `vote` holds the current pair and tally, `entries`
///   holds whatever has not been paired yet (possibly empty);
/// - concluded: only `winner` is set.
///
/// [`State::default`] is the empty pre-seed state with no fields set.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<Entry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote: Option<Round>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<Entry>,
}

impl State {
    /// Seed a tournament from an ordered collection of candidates.
    ///
    /// Insertion order is significant: it defines the pairing order for
    /// every later round. All inputs are accepted as-is, including the
    /// empty collection.
    #[must_use]
    pub fn initialize<I>(raw_entries: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        Self {
            entries: Some(raw_entries.into_iter().map(Into::into).collect()),
            vote: None,
            winner: None,
        }
    }

    /// Whether the tournament has concluded.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.winner.is_some()
    }

    /// Move the tournament forward one step.
    ///
    /// With no round in progress, the first two pending entries become the
    /// new pair and the rest stay pending, in order. With a round in
    /// progress, the tally is resolved first: every pair member with the
    /// maximum vote count (a tie keeps both) is appended after the pending
    /// entries, then either exactly one candidate remains and the
    /// tournament concludes with that candidate as winner, or the next
    /// round opens immediately from the front of the combined sequence.
    pub fn advance(&self) -> TournamentResult<State> {
        if self.is_concluded() {
            return Err(TournamentError::TournamentOver);
        }
        let mut combined = self.entries.clone().unwrap_or_default();
        if let Some(round) = &self.vote {
            combined.extend(round.winners());
            if let [champion] = combined.as_slice() {
                debug!("tournament concluded: {champion} wins");
                return Ok(State {
                    entries: None,
                    vote: None,
                    winner: Some(champion.clone()),
                });
            }
        }
        Self::open_round(combined)
    }

    /// Record one vote for `entry` in the round in progress.
    ///
    /// The tally entry is created at 1 on the first vote and incremented on
    /// each subsequent one; everything else passes through unchanged.
    pub fn cast_vote(&self, entry: &Entry) -> TournamentResult<State> {
        if self.is_concluded() {
            return Err(TournamentError::TournamentOver);
        }
        let Some(round) = &self.vote else {
            return Err(TournamentError::NoRoundInProgress);
        };
        if !round.pair.contains(entry) {
            return Err(TournamentError::NotInPair {
                entry: entry.clone(),
            });
        }
        let mut round = round.clone();
        *round.tally.entry(entry.clone()).or_insert(0) += 1;
        Ok(State {
            vote: Some(round),
            ..self.clone()
        })
    }

    fn open_round(entries: Vec<Entry>) -> TournamentResult<State> {
        let available = entries.len();
        let mut pending = entries.into_iter();
        match (pending.next(), pending.next()) {
            (Some(first), Some(second)) => {
                debug!("round opened: {first} vs {second}");
                Ok(State {
                    entries: Some(pending.collect()),
                    vote: Some(Round::new([first, second])),
                    winner: None,
                })
            }
            _ => Err(TournamentError::NotEnoughEntries { available }),
        }
    }
}
