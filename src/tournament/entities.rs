use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// A candidate identifier. Entries are compared, hashed, and ordered by
/// their raw text; no normalization is applied, so `"A"` and `"a"` are
/// distinct candidates.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Entry(String);

impl Entry {
    #[must_use]
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Vote counts keyed by candidate. Only candidates with at least one vote
/// have a key; an empty tally means no votes have been cast this round.
pub type Tally = BTreeMap<Entry, u32>;

/// A head-to-head round in progress: the two candidates facing off, in
/// their original pairing order, and the votes cast so far.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Round {
    pub pair: [Entry; 2],
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tally: Tally,
}

impl Round {
    /// Open a fresh round for the given pair with no votes cast.
    #[must_use]
    pub fn new(pair: [Entry; 2]) -> Self {
        Self {
            pair,
            tally: Tally::new(),
        }
    }

    /// Votes recorded for a candidate this round. Candidates missing from
    /// the tally count as zero.
    #[must_use]
    pub fn count(&self, entry: &Entry) -> u32 {
        self.tally.get(entry).copied().unwrap_or(0)
    }

    /// The round's result set: every pair member whose count equals the
    /// round maximum, in pair order. One element is a clear winner, two is
    /// a tie (including the zero-vote round, where both tie at zero).
    #[must_use]
    pub fn winners(&self) -> Vec<Entry> {
        let top = self
            .pair
            .iter()
            .map(|entry| self.count(entry))
            .max()
            .unwrap_or(0);
        self.pair
            .iter()
            .filter(|entry| self.count(entry) == top)
            .cloned()
            .collect()
    }
}
