/// Property-based tests for the tournament state machine using proptest
///
/// These tests verify the transition laws across randomly generated entry
/// lists and vote sequences rather than hand-picked brackets.
use knockout_vote::{Entry, State};
use proptest::prelude::*;
use std::collections::BTreeSet;

// Strategy to generate a candidate name (short, arbitrary text)
fn entry_strategy() -> impl Strategy<Value = Entry> {
    "[a-zA-Z0-9 ]{1,12}".prop_map(|s| Entry::new(&s))
}

// Strategy to generate a list of unique entries
fn unique_entries_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(entry_strategy(), min..=max).prop_filter(
        "Entries must be unique",
        |entries| {
            let set: BTreeSet<_> = entries.iter().collect();
            set.len() == entries.len()
        },
    )
}

/// Drive a tournament to its winner, always voting for the pair member
/// selected by `choice` (0 or 1), so every round is decisive.
fn run_to_winner(entries: &[Entry], choice: usize) -> (State, usize) {
    let mut state = State::initialize(entries.iter().cloned())
        .advance()
        .unwrap();
    let mut rounds = 0;
    while let Some(round) = state.vote.clone() {
        state = state.cast_vote(&round.pair[choice]).unwrap();
        state = state.advance().unwrap();
        rounds += 1;
    }
    (state, rounds)
}

proptest! {
    #[test]
    fn test_initialize_preserves_input_order(entries in unique_entries_strategy(0, 16)) {
        let state = State::initialize(entries.iter().cloned());
        prop_assert_eq!(state.entries, Some(entries));
        prop_assert_eq!(state.vote, None);
        prop_assert_eq!(state.winner, None);
    }

    #[test]
    fn test_transitions_are_deterministic(entries in unique_entries_strategy(2, 12)) {
        let state = State::initialize(entries.iter().cloned());
        prop_assert_eq!(state.advance(), state.advance());

        let paired = state.advance().unwrap();
        let target = paired.vote.as_ref().unwrap().pair[0].clone();
        prop_assert_eq!(paired.cast_vote(&target), paired.cast_vote(&target));
    }

    #[test]
    fn test_transitions_never_mutate_their_input(entries in unique_entries_strategy(2, 12)) {
        let state = State::initialize(entries.iter().cloned());
        let snapshot = state.clone();
        let paired = state.advance().unwrap();
        prop_assert_eq!(&state, &snapshot);

        let paired_snapshot = paired.clone();
        let target = paired.vote.as_ref().unwrap().pair[1].clone();
        let voted = paired.cast_vote(&target).unwrap();
        prop_assert_eq!(&paired, &paired_snapshot);

        let voted_snapshot = voted.clone();
        let _ = voted.advance().unwrap();
        prop_assert_eq!(&voted, &voted_snapshot);
    }

    #[test]
    fn test_decisive_tournaments_terminate_in_n_minus_one_rounds(
        entries in unique_entries_strategy(2, 16),
        choice in 0usize..=1,
    ) {
        let (done, rounds) = run_to_winner(&entries, choice);

        // Each decisive round eliminates exactly one candidate.
        prop_assert_eq!(rounds, entries.len() - 1);
        prop_assert_eq!(done.entries, None);
        prop_assert_eq!(done.vote, None);
        prop_assert!(done.winner.is_some());
        let winner = done.winner.unwrap();
        prop_assert!(entries.contains(&winner), "winner must come from the seed list");
    }

    #[test]
    fn test_pairing_conserves_candidates(entries in unique_entries_strategy(2, 16)) {
        let state = State::initialize(entries.iter().cloned());
        let paired = state.advance().unwrap();

        let round = paired.vote.as_ref().unwrap();
        let pending = paired.entries.as_ref().unwrap();
        prop_assert_eq!(round.pair.as_slice(), &entries[..2]);
        prop_assert_eq!(pending.as_slice(), &entries[2..]);
    }

    #[test]
    fn test_resolution_conserves_or_shrinks_the_field(
        entries in unique_entries_strategy(2, 16),
        votes_first in 0u32..4,
        votes_second in 0u32..4,
    ) {
        let mut state = State::initialize(entries.iter().cloned()).advance().unwrap();
        let pair = state.vote.as_ref().unwrap().pair.clone();
        for _ in 0..votes_first {
            state = state.cast_vote(&pair[0]).unwrap();
        }
        for _ in 0..votes_second {
            state = state.cast_vote(&pair[1]).unwrap();
        }
        let resolved = state.advance().unwrap();

        // Survivors are the new pair plus whatever is still pending.
        let survivors = if resolved.is_concluded() {
            1
        } else {
            2 + resolved.entries.as_ref().unwrap().len()
        };
        let expected = if votes_first == votes_second {
            entries.len() // tie: both requeued
        } else {
            entries.len() - 1 // decisive: loser eliminated
        };
        prop_assert_eq!(survivors, expected);
    }

    #[test]
    fn test_tally_counts_match_votes_cast(
        entries in unique_entries_strategy(2, 4),
        votes in prop::collection::vec(0usize..=1, 1..20),
    ) {
        let mut state = State::initialize(entries.iter().cloned()).advance().unwrap();
        let pair = state.vote.as_ref().unwrap().pair.clone();
        for &side in &votes {
            state = state.cast_vote(&pair[side]).unwrap();
        }

        let round = state.vote.as_ref().unwrap();
        let cast_first = votes.iter().filter(|&&side| side == 0).count() as u32;
        let cast_second = votes.len() as u32 - cast_first;
        prop_assert_eq!(round.count(&pair[0]), cast_first);
        prop_assert_eq!(round.count(&pair[1]), cast_second);

        // Tally keys only exist for candidates with at least one vote.
        prop_assert!(round.tally.values().all(|&count| count >= 1));
    }
}
