pub mod blindtest;
pub mod dodgeball;
pub mod rugby;

use chrono::{DateTime, Utc};

use crate::ScoreDelta;

/// Position of an event in a game's log. Events compare by timestamp first;
/// events sharing a timestamp keep their insertion order through `seq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventOrder {
    pub timestamp: DateTime<Utc>,
    pub seq: i64,
}

impl EventOrder {
    pub fn new(timestamp: DateTime<Utc>, seq: i64) -> Self {
        EventOrder { timestamp, seq }
    }
}

/// Scoring rules of a discipline whose score is derived from an event log.
///
/// `prior` holds every active event older than `event`, oldest first, so a
/// newest-first scan is `prior.iter().rev()`. A contribution may only depend on
/// the event itself and its prior events.
pub trait ScoringRules {
    type Event: PartialEq;

    fn contribution(&self, event: &Self::Event, prior: &[Self::Event]) -> ScoreDelta;
}

/// Sum of the contributions of `log[from..]`.
pub fn suffix_total<R: ScoringRules>(rules: &R, log: &[R::Event], from: usize) -> ScoreDelta {
    let mut total = ScoreDelta::default();
    for index in from..log.len() {
        total += rules.contribution(&log[index], &log[..index]);
    }
    total
}

/// Score change caused by replacing the active log `before` with `after`.
///
/// Both logs are ordered oldest first. Contributions of the shared prefix are
/// identical in both logs, so only the suffixes starting at the first
/// difference are replayed.
pub fn rescore<R: ScoringRules>(rules: &R, before: &[R::Event], after: &[R::Event]) -> ScoreDelta {
    let from = before
        .iter()
        .zip(after.iter())
        .take_while(|(old, new)| old == new)
        .count();
    suffix_total(rules, after, from) - suffix_total(rules, before, from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameSide;

    /// Every event is worth one point more than the number of events before it.
    struct Counting;

    impl ScoringRules for Counting {
        type Event = GameSide;

        fn contribution(&self, event: &GameSide, prior: &[GameSide]) -> ScoreDelta {
            ScoreDelta::for_side(*event, prior.len() as i64 + 1)
        }
    }

    #[test]
    fn test_rescore_matches_full_replay() {
        let before = vec![GameSide::Team1, GameSide::Team2, GameSide::Team1];
        let after = vec![GameSide::Team1, GameSide::Team1, GameSide::Team2, GameSide::Team1];

        let delta = rescore(&Counting, &before, &after);
        let expected = suffix_total(&Counting, &after, 0) - suffix_total(&Counting, &before, 0);
        assert_eq!(delta, expected);
        assert_eq!(delta, ScoreDelta { team1: 3, team2: 1 });
    }

    #[test]
    fn test_rescore_identical_logs() {
        let log = vec![GameSide::Team1, GameSide::Team2];
        assert!(rescore(&Counting, &log, &log).is_zero());
    }

    #[test]
    fn test_event_order_ties_use_sequence() {
        let now = Utc::now();
        let first = EventOrder::new(now, 1);
        let second = EventOrder::new(now, 2);
        assert!(first < second);
        assert!(EventOrder::new(now - chrono::Duration::seconds(1), 9) < first);
    }
}
