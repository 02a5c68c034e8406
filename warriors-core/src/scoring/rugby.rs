use crate::{GameSide, ScoreDelta, scoring::ScoringRules};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RugbyEventType {
    Start,
    End,
    Try,
    Steal,
    Tackle,
    Foul,
    Out,
}

impl RugbyEventType {
    pub fn code(&self) -> &'static str {
        match self {
            RugbyEventType::Start => "STA",
            RugbyEventType::End => "END",
            RugbyEventType::Try => "TRY",
            RugbyEventType::Steal => "STL",
            RugbyEventType::Tackle => "TKL",
            RugbyEventType::Foul => "FOL",
            RugbyEventType::Out => "OUT",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "STA" => Some(RugbyEventType::Start),
            "END" => Some(RugbyEventType::End),
            "TRY" => Some(RugbyEventType::Try),
            "STL" => Some(RugbyEventType::Steal),
            "TKL" => Some(RugbyEventType::Tackle),
            "FOL" => Some(RugbyEventType::Foul),
            "OUT" => Some(RugbyEventType::Out),
            _ => None,
        }
    }
}

/// A rugby event reduced to what scoring needs: its type and the side of the
/// acting player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RugbyEvent {
    pub kind: RugbyEventType,
    pub side: GameSide,
}

impl RugbyEvent {
    pub fn new(kind: RugbyEventType, side: GameSide) -> Self {
        RugbyEvent { kind, side }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RugbyRules {
    pub try_points: i64,
}

impl Default for RugbyRules {
    fn default() -> Self {
        RugbyRules { try_points: 3 }
    }
}

impl RugbyRules {
    /// Points of a try scored by `side`, walking the prior events newest first.
    /// Every tackle by the defending side since the last possession change
    /// costs one point.
    pub fn try_points(&self, side: GameSide, prior: &[RugbyEvent]) -> i64 {
        let mut points = self.try_points;
        for event in prior.iter().rev() {
            match event.kind {
                RugbyEventType::Try
                | RugbyEventType::Out
                | RugbyEventType::Start
                | RugbyEventType::Steal => break,
                RugbyEventType::Tackle if event.side == side => break,
                RugbyEventType::Tackle => points -= 1,
                RugbyEventType::Foul if event.side == side => break,
                RugbyEventType::Foul | RugbyEventType::End => continue,
            }
        }
        points.max(0)
    }
}

impl ScoringRules for RugbyRules {
    type Event = RugbyEvent;

    fn contribution(&self, event: &RugbyEvent, prior: &[RugbyEvent]) -> ScoreDelta {
        match event.kind {
            RugbyEventType::Try => {
                ScoreDelta::for_side(event.side, self.try_points(event.side, prior))
            }
            _ => ScoreDelta::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{rescore, suffix_total};

    use GameSide::{Team1, Team2};
    use RugbyEventType::*;

    fn ev(kind: RugbyEventType, side: GameSide) -> RugbyEvent {
        RugbyEvent::new(kind, side)
    }

    #[test]
    fn test_try_without_prior_events() {
        let rules = RugbyRules::default();
        let log = vec![ev(Try, Team1)];
        assert_eq!(
            suffix_total(&rules, &log, 0),
            ScoreDelta { team1: 3, team2: 0 }
        );
    }

    #[test]
    fn test_opposing_tackles_reduce_try() {
        let rules = RugbyRules::default();
        assert_eq!(rules.try_points(Team1, &[ev(Tackle, Team2)]), 2);
        assert_eq!(
            rules.try_points(Team1, &[ev(Tackle, Team2), ev(Tackle, Team2)]),
            1
        );
        assert_eq!(
            rules.try_points(
                Team1,
                &[
                    ev(Tackle, Team2),
                    ev(Tackle, Team2),
                    ev(Tackle, Team2),
                    ev(Tackle, Team2)
                ]
            ),
            0
        );
    }

    #[test]
    fn test_scan_stops_at_boundaries() {
        let rules = RugbyRules::default();
        // only the tackle after the steal counts
        let prior = [ev(Tackle, Team2), ev(Steal, Team1), ev(Tackle, Team2)];
        assert_eq!(rules.try_points(Team1, &prior), 2);

        let prior = [ev(Tackle, Team2), ev(Tackle, Team1)];
        assert_eq!(rules.try_points(Team1, &prior), 3);

        let prior = [ev(Tackle, Team2), ev(Foul, Team1), ev(Tackle, Team2)];
        assert_eq!(rules.try_points(Team1, &prior), 2);

        let prior = [ev(Tackle, Team2), ev(Foul, Team2), ev(End, Team2)];
        assert_eq!(rules.try_points(Team1, &prior), 2);

        let prior = [ev(Tackle, Team2), ev(Try, Team2)];
        assert_eq!(rules.try_points(Team1, &prior), 3);
    }

    #[test]
    fn test_late_tackle_rescores_following_try() {
        let rules = RugbyRules::default();
        let before = vec![ev(Start, Team1), ev(Try, Team1)];
        let after = vec![ev(Start, Team1), ev(Tackle, Team2), ev(Try, Team1)];
        assert_eq!(
            rescore(&rules, &before, &after),
            ScoreDelta { team1: -1, team2: 0 }
        );
    }

    #[test]
    fn test_retracting_try() {
        let rules = RugbyRules::default();
        let before = vec![ev(Try, Team1), ev(Try, Team1)];
        let after = vec![ev(Try, Team1)];
        assert_eq!(
            rescore(&rules, &before, &after),
            ScoreDelta { team1: -3, team2: 0 }
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(RugbyEventType::from_code("TKL"), Some(Tackle));
        assert_eq!(Steal.code(), "STL");
        assert_eq!(RugbyEventType::from_code("HIT"), None);
    }
}
