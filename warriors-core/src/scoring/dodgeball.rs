use crate::{GameSide, ScoreDelta, scoring::ScoringRules};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DodgeballEventType {
    Start,
    End,
    Hit,
    Catch,
    Foul,
    Out,
    NewRound,
}

impl DodgeballEventType {
    pub fn code(&self) -> &'static str {
        match self {
            DodgeballEventType::Start => "STA",
            DodgeballEventType::End => "END",
            DodgeballEventType::Hit => "HIT",
            DodgeballEventType::Catch => "CAT",
            DodgeballEventType::Foul => "FOL",
            DodgeballEventType::Out => "OUT",
            DodgeballEventType::NewRound => "NEW",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "STA" => Some(DodgeballEventType::Start),
            "END" => Some(DodgeballEventType::End),
            "HIT" => Some(DodgeballEventType::Hit),
            "CAT" => Some(DodgeballEventType::Catch),
            "FOL" => Some(DodgeballEventType::Foul),
            "OUT" => Some(DodgeballEventType::Out),
            "NEW" => Some(DodgeballEventType::NewRound),
            _ => None,
        }
    }
}

/// A dodgeball event reduced to the acting side and, for hits, the side of
/// the player that was hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DodgeballEvent {
    pub kind: DodgeballEventType,
    pub actor: GameSide,
    pub target: Option<GameSide>,
}

impl DodgeballEvent {
    pub fn new(kind: DodgeballEventType, actor: GameSide) -> Self {
        DodgeballEvent {
            kind,
            actor,
            target: None,
        }
    }

    pub fn hit(actor: GameSide, target: GameSide) -> Self {
        DodgeballEvent {
            kind: DodgeballEventType::Hit,
            actor,
            target: Some(target),
        }
    }

    fn hit_side(&self) -> GameSide {
        self.target.unwrap_or(self.actor.opponent())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DodgeballRules {
    pub live_players: i64,
}

impl Default for DodgeballRules {
    fn default() -> Self {
        DodgeballRules { live_players: 3 }
    }
}

impl DodgeballRules {
    /// Scans `log` newest first and reports whether `eliminated` has run out of
    /// live players before reaching a round boundary.
    fn is_end_of_round(&self, eliminated: GameSide, log: &[DodgeballEvent]) -> bool {
        let mut live_players = self.live_players;
        for event in log.iter().rev() {
            match event.kind {
                DodgeballEventType::Hit if event.hit_side() == eliminated => live_players -= 1,
                DodgeballEventType::Foul if event.actor == eliminated => live_players -= 1,
                DodgeballEventType::Catch if event.actor == eliminated => {
                    live_players = (live_players + 1).min(self.live_players)
                }
                DodgeballEventType::NewRound | DodgeballEventType::Start => return false,
                _ => continue,
            }
            if live_players <= 0 {
                return true;
            }
        }
        false
    }

    /// Whether the hit `event`, as the newest event after `prior`, knocks out
    /// the last live player of the hit side.
    pub fn is_hit_end_of_round(&self, event: &DodgeballEvent, prior: &[DodgeballEvent]) -> bool {
        self.ends_round(event.hit_side(), event, prior)
    }

    /// Whether the foul `event` costs the fouling side its last live player.
    pub fn is_foul_end_of_round(&self, event: &DodgeballEvent, prior: &[DodgeballEvent]) -> bool {
        self.ends_round(event.actor, event, prior)
    }

    fn ends_round(
        &self,
        eliminated: GameSide,
        event: &DodgeballEvent,
        prior: &[DodgeballEvent],
    ) -> bool {
        let mut log = prior.to_vec();
        log.push(*event);
        self.is_end_of_round(eliminated, &log)
    }
}

impl ScoringRules for DodgeballRules {
    type Event = DodgeballEvent;

    fn contribution(&self, event: &DodgeballEvent, prior: &[DodgeballEvent]) -> ScoreDelta {
        match event.kind {
            DodgeballEventType::Hit if self.is_hit_end_of_round(event, prior) => {
                ScoreDelta::for_side(event.hit_side().opponent(), 1)
            }
            DodgeballEventType::Foul if self.is_foul_end_of_round(event, prior) => {
                ScoreDelta::for_side(event.actor.opponent(), 1)
            }
            _ => ScoreDelta::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::suffix_total;

    use DodgeballEventType::*;
    use GameSide::{Team1, Team2};

    fn hit(actor: GameSide) -> DodgeballEvent {
        DodgeballEvent::hit(actor, actor.opponent())
    }

    #[test]
    fn test_three_hits_end_round() {
        let rules = DodgeballRules::default();
        let log = vec![
            DodgeballEvent::new(Start, Team1),
            hit(Team1),
            hit(Team1),
            hit(Team1),
        ];
        assert!(!rules.is_hit_end_of_round(&log[2], &log[..2]));
        assert!(rules.is_hit_end_of_round(&log[3], &log[..3]));
        assert_eq!(
            suffix_total(&rules, &log, 0),
            ScoreDelta { team1: 1, team2: 0 }
        );
    }

    #[test]
    fn test_catch_restores_a_life() {
        let rules = DodgeballRules::default();
        let mut log = vec![
            DodgeballEvent::new(Start, Team1),
            hit(Team1),
            DodgeballEvent::new(Catch, Team2),
            hit(Team1),
            hit(Team1),
        ];
        assert!(suffix_total(&rules, &log, 0).is_zero());

        log.push(hit(Team1));
        assert_eq!(
            suffix_total(&rules, &log, 0),
            ScoreDelta { team1: 1, team2: 0 }
        );
    }

    #[test]
    fn test_catch_is_capped() {
        let rules = DodgeballRules::default();
        let log = vec![
            DodgeballEvent::new(NewRound, Team1),
            DodgeballEvent::new(Catch, Team2),
            DodgeballEvent::new(Catch, Team2),
            hit(Team1),
            hit(Team1),
            hit(Team1),
        ];
        assert_eq!(
            suffix_total(&rules, &log, 0),
            ScoreDelta { team1: 1, team2: 0 }
        );
    }

    #[test]
    fn test_fouls_count_against_fouling_side() {
        let rules = DodgeballRules::default();
        let log = vec![
            DodgeballEvent::new(Start, Team1),
            hit(Team1),
            DodgeballEvent::new(Foul, Team2),
            DodgeballEvent::new(Foul, Team2),
        ];
        assert!(rules.is_foul_end_of_round(&log[3], &log[..3]));
        assert_eq!(
            suffix_total(&rules, &log, 0),
            ScoreDelta { team1: 1, team2: 0 }
        );
    }

    #[test]
    fn test_new_round_resets_lives() {
        let rules = DodgeballRules::default();
        let log = vec![
            hit(Team2),
            hit(Team2),
            DodgeballEvent::new(NewRound, Team1),
            hit(Team2),
        ];
        assert!(suffix_total(&rules, &log, 0).is_zero());
    }
}
