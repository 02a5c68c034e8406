use warriors_core::{
    GameSide, ScoreDelta,
    scoring::{
        blindtest::guess_delta,
        dodgeball::{DodgeballEvent, DodgeballEventType, DodgeballRules},
        rescore,
        rugby::{RugbyEvent, RugbyRules},
    },
};

use crate::{
    config::TournamentConfig,
    domain::{
        blindtest::{BlindtestGuess, GuessWrite},
        discipline::DisciplineKind,
        event::{GameEvent, GameEventKind, ResolvedSides},
    },
    error::{ServiceError, ServiceResult},
};

/// An active event as seen by a score engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggedEvent {
    pub kind: GameEventKind,
    pub sides: ResolvedSides,
}

impl From<&GameEvent> for LoggedEvent {
    fn from(event: &GameEvent) -> Self {
        LoggedEvent {
            kind: event.kind,
            sides: ResolvedSides {
                side1: event.side1,
                side2: event.side2,
            },
        }
    }
}

/// Derives a game's score from its event log.
pub trait ScoreEngine: Send + Sync {
    fn kind(&self) -> DisciplineKind;

    fn accepts(&self, kind: GameEventKind) -> bool;

    /// Checks the roles of the players named by an event.
    fn validate(&self, kind: GameEventKind, sides: ResolvedSides) -> ServiceResult<()>;

    /// Score change when the active log, oldest first, goes from `before` to
    /// `after`.
    fn rescore(&self, before: &[LoggedEvent], after: &[LoggedEvent]) -> ScoreDelta;
}

pub struct RugbyEngine {
    rules: RugbyRules,
}

impl RugbyEngine {
    pub fn new(rules: RugbyRules) -> Self {
        Self { rules }
    }

    fn events(log: &[LoggedEvent]) -> Vec<RugbyEvent> {
        log.iter()
            .filter_map(|event| match event.kind {
                GameEventKind::Rugby(kind) => Some(RugbyEvent::new(kind, event.sides.side1)),
                GameEventKind::Dodgeball(_) => None,
            })
            .collect()
    }
}

impl ScoreEngine for RugbyEngine {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::Rugby
    }

    fn accepts(&self, kind: GameEventKind) -> bool {
        matches!(kind, GameEventKind::Rugby(_))
    }

    fn validate(&self, _kind: GameEventKind, _sides: ResolvedSides) -> ServiceResult<()> {
        Ok(())
    }

    fn rescore(&self, before: &[LoggedEvent], after: &[LoggedEvent]) -> ScoreDelta {
        rescore(&self.rules, &Self::events(before), &Self::events(after))
    }
}

pub struct DodgeballEngine {
    rules: DodgeballRules,
}

impl DodgeballEngine {
    pub fn new(rules: DodgeballRules) -> Self {
        Self { rules }
    }

    fn events(log: &[LoggedEvent]) -> Vec<DodgeballEvent> {
        log.iter()
            .filter_map(|event| match event.kind {
                GameEventKind::Dodgeball(DodgeballEventType::Hit) => Some(DodgeballEvent::hit(
                    event.sides.side1,
                    event
                        .sides
                        .side2
                        .unwrap_or(event.sides.side1.opponent()),
                )),
                GameEventKind::Dodgeball(kind) => {
                    Some(DodgeballEvent::new(kind, event.sides.side1))
                }
                GameEventKind::Rugby(_) => None,
            })
            .collect()
    }
}

impl ScoreEngine for DodgeballEngine {
    fn kind(&self) -> DisciplineKind {
        DisciplineKind::Dodgeball
    }

    fn accepts(&self, kind: GameEventKind) -> bool {
        matches!(kind, GameEventKind::Dodgeball(_))
    }

    fn validate(&self, kind: GameEventKind, sides: ResolvedSides) -> ServiceResult<()> {
        let opposing = |side: GameSide| side == sides.side1.opponent();
        match kind {
            GameEventKind::Dodgeball(DodgeballEventType::Hit) => match sides.side2 {
                Some(side) if opposing(side) => Ok(()),
                _ => ServiceError::validation("A hit needs the hit player of the opposing team"),
            },
            GameEventKind::Dodgeball(DodgeballEventType::Catch) => match sides.side2 {
                Some(side) if !opposing(side) => {
                    ServiceError::validation("A catch can only stop a ball of the opposing team")
                }
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }

    fn rescore(&self, before: &[LoggedEvent], after: &[LoggedEvent]) -> ScoreDelta {
        rescore(&self.rules, &Self::events(before), &Self::events(after))
    }
}

/// Blindtest points are a ledger over guess flags rather than a replay.
pub struct BlindtestEngine;

impl BlindtestEngine {
    pub fn guess_points(&self, previous: Option<&BlindtestGuess>, next: &GuessWrite) -> i64 {
        guess_delta(
            previous.filter(|guess| guess.is_active).map(|guess| guess.flags),
            next.is_active.then_some(next.flags),
        )
    }
}

/// Score engines selected by discipline kind.
pub struct ScoreEngines {
    rugby: RugbyEngine,
    dodgeball: DodgeballEngine,
    blindtest: BlindtestEngine,
}

impl ScoreEngines {
    pub fn new(config: &TournamentConfig) -> Self {
        Self {
            rugby: RugbyEngine::new(config.rugby.clone()),
            dodgeball: DodgeballEngine::new(config.dodgeball.clone()),
            blindtest: BlindtestEngine,
        }
    }

    pub fn event_engine(&self, kind: DisciplineKind) -> Option<&dyn ScoreEngine> {
        match kind {
            DisciplineKind::Rugby => Some(&self.rugby),
            DisciplineKind::Dodgeball => Some(&self.dodgeball),
            _ => None,
        }
    }

    pub fn blindtest_engine(&self, kind: DisciplineKind) -> Option<&BlindtestEngine> {
        match kind {
            DisciplineKind::Blindtest => Some(&self.blindtest),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use warriors_core::scoring::rugby::RugbyEventType;

    use super::*;

    fn logged(kind: GameEventKind, side1: GameSide, side2: Option<GameSide>) -> LoggedEvent {
        LoggedEvent {
            kind,
            sides: ResolvedSides { side1, side2 },
        }
    }

    #[test]
    fn test_engine_selection() {
        let engines = ScoreEngines::new(&TournamentConfig::default());
        assert_eq!(
            engines
                .event_engine(DisciplineKind::Dodgeball)
                .map(|engine| engine.kind()),
            Some(DisciplineKind::Dodgeball)
        );
        assert!(engines.event_engine(DisciplineKind::Blindtest).is_none());
        assert!(engines.blindtest_engine(DisciplineKind::Blindtest).is_some());
        assert!(engines.blindtest_engine(DisciplineKind::Crossfit).is_none());
    }

    #[test]
    fn test_rugby_engine_rejects_dodgeball_events() {
        let engine = RugbyEngine::new(RugbyRules::default());
        assert!(engine.accepts(GameEventKind::Rugby(RugbyEventType::Try)));
        assert!(!engine.accepts(GameEventKind::Dodgeball(DodgeballEventType::Hit)));
    }

    #[test]
    fn test_dodgeball_hit_needs_opponent() {
        let engine = DodgeballEngine::new(DodgeballRules::default());
        let hit = GameEventKind::Dodgeball(DodgeballEventType::Hit);
        let own_team = ResolvedSides {
            side1: GameSide::Team1,
            side2: Some(GameSide::Team1),
        };
        let missing = ResolvedSides {
            side1: GameSide::Team1,
            side2: None,
        };
        let valid = ResolvedSides {
            side1: GameSide::Team1,
            side2: Some(GameSide::Team2),
        };
        assert!(matches!(
            engine.validate(hit, own_team),
            Err(ServiceError::Validation(_))
        ));
        assert!(engine.validate(hit, missing).is_err());
        assert!(engine.validate(hit, valid).is_ok());
    }

    #[test]
    fn test_rugby_engine_rescore() {
        let engine = RugbyEngine::new(RugbyRules::default());
        let tackle = logged(
            GameEventKind::Rugby(RugbyEventType::Tackle),
            GameSide::Team1,
            None,
        );
        let score = logged(
            GameEventKind::Rugby(RugbyEventType::Try),
            GameSide::Team2,
            None,
        );
        assert_eq!(
            engine.rescore(&[], &[tackle, score]),
            ScoreDelta { team1: 0, team2: 2 }
        );
    }
}
