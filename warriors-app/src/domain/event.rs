use chrono::{DateTime, Utc};
use warriors_core::{
    GameSide, Score,
    scoring::{EventOrder, dodgeball::DodgeballEventType, rugby::RugbyEventType},
};

use crate::domain::{
    EventId, GameId, PlayerId, RepoError, RepoRetrieveError, RepoUpdateError, TeamId,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameEventKind {
    Rugby(RugbyEventType),
    Dodgeball(DodgeballEventType),
}

impl GameEventKind {
    pub fn code(&self) -> &'static str {
        match self {
            GameEventKind::Rugby(kind) => kind.code(),
            GameEventKind::Dodgeball(kind) => kind.code(),
        }
    }
}

/// A recorded in-game event. The sides are resolved from the players' teams
/// when the event is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEvent {
    pub id: EventId,
    pub game_id: GameId,
    pub player1: PlayerId,
    pub player2: Option<PlayerId>,
    pub side1: GameSide,
    pub side2: Option<GameSide>,
    pub kind: GameEventKind,
    pub timestamp: DateTime<Utc>,
    pub is_active: bool,
}

impl GameEvent {
    pub fn order(&self) -> EventOrder {
        EventOrder::new(self.timestamp, self.id.value() as i64)
    }
}

/// An event as submitted by a scorekeeper. Without `id` a new event is
/// created, otherwise the stored event is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEventWrite {
    pub id: Option<EventId>,
    pub game_id: GameId,
    pub player1: PlayerId,
    pub player2: Option<PlayerId>,
    pub kind: GameEventKind,
    pub timestamp: DateTime<Utc>,
    pub is_active: bool,
}

impl GameEventWrite {
    pub fn new(
        game_id: GameId,
        player1: PlayerId,
        kind: GameEventKind,
        timestamp: DateTime<Utc>,
    ) -> Self {
        GameEventWrite {
            id: None,
            game_id,
            player1,
            player2: None,
            kind,
            timestamp,
            is_active: true,
        }
    }

    pub fn with_player2(mut self, player2: PlayerId) -> Self {
        self.player2 = Some(player2);
        self
    }

    /// Order the event will take in the log once stored. A new event sorts
    /// after every stored event sharing its timestamp.
    pub fn order(&self) -> EventOrder {
        EventOrder::new(
            self.timestamp,
            self.id.map_or(i64::MAX, |id| id.value() as i64),
        )
    }
}

/// Sides resolved for a write, stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSides {
    pub side1: GameSide,
    pub side2: Option<GameSide>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultDelta {
    pub team_id: TeamId,
    pub points: i64,
}

/// Everything a single event write changes besides the event itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCommit {
    pub score: Score,
    pub results: Vec<ResultDelta>,
}

#[async_trait::async_trait]
pub trait GameEventRepository {
    async fn get_game_event(&self, event_id: EventId) -> Result<GameEvent, RepoRetrieveError>;
    /// Active events of the game, oldest first.
    async fn list_active_events(&self, game_id: GameId) -> Result<Vec<GameEvent>, RepoError>;
    /// Stores the event, the game's new score and the result deltas of the
    /// discipline, all or nothing.
    async fn commit_game_event(
        &self,
        event: GameEventWrite,
        sides: ResolvedSides,
        commit: ScoreCommit,
    ) -> Result<GameEvent, RepoUpdateError>;
}
