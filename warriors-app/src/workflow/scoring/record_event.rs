use std::sync::Arc;

use warriors_core::{GameSide, MatchPoints, Score, scoring::EventOrder};

use crate::{
    domain::{
        EventId, GameId, PlayerId, RepoRetrieveError,
        discipline::{DisciplineRepository, ResultType},
        event::{
            GameEvent, GameEventRepository, GameEventWrite, ResolvedSides, ResultDelta,
            ScoreCommit,
        },
        fixture::{FixtureRepository, Game},
    },
    error::{ServiceError, ServiceResult, found},
    services::{locks::KeyedLocks, team_resolver::PlayerTeamResolver},
    workflow::scoring::engine::{LoggedEvent, ScoreEngines},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventChange {
    Created,
    Edited,
    Deactivated,
    Reactivated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub event: GameEvent,
    pub change: EventChange,
    pub score: Score,
}

#[async_trait::async_trait]
pub trait RecordEventUseCase {
    /// Stores a new or updated game event and rescores the game.
    async fn record_event(&self, event: GameEventWrite) -> ServiceResult<RecordedEvent>;
}

pub struct RecordEventUseCaseImpl<
    P: PlayerTeamResolver,
    D: DisciplineRepository,
    F: FixtureRepository,
    E: GameEventRepository,
> {
    player_team_resolver: Arc<P>,
    discipline_repository: Arc<D>,
    fixture_repository: Arc<F>,
    event_repository: Arc<E>,
    engines: Arc<ScoreEngines>,
    match_points: MatchPoints,
    game_locks: Arc<KeyedLocks<GameId>>,
}

impl<P: PlayerTeamResolver, D: DisciplineRepository, F: FixtureRepository, E: GameEventRepository>
    RecordEventUseCaseImpl<P, D, F, E>
{
    pub fn new(
        player_team_resolver: Arc<P>,
        discipline_repository: Arc<D>,
        fixture_repository: Arc<F>,
        event_repository: Arc<E>,
        engines: Arc<ScoreEngines>,
        match_points: MatchPoints,
        game_locks: Arc<KeyedLocks<GameId>>,
    ) -> Self {
        Self {
            player_team_resolver,
            discipline_repository,
            fixture_repository,
            event_repository,
            engines,
            match_points,
            game_locks,
        }
    }
}

impl<
    P: PlayerTeamResolver + Send + Sync + 'static,
    D: DisciplineRepository + Send + Sync + 'static,
    F: FixtureRepository + Send + Sync + 'static,
    E: GameEventRepository + Send + Sync + 'static,
> RecordEventUseCaseImpl<P, D, F, E>
{
    async fn resolve_side(&self, game: &Game, player_id: PlayerId) -> ServiceResult<GameSide> {
        let team_id = self.player_team_resolver.resolve_team(player_id).await?;
        match game.side_of(team_id) {
            Some(side) => Ok(side),
            None => ServiceError::validation(format!(
                "Player {} of team {} does not play in game {}",
                player_id, team_id, game.id
            )),
        }
    }

    async fn existing_event(
        &self,
        event_id: EventId,
        game_id: GameId,
    ) -> ServiceResult<GameEvent> {
        let existing = match self.event_repository.get_game_event(event_id).await {
            Ok(existing) => existing,
            Err(RepoRetrieveError::NotFound) => {
                return ServiceError::not_found(format!("Event {} not found", event_id));
            }
            Err(e) => return Err(e.into()),
        };
        if existing.game_id != game_id {
            return ServiceError::validation(format!(
                "Event {} belongs to game {}, not game {}",
                event_id, existing.game_id, game_id
            ));
        }
        Ok(existing)
    }

    fn result_deltas(&self, game: &Game, result_type: ResultType, score: Score) -> Vec<ResultDelta> {
        if result_type != ResultType::Points {
            return Vec::new();
        }
        let transition = self.match_points.transition(game.score, score);
        [GameSide::Team1, GameSide::Team2]
            .into_iter()
            .filter(|side| transition.get(*side) != 0)
            .map(|side| ResultDelta {
                team_id: game.team(side),
                points: transition.get(side),
            })
            .collect()
    }
}

fn change_of(existing: Option<&GameEvent>, is_active: bool) -> EventChange {
    match existing {
        None => EventChange::Created,
        Some(existing) if existing.is_active && !is_active => EventChange::Deactivated,
        Some(existing) if !existing.is_active && is_active => EventChange::Reactivated,
        Some(_) => EventChange::Edited,
    }
}

#[async_trait::async_trait]
impl<
    P: PlayerTeamResolver + Send + Sync + 'static,
    D: DisciplineRepository + Send + Sync + 'static,
    F: FixtureRepository + Send + Sync + 'static,
    E: GameEventRepository + Send + Sync + 'static,
> RecordEventUseCase for RecordEventUseCaseImpl<P, D, F, E>
{
    async fn record_event(&self, write: GameEventWrite) -> ServiceResult<RecordedEvent> {
        let _guard = self.game_locks.lock(&write.game_id).await;

        let game = found(self.fixture_repository.get_game(write.game_id).await, || {
            format!("Game {} not found", write.game_id)
        })?;
        if !game.is_active {
            return ServiceError::validation(format!("Game {} is not active", game.id));
        }
        let discipline = found(
            self.discipline_repository
                .get_discipline(game.discipline_id)
                .await,
            || format!("Discipline {} not found", game.discipline_id),
        )?;

        let engine = match self.engines.event_engine(discipline.kind) {
            Some(engine) if engine.accepts(write.kind) => engine,
            _ => {
                return ServiceError::validation(format!(
                    "Event {} does not belong to discipline {} ({:?})",
                    write.kind.code(),
                    discipline.id,
                    discipline.kind
                ));
            }
        };

        let sides = ResolvedSides {
            side1: self.resolve_side(&game, write.player1).await?,
            side2: match write.player2 {
                Some(player2) => Some(self.resolve_side(&game, player2).await?),
                None => None,
            },
        };
        engine.validate(write.kind, sides)?;

        let existing = match write.id {
            Some(event_id) => Some(self.existing_event(event_id, game.id).await?),
            None => None,
        };
        let change = change_of(existing.as_ref(), write.is_active);

        let active = self.event_repository.list_active_events(game.id).await?;
        let mut before: Vec<(EventOrder, LoggedEvent)> = active
            .iter()
            .map(|event| (event.order(), LoggedEvent::from(event)))
            .collect();
        before.sort_by_key(|(order, _)| *order);

        let mut after: Vec<(EventOrder, LoggedEvent)> = active
            .iter()
            .filter(|event| Some(event.id) != write.id)
            .map(|event| (event.order(), LoggedEvent::from(event)))
            .collect();
        if write.is_active {
            after.push((
                write.order(),
                LoggedEvent {
                    kind: write.kind,
                    sides,
                },
            ));
        }
        after.sort_by_key(|(order, _)| *order);

        let before: Vec<LoggedEvent> = before.into_iter().map(|(_, event)| event).collect();
        let after: Vec<LoggedEvent> = after.into_iter().map(|(_, event)| event).collect();
        let delta = engine.rescore(&before, &after);

        let score = match game.score.apply(delta) {
            Some(score) => score,
            None => {
                log::error!(
                    "Score of game {} would become negative ({:?} + {:?})",
                    game.id,
                    game.score,
                    delta
                );
                return ServiceError::conflict(format!(
                    "Score of game {} is inconsistent with its events",
                    game.id
                ));
            }
        };
        let results = self.result_deltas(&game, discipline.result_type, score);

        let event = self
            .event_repository
            .commit_game_event(write, sides, ScoreCommit { score, results })
            .await?;
        log::debug!(
            "Game {}: {:?} event {} ({}), score {}-{} -> {}-{}",
            game.id,
            change,
            event.id,
            event.kind.code(),
            game.score.team1,
            game.score.team2,
            score.team1,
            score.team2
        );

        Ok(RecordedEvent {
            event,
            change,
            score,
        })
    }
}
