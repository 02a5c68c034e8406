use warriors_app::domain::{
    EventId, GameId, RepoError, RepoRetrieveError, RepoUpdateError, TeamResultId,
    event::{GameEvent, GameEventRepository, GameEventWrite, ResolvedSides, ScoreCommit},
};
use warriors_core::ranking::ResultValue;

use crate::InMemoryStore;

#[async_trait::async_trait]
impl GameEventRepository for InMemoryStore {
    async fn get_game_event(&self, event_id: EventId) -> Result<GameEvent, RepoRetrieveError> {
        self.with_state(|state| state.events.get(&event_id).cloned())
            .map_err(RepoRetrieveError::StorageError)?
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn list_active_events(&self, game_id: GameId) -> Result<Vec<GameEvent>, RepoError> {
        self.with_state(|state| {
            let mut events: Vec<GameEvent> = state
                .events
                .values()
                .filter(|event| event.is_active && event.game_id == game_id)
                .cloned()
                .collect();
            events.sort_by_key(|event| event.order());
            events
        })
        .map_err(RepoError::StorageError)
    }

    async fn commit_game_event(
        &self,
        event: GameEventWrite,
        sides: ResolvedSides,
        commit: ScoreCommit,
    ) -> Result<GameEvent, RepoUpdateError> {
        self.with_state(|state| {
            let Some(game) = state.games.get(&event.game_id) else {
                return Err(RepoUpdateError::NotFound);
            };
            if let Some(event_id) = event.id {
                if !state.events.contains_key(&event_id) {
                    return Err(RepoUpdateError::NotFound);
                }
            }

            let mut updates: Vec<(TeamResultId, i64)> = Vec::with_capacity(commit.results.len());
            for delta in &commit.results {
                let Some(result) = state.find_result(delta.team_id, game.discipline_id) else {
                    return Err(RepoUpdateError::NotFound);
                };
                let current = match result.value {
                    ResultValue::Points(points) => points,
                    ResultValue::Unset => 0,
                    ResultValue::Time(_) => return Err(RepoUpdateError::Conflict),
                };
                updates.push((result.id, current + delta.points));
            }

            for (result_id, points) in updates {
                if let Some(result) = state.results.get_mut(&result_id) {
                    result.value = ResultValue::Points(points);
                }
            }
            if let Some(game) = state.games.get_mut(&event.game_id) {
                game.score = commit.score;
            }

            let id = match event.id {
                Some(id) => id,
                None => EventId::new(state.next_id()),
            };
            let stored = GameEvent {
                id,
                game_id: event.game_id,
                player1: event.player1,
                player2: event.player2,
                side1: sides.side1,
                side2: sides.side2,
                kind: event.kind,
                timestamp: event.timestamp,
                is_active: event.is_active,
            };
            state.events.insert(id, stored.clone());
            Ok(stored)
        })
        .map_err(RepoUpdateError::StorageError)?
    }
}
