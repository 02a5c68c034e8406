use std::collections::BTreeSet;

use warriors_app::domain::{
    DisciplineId, EditionId, GameId, RepoCreateError, RepoError, RepoRetrieveError,
    RepoUpdateError, RoundId,
    fixture::{FixtureRepository, Game, Round, RoundDraft},
};
use warriors_core::Score;

use crate::{InMemoryStore, State};

impl State {
    fn round_order(&self, round_id: RoundId) -> u32 {
        self.rounds.get(&round_id).map_or(u32::MAX, |round| round.order)
    }
}

#[async_trait::async_trait]
impl FixtureRepository for InMemoryStore {
    async fn create_rounds(
        &self,
        discipline_id: DisciplineId,
        edition_id: EditionId,
        rounds: Vec<RoundDraft>,
    ) -> Result<Vec<Round>, RepoCreateError> {
        self.with_state(|state| {
            if !state.disciplines.contains_key(&discipline_id) {
                return Err(RepoCreateError::StorageError(format!(
                    "unknown discipline {}",
                    discipline_id
                )));
            }
            let mut taken: BTreeSet<u32> = state
                .rounds
                .values()
                .filter(|round| round.is_active && round.discipline_id == discipline_id)
                .map(|round| round.order)
                .collect();
            if !rounds.iter().all(|draft| taken.insert(draft.order)) {
                return Err(RepoCreateError::Conflict);
            }

            let mut created = Vec::with_capacity(rounds.len());
            for draft in rounds {
                let round = Round {
                    id: RoundId::new(state.next_id()),
                    discipline_id,
                    order: draft.order,
                    is_over: false,
                    is_active: true,
                };
                state.rounds.insert(round.id, round.clone());
                for game in draft.games {
                    let game = Game {
                        id: GameId::new(state.next_id()),
                        discipline_id,
                        round_id: round.id,
                        edition_id,
                        team1: game.team1,
                        team2: game.team2,
                        referee: game.referee,
                        batch: game.batch,
                        score: Score::default(),
                        is_active: true,
                    };
                    state.games.insert(game.id, game);
                }
                created.push(round);
            }
            Ok(created)
        })
        .map_err(RepoCreateError::StorageError)?
    }

    async fn get_round(&self, round_id: RoundId) -> Result<Round, RepoRetrieveError> {
        self.with_state(|state| state.rounds.get(&round_id).cloned())
            .map_err(RepoRetrieveError::StorageError)?
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn list_rounds(&self, discipline_id: DisciplineId) -> Result<Vec<Round>, RepoError> {
        self.with_state(|state| {
            let mut rounds: Vec<Round> = state
                .rounds
                .values()
                .filter(|round| round.is_active && round.discipline_id == discipline_id)
                .cloned()
                .collect();
            rounds.sort_by_key(|round| round.order);
            rounds
        })
        .map_err(RepoError::StorageError)
    }

    async fn set_round_over(
        &self,
        round_id: RoundId,
        is_over: bool,
    ) -> Result<Round, RepoUpdateError> {
        self.with_state(|state| match state.rounds.get_mut(&round_id) {
            Some(round) => {
                let previous = round.clone();
                round.is_over = is_over;
                Ok(previous)
            }
            None => Err(RepoUpdateError::NotFound),
        })
        .map_err(RepoUpdateError::StorageError)?
    }

    async fn get_game(&self, game_id: GameId) -> Result<Game, RepoRetrieveError> {
        self.with_state(|state| state.games.get(&game_id).cloned())
            .map_err(RepoRetrieveError::StorageError)?
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn list_games(&self, discipline_id: DisciplineId) -> Result<Vec<Game>, RepoError> {
        self.with_state(|state| {
            let mut games: Vec<Game> = state
                .games
                .values()
                .filter(|game| game.is_active && game.discipline_id == discipline_id)
                .cloned()
                .collect();
            games.sort_by_key(|game| (state.round_order(game.round_id), game.id));
            games
        })
        .map_err(RepoError::StorageError)
    }
}
