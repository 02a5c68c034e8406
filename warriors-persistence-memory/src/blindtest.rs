use warriors_app::domain::{
    BlindtestRoundId, DisciplineId, GuessId, RepoCreateError, RepoError, RepoRetrieveError,
    RepoUpdateError,
    blindtest::{BlindtestGuess, BlindtestRepository, BlindtestRound, GuessWrite},
};
use warriors_core::ranking::ResultValue;

use crate::InMemoryStore;

#[async_trait::async_trait]
impl BlindtestRepository for InMemoryStore {
    async fn create_blindtest_round(
        &self,
        discipline_id: DisciplineId,
    ) -> Result<BlindtestRound, RepoCreateError> {
        self.with_state(|state| {
            if !state.disciplines.contains_key(&discipline_id) {
                return Err(RepoCreateError::StorageError(format!(
                    "unknown discipline {}",
                    discipline_id
                )));
            }
            let order = state
                .blindtest_rounds
                .values()
                .filter(|round| round.is_active && round.discipline_id == discipline_id)
                .map(|round| round.order + 1)
                .max()
                .unwrap_or(0);
            let round = BlindtestRound {
                id: BlindtestRoundId::new(state.next_id()),
                discipline_id,
                order,
                is_active: true,
            };
            state.blindtest_rounds.insert(round.id, round.clone());
            Ok(round)
        })
        .map_err(RepoCreateError::StorageError)?
    }

    async fn get_blindtest_round(
        &self,
        round_id: BlindtestRoundId,
    ) -> Result<BlindtestRound, RepoRetrieveError> {
        self.with_state(|state| state.blindtest_rounds.get(&round_id).cloned())
            .map_err(RepoRetrieveError::StorageError)?
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn list_blindtest_rounds(
        &self,
        discipline_id: DisciplineId,
    ) -> Result<Vec<BlindtestRound>, RepoError> {
        self.with_state(|state| {
            let mut rounds: Vec<BlindtestRound> = state
                .blindtest_rounds
                .values()
                .filter(|round| round.is_active && round.discipline_id == discipline_id)
                .cloned()
                .collect();
            rounds.sort_by_key(|round| round.order);
            rounds
        })
        .map_err(RepoError::StorageError)
    }

    async fn get_guess(&self, guess_id: GuessId) -> Result<BlindtestGuess, RepoRetrieveError> {
        self.with_state(|state| state.guesses.get(&guess_id).cloned())
            .map_err(RepoRetrieveError::StorageError)?
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn commit_guess(
        &self,
        guess: GuessWrite,
        points: i64,
    ) -> Result<BlindtestGuess, RepoUpdateError> {
        self.with_state(|state| {
            let Some(round) = state.blindtest_rounds.get(&guess.round_id) else {
                return Err(RepoUpdateError::NotFound);
            };
            if let Some(guess_id) = guess.id {
                if !state.guesses.contains_key(&guess_id) {
                    return Err(RepoUpdateError::NotFound);
                }
            }
            let Some(result) = state.find_result(guess.team_id, round.discipline_id) else {
                return Err(RepoUpdateError::NotFound);
            };
            let current = match result.value {
                ResultValue::Points(current) => current,
                ResultValue::Unset => 0,
                ResultValue::Time(_) => return Err(RepoUpdateError::Conflict),
            };
            let result_id = result.id;

            if let Some(result) = state.results.get_mut(&result_id) {
                result.value = ResultValue::Points(current + points);
            }
            let id = match guess.id {
                Some(id) => id,
                None => GuessId::new(state.next_id()),
            };
            let stored = BlindtestGuess {
                id,
                round_id: guess.round_id,
                team_id: guess.team_id,
                artist: guess.artist,
                song: guess.song,
                flags: guess.flags,
                is_active: guess.is_active,
            };
            state.guesses.insert(id, stored.clone());
            Ok(stored)
        })
        .map_err(RepoUpdateError::StorageError)?
    }
}
