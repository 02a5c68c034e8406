use warriors_app::domain::{
    DisciplineId, RepoError, RepoRetrieveError, RepoUpdateError, TeamId, TeamResultId,
    result::{TeamResult, TeamResultRepository},
};
use warriors_core::ranking::ResultValue;

use crate::InMemoryStore;

#[async_trait::async_trait]
impl TeamResultRepository for InMemoryStore {
    async fn get_team_result(
        &self,
        team_result_id: TeamResultId,
    ) -> Result<TeamResult, RepoRetrieveError> {
        self.with_state(|state| state.results.get(&team_result_id).cloned())
            .map_err(RepoRetrieveError::StorageError)?
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn find_team_result(
        &self,
        team_id: TeamId,
        discipline_id: DisciplineId,
    ) -> Result<TeamResult, RepoRetrieveError> {
        self.with_state(|state| state.find_result(team_id, discipline_id).cloned())
            .map_err(RepoRetrieveError::StorageError)?
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn list_discipline_results(
        &self,
        discipline_id: DisciplineId,
    ) -> Result<Vec<TeamResult>, RepoError> {
        self.with_state(|state| {
            let mut results: Vec<TeamResult> = state
                .results
                .values()
                .filter(|result| result.is_active && result.discipline_id == discipline_id)
                .cloned()
                .collect();
            results.sort_by_key(|result| result.team_id);
            results
        })
        .map_err(RepoError::StorageError)
    }

    async fn list_team_results(&self, team_id: TeamId) -> Result<Vec<TeamResult>, RepoError> {
        self.with_state(|state| {
            state
                .results
                .values()
                .filter(|result| result.is_active && result.team_id == team_id)
                .cloned()
                .collect()
        })
        .map_err(RepoError::StorageError)
    }

    async fn set_result_value(
        &self,
        team_result_id: TeamResultId,
        value: ResultValue,
    ) -> Result<(), RepoUpdateError> {
        self.with_state(|state| match state.results.get_mut(&team_result_id) {
            Some(result) => {
                result.value = value;
                Ok(())
            }
            None => Err(RepoUpdateError::NotFound),
        })
        .map_err(RepoUpdateError::StorageError)?
    }
}

impl InMemoryStore {
    /// Withdraws a team from a discipline without touching other records.
    pub fn deactivate_team_result(&self, team_result_id: TeamResultId) -> bool {
        self.with_state(|state| match state.results.get_mut(&team_result_id) {
            Some(result) => {
                result.is_active = false;
                true
            }
            None => false,
        })
        .unwrap_or(false)
    }
}
