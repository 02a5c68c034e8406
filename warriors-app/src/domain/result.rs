use warriors_core::ranking::ResultValue;

use crate::domain::{
    DisciplineId, RepoError, RepoRetrieveError, RepoUpdateError, TeamId, TeamResultId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamResult {
    pub id: TeamResultId,
    pub team_id: TeamId,
    pub discipline_id: DisciplineId,
    pub value: ResultValue,
    pub is_active: bool,
}

#[async_trait::async_trait]
pub trait TeamResultRepository {
    async fn get_team_result(
        &self,
        team_result_id: TeamResultId,
    ) -> Result<TeamResult, RepoRetrieveError>;
    async fn find_team_result(
        &self,
        team_id: TeamId,
        discipline_id: DisciplineId,
    ) -> Result<TeamResult, RepoRetrieveError>;
    /// Active results of the discipline, ascending by team id.
    async fn list_discipline_results(
        &self,
        discipline_id: DisciplineId,
    ) -> Result<Vec<TeamResult>, RepoError>;
    /// Active results of the team across every discipline.
    async fn list_team_results(&self, team_id: TeamId) -> Result<Vec<TeamResult>, RepoError>;
    async fn set_result_value(
        &self,
        team_result_id: TeamResultId,
        value: ResultValue,
    ) -> Result<(), RepoUpdateError>;
}
