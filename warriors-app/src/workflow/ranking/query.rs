use std::{collections::HashMap, sync::Arc};

use warriors_core::ranking::{ResultValue, competition_rank, global_points};

use crate::{
    domain::{
        DisciplineId, EditionId, TeamId, TeamResultId,
        discipline::{Discipline, DisciplineRepository, ResultType},
        result::{TeamResult, TeamResultRepository},
        team::{Team, TeamRepository},
    },
    error::{ServiceResult, found},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisciplineStanding {
    pub team_id: TeamId,
    pub value: ResultValue,
    /// 0 while the discipline's scores are hidden.
    pub rank: u32,
    pub global_points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    pub team: Team,
    pub total_points: i64,
    pub rank: u32,
}

#[async_trait::async_trait]
pub trait RankingUseCase {
    async fn discipline_ranking(&self, team_result_id: TeamResultId) -> ServiceResult<u32>;
    async fn global_points(&self, team_result_id: TeamResultId) -> ServiceResult<i64>;
    async fn team_total_points(&self, team_id: TeamId) -> ServiceResult<i64>;
    async fn team_ranking(&self, team_id: TeamId) -> ServiceResult<u32>;
    async fn discipline_leaderboard(
        &self,
        discipline_id: DisciplineId,
    ) -> ServiceResult<Vec<DisciplineStanding>>;
    async fn edition_leaderboard(&self, edition_id: EditionId) -> ServiceResult<Vec<TeamStanding>>;
}

pub struct RankingUseCaseImpl<T: TeamRepository, D: DisciplineRepository, R: TeamResultRepository>
{
    team_repository: Arc<T>,
    discipline_repository: Arc<D>,
    team_result_repository: Arc<R>,
}

impl<T: TeamRepository, D: DisciplineRepository, R: TeamResultRepository>
    RankingUseCaseImpl<T, D, R>
{
    pub fn new(
        team_repository: Arc<T>,
        discipline_repository: Arc<D>,
        team_result_repository: Arc<R>,
    ) -> Self {
        Self {
            team_repository,
            discipline_repository,
            team_result_repository,
        }
    }
}

/// Rank of `result` among the discipline's active `results`.
fn rank_of(discipline: &Discipline, result: &TeamResult, results: &[TeamResult]) -> u32 {
    if !discipline.reveal_score || discipline.result_type == ResultType::None {
        return 0;
    }
    competition_rank(
        &result.value,
        results
            .iter()
            .filter(|other| other.id != result.id)
            .map(|other| &other.value),
    )
}

fn points_of(discipline: &Discipline, result: &TeamResult, results: &[TeamResult]) -> i64 {
    match rank_of(discipline, result, results) {
        0 => 0,
        rank => global_points(rank, results.len()),
    }
}

impl<
    T: TeamRepository + Send + Sync + 'static,
    D: DisciplineRepository + Send + Sync + 'static,
    R: TeamResultRepository + Send + Sync + 'static,
> RankingUseCaseImpl<T, D, R>
{
    async fn discipline(&self, discipline_id: DisciplineId) -> ServiceResult<Discipline> {
        found(
            self.discipline_repository
                .get_discipline(discipline_id)
                .await,
            || format!("Discipline {} not found", discipline_id),
        )
    }

    async fn team_result_context(
        &self,
        team_result_id: TeamResultId,
    ) -> ServiceResult<(Discipline, TeamResult, Vec<TeamResult>)> {
        let result = found(
            self.team_result_repository
                .get_team_result(team_result_id)
                .await,
            || format!("Team result {} not found", team_result_id),
        )?;
        let discipline = self.discipline(result.discipline_id).await?;
        let results = self
            .team_result_repository
            .list_discipline_results(discipline.id)
            .await?;
        Ok((discipline, result, results))
    }

    /// Total global points of every active team of the edition.
    async fn edition_totals(&self, edition_id: EditionId) -> ServiceResult<Vec<(Team, i64)>> {
        let teams = self.team_repository.list_active_teams(edition_id).await?;
        let mut totals: HashMap<TeamId, i64> = teams.iter().map(|team| (team.id, 0)).collect();

        for discipline in self
            .discipline_repository
            .list_disciplines(edition_id)
            .await?
        {
            let results = self
                .team_result_repository
                .list_discipline_results(discipline.id)
                .await?;
            for result in &results {
                if let Some(total) = totals.get_mut(&result.team_id) {
                    *total += points_of(&discipline, result, &results);
                }
            }
        }

        Ok(teams
            .into_iter()
            .map(|team| {
                let total = totals.get(&team.id).copied().unwrap_or(0);
                (team, total)
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl<
    T: TeamRepository + Send + Sync + 'static,
    D: DisciplineRepository + Send + Sync + 'static,
    R: TeamResultRepository + Send + Sync + 'static,
> RankingUseCase for RankingUseCaseImpl<T, D, R>
{
    async fn discipline_ranking(&self, team_result_id: TeamResultId) -> ServiceResult<u32> {
        let (discipline, result, results) = self.team_result_context(team_result_id).await?;
        Ok(rank_of(&discipline, &result, &results))
    }

    async fn global_points(&self, team_result_id: TeamResultId) -> ServiceResult<i64> {
        let (discipline, result, results) = self.team_result_context(team_result_id).await?;
        Ok(points_of(&discipline, &result, &results))
    }

    async fn team_total_points(&self, team_id: TeamId) -> ServiceResult<i64> {
        let team = found(self.team_repository.get_team(team_id).await, || {
            format!("Team {} not found", team_id)
        })?;

        let mut total = 0;
        for result in self
            .team_result_repository
            .list_team_results(team_id)
            .await?
        {
            let discipline = self.discipline(result.discipline_id).await?;
            if discipline.edition_id != team.edition_id {
                continue;
            }
            let results = self
                .team_result_repository
                .list_discipline_results(discipline.id)
                .await?;
            total += points_of(&discipline, &result, &results);
        }
        Ok(total)
    }

    async fn team_ranking(&self, team_id: TeamId) -> ServiceResult<u32> {
        let team = found(self.team_repository.get_team(team_id).await, || {
            format!("Team {} not found", team_id)
        })?;
        let own = self.team_total_points(team_id).await?;
        let better = self
            .edition_totals(team.edition_id)
            .await?
            .into_iter()
            .filter(|(other, total)| other.id != team_id && *total > own)
            .count();
        Ok(1 + better as u32)
    }

    async fn discipline_leaderboard(
        &self,
        discipline_id: DisciplineId,
    ) -> ServiceResult<Vec<DisciplineStanding>> {
        let discipline = self.discipline(discipline_id).await?;
        let results = self
            .team_result_repository
            .list_discipline_results(discipline_id)
            .await?;
        let mut standings: Vec<DisciplineStanding> = results
            .iter()
            .map(|result| DisciplineStanding {
                team_id: result.team_id,
                value: result.value,
                rank: rank_of(&discipline, result, &results),
                global_points: points_of(&discipline, result, &results),
            })
            .collect();
        standings.sort_by_key(|standing| (standing.rank, standing.team_id));
        Ok(standings)
    }

    async fn edition_leaderboard(&self, edition_id: EditionId) -> ServiceResult<Vec<TeamStanding>> {
        found(self.team_repository.get_edition(edition_id).await, || {
            format!("Edition {} not found", edition_id)
        })?;
        let totals = self.edition_totals(edition_id).await?;
        let mut standings: Vec<TeamStanding> = totals
            .iter()
            .map(|(team, total)| TeamStanding {
                team: team.clone(),
                total_points: *total,
                rank: 1 + totals.iter().filter(|(_, other)| other > total).count() as u32,
            })
            .collect();
        standings.sort_by_key(|standing| (standing.rank, standing.team.id));
        Ok(standings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::discipline::{DisciplineKind, PairingSystem};

    fn discipline(reveal_score: bool) -> Discipline {
        Discipline {
            id: DisciplineId::new(1),
            name: "Petanque".to_string(),
            kind: DisciplineKind::Petanque,
            edition_id: EditionId::new(1),
            pairing_system: PairingSystem::None,
            result_type: ResultType::Points,
            max_rounds: None,
            reveal_score,
            is_active: true,
        }
    }

    fn result(id: u32, points: i64) -> TeamResult {
        TeamResult {
            id: TeamResultId::new(id),
            team_id: TeamId::new(id),
            discipline_id: DisciplineId::new(1),
            value: ResultValue::Points(points),
            is_active: true,
        }
    }

    #[test]
    fn test_hidden_scores_rank_zero() {
        let results = vec![result(1, 9), result(2, 3)];
        let hidden = discipline(false);
        assert_eq!(rank_of(&hidden, &results[0], &results), 0);
        assert_eq!(points_of(&hidden, &results[1], &results), 0);
    }

    #[test]
    fn test_revealed_points() {
        let results = vec![result(1, 9), result(2, 9), result(3, 3), result(4, 0)];
        let revealed = discipline(true);
        assert_eq!(rank_of(&revealed, &results[1], &results), 1);
        assert_eq!(rank_of(&revealed, &results[2], &results), 3);
        // 4 teams, rank 1: 4 - 1 + 1 + 2
        assert_eq!(points_of(&revealed, &results[0], &results), 6);
        assert_eq!(points_of(&revealed, &results[2], &results), 3);
        assert_eq!(points_of(&revealed, &results[3], &results), 1);
    }
}
