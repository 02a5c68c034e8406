use std::sync::Arc;

use warriors_core::{ranking::order_standings, schedule::swiss::pair_adjacent};

use crate::{
    config::SwissConfig,
    domain::{
        DisciplineId,
        discipline::DisciplineRepository,
        fixture::{FixtureRepository, GameDraft, Round, RoundDraft},
        result::TeamResultRepository,
    },
    error::{ServiceError, ServiceResult, found},
};

/// Generates the next round of a swiss discipline from its current standings.
///
/// Callers hold the discipline's lock.
#[async_trait::async_trait]
pub trait SwissScheduleWorkflow {
    /// Returns `None` once the discipline has played its last round.
    async fn schedule_next_round(&self, discipline_id: DisciplineId)
    -> ServiceResult<Option<Round>>;
}

pub struct SwissScheduleWorkflowImpl<
    D: DisciplineRepository,
    F: FixtureRepository,
    R: TeamResultRepository,
> {
    discipline_repository: Arc<D>,
    fixture_repository: Arc<F>,
    team_result_repository: Arc<R>,
    config: SwissConfig,
}

impl<D: DisciplineRepository, F: FixtureRepository, R: TeamResultRepository>
    SwissScheduleWorkflowImpl<D, F, R>
{
    pub fn new(
        discipline_repository: Arc<D>,
        fixture_repository: Arc<F>,
        team_result_repository: Arc<R>,
        config: SwissConfig,
    ) -> Self {
        Self {
            discipline_repository,
            fixture_repository,
            team_result_repository,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<
    D: DisciplineRepository + Send + Sync + 'static,
    F: FixtureRepository + Send + Sync + 'static,
    R: TeamResultRepository + Send + Sync + 'static,
> SwissScheduleWorkflow for SwissScheduleWorkflowImpl<D, F, R>
{
    async fn schedule_next_round(
        &self,
        discipline_id: DisciplineId,
    ) -> ServiceResult<Option<Round>> {
        let discipline = found(
            self.discipline_repository
                .get_discipline(discipline_id)
                .await,
            || format!("Discipline {} not found", discipline_id),
        )?;

        let next_order = self
            .fixture_repository
            .list_rounds(discipline_id)
            .await?
            .last()
            .map_or(0, |round| round.order + 1);
        if discipline
            .max_rounds
            .is_some_and(|max_rounds| next_order > max_rounds)
        {
            log::info!(
                "Discipline {} has played all of its swiss rounds",
                discipline_id
            );
            return Ok(None);
        }

        let results = self
            .team_result_repository
            .list_discipline_results(discipline_id)
            .await?;
        if results.len() < 2 {
            return ServiceError::scheduling(format!(
                "Discipline {} needs at least 2 teams, has {}",
                discipline_id,
                results.len()
            ));
        }

        let standings = order_standings(
            results
                .into_iter()
                .map(|result| (result.team_id, result.value))
                .collect(),
            self.config.standings_order,
        );
        let (pairs, unpaired) = pair_adjacent(&standings);
        if let Some(team_id) = unpaired {
            log::warn!(
                "Team {} sits out swiss round {} of discipline {}",
                team_id,
                next_order,
                discipline_id
            );
        }

        let draft = RoundDraft {
            order: next_order,
            games: pairs
                .into_iter()
                .map(|(team1, team2)| GameDraft {
                    team1,
                    team2,
                    referee: None,
                    batch: 0,
                })
                .collect(),
        };
        let mut rounds = self
            .fixture_repository
            .create_rounds(discipline_id, discipline.edition_id, vec![draft])
            .await?;
        log::info!(
            "Scheduled swiss round {} for discipline {}",
            next_order,
            discipline_id
        );
        Ok(rounds.pop())
    }
}
