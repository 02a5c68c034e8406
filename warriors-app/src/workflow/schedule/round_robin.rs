use std::sync::Arc;

use warriors_core::schedule::round_robin::schedule_round_robin;

use crate::{
    domain::{
        DisciplineId,
        discipline::DisciplineRepository,
        fixture::{FixtureRepository, GameDraft, Round, RoundDraft},
        team::TeamRepository,
    },
    error::{ServiceError, ServiceResult, found},
    services::referee_assigner::RefereeAssigner,
};

/// Generates the complete round-robin fixture list of a discipline.
///
/// Callers hold the discipline's lock.
#[async_trait::async_trait]
pub trait RoundRobinScheduleWorkflow {
    async fn schedule(&self, discipline_id: DisciplineId) -> ServiceResult<Vec<Round>>;
}

pub struct RoundRobinScheduleWorkflowImpl<
    T: TeamRepository,
    D: DisciplineRepository,
    F: FixtureRepository,
    RA: RefereeAssigner,
> {
    team_repository: Arc<T>,
    discipline_repository: Arc<D>,
    fixture_repository: Arc<F>,
    referee_assigner: Arc<RA>,
}

impl<T: TeamRepository, D: DisciplineRepository, F: FixtureRepository, RA: RefereeAssigner>
    RoundRobinScheduleWorkflowImpl<T, D, F, RA>
{
    pub fn new(
        team_repository: Arc<T>,
        discipline_repository: Arc<D>,
        fixture_repository: Arc<F>,
        referee_assigner: Arc<RA>,
    ) -> Self {
        Self {
            team_repository,
            discipline_repository,
            fixture_repository,
            referee_assigner,
        }
    }
}

#[async_trait::async_trait]
impl<
    T: TeamRepository + Send + Sync + 'static,
    D: DisciplineRepository + Send + Sync + 'static,
    F: FixtureRepository + Send + Sync + 'static,
    RA: RefereeAssigner + Send + Sync + 'static,
> RoundRobinScheduleWorkflow for RoundRobinScheduleWorkflowImpl<T, D, F, RA>
{
    async fn schedule(&self, discipline_id: DisciplineId) -> ServiceResult<Vec<Round>> {
        let discipline = found(
            self.discipline_repository
                .get_discipline(discipline_id)
                .await,
            || format!("Discipline {} not found", discipline_id),
        )?;

        if !self
            .fixture_repository
            .list_rounds(discipline_id)
            .await?
            .is_empty()
        {
            return ServiceError::conflict(format!(
                "Discipline {} is already scheduled",
                discipline_id
            ));
        }

        let teams: Vec<_> = self
            .team_repository
            .list_active_teams(discipline.edition_id)
            .await?
            .into_iter()
            .map(|team| team.id)
            .collect();

        let mut ledger = self.referee_assigner.load_ledger(discipline_id).await?;
        let planned = match schedule_round_robin(&teams, discipline.max_rounds, &mut ledger, 0) {
            Ok(planned) => planned,
            Err(e) => {
                log::warn!("Cannot schedule discipline {}: {}", discipline_id, e);
                return ServiceError::scheduling(e.to_string());
            }
        };

        let drafts = planned
            .into_iter()
            .map(|round| RoundDraft {
                order: round.order,
                games: round
                    .games
                    .into_iter()
                    .map(|game| GameDraft {
                        team1: game.team1,
                        team2: game.team2,
                        referee: game.referee,
                        batch: game.batch,
                    })
                    .collect(),
            })
            .collect();

        let rounds = self
            .fixture_repository
            .create_rounds(discipline_id, discipline.edition_id, drafts)
            .await?;
        log::info!(
            "Scheduled round robin for discipline {} ({} teams, {} rounds)",
            discipline_id,
            teams.len(),
            rounds.len()
        );
        Ok(rounds)
    }
}
