use std::sync::Arc;

use crate::{
    domain::{
        DisciplineId, RoundId,
        discipline::{DisciplineRepository, PairingSystem},
        fixture::{FixtureRepository, Round},
    },
    error::{ServiceResult, found},
    services::locks::KeyedLocks,
    workflow::schedule::swiss::SwissScheduleWorkflow,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundCompletion {
    pub round: Round,
    /// Swiss round scheduled because this round finished.
    pub next_round: Option<Round>,
}

#[async_trait::async_trait]
pub trait CompleteRoundUseCase {
    async fn set_round_over(&self, round_id: RoundId, is_over: bool)
    -> ServiceResult<RoundCompletion>;
}

pub struct CompleteRoundUseCaseImpl<
    D: DisciplineRepository,
    F: FixtureRepository,
    S: SwissScheduleWorkflow,
> {
    discipline_repository: Arc<D>,
    fixture_repository: Arc<F>,
    swiss_workflow: Arc<S>,
    discipline_locks: Arc<KeyedLocks<DisciplineId>>,
}

impl<D: DisciplineRepository, F: FixtureRepository, S: SwissScheduleWorkflow>
    CompleteRoundUseCaseImpl<D, F, S>
{
    pub fn new(
        discipline_repository: Arc<D>,
        fixture_repository: Arc<F>,
        swiss_workflow: Arc<S>,
        discipline_locks: Arc<KeyedLocks<DisciplineId>>,
    ) -> Self {
        Self {
            discipline_repository,
            fixture_repository,
            swiss_workflow,
            discipline_locks,
        }
    }
}

#[async_trait::async_trait]
impl<
    D: DisciplineRepository + Send + Sync + 'static,
    F: FixtureRepository + Send + Sync + 'static,
    S: SwissScheduleWorkflow + Send + Sync + 'static,
> CompleteRoundUseCase for CompleteRoundUseCaseImpl<D, F, S>
{
    async fn set_round_over(
        &self,
        round_id: RoundId,
        is_over: bool,
    ) -> ServiceResult<RoundCompletion> {
        let round = found(self.fixture_repository.get_round(round_id).await, || {
            format!("Round {} not found", round_id)
        })?;
        let _guard = self.discipline_locks.lock(&round.discipline_id).await;

        let previous = self
            .fixture_repository
            .set_round_over(round_id, is_over)
            .await?;
        let round = Round {
            is_over,
            ..previous.clone()
        };
        if previous.is_over == is_over {
            return Ok(RoundCompletion {
                round,
                next_round: None,
            });
        }
        log::info!(
            "Round {} of discipline {} is {}",
            round.order,
            round.discipline_id,
            if is_over { "over" } else { "reopened" }
        );

        let discipline = found(
            self.discipline_repository
                .get_discipline(round.discipline_id)
                .await,
            || format!("Discipline {} not found", round.discipline_id),
        )?;
        let next_round = if is_over && discipline.pairing_system == PairingSystem::Swiss {
            self.swiss_workflow
                .schedule_next_round(discipline.id)
                .await?
        } else {
            None
        };

        Ok(RoundCompletion { round, next_round })
    }
}
