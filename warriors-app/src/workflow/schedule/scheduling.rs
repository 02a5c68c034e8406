use std::sync::Arc;

use crate::{
    domain::{
        DisciplineId,
        fixture::{FixtureRepository, Game, Round},
    },
    error::ServiceResult,
    services::locks::KeyedLocks,
    workflow::schedule::{
        round_robin::RoundRobinScheduleWorkflow, swiss::SwissScheduleWorkflow,
    },
};

/// Entry point for explicit scheduling requests and fixture lookups.
/// Serializes scheduling per discipline.
#[async_trait::async_trait]
pub trait ScheduleUseCase {
    async fn schedule(&self, discipline_id: DisciplineId) -> ServiceResult<Vec<Round>>;
    async fn schedule_next_round(&self, discipline_id: DisciplineId)
    -> ServiceResult<Option<Round>>;
    async fn list_rounds(&self, discipline_id: DisciplineId) -> ServiceResult<Vec<Round>>;
    async fn list_games(&self, discipline_id: DisciplineId) -> ServiceResult<Vec<Game>>;
}

pub struct ScheduleUseCaseImpl<
    F: FixtureRepository,
    RR: RoundRobinScheduleWorkflow,
    S: SwissScheduleWorkflow,
> {
    fixture_repository: Arc<F>,
    round_robin_workflow: Arc<RR>,
    swiss_workflow: Arc<S>,
    discipline_locks: Arc<KeyedLocks<DisciplineId>>,
}

impl<F: FixtureRepository, RR: RoundRobinScheduleWorkflow, S: SwissScheduleWorkflow>
    ScheduleUseCaseImpl<F, RR, S>
{
    pub fn new(
        fixture_repository: Arc<F>,
        round_robin_workflow: Arc<RR>,
        swiss_workflow: Arc<S>,
        discipline_locks: Arc<KeyedLocks<DisciplineId>>,
    ) -> Self {
        Self {
            fixture_repository,
            round_robin_workflow,
            swiss_workflow,
            discipline_locks,
        }
    }
}

#[async_trait::async_trait]
impl<
    F: FixtureRepository + Send + Sync + 'static,
    RR: RoundRobinScheduleWorkflow + Send + Sync + 'static,
    S: SwissScheduleWorkflow + Send + Sync + 'static,
> ScheduleUseCase for ScheduleUseCaseImpl<F, RR, S>
{
    async fn schedule(&self, discipline_id: DisciplineId) -> ServiceResult<Vec<Round>> {
        let _guard = self.discipline_locks.lock(&discipline_id).await;
        self.round_robin_workflow.schedule(discipline_id).await
    }

    async fn schedule_next_round(
        &self,
        discipline_id: DisciplineId,
    ) -> ServiceResult<Option<Round>> {
        let _guard = self.discipline_locks.lock(&discipline_id).await;
        self.swiss_workflow.schedule_next_round(discipline_id).await
    }

    async fn list_rounds(&self, discipline_id: DisciplineId) -> ServiceResult<Vec<Round>> {
        Ok(self.fixture_repository.list_rounds(discipline_id).await?)
    }

    async fn list_games(&self, discipline_id: DisciplineId) -> ServiceResult<Vec<Game>> {
        Ok(self.fixture_repository.list_games(discipline_id).await?)
    }
}
