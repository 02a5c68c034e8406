use std::{sync::Arc, time::Duration};

use warriors_core::ranking::ResultValue;

use crate::{
    domain::{
        DisciplineId, TeamId,
        discipline::{DisciplineRepository, ResultType},
        result::{TeamResult, TeamResultRepository},
    },
    error::{ServiceError, ServiceResult, found},
    services::locks::KeyedLocks,
};

/// Manual results of disciplines that have no score engine.
#[async_trait::async_trait]
pub trait SetResultUseCase {
    async fn record_time(
        &self,
        team_id: TeamId,
        discipline_id: DisciplineId,
        time: Duration,
    ) -> ServiceResult<TeamResult>;
    async fn record_points(
        &self,
        team_id: TeamId,
        discipline_id: DisciplineId,
        points: i64,
    ) -> ServiceResult<TeamResult>;
}

pub struct SetResultUseCaseImpl<D: DisciplineRepository, R: TeamResultRepository> {
    discipline_repository: Arc<D>,
    team_result_repository: Arc<R>,
    discipline_locks: Arc<KeyedLocks<DisciplineId>>,
}

impl<D: DisciplineRepository, R: TeamResultRepository> SetResultUseCaseImpl<D, R> {
    pub fn new(
        discipline_repository: Arc<D>,
        team_result_repository: Arc<R>,
        discipline_locks: Arc<KeyedLocks<DisciplineId>>,
    ) -> Self {
        Self {
            discipline_repository,
            team_result_repository,
            discipline_locks,
        }
    }
}

impl<
    D: DisciplineRepository + Send + Sync + 'static,
    R: TeamResultRepository + Send + Sync + 'static,
> SetResultUseCaseImpl<D, R>
{
    async fn set_value(
        &self,
        team_id: TeamId,
        discipline_id: DisciplineId,
        expected: ResultType,
        value: ResultValue,
    ) -> ServiceResult<TeamResult> {
        let discipline = found(
            self.discipline_repository
                .get_discipline(discipline_id)
                .await,
            || format!("Discipline {} not found", discipline_id),
        )?;
        if discipline.kind.has_score_engine() {
            return ServiceError::validation(format!(
                "Results of discipline {} are derived from its games",
                discipline_id
            ));
        }
        if discipline.result_type != expected {
            return ServiceError::validation(format!(
                "Discipline {} records {:?} results",
                discipline_id, discipline.result_type
            ));
        }

        let _guard = self.discipline_locks.lock(&discipline_id).await;
        let result = found(
            self.team_result_repository
                .find_team_result(team_id, discipline_id)
                .await,
            || {
                format!(
                    "Team {} has no result in discipline {}",
                    team_id, discipline_id
                )
            },
        )?;
        self.team_result_repository
            .set_result_value(result.id, value)
            .await?;
        log::info!(
            "Result of team {} in discipline {} set to {:?}",
            team_id,
            discipline_id,
            value
        );
        Ok(TeamResult { value, ..result })
    }
}

#[async_trait::async_trait]
impl<
    D: DisciplineRepository + Send + Sync + 'static,
    R: TeamResultRepository + Send + Sync + 'static,
> SetResultUseCase for SetResultUseCaseImpl<D, R>
{
    async fn record_time(
        &self,
        team_id: TeamId,
        discipline_id: DisciplineId,
        time: Duration,
    ) -> ServiceResult<TeamResult> {
        self.set_value(team_id, discipline_id, ResultType::Time, ResultValue::Time(time))
            .await
    }

    async fn record_points(
        &self,
        team_id: TeamId,
        discipline_id: DisciplineId,
        points: i64,
    ) -> ServiceResult<TeamResult> {
        self.set_value(
            team_id,
            discipline_id,
            ResultType::Points,
            ResultValue::Points(points),
        )
        .await
    }
}
