use std::sync::Arc;

use validator::Validate;

use crate::{
    domain::{
        DisciplineId, EditionId,
        discipline::{
            Discipline, DisciplineKind, DisciplineRepository, NewDiscipline, PairingSystem,
            ResultType,
        },
        team::TeamRepository,
    },
    error::{ServiceError, ServiceResult, found},
    services::locks::KeyedLocks,
    workflow::schedule::{
        round_robin::RoundRobinScheduleWorkflow, swiss::SwissScheduleWorkflow,
    },
};

/// Request to open a discipline. Unset fields fall back to the defaults of
/// the discipline kind.
#[derive(Debug, Clone, Validate)]
pub struct CreateDisciplineRequest {
    pub edition_id: EditionId,
    pub kind: DisciplineKind,
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub pairing_system: Option<PairingSystem>,
    pub result_type: Option<ResultType>,
    #[validate(range(min = 1))]
    pub max_rounds: Option<u32>,
    pub reveal_score: bool,
}

impl CreateDisciplineRequest {
    pub fn new(edition_id: EditionId, kind: DisciplineKind) -> Self {
        CreateDisciplineRequest {
            edition_id,
            kind,
            name: None,
            pairing_system: None,
            result_type: None,
            max_rounds: None,
            reveal_score: false,
        }
    }
}

#[async_trait::async_trait]
pub trait CreateDisciplineUseCase {
    /// Creates the discipline with a result for every active team of the
    /// edition, then schedules its fixtures.
    async fn create_discipline(&self, request: CreateDisciplineRequest)
    -> ServiceResult<Discipline>;
}

pub struct CreateDisciplineUseCaseImpl<
    T: TeamRepository,
    D: DisciplineRepository,
    RR: RoundRobinScheduleWorkflow,
    S: SwissScheduleWorkflow,
> {
    team_repository: Arc<T>,
    discipline_repository: Arc<D>,
    round_robin_workflow: Arc<RR>,
    swiss_workflow: Arc<S>,
    discipline_locks: Arc<KeyedLocks<DisciplineId>>,
}

impl<
    T: TeamRepository,
    D: DisciplineRepository,
    RR: RoundRobinScheduleWorkflow,
    S: SwissScheduleWorkflow,
> CreateDisciplineUseCaseImpl<T, D, RR, S>
{
    pub fn new(
        team_repository: Arc<T>,
        discipline_repository: Arc<D>,
        round_robin_workflow: Arc<RR>,
        swiss_workflow: Arc<S>,
        discipline_locks: Arc<KeyedLocks<DisciplineId>>,
    ) -> Self {
        Self {
            team_repository,
            discipline_repository,
            round_robin_workflow,
            swiss_workflow,
            discipline_locks,
        }
    }
}

#[async_trait::async_trait]
impl<
    T: TeamRepository + Send + Sync + 'static,
    D: DisciplineRepository + Send + Sync + 'static,
    RR: RoundRobinScheduleWorkflow + Send + Sync + 'static,
    S: SwissScheduleWorkflow + Send + Sync + 'static,
> CreateDisciplineUseCase for CreateDisciplineUseCaseImpl<T, D, RR, S>
{
    async fn create_discipline(
        &self,
        request: CreateDisciplineRequest,
    ) -> ServiceResult<Discipline> {
        if let Err(e) = request.validate() {
            return ServiceError::validation(format!("Invalid discipline: {}", e));
        }
        found(
            self.team_repository.get_edition(request.edition_id).await,
            || format!("Edition {} not found", request.edition_id),
        )?;

        let kind = request.kind;
        let pairing_system = request
            .pairing_system
            .unwrap_or(kind.default_pairing_system());
        let result_type = request
            .result_type
            .unwrap_or(kind.default_result_type());

        let teams = self
            .team_repository
            .list_active_teams(request.edition_id)
            .await?;
        let paired = matches!(
            pairing_system,
            PairingSystem::RoundRobin | PairingSystem::Swiss
        );
        if paired && teams.len() < 2 {
            return ServiceError::scheduling(format!(
                "Edition {} needs at least 2 active teams, has {}",
                request.edition_id,
                teams.len()
            ));
        }

        let max_rounds = match (pairing_system, request.max_rounds) {
            (PairingSystem::Swiss, None) => Some(teams.len() as u32 - 2),
            (_, max_rounds) => max_rounds,
        };

        let new_discipline = NewDiscipline {
            name: request
                .name
                .unwrap_or_else(|| kind.default_name().to_string()),
            kind,
            edition_id: request.edition_id,
            pairing_system,
            result_type,
            max_rounds,
            reveal_score: request.reveal_score,
        };
        let results = teams
            .iter()
            .map(|team| (team.id, result_type.initial_value()))
            .collect();
        let discipline = self
            .discipline_repository
            .create_discipline(new_discipline, results)
            .await?;
        log::info!(
            "Created discipline {} ({}) with {} teams",
            discipline.id,
            discipline.name,
            teams.len()
        );

        let _guard = self.discipline_locks.lock(&discipline.id).await;
        match discipline.pairing_system {
            PairingSystem::RoundRobin => {
                self.round_robin_workflow.schedule(discipline.id).await?;
            }
            PairingSystem::Swiss => {
                self.swiss_workflow
                    .schedule_next_round(discipline.id)
                    .await?;
            }
            PairingSystem::None => {}
        }

        Ok(discipline)
    }
}
