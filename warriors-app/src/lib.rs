use std::sync::Arc;

use crate::{
    config::TournamentConfig,
    domain::{
        blindtest::BlindtestRepository, discipline::DisciplineRepository,
        event::GameEventRepository, fixture::FixtureRepository, result::TeamResultRepository,
        team::TeamRepository,
    },
    services::{
        locks::KeyedLocks,
        referee_assigner::{RefereeAssigner, RefereeAssignerImpl},
        team_resolver::{PlayerTeamResolver, PlayerTeamResolverImpl},
    },
    workflow::{
        discipline::{
            create::{CreateDisciplineUseCase, CreateDisciplineUseCaseImpl},
            reveal::{RevealScoreUseCase, RevealScoreUseCaseImpl},
        },
        ranking::query::{RankingUseCase, RankingUseCaseImpl},
        result::set::{SetResultUseCase, SetResultUseCaseImpl},
        roster::register::{RosterUseCase, RosterUseCaseImpl},
        round::complete::{CompleteRoundUseCase, CompleteRoundUseCaseImpl},
        schedule::{
            round_robin::RoundRobinScheduleWorkflowImpl,
            scheduling::{ScheduleUseCase, ScheduleUseCaseImpl},
            swiss::SwissScheduleWorkflowImpl,
        },
        scoring::{
            blindtest::{BlindtestUseCase, BlindtestUseCaseImpl},
            engine::ScoreEngines,
            record_event::{RecordEventUseCase, RecordEventUseCaseImpl},
        },
    },
};

pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod workflow;

pub struct Application {
    pub roster_use_case: Box<dyn RosterUseCase + Send + Sync + 'static>,

    pub discipline_create_use_case: Box<dyn CreateDisciplineUseCase + Send + Sync + 'static>,
    pub discipline_reveal_score_use_case: Box<dyn RevealScoreUseCase + Send + Sync + 'static>,

    pub schedule_use_case: Box<dyn ScheduleUseCase + Send + Sync + 'static>,
    pub round_complete_use_case: Box<dyn CompleteRoundUseCase + Send + Sync + 'static>,

    pub record_event_use_case: Box<dyn RecordEventUseCase + Send + Sync + 'static>,
    pub blindtest_use_case: Box<dyn BlindtestUseCase + Send + Sync + 'static>,
    pub set_result_use_case: Box<dyn SetResultUseCase + Send + Sync + 'static>,

    pub ranking_use_case: Box<dyn RankingUseCase + Send + Sync + 'static>,

    pub referee_assigner: Arc<dyn RefereeAssigner + Send + Sync + 'static>,
    pub player_team_resolver: Arc<dyn PlayerTeamResolver + Send + Sync + 'static>,
}

pub fn build_application<
    T: TeamRepository + Send + Sync + 'static,
    D: DisciplineRepository + Send + Sync + 'static,
    F: FixtureRepository + Send + Sync + 'static,
    E: GameEventRepository + Send + Sync + 'static,
    R: TeamResultRepository + Send + Sync + 'static,
    B: BlindtestRepository + Send + Sync + 'static,
>(
    team_repository: Arc<T>,
    discipline_repository: Arc<D>,
    fixture_repository: Arc<F>,
    event_repository: Arc<E>,
    team_result_repository: Arc<R>,
    blindtest_repository: Arc<B>,
    config: TournamentConfig,
) -> Application {
    let game_locks = Arc::new(KeyedLocks::new());
    let discipline_locks = Arc::new(KeyedLocks::new());
    let engines = Arc::new(ScoreEngines::new(&config));

    let referee_assigner = Arc::new(RefereeAssignerImpl::new(fixture_repository.clone()));
    let player_team_resolver = Arc::new(PlayerTeamResolverImpl::new(
        team_repository.clone(),
        config.player_cache_ttl,
    ));

    let round_robin_workflow = Arc::new(RoundRobinScheduleWorkflowImpl::new(
        team_repository.clone(),
        discipline_repository.clone(),
        fixture_repository.clone(),
        referee_assigner.clone(),
    ));
    let swiss_workflow = Arc::new(SwissScheduleWorkflowImpl::new(
        discipline_repository.clone(),
        fixture_repository.clone(),
        team_result_repository.clone(),
        config.swiss.clone(),
    ));

    let roster_use_case = RosterUseCaseImpl::new(team_repository.clone());
    let discipline_create_use_case = CreateDisciplineUseCaseImpl::new(
        team_repository.clone(),
        discipline_repository.clone(),
        round_robin_workflow.clone(),
        swiss_workflow.clone(),
        discipline_locks.clone(),
    );
    let discipline_reveal_score_use_case =
        RevealScoreUseCaseImpl::new(discipline_repository.clone());
    let schedule_use_case = ScheduleUseCaseImpl::new(
        fixture_repository.clone(),
        round_robin_workflow.clone(),
        swiss_workflow.clone(),
        discipline_locks.clone(),
    );
    let round_complete_use_case = CompleteRoundUseCaseImpl::new(
        discipline_repository.clone(),
        fixture_repository.clone(),
        swiss_workflow.clone(),
        discipline_locks.clone(),
    );
    let record_event_use_case = RecordEventUseCaseImpl::new(
        player_team_resolver.clone(),
        discipline_repository.clone(),
        fixture_repository.clone(),
        event_repository.clone(),
        engines.clone(),
        config.match_points.clone(),
        game_locks.clone(),
    );
    let blindtest_use_case = BlindtestUseCaseImpl::new(
        team_repository.clone(),
        discipline_repository.clone(),
        blindtest_repository.clone(),
        engines.clone(),
        discipline_locks.clone(),
    );
    let set_result_use_case = SetResultUseCaseImpl::new(
        discipline_repository.clone(),
        team_result_repository.clone(),
        discipline_locks.clone(),
    );
    let ranking_use_case = RankingUseCaseImpl::new(
        team_repository.clone(),
        discipline_repository.clone(),
        team_result_repository.clone(),
    );

    Application {
        roster_use_case: Box::new(roster_use_case),
        discipline_create_use_case: Box::new(discipline_create_use_case),
        discipline_reveal_score_use_case: Box::new(discipline_reveal_score_use_case),
        schedule_use_case: Box::new(schedule_use_case),
        round_complete_use_case: Box::new(round_complete_use_case),
        record_event_use_case: Box::new(record_event_use_case),
        blindtest_use_case: Box::new(blindtest_use_case),
        set_result_use_case: Box::new(set_result_use_case),
        ranking_use_case: Box::new(ranking_use_case),
        referee_assigner,
        player_team_resolver,
    }
}
