use std::sync::Arc;

use crate::{
    domain::{
        DisciplineId, RepoRetrieveError,
        blindtest::{BlindtestGuess, BlindtestRepository, BlindtestRound, GuessWrite},
        discipline::{Discipline, DisciplineRepository},
        team::TeamRepository,
    },
    error::{ServiceError, ServiceResult, found},
    services::locks::KeyedLocks,
    workflow::scoring::engine::{BlindtestEngine, ScoreEngines},
};

#[async_trait::async_trait]
pub trait BlindtestUseCase {
    async fn create_round(&self, discipline_id: DisciplineId) -> ServiceResult<BlindtestRound>;
    /// Stores a new or corrected guess and moves the team's points by the
    /// change in correct flags.
    async fn record_guess(&self, guess: GuessWrite) -> ServiceResult<BlindtestGuess>;
}

pub struct BlindtestUseCaseImpl<T: TeamRepository, D: DisciplineRepository, B: BlindtestRepository>
{
    team_repository: Arc<T>,
    discipline_repository: Arc<D>,
    blindtest_repository: Arc<B>,
    engines: Arc<ScoreEngines>,
    discipline_locks: Arc<KeyedLocks<DisciplineId>>,
}

impl<T: TeamRepository, D: DisciplineRepository, B: BlindtestRepository>
    BlindtestUseCaseImpl<T, D, B>
{
    pub fn new(
        team_repository: Arc<T>,
        discipline_repository: Arc<D>,
        blindtest_repository: Arc<B>,
        engines: Arc<ScoreEngines>,
        discipline_locks: Arc<KeyedLocks<DisciplineId>>,
    ) -> Self {
        Self {
            team_repository,
            discipline_repository,
            blindtest_repository,
            engines,
            discipline_locks,
        }
    }
}

impl<
    T: TeamRepository + Send + Sync + 'static,
    D: DisciplineRepository + Send + Sync + 'static,
    B: BlindtestRepository + Send + Sync + 'static,
> BlindtestUseCaseImpl<T, D, B>
{
    async fn blindtest(
        &self,
        discipline_id: DisciplineId,
    ) -> ServiceResult<(Discipline, &BlindtestEngine)> {
        let discipline = found(
            self.discipline_repository
                .get_discipline(discipline_id)
                .await,
            || format!("Discipline {} not found", discipline_id),
        )?;
        match self.engines.blindtest_engine(discipline.kind) {
            Some(engine) => Ok((discipline, engine)),
            None => ServiceError::validation(format!(
                "Discipline {} ({:?}) is not a blindtest",
                discipline_id, discipline.kind
            )),
        }
    }
}

#[async_trait::async_trait]
impl<
    T: TeamRepository + Send + Sync + 'static,
    D: DisciplineRepository + Send + Sync + 'static,
    B: BlindtestRepository + Send + Sync + 'static,
> BlindtestUseCase for BlindtestUseCaseImpl<T, D, B>
{
    async fn create_round(&self, discipline_id: DisciplineId) -> ServiceResult<BlindtestRound> {
        self.blindtest(discipline_id).await?;
        let _guard = self.discipline_locks.lock(&discipline_id).await;
        let round = self
            .blindtest_repository
            .create_blindtest_round(discipline_id)
            .await?;
        log::info!(
            "Created blindtest round {} for discipline {}",
            round.order,
            discipline_id
        );
        Ok(round)
    }

    async fn record_guess(&self, guess: GuessWrite) -> ServiceResult<BlindtestGuess> {
        let round = found(
            self.blindtest_repository
                .get_blindtest_round(guess.round_id)
                .await,
            || format!("Blindtest round {} not found", guess.round_id),
        )?;
        let (discipline, engine) = self.blindtest(round.discipline_id).await?;
        let _guard = self.discipline_locks.lock(&discipline.id).await;

        match self.team_repository.get_team(guess.team_id).await {
            Ok(team) if team.is_active && team.edition_id == discipline.edition_id => {}
            Ok(_) | Err(RepoRetrieveError::NotFound) => {
                return ServiceError::validation(format!(
                    "Team {} does not compete in discipline {}",
                    guess.team_id, discipline.id
                ));
            }
            Err(e) => return Err(e.into()),
        }

        let previous = match guess.id {
            Some(guess_id) => {
                let previous = found(self.blindtest_repository.get_guess(guess_id).await, || {
                    format!("Guess {} not found", guess_id)
                })?;
                if previous.round_id != guess.round_id || previous.team_id != guess.team_id {
                    return ServiceError::validation(format!(
                        "Guess {} cannot move to another round or team",
                        guess_id
                    ));
                }
                Some(previous)
            }
            None => None,
        };

        let points = engine.guess_points(previous.as_ref(), &guess);
        let stored = self.blindtest_repository.commit_guess(guess, points).await?;
        log::debug!(
            "Blindtest guess {} of team {}: {:+} points",
            stored.id,
            stored.team_id,
            points
        );
        Ok(stored)
    }
}
