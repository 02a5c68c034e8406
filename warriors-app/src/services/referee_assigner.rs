use std::{collections::HashMap, sync::Arc};

use warriors_core::schedule::referee::RefereeLedger;

use crate::{
    domain::{DisciplineId, GameId, TeamId, fixture::FixtureRepository},
    error::{ServiceError, ServiceResult, found},
};

/// Picks referees so that officiating load stays even across a discipline.
#[async_trait::async_trait]
pub trait RefereeAssigner {
    /// Referee history of every team from the discipline's active games.
    async fn load_ledger(&self, discipline_id: DisciplineId) -> ServiceResult<RefereeLedger<TeamId>>;

    /// The fairest referee for `game_id` among `candidates`, if any. The
    /// game's own teams are never picked, and its current referee does not
    /// count towards the history. Pure query: the caller stores the
    /// assignment.
    async fn assign(
        &self,
        candidates: &[TeamId],
        discipline_id: DisciplineId,
        game_id: GameId,
    ) -> ServiceResult<Option<TeamId>>;
}

pub struct RefereeAssignerImpl<F: FixtureRepository> {
    fixture_repository: Arc<F>,
}

impl<F: FixtureRepository> RefereeAssignerImpl<F> {
    pub fn new(fixture_repository: Arc<F>) -> Self {
        Self { fixture_repository }
    }
}

impl<F: FixtureRepository + Send + Sync + 'static> RefereeAssignerImpl<F> {
    async fn ledger_without(
        &self,
        discipline_id: DisciplineId,
        skipped: Option<GameId>,
    ) -> ServiceResult<RefereeLedger<TeamId>> {
        let rounds: HashMap<_, _> = self
            .fixture_repository
            .list_rounds(discipline_id)
            .await?
            .into_iter()
            .map(|round| (round.id, round.order))
            .collect();
        let games = self.fixture_repository.list_games(discipline_id).await?;

        Ok(RefereeLedger::from_games(
            games
                .into_iter()
                .filter(|game| Some(game.id) != skipped)
                .filter_map(|game| {
                    let referee = game.referee?;
                    let order = rounds.get(&game.round_id)?;
                    Some((referee, *order))
                }),
        ))
    }
}

#[async_trait::async_trait]
impl<F: FixtureRepository + Send + Sync + 'static> RefereeAssigner for RefereeAssignerImpl<F> {
    async fn load_ledger(&self, discipline_id: DisciplineId) -> ServiceResult<RefereeLedger<TeamId>> {
        self.ledger_without(discipline_id, None).await
    }

    async fn assign(
        &self,
        candidates: &[TeamId],
        discipline_id: DisciplineId,
        game_id: GameId,
    ) -> ServiceResult<Option<TeamId>> {
        let game = found(self.fixture_repository.get_game(game_id).await, || {
            format!("Game {} not found", game_id)
        })?;
        if game.discipline_id != discipline_id {
            return ServiceError::validation(format!(
                "Game {} does not belong to discipline {}",
                game_id, discipline_id
            ));
        }

        let ledger = self.ledger_without(discipline_id, Some(game_id)).await?;
        let referee = ledger.pick(
            candidates
                .iter()
                .copied()
                .filter(|team| *team != game.team1 && *team != game.team2),
        );
        log::debug!("Referee pick for game {}: {:?}", game_id, referee);
        Ok(referee)
    }
}
