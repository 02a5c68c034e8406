use warriors_core::scoring::blindtest::GuessFlags;

use crate::domain::{
    BlindtestRoundId, DisciplineId, GuessId, RepoCreateError, RepoError, RepoRetrieveError,
    RepoUpdateError, TeamId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlindtestRound {
    pub id: BlindtestRoundId,
    pub discipline_id: DisciplineId,
    pub order: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlindtestGuess {
    pub id: GuessId,
    pub round_id: BlindtestRoundId,
    pub team_id: TeamId,
    pub artist: String,
    pub song: String,
    pub flags: GuessFlags,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessWrite {
    pub id: Option<GuessId>,
    pub round_id: BlindtestRoundId,
    pub team_id: TeamId,
    pub artist: String,
    pub song: String,
    pub flags: GuessFlags,
    pub is_active: bool,
}

#[async_trait::async_trait]
pub trait BlindtestRepository {
    /// Appends a round after the discipline's last one.
    async fn create_blindtest_round(
        &self,
        discipline_id: DisciplineId,
    ) -> Result<BlindtestRound, RepoCreateError>;
    async fn get_blindtest_round(
        &self,
        round_id: BlindtestRoundId,
    ) -> Result<BlindtestRound, RepoRetrieveError>;
    async fn list_blindtest_rounds(
        &self,
        discipline_id: DisciplineId,
    ) -> Result<Vec<BlindtestRound>, RepoError>;
    async fn get_guess(&self, guess_id: GuessId) -> Result<BlindtestGuess, RepoRetrieveError>;
    /// Stores the guess and adds `points` to the team's result in the round's
    /// discipline, all or nothing.
    async fn commit_guess(
        &self,
        guess: GuessWrite,
        points: i64,
    ) -> Result<BlindtestGuess, RepoUpdateError>;
}
