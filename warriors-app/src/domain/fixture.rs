use warriors_core::{GameSide, Score};

use crate::domain::{
    DisciplineId, EditionId, GameId, RepoCreateError, RepoError, RepoRetrieveError,
    RepoUpdateError, RoundId, TeamId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub id: RoundId,
    pub discipline_id: DisciplineId,
    pub order: u32,
    pub is_over: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub discipline_id: DisciplineId,
    pub round_id: RoundId,
    pub edition_id: EditionId,
    pub team1: TeamId,
    pub team2: TeamId,
    pub referee: Option<TeamId>,
    /// Batch of simultaneous games this game is played in within its round.
    pub batch: u32,
    pub score: Score,
    pub is_active: bool,
}

impl Game {
    pub fn side_of(&self, team_id: TeamId) -> Option<GameSide> {
        if team_id == self.team1 {
            Some(GameSide::Team1)
        } else if team_id == self.team2 {
            Some(GameSide::Team2)
        } else {
            None
        }
    }

    pub fn team(&self, side: GameSide) -> TeamId {
        match side {
            GameSide::Team1 => self.team1,
            GameSide::Team2 => self.team2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDraft {
    pub team1: TeamId,
    pub team2: TeamId,
    pub referee: Option<TeamId>,
    pub batch: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundDraft {
    pub order: u32,
    pub games: Vec<GameDraft>,
}

#[async_trait::async_trait]
pub trait FixtureRepository {
    /// Creates every round and its games, or nothing if any round order is
    /// already taken in the discipline.
    async fn create_rounds(
        &self,
        discipline_id: DisciplineId,
        edition_id: EditionId,
        rounds: Vec<RoundDraft>,
    ) -> Result<Vec<Round>, RepoCreateError>;
    async fn get_round(&self, round_id: RoundId) -> Result<Round, RepoRetrieveError>;
    /// Active rounds of the discipline, ascending by order.
    async fn list_rounds(&self, discipline_id: DisciplineId) -> Result<Vec<Round>, RepoError>;
    /// Sets the flag and returns the round as it was before the update.
    async fn set_round_over(&self, round_id: RoundId, is_over: bool)
    -> Result<Round, RepoUpdateError>;

    async fn get_game(&self, game_id: GameId) -> Result<Game, RepoRetrieveError>;
    /// Active games of the discipline, ascending by round order then id.
    async fn list_games(&self, discipline_id: DisciplineId) -> Result<Vec<Game>, RepoError>;
}
