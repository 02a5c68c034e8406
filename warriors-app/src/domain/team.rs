use crate::domain::{
    EditionId, PlayerId, RepoCreateError, RepoError, RepoRetrieveError, TeamId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edition {
    pub id: EditionId,
    pub year: i32,
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub edition_id: EditionId,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub edition_id: EditionId,
    pub team_id: Option<TeamId>,
    pub global_rating: f64,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    pub name: String,
    pub edition_id: EditionId,
    pub team_id: Option<TeamId>,
    pub global_rating: f64,
}

#[async_trait::async_trait]
pub trait TeamRepository {
    async fn create_edition(&self, year: i32, host: String) -> Result<Edition, RepoCreateError>;
    async fn get_edition(&self, edition_id: EditionId) -> Result<Edition, RepoRetrieveError>;

    async fn create_team(&self, edition_id: EditionId, name: String)
    -> Result<Team, RepoCreateError>;
    async fn get_team(&self, team_id: TeamId) -> Result<Team, RepoRetrieveError>;
    /// Active teams of the edition, ascending by id.
    async fn list_active_teams(&self, edition_id: EditionId) -> Result<Vec<Team>, RepoError>;

    async fn create_player(&self, player: NewPlayer) -> Result<Player, RepoCreateError>;
    async fn get_player(&self, player_id: PlayerId) -> Result<Player, RepoRetrieveError>;
}
