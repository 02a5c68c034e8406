use warriors_app::domain::{
    EditionId, PlayerId, RepoCreateError, RepoError, RepoRetrieveError, TeamId,
    team::{Edition, NewPlayer, Player, Team, TeamRepository},
};

use crate::InMemoryStore;

#[async_trait::async_trait]
impl TeamRepository for InMemoryStore {
    async fn create_edition(&self, year: i32, host: String) -> Result<Edition, RepoCreateError> {
        self.with_state(|state| {
            if state.editions.values().any(|edition| edition.year == year) {
                return Err(RepoCreateError::Conflict);
            }
            let edition = Edition {
                id: EditionId::new(state.next_id()),
                year,
                host,
            };
            state.editions.insert(edition.id, edition.clone());
            Ok(edition)
        })
        .map_err(RepoCreateError::StorageError)?
    }

    async fn get_edition(&self, edition_id: EditionId) -> Result<Edition, RepoRetrieveError> {
        self.with_state(|state| state.editions.get(&edition_id).cloned())
            .map_err(RepoRetrieveError::StorageError)?
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn create_team(
        &self,
        edition_id: EditionId,
        name: String,
    ) -> Result<Team, RepoCreateError> {
        self.with_state(|state| {
            if !state.editions.contains_key(&edition_id) {
                return Err(RepoCreateError::StorageError(format!(
                    "unknown edition {}",
                    edition_id
                )));
            }
            if state
                .teams
                .values()
                .any(|team| team.edition_id == edition_id && team.name == name)
            {
                return Err(RepoCreateError::Conflict);
            }
            let team = Team {
                id: TeamId::new(state.next_id()),
                name,
                edition_id,
                is_active: true,
            };
            state.teams.insert(team.id, team.clone());
            Ok(team)
        })
        .map_err(RepoCreateError::StorageError)?
    }

    async fn get_team(&self, team_id: TeamId) -> Result<Team, RepoRetrieveError> {
        self.with_state(|state| state.teams.get(&team_id).cloned())
            .map_err(RepoRetrieveError::StorageError)?
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn list_active_teams(&self, edition_id: EditionId) -> Result<Vec<Team>, RepoError> {
        self.with_state(|state| {
            state
                .teams
                .values()
                .filter(|team| team.is_active && team.edition_id == edition_id)
                .cloned()
                .collect()
        })
        .map_err(RepoError::StorageError)
    }

    async fn create_player(&self, player: NewPlayer) -> Result<Player, RepoCreateError> {
        self.with_state(|state| {
            if let Some(team_id) = player.team_id {
                if !state.teams.contains_key(&team_id) {
                    return Err(RepoCreateError::StorageError(format!(
                        "unknown team {}",
                        team_id
                    )));
                }
            }
            let player = Player {
                id: PlayerId::new(state.next_id()),
                name: player.name,
                edition_id: player.edition_id,
                team_id: player.team_id,
                global_rating: player.global_rating,
                is_active: true,
            };
            state.players.insert(player.id, player.clone());
            Ok(player)
        })
        .map_err(RepoCreateError::StorageError)?
    }

    async fn get_player(&self, player_id: PlayerId) -> Result<Player, RepoRetrieveError> {
        self.with_state(|state| state.players.get(&player_id).cloned())
            .map_err(RepoRetrieveError::StorageError)?
            .ok_or(RepoRetrieveError::NotFound)
    }
}

impl InMemoryStore {
    /// Moves a team out of competition, as an organiser would after a
    /// withdrawal.
    pub fn deactivate_team(&self, team_id: TeamId) -> bool {
        self.with_state(|state| match state.teams.get_mut(&team_id) {
            Some(team) => {
                team.is_active = false;
                true
            }
            None => false,
        })
        .unwrap_or(false)
    }
}
