use std::{sync::Arc, time::Duration};

use crate::{
    domain::{PlayerId, RepoRetrieveError, TeamId, team::TeamRepository},
    error::{ServiceError, ServiceResult},
};

#[async_trait::async_trait]
pub trait PlayerTeamResolver {
    /// The team the player plays for. Fails with `Validation` for players
    /// without a team.
    async fn resolve_team(&self, player_id: PlayerId) -> ServiceResult<TeamId>;
}

pub struct PlayerTeamResolverImpl<T: TeamRepository> {
    team_repository: Arc<T>,
    cache: moka::sync::Cache<PlayerId, TeamId>,
}

impl<T: TeamRepository> PlayerTeamResolverImpl<T> {
    pub fn new(team_repository: Arc<T>, ttl: Duration) -> Self {
        Self {
            team_repository,
            cache: moka::sync::Cache::builder()
                .max_capacity(1000)
                .time_to_live(ttl)
                .build(),
        }
    }
}

#[async_trait::async_trait]
impl<T: TeamRepository + Send + Sync + 'static> PlayerTeamResolver for PlayerTeamResolverImpl<T> {
    async fn resolve_team(&self, player_id: PlayerId) -> ServiceResult<TeamId> {
        if let Some(team_id) = self.cache.get(&player_id) {
            return Ok(team_id);
        }
        let player = match self.team_repository.get_player(player_id).await {
            Ok(player) => player,
            Err(RepoRetrieveError::NotFound) => {
                return ServiceError::validation(format!("Player {} does not exist", player_id));
            }
            Err(e) => return Err(e.into()),
        };
        match player.team_id {
            Some(team_id) if player.is_active => {
                self.cache.insert(player_id, team_id);
                Ok(team_id)
            }
            _ => ServiceError::validation(format!("Player {} has no active team", player_id)),
        }
    }
}
