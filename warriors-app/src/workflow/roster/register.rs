use std::sync::Arc;

use validator::Validate;
use warriors_core::rating::{Criterion, compute_rating};

use crate::{
    domain::{
        EditionId, TeamId,
        team::{Edition, NewPlayer, Player, Team, TeamRepository},
    },
    error::{ServiceError, ServiceResult, found},
};

/// Registration form answers of a player.
#[derive(Debug, Clone, Validate)]
pub struct RegisterPlayerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub edition_id: EditionId,
    pub team_id: Option<TeamId>,
    /// Self-assessment per criterion, in `Criterion::ALL` order.
    #[validate(custom(function = "validate_scores"))]
    pub scores: [u8; 10],
    #[validate(range(min = 1, max = 10))]
    pub estimate: u8,
}

fn validate_scores(scores: &[u8; 10]) -> Result<(), validator::ValidationError> {
    if scores.iter().all(|score| (1..=10).contains(score)) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("score_out_of_range"))
    }
}

impl RegisterPlayerRequest {
    fn score(&self, criterion: Criterion) -> f64 {
        Criterion::ALL
            .iter()
            .position(|c| *c == criterion)
            .map_or(0.0, |index| self.scores[index] as f64)
    }
}

#[async_trait::async_trait]
pub trait RosterUseCase {
    async fn create_edition(&self, year: i32, host: String) -> ServiceResult<Edition>;
    async fn register_team(&self, edition_id: EditionId, name: String) -> ServiceResult<Team>;
    async fn register_player(&self, request: RegisterPlayerRequest) -> ServiceResult<Player>;
}

pub struct RosterUseCaseImpl<T: TeamRepository> {
    team_repository: Arc<T>,
}

impl<T: TeamRepository> RosterUseCaseImpl<T> {
    pub fn new(team_repository: Arc<T>) -> Self {
        Self { team_repository }
    }
}

#[async_trait::async_trait]
impl<T: TeamRepository + Send + Sync + 'static> RosterUseCase for RosterUseCaseImpl<T> {
    async fn create_edition(&self, year: i32, host: String) -> ServiceResult<Edition> {
        let edition = self.team_repository.create_edition(year, host).await?;
        log::info!("Created edition {} ({})", edition.year, edition.host);
        Ok(edition)
    }

    async fn register_team(&self, edition_id: EditionId, name: String) -> ServiceResult<Team> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return ServiceError::validation("Team name cannot be empty");
        }
        found(self.team_repository.get_edition(edition_id).await, || {
            format!("Edition {} not found", edition_id)
        })?;
        let team = self.team_repository.create_team(edition_id, name).await?;
        log::info!("Registered team {} ({})", team.name, team.id);
        Ok(team)
    }

    async fn register_player(&self, request: RegisterPlayerRequest) -> ServiceResult<Player> {
        if let Err(e) = request.validate() {
            return ServiceError::validation(format!("Invalid player registration: {}", e));
        }
        if let Some(team_id) = request.team_id {
            let team = found(self.team_repository.get_team(team_id).await, || {
                format!("Team {} not found", team_id)
            })?;
            if team.edition_id != request.edition_id {
                return ServiceError::validation(format!(
                    "Team {} belongs to another edition",
                    team_id
                ));
            }
        }

        let rating = compute_rating(|criterion| request.score(criterion), request.estimate as f64);
        let player = self
            .team_repository
            .create_player(NewPlayer {
                name: request.name.clone(),
                edition_id: request.edition_id,
                team_id: request.team_id,
                global_rating: rating.global,
            })
            .await?;
        log::debug!(
            "Registered player {} with rating {:.2}",
            player.name,
            player.global_rating
        );
        Ok(player)
    }
}
