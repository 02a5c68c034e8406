use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;
use warriors_app::{
    Application,
    domain::{
        discipline::{Discipline, DisciplineKind, PairingSystem, ResultType},
        team::{Edition, Team},
    },
    error::ServiceError,
    workflow::{
        discipline::create::CreateDisciplineRequest, roster::register::RegisterPlayerRequest,
    },
};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid seed: {0}")]
    Invalid(#[from] validator::ValidationErrors),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Initial edition setup: teams with their players, then the disciplines.
#[derive(Debug, Deserialize, Validate)]
pub struct Seed {
    #[validate(nested)]
    pub edition: SeedEdition,
    #[validate(length(min = 1), nested)]
    pub teams: Vec<SeedTeam>,
    #[serde(default)]
    #[validate(nested)]
    pub disciplines: Vec<SeedDiscipline>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SeedEdition {
    pub year: i32,
    #[validate(length(min = 1, max = 100))]
    pub host: String,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SeedTeam {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(nested)]
    pub players: Vec<SeedPlayer>,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SeedPlayer {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub scores: [u8; 10],
    #[validate(range(min = 1, max = 10))]
    pub estimate: u8,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SeedDiscipline {
    pub kind: DisciplineKind,
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub pairing_system: Option<PairingSystem>,
    pub result_type: Option<ResultType>,
    #[validate(range(min = 1))]
    pub max_rounds: Option<u32>,
    #[serde(default)]
    pub reveal_score: bool,
}

#[derive(Debug)]
pub struct SeededEdition {
    pub edition: Edition,
    pub teams: Vec<Team>,
    pub disciplines: Vec<Discipline>,
}

pub fn parse_seed(content: &str) -> Result<Seed, SeedError> {
    let seed: Seed = serde_json::from_str(content)?;
    seed.validate()?;
    Ok(seed)
}

pub fn load_seed(path: &Path) -> Result<Seed, SeedError> {
    let content = std::fs::read_to_string(path)?;
    parse_seed(&content)
}

pub async fn apply_seed(app: &Application, seed: Seed) -> Result<SeededEdition, SeedError> {
    let edition = app
        .roster_use_case
        .create_edition(seed.edition.year, seed.edition.host)
        .await?;

    let mut teams = Vec::with_capacity(seed.teams.len());
    for seed_team in seed.teams {
        let team = app
            .roster_use_case
            .register_team(edition.id, seed_team.name)
            .await?;
        for player in seed_team.players {
            app.roster_use_case
                .register_player(RegisterPlayerRequest {
                    name: player.name,
                    edition_id: edition.id,
                    team_id: Some(team.id),
                    scores: player.scores,
                    estimate: player.estimate,
                })
                .await?;
        }
        teams.push(team);
    }

    let mut disciplines = Vec::with_capacity(seed.disciplines.len());
    for seed_discipline in seed.disciplines {
        let discipline = app
            .discipline_create_use_case
            .create_discipline(CreateDisciplineRequest {
                name: seed_discipline.name,
                pairing_system: seed_discipline.pairing_system,
                result_type: seed_discipline.result_type,
                max_rounds: seed_discipline.max_rounds,
                reveal_score: seed_discipline.reveal_score,
                ..CreateDisciplineRequest::new(edition.id, seed_discipline.kind)
            })
            .await?;
        disciplines.push(discipline);
    }

    log::info!(
        "Seeded edition {} with {} teams and {} disciplines",
        edition.year,
        teams.len(),
        disciplines.len()
    );
    Ok(SeededEdition {
        edition,
        teams,
        disciplines,
    })
}
