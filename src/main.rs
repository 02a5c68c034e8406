use std::{process::ExitCode, sync::Arc};

use log::{error, info};
use warriors_app::{Application, build_application};
use warriors_persistence_memory::InMemoryStore;

use crate::{config::ServerConfig, seed::SeededEdition};

mod config;
mod logs;
mod seed;

async fn report(app: &Application, seeded: &SeededEdition) -> Result<(), seed::SeedError> {
    for discipline in &seeded.disciplines {
        let rounds = app.schedule_use_case.list_rounds(discipline.id).await?;
        info!(
            "{}: {} rounds scheduled ({:?})",
            discipline.name,
            rounds.len(),
            discipline.pairing_system
        );
    }
    let leaderboard = app
        .ranking_use_case
        .edition_leaderboard(seeded.edition.id)
        .await?;
    for standing in leaderboard {
        info!(
            "#{} {} ({} pts)",
            standing.rank, standing.team.name, standing.total_points
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No .env file loaded: {}", e);
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logs::init_logger(&config.logging) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    let store = Arc::new(InMemoryStore::new());
    let app = build_application(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
        config.tournament.clone(),
    );

    info!("Starting application");

    let Some(seed_file) = config.seed_file.as_deref() else {
        info!("No seed file configured, nothing to schedule");
        return ExitCode::SUCCESS;
    };
    let seeded = match seed::load_seed(seed_file) {
        Ok(seed) => seed::apply_seed(&app, seed).await,
        Err(e) => Err(e),
    };
    let result = match seeded {
        Ok(seeded) => report(&app, &seeded).await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        error!("Failed to seed {}: {}", seed_file.display(), e);
        return ExitCode::FAILURE;
    }

    info!("Application finished");
    ExitCode::SUCCESS
}
