#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use warriors_app::{
    Application, build_application,
    config::TournamentConfig,
    domain::{
        TeamId,
        discipline::{Discipline, DisciplineKind},
        team::{Edition, Player, Team},
    },
    workflow::{
        discipline::create::CreateDisciplineRequest, roster::register::RegisterPlayerRequest,
    },
};
use warriors_persistence_memory::InMemoryStore;

pub struct Tournament {
    pub app: Application,
    pub store: Arc<InMemoryStore>,
    pub edition: Edition,
    pub teams: Vec<Team>,
    pub players: Vec<Vec<Player>>,
}

impl Tournament {
    pub async fn new(team_count: usize, players_per_team: usize) -> Self {
        Self::with_config(team_count, players_per_team, TournamentConfig::default()).await
    }

    pub async fn with_config(
        team_count: usize,
        players_per_team: usize,
        config: TournamentConfig,
    ) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let app = build_application(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            config,
        );

        let edition = app
            .roster_use_case
            .create_edition(2024, "Lyon".to_string())
            .await
            .unwrap();

        let mut teams = Vec::new();
        let mut players = Vec::new();
        for t in 0..team_count {
            let team = app
                .roster_use_case
                .register_team(edition.id, format!("Team {}", t))
                .await
                .unwrap();
            let mut roster = Vec::new();
            for p in 0..players_per_team {
                let player = app
                    .roster_use_case
                    .register_player(RegisterPlayerRequest {
                        name: format!("Player {}-{}", t, p),
                        edition_id: edition.id,
                        team_id: Some(team.id),
                        scores: [5; 10],
                        estimate: 5,
                    })
                    .await
                    .unwrap();
                roster.push(player);
            }
            teams.push(team);
            players.push(roster);
        }

        Tournament {
            app,
            store,
            edition,
            teams,
            players,
        }
    }

    pub async fn discipline(&self, kind: DisciplineKind) -> Discipline {
        self.app
            .discipline_create_use_case
            .create_discipline(CreateDisciplineRequest::new(self.edition.id, kind))
            .await
            .unwrap()
    }

    pub fn roster(&self, team_id: TeamId) -> &[Player] {
        let index = self
            .teams
            .iter()
            .position(|team| team.id == team_id)
            .unwrap();
        &self.players[index]
    }
}

pub fn at(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, second).unwrap()
}
