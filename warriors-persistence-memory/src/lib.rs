use std::{collections::BTreeMap, sync::Mutex};

use warriors_app::domain::{
    BlindtestRoundId, DisciplineId, EditionId, EventId, GameId, GuessId, PlayerId, RoundId,
    TeamId, TeamResultId,
    blindtest::{BlindtestGuess, BlindtestRound},
    discipline::Discipline,
    event::GameEvent,
    fixture::{Game, Round},
    result::TeamResult,
    team::{Edition, Player, Team},
};

mod blindtest;
mod disciplines;
mod events;
mod fixtures;
mod results;
mod teams;

#[derive(Default)]
struct State {
    last_id: u32,
    editions: BTreeMap<EditionId, Edition>,
    teams: BTreeMap<TeamId, Team>,
    players: BTreeMap<PlayerId, Player>,
    disciplines: BTreeMap<DisciplineId, Discipline>,
    rounds: BTreeMap<RoundId, Round>,
    games: BTreeMap<GameId, Game>,
    events: BTreeMap<EventId, GameEvent>,
    results: BTreeMap<TeamResultId, TeamResult>,
    blindtest_rounds: BTreeMap<BlindtestRoundId, BlindtestRound>,
    guesses: BTreeMap<GuessId, BlindtestGuess>,
}

impl State {
    /// Ids are unique across entity types and strictly increasing, so event
    /// ids double as insertion order.
    fn next_id(&mut self) -> u32 {
        self.last_id += 1;
        self.last_id
    }

    fn find_result(&self, team_id: TeamId, discipline_id: DisciplineId) -> Option<&TeamResult> {
        self.results.values().find(|result| {
            result.is_active && result.team_id == team_id && result.discipline_id == discipline_id
        })
    }
}

/// Entity store keeping every record in memory. Each repository call runs
/// under a single lock, so multi-record writes are all or nothing.
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut State) -> R) -> Result<R, String> {
        match self.state.lock() {
            Ok(mut state) => Ok(f(&mut *state)),
            Err(_) => {
                log::error!("In-memory store lock is poisoned");
                Err("store lock poisoned".to_string())
            }
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use warriors_app::domain::{
        RepoCreateError, RepoUpdateError,
        discipline::{DisciplineKind, DisciplineRepository, NewDiscipline, PairingSystem, ResultType},
        event::{
            GameEventKind, GameEventRepository, GameEventWrite, ResolvedSides, ResultDelta,
            ScoreCommit,
        },
        fixture::{FixtureRepository, GameDraft, RoundDraft},
        team::{NewPlayer, TeamRepository},
    };
    use warriors_core::{
        GameSide, Score, ranking::ResultValue, scoring::rugby::RugbyEventType,
    };

    use super::*;

    async fn seeded() -> (InMemoryStore, Discipline, Vec<Team>) {
        let store = InMemoryStore::new();
        let edition = store.create_edition(2024, "Lyon".to_string()).await.unwrap();
        let mut teams = Vec::new();
        for name in ["Red", "Blue", "Green"] {
            teams.push(store.create_team(edition.id, name.to_string()).await.unwrap());
        }
        let discipline = store
            .create_discipline(
                NewDiscipline {
                    name: "Rugby".to_string(),
                    kind: DisciplineKind::Rugby,
                    edition_id: edition.id,
                    pairing_system: PairingSystem::RoundRobin,
                    result_type: ResultType::Points,
                    max_rounds: None,
                    reveal_score: true,
                },
                teams
                    .iter()
                    .take(2)
                    .map(|team| (team.id, ResultValue::Points(0)))
                    .collect(),
            )
            .await
            .unwrap();
        (store, discipline, teams)
    }

    fn draft(order: u32, teams: &[Team]) -> RoundDraft {
        RoundDraft {
            order,
            games: vec![GameDraft {
                team1: teams[0].id,
                team2: teams[1].id,
                referee: Some(teams[2].id),
                batch: 0,
            }],
        }
    }

    #[tokio::test]
    async fn test_create_rounds_is_all_or_nothing() {
        let (store, discipline, teams) = seeded().await;
        store
            .create_rounds(discipline.id, discipline.edition_id, vec![draft(0, &teams)])
            .await
            .unwrap();

        let result = store
            .create_rounds(
                discipline.id,
                discipline.edition_id,
                vec![draft(1, &teams), draft(0, &teams)],
            )
            .await;
        assert!(matches!(result, Err(RepoCreateError::Conflict)));
        assert_eq!(store.list_rounds(discipline.id).await.unwrap().len(), 1);
        assert_eq!(store.list_games(discipline.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_commit_game_event_is_all_or_nothing() {
        let (store, discipline, teams) = seeded().await;
        store
            .create_rounds(discipline.id, discipline.edition_id, vec![draft(0, &teams)])
            .await
            .unwrap();
        let game = store.list_games(discipline.id).await.unwrap()[0].clone();
        let player = store
            .create_player(NewPlayer {
                name: "Alex".to_string(),
                edition_id: discipline.edition_id,
                team_id: Some(teams[0].id),
                global_rating: 5.0,
            })
            .await
            .unwrap();

        let write = GameEventWrite::new(
            game.id,
            player.id,
            GameEventKind::Rugby(RugbyEventType::Try),
            Utc::now(),
        );
        let sides = ResolvedSides {
            side1: GameSide::Team1,
            side2: None,
        };

        // the third team has no result in this discipline
        let failed = store
            .commit_game_event(
                write.clone(),
                sides,
                ScoreCommit {
                    score: Score::new(3, 0),
                    results: vec![
                        ResultDelta {
                            team_id: teams[0].id,
                            points: 3,
                        },
                        ResultDelta {
                            team_id: teams[2].id,
                            points: 0,
                        },
                    ],
                },
            )
            .await;
        assert!(matches!(failed, Err(RepoUpdateError::NotFound)));
        assert_eq!(store.get_game(game.id).await.unwrap().score, Score::new(0, 0));
        assert!(store.list_active_events(game.id).await.unwrap().is_empty());

        store
            .commit_game_event(
                write,
                sides,
                ScoreCommit {
                    score: Score::new(3, 0),
                    results: vec![ResultDelta {
                        team_id: teams[0].id,
                        points: 3,
                    }],
                },
            )
            .await
            .unwrap();
        assert_eq!(store.get_game(game.id).await.unwrap().score, Score::new(3, 0));
        let state = store.state.lock().unwrap();
        assert_eq!(
            state.find_result(teams[0].id, discipline.id).unwrap().value,
            ResultValue::Points(3)
        );
    }
}
