use std::collections::BTreeSet;

use warriors_app::domain::{
    DisciplineId, EditionId, RepoCreateError, RepoError, RepoRetrieveError, RepoUpdateError,
    TeamId, TeamResultId,
    discipline::{Discipline, DisciplineRepository, NewDiscipline},
    result::TeamResult,
};
use warriors_core::ranking::ResultValue;

use crate::InMemoryStore;

#[async_trait::async_trait]
impl DisciplineRepository for InMemoryStore {
    async fn create_discipline(
        &self,
        discipline: NewDiscipline,
        results: Vec<(TeamId, ResultValue)>,
    ) -> Result<Discipline, RepoCreateError> {
        self.with_state(|state| {
            let mut seen = BTreeSet::new();
            for (team_id, _) in &results {
                if !seen.insert(*team_id) {
                    return Err(RepoCreateError::Conflict);
                }
                if !state.teams.contains_key(team_id) {
                    return Err(RepoCreateError::StorageError(format!(
                        "unknown team {}",
                        team_id
                    )));
                }
            }

            let discipline = Discipline {
                id: DisciplineId::new(state.next_id()),
                name: discipline.name,
                kind: discipline.kind,
                edition_id: discipline.edition_id,
                pairing_system: discipline.pairing_system,
                result_type: discipline.result_type,
                max_rounds: discipline.max_rounds,
                reveal_score: discipline.reveal_score,
                is_active: true,
            };
            state.disciplines.insert(discipline.id, discipline.clone());
            for (team_id, value) in results {
                let result = TeamResult {
                    id: TeamResultId::new(state.next_id()),
                    team_id,
                    discipline_id: discipline.id,
                    value,
                    is_active: true,
                };
                state.results.insert(result.id, result);
            }
            Ok(discipline)
        })
        .map_err(RepoCreateError::StorageError)?
    }

    async fn get_discipline(
        &self,
        discipline_id: DisciplineId,
    ) -> Result<Discipline, RepoRetrieveError> {
        self.with_state(|state| state.disciplines.get(&discipline_id).cloned())
            .map_err(RepoRetrieveError::StorageError)?
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn list_disciplines(&self, edition_id: EditionId) -> Result<Vec<Discipline>, RepoError> {
        self.with_state(|state| {
            state
                .disciplines
                .values()
                .filter(|discipline| discipline.is_active && discipline.edition_id == edition_id)
                .cloned()
                .collect()
        })
        .map_err(RepoError::StorageError)
    }

    async fn update_discipline(&self, discipline: Discipline) -> Result<(), RepoUpdateError> {
        self.with_state(|state| match state.disciplines.get_mut(&discipline.id) {
            Some(stored) => {
                *stored = discipline;
                Ok(())
            }
            None => Err(RepoUpdateError::NotFound),
        })
        .map_err(RepoUpdateError::StorageError)?
    }
}
