use serde::Deserialize;
use warriors_core::ranking::ResultValue;

use crate::domain::{
    DisciplineId, EditionId, RepoCreateError, RepoError, RepoRetrieveError, RepoUpdateError,
    TeamId,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisciplineKind {
    Rugby,
    Dodgeball,
    Blindtest,
    Crossfit,
    Petanque,
    Orienteering,
    HideAndSeek,
    ObstacleCourse,
    GeographyQuiz,
}

impl DisciplineKind {
    pub fn default_name(&self) -> &'static str {
        match self {
            DisciplineKind::Rugby => "Rugby",
            DisciplineKind::Dodgeball => "Dodgeball",
            DisciplineKind::Blindtest => "Blindtest",
            DisciplineKind::Crossfit => "Crossfit",
            DisciplineKind::Petanque => "Petanque",
            DisciplineKind::Orienteering => "Orienteering",
            DisciplineKind::HideAndSeek => "Hide and Seek",
            DisciplineKind::ObstacleCourse => "Obstacle Course",
            DisciplineKind::GeographyQuiz => "Geography Quiz",
        }
    }

    pub fn default_result_type(&self) -> ResultType {
        match self {
            DisciplineKind::Crossfit
            | DisciplineKind::Orienteering
            | DisciplineKind::ObstacleCourse
            | DisciplineKind::HideAndSeek => ResultType::Time,
            _ => ResultType::Points,
        }
    }

    pub fn default_pairing_system(&self) -> PairingSystem {
        match self {
            DisciplineKind::Rugby | DisciplineKind::Dodgeball => PairingSystem::RoundRobin,
            _ => PairingSystem::None,
        }
    }

    /// Whether results of this kind are derived by a score engine rather than
    /// entered by hand.
    pub fn has_score_engine(&self) -> bool {
        matches!(
            self,
            DisciplineKind::Rugby | DisciplineKind::Dodgeball | DisciplineKind::Blindtest
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingSystem {
    RoundRobin,
    Swiss,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    Points,
    Time,
    None,
}

impl ResultType {
    /// Value of a team result when the discipline starts.
    pub fn initial_value(&self) -> ResultValue {
        match self {
            ResultType::Points => ResultValue::Points(0),
            ResultType::Time | ResultType::None => ResultValue::Unset,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discipline {
    pub id: DisciplineId,
    pub name: String,
    pub kind: DisciplineKind,
    pub edition_id: EditionId,
    pub pairing_system: PairingSystem,
    pub result_type: ResultType,
    pub max_rounds: Option<u32>,
    pub reveal_score: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDiscipline {
    pub name: String,
    pub kind: DisciplineKind,
    pub edition_id: EditionId,
    pub pairing_system: PairingSystem,
    pub result_type: ResultType,
    pub max_rounds: Option<u32>,
    pub reveal_score: bool,
}

#[async_trait::async_trait]
pub trait DisciplineRepository {
    /// Creates the discipline together with one result per listed team, all
    /// or nothing.
    async fn create_discipline(
        &self,
        discipline: NewDiscipline,
        results: Vec<(TeamId, ResultValue)>,
    ) -> Result<Discipline, RepoCreateError>;
    async fn get_discipline(
        &self,
        discipline_id: DisciplineId,
    ) -> Result<Discipline, RepoRetrieveError>;
    async fn list_disciplines(&self, edition_id: EditionId) -> Result<Vec<Discipline>, RepoError>;
    async fn update_discipline(&self, discipline: Discipline) -> Result<(), RepoUpdateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults() {
        assert_eq!(
            DisciplineKind::Crossfit.default_result_type(),
            ResultType::Time
        );
        assert_eq!(
            DisciplineKind::Blindtest.default_result_type(),
            ResultType::Points
        );
        assert_eq!(
            DisciplineKind::Dodgeball.default_pairing_system(),
            PairingSystem::RoundRobin
        );
        assert_eq!(
            DisciplineKind::Petanque.default_pairing_system(),
            PairingSystem::None
        );
        assert!(!DisciplineKind::Orienteering.has_score_engine());
    }

    #[test]
    fn test_initial_values() {
        assert_eq!(ResultType::Points.initial_value(), ResultValue::Points(0));
        assert_eq!(ResultType::Time.initial_value(), ResultValue::Unset);
    }
}
