pub mod blindtest;
pub mod discipline;
pub mod event;
pub mod fixture;
pub mod result;
pub mod team;

macro_rules! entity_id {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            pub fn new(id: u32) -> Self {
                $name(id)
            }

            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(EditionId);
entity_id!(TeamId);
entity_id!(PlayerId);
entity_id!(DisciplineId);
entity_id!(RoundId);
entity_id!(GameId);
entity_id!(EventId);
entity_id!(TeamResultId);
entity_id!(BlindtestRoundId);
entity_id!(GuessId);

/// Failures of repository ports. Adapters report whatever their backend
/// raised as `StorageError`.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("storage failure: {0}")]
    StorageError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RepoRetrieveError {
    #[error("no such record")]
    NotFound,
    #[error("storage failure: {0}")]
    StorageError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RepoCreateError {
    /// A uniqueness rule (edition year, team name, round order) was violated.
    #[error("record already exists")]
    Conflict,
    #[error("storage failure: {0}")]
    StorageError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RepoUpdateError {
    #[error("no such record")]
    NotFound,
    #[error("update rejected by the stored state")]
    Conflict,
    #[error("storage failure: {0}")]
    StorageError(String),
}
