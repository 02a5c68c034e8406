pub mod referee;
pub mod round_robin;
pub mod swiss;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("at least 2 teams are required, got {0}")]
    NotEnoughTeams(usize),
}
