pub mod discipline;
pub mod ranking;
pub mod result;
pub mod roster;
pub mod round;
pub mod schedule;
pub mod scoring;
