pub mod blindtest;
pub mod engine;
pub mod record_event;
