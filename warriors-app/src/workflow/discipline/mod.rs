pub mod create;
pub mod reveal;
