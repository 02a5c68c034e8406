pub mod locks;
pub mod referee_assigner;
pub mod team_resolver;
