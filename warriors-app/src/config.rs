use std::time::Duration;

use warriors_core::{
    MatchPoints,
    ranking::StandingsOrder,
    scoring::{dodgeball::DodgeballRules, rugby::RugbyRules},
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwissConfig {
    pub standings_order: StandingsOrder,
}

/// Scoring and scheduling constants shared by every use case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TournamentConfig {
    pub rugby: RugbyRules,
    pub dodgeball: DodgeballRules,
    pub match_points: MatchPoints,
    pub swiss: SwissConfig,
    pub player_cache_ttl: Duration,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            rugby: RugbyRules::default(),
            dodgeball: DodgeballRules::default(),
            match_points: MatchPoints::default(),
            swiss: SwissConfig::default(),
            player_cache_ttl: Duration::from_secs(300),
        }
    }
}
