/// Self-assessed skill criteria collected at registration, each from 1 to 10.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Criterion {
    TeamSpirit,
    Observation,
    Mobility,
    Accuracy,
    Speed,
    Stamina,
    Culture,
    Strength,
    Explosiveness,
    Strategy,
}

impl Criterion {
    pub const ALL: [Criterion; 10] = [
        Criterion::TeamSpirit,
        Criterion::Observation,
        Criterion::Mobility,
        Criterion::Accuracy,
        Criterion::Speed,
        Criterion::Stamina,
        Criterion::Culture,
        Criterion::Strength,
        Criterion::Explosiveness,
        Criterion::Strategy,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Criterion::TeamSpirit => "TEAM",
            Criterion::Observation => "OBS",
            Criterion::Mobility => "MOB",
            Criterion::Accuracy => "ACC",
            Criterion::Speed => "SPD",
            Criterion::Stamina => "STMN",
            Criterion::Culture => "CULT",
            Criterion::Strength => "STR",
            Criterion::Explosiveness => "EXPL",
            Criterion::Strategy => "STRT",
        }
    }

    pub fn coefficient(&self) -> u32 {
        match self {
            Criterion::TeamSpirit => 2,
            Criterion::Observation => 1,
            Criterion::Mobility => 3,
            Criterion::Accuracy => 2,
            Criterion::Speed => 4,
            Criterion::Stamina => 4,
            Criterion::Culture => 1,
            Criterion::Strength => 3,
            Criterion::Explosiveness => 4,
            Criterion::Strategy => 2,
        }
    }
}

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 10.0;
const UNDERRATED_THRESHOLD: f64 = 4.0;
const UNDERRATED_BOOST: f64 = 2.5;
const ESTIMATE_WEIGHT: f64 = 4.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRating {
    pub weighted: f64,
    pub global: f64,
}

/// Computes a player's ratings from the criterion scores and their own
/// estimate of their global level.
///
/// Players who rate themselves poorly on every criterion while estimating a
/// good global level get their weighted rating boosted.
pub fn compute_rating(scores: impl Fn(Criterion) -> f64, estimate: f64) -> PlayerRating {
    let total_coefficient: u32 = Criterion::ALL.iter().map(|c| c.coefficient()).sum();
    let weighted_sum: f64 = Criterion::ALL
        .iter()
        .map(|c| scores(*c) * c.coefficient() as f64)
        .sum();
    let mut weighted = (weighted_sum / total_coefficient as f64).clamp(MIN_RATING, MAX_RATING);
    if weighted < UNDERRATED_THRESHOLD && estimate > UNDERRATED_THRESHOLD {
        weighted *= UNDERRATED_BOOST;
    }

    let global = ((weighted + estimate * ESTIMATE_WEIGHT) / (ESTIMATE_WEIGHT + 1.0))
        .clamp(MIN_RATING, MAX_RATING);

    PlayerRating {
        weighted,
        global: (global * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_scores() {
        let rating = compute_rating(|_| 6.0, 6.0);
        assert_eq!(rating.weighted, 6.0);
        assert_eq!(rating.global, 6.0);
    }

    #[test]
    fn test_weights_follow_coefficients() {
        // speed weighs 4 out of 26
        let rating = compute_rating(
            |c| if c == Criterion::Speed { 10.0 } else { 5.0 },
            5.0,
        );
        assert!((rating.weighted - (5.0 + 20.0 / 26.0)).abs() < 1e-9);
    }

    #[test]
    fn test_underrated_boost() {
        let rating = compute_rating(|_| 2.0, 7.0);
        assert_eq!(rating.weighted, 5.0);
        assert_eq!(rating.global, 6.6);

        let modest = compute_rating(|_| 2.0, 3.0);
        assert_eq!(modest.weighted, 2.0);
        assert_eq!(modest.global, 2.8);
    }
}
