use std::{cmp::Ordering, time::Duration};

/// Value of a team's result in one discipline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultValue {
    Unset,
    Points(i64),
    Time(Duration),
}

impl ResultValue {
    /// Whether `self` is a strictly better result than `other`. More points
    /// are better, a shorter time is better and any value beats an unset one.
    pub fn beats(&self, other: &ResultValue) -> bool {
        match (self, other) {
            (ResultValue::Points(a), ResultValue::Points(b)) => a > b,
            (ResultValue::Time(a), ResultValue::Time(b)) => a < b,
            (ResultValue::Unset, _) => false,
            (_, ResultValue::Unset) => true,
            _ => false,
        }
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, ResultValue::Unset)
    }

    fn raw_cmp(&self, other: &ResultValue) -> Ordering {
        match (self, other) {
            (ResultValue::Points(a), ResultValue::Points(b)) => a.cmp(b),
            (ResultValue::Time(a), ResultValue::Time(b)) => a.cmp(b),
            (ResultValue::Unset, ResultValue::Unset) => Ordering::Equal,
            (ResultValue::Unset, _) => Ordering::Greater,
            (_, ResultValue::Unset) => Ordering::Less,
            _ => Ordering::Equal,
        }
    }

    fn merit_cmp(&self, other: &ResultValue) -> Ordering {
        if self.beats(other) {
            Ordering::Less
        } else if other.beats(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Competition ranking: one plus the number of other results that are
/// strictly better. Tied results share a rank and the following rank skips
/// accordingly.
pub fn competition_rank<'a>(
    own: &ResultValue,
    others: impl IntoIterator<Item = &'a ResultValue>,
) -> u32 {
    1 + others.into_iter().filter(|other| other.beats(own)).count() as u32
}

/// Edition-wide points earned for finishing at `rank` among
/// `registered_teams` teams.
pub fn global_points(rank: u32, registered_teams: usize) -> i64 {
    let base = registered_teams as i64 - rank as i64 + 1;
    let bonus = match rank {
        1 => 2,
        2 | 3 => 1,
        _ => 0,
    };
    base + bonus
}

/// Direction in which standings are listed before adjacent teams are paired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StandingsOrder {
    /// Raw values ascending: fewest points or shortest time first.
    #[default]
    Ascending,
    /// Best result first.
    BestFirst,
}

/// Sorts `(team, value)` entries by `order`; unset values go last and ties
/// keep ascending team order.
pub fn order_standings<T: Ord + Copy>(
    mut entries: Vec<(T, ResultValue)>,
    order: StandingsOrder,
) -> Vec<T> {
    entries.sort_by(|(team_a, a), (team_b, b)| {
        let by_value = match order {
            StandingsOrder::Ascending => a.raw_cmp(b),
            StandingsOrder::BestFirst => a.merit_cmp(b),
        };
        by_value.then(team_a.cmp(team_b))
    });
    entries.into_iter().map(|(team, _)| team).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ties_share_rank() {
        let values = [
            ResultValue::Points(10),
            ResultValue::Points(10),
            ResultValue::Points(4),
        ];
        let rank_of = |index: usize| {
            let others = values
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, v)| v);
            competition_rank(&values[index], others)
        };
        assert_eq!(rank_of(0), 1);
        assert_eq!(rank_of(1), 1);
        assert_eq!(rank_of(2), 3);
    }

    #[test]
    fn test_time_ranking_prefers_lower() {
        let fast = ResultValue::Time(Duration::from_secs(95));
        let slow = ResultValue::Time(Duration::from_secs(120));
        assert_eq!(competition_rank(&slow, [&fast, &ResultValue::Unset]), 2);
        assert_eq!(competition_rank(&fast, [&slow]), 1);
        assert_eq!(competition_rank(&ResultValue::Unset, [&fast, &slow]), 3);
    }

    #[test]
    fn test_global_points_bonus() {
        assert_eq!(global_points(1, 8), 10);
        assert_eq!(global_points(2, 8), 8);
        assert_eq!(global_points(3, 8), 7);
        assert_eq!(global_points(4, 8), 5);
        assert_eq!(global_points(8, 8), 1);
    }

    #[test]
    fn test_order_standings() {
        let entries = vec![
            (1, ResultValue::Points(6)),
            (2, ResultValue::Points(0)),
            (3, ResultValue::Unset),
            (4, ResultValue::Points(6)),
            (5, ResultValue::Points(3)),
        ];
        assert_eq!(
            order_standings(entries.clone(), StandingsOrder::Ascending),
            vec![2, 5, 1, 4, 3]
        );
        assert_eq!(
            order_standings(entries, StandingsOrder::BestFirst),
            vec![1, 4, 5, 2, 3]
        );
    }
}
