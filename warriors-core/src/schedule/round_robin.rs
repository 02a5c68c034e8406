use std::collections::BTreeSet;
use std::hash::Hash;

use crate::schedule::{
    ScheduleError,
    referee::{RefereeLedger, RefereeRequest, balance_referees},
};

/// Sizing of a round-robin tournament.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRobinShape {
    pub teams: usize,
    /// Games played at the same time, leaving enough idle teams to referee.
    pub simultaneous_games: usize,
    pub games_per_round: usize,
    /// Consecutive batches of simultaneous games needed to play a round.
    pub batches_per_round: usize,
    pub rounds: u32,
}

impl RoundRobinShape {
    /// An odd field gets a bye slot, so every team sits out exactly one round
    /// and the tournament takes `teams` rounds instead of `teams - 1`.
    pub fn new(teams: usize, max_rounds: Option<u32>) -> Result<Self, ScheduleError> {
        if teams < 2 {
            return Err(ScheduleError::NotEnoughTeams(teams));
        }
        let slots = teams + teams % 2;
        let simultaneous_games = (teams / 3).max(1);
        let games_per_round = teams / 2;
        Ok(RoundRobinShape {
            teams,
            simultaneous_games,
            games_per_round,
            batches_per_round: games_per_round.div_ceil(simultaneous_games),
            rounds: max_rounds.unwrap_or(slots as u32 - 1),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledGame<T> {
    pub team1: T,
    pub team2: T,
    pub referee: Option<T>,
    /// Index of the batch of simultaneous games within the round.
    pub batch: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledRound<T> {
    pub order: u32,
    pub games: Vec<ScheduledGame<T>>,
}

/// Circle-method pairings: round `r` holds the pairs of the `r`-th rotation,
/// with the first slot fixed.
pub fn circle_pairings<T: Copy>(teams: &[T], rounds: u32) -> Vec<Vec<(T, T)>> {
    let mut slots: Vec<Option<T>> = teams.iter().copied().map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let half = slots.len() / 2;
    let mut first: Vec<Option<T>> = slots[..half].to_vec();
    let mut second: Vec<Option<T>> = slots[half..].iter().rev().copied().collect();

    let mut pairings = Vec::with_capacity(rounds as usize);
    for _ in 0..rounds {
        pairings.push(
            first
                .iter()
                .zip(second.iter())
                .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
                .collect(),
        );
        if let Some(last) = first.pop() {
            second.push(last);
        }
        if !second.is_empty() {
            first.insert(1.min(first.len()), second.remove(0));
        }
    }
    pairings
}

/// Plans a full round robin over `teams`. Referees come from the teams idle
/// in each batch, at most one game per team and round, and are spread so
/// that refereed-game counts differ by at most one wherever the pairings
/// allow it. `ledger` is updated with every referee assigned, and the first
/// planned round gets order `first_order`.
pub fn schedule_round_robin<T: Copy + Ord + Hash>(
    teams: &[T],
    max_rounds: Option<u32>,
    ledger: &mut RefereeLedger<T>,
    first_order: u32,
) -> Result<Vec<ScheduledRound<T>>, ScheduleError> {
    let shape = RoundRobinShape::new(teams.len(), max_rounds)?;
    let everyone: BTreeSet<T> = teams.iter().copied().collect();

    let mut planned = Vec::with_capacity(shape.rounds as usize);
    let mut requests = Vec::new();
    for (index, pairs) in circle_pairings(teams, shape.rounds).into_iter().enumerate() {
        let order = first_order + index as u32;
        let mut games = Vec::with_capacity(pairs.len());
        for (batch, chunk) in pairs.chunks(shape.simultaneous_games).enumerate() {
            let idle: Vec<T> = everyone
                .iter()
                .filter(|team| !chunk.iter().any(|(a, b)| a == *team || b == *team))
                .copied()
                .collect();
            for (team1, team2) in chunk {
                requests.push(RefereeRequest {
                    round: order,
                    candidates: idle.clone(),
                });
                games.push(ScheduledGame {
                    team1: *team1,
                    team2: *team2,
                    referee: None,
                    batch: batch as u32,
                });
            }
        }
        planned.push(ScheduledRound { order, games });
    }

    let mut referees = balance_referees(&requests, ledger).into_iter();
    for round in &mut planned {
        for game in &mut round.games {
            game.referee = referees.next().flatten();
            if let Some(referee) = game.referee {
                ledger.record(referee, round.order);
            }
        }
    }
    Ok(planned)
}
