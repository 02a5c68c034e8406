pub mod ranking;
pub mod rating;
pub mod schedule;
pub mod scoring;

use std::ops::{Add, AddAssign, Neg, Sub};

/// Which of the two teams of a game an event or a point belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameSide {
    Team1,
    Team2,
}

impl GameSide {
    pub fn opponent(&self) -> GameSide {
        match self {
            GameSide::Team1 => GameSide::Team2,
            GameSide::Team2 => GameSide::Team1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub team1: u32,
    pub team2: u32,
}

impl Score {
    pub fn new(team1: u32, team2: u32) -> Self {
        Score { team1, team2 }
    }

    pub fn get(&self, side: GameSide) -> u32 {
        match side {
            GameSide::Team1 => self.team1,
            GameSide::Team2 => self.team2,
        }
    }

    /// Returns `None` if the delta would drive either side below zero.
    pub fn apply(&self, delta: ScoreDelta) -> Option<Score> {
        let team1 = u32::try_from(self.team1 as i64 + delta.team1).ok()?;
        let team2 = u32::try_from(self.team2 as i64 + delta.team2).ok()?;
        Some(Score { team1, team2 })
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        if self.team1 == 0 && self.team2 == 0 {
            None
        } else if self.team1 > self.team2 {
            Some(MatchOutcome::Won(GameSide::Team1))
        } else if self.team2 > self.team1 {
            Some(MatchOutcome::Won(GameSide::Team2))
        } else {
            Some(MatchOutcome::Draw)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScoreDelta {
    pub team1: i64,
    pub team2: i64,
}

impl ScoreDelta {
    pub fn for_side(side: GameSide, points: i64) -> Self {
        match side {
            GameSide::Team1 => ScoreDelta {
                team1: points,
                team2: 0,
            },
            GameSide::Team2 => ScoreDelta {
                team1: 0,
                team2: points,
            },
        }
    }

    pub fn get(&self, side: GameSide) -> i64 {
        match side {
            GameSide::Team1 => self.team1,
            GameSide::Team2 => self.team2,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.team1 == 0 && self.team2 == 0
    }
}

impl Add for ScoreDelta {
    type Output = ScoreDelta;

    fn add(self, rhs: ScoreDelta) -> ScoreDelta {
        ScoreDelta {
            team1: self.team1 + rhs.team1,
            team2: self.team2 + rhs.team2,
        }
    }
}

impl AddAssign for ScoreDelta {
    fn add_assign(&mut self, rhs: ScoreDelta) {
        self.team1 += rhs.team1;
        self.team2 += rhs.team2;
    }
}

impl Sub for ScoreDelta {
    type Output = ScoreDelta;

    fn sub(self, rhs: ScoreDelta) -> ScoreDelta {
        self + (-rhs)
    }
}

impl Neg for ScoreDelta {
    type Output = ScoreDelta;

    fn neg(self) -> ScoreDelta {
        ScoreDelta {
            team1: -self.team1,
            team2: -self.team2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    Won(GameSide),
    Draw,
}

/// Standing points a game outcome is worth to each team.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchPoints {
    pub win: i64,
    pub draw: i64,
    pub loss: i64,
}

impl Default for MatchPoints {
    fn default() -> Self {
        MatchPoints {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

impl MatchPoints {
    pub fn award(&self, outcome: Option<MatchOutcome>) -> ScoreDelta {
        match outcome {
            None => ScoreDelta::default(),
            Some(MatchOutcome::Draw) => ScoreDelta {
                team1: self.draw,
                team2: self.draw,
            },
            Some(MatchOutcome::Won(side)) => {
                ScoreDelta::for_side(side, self.win) + ScoreDelta::for_side(side.opponent(), self.loss)
            }
        }
    }

    /// Change in standing points when a game's score moves from `before` to `after`.
    pub fn transition(&self, before: Score, after: Score) -> ScoreDelta {
        self.award(after.outcome()) - self.award(before.outcome())
    }
}
