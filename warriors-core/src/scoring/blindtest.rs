/// Correctness of a blindtest guess. Each correct flag is worth one point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GuessFlags {
    pub artist: bool,
    pub song: bool,
}

impl GuessFlags {
    pub fn new(artist: bool, song: bool) -> Self {
        GuessFlags { artist, song }
    }

    pub fn points(&self) -> i64 {
        self.artist as i64 + self.song as i64
    }
}

/// Points to add to the guessing team when a guess moves from `previous` to
/// `next`. `None` stands for a guess that does not exist or is inactive.
pub fn guess_delta(previous: Option<GuessFlags>, next: Option<GuessFlags>) -> i64 {
    next.map_or(0, |flags| flags.points()) - previous.map_or(0, |flags| flags.points())
}
