use std::fmt::{self, Display, Formatter};
use std::time::Duration;

/// How the search decides two block configurations are the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dedup {
    /// Blocks compared by id - swapping two blocks gives a different configuration.
    Identity,
    /// Blocks compared as a set of positions.
    BlockSet,
}

impl Display for Dedup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dedup::Identity => write!(f, "identity"),
            Dedup::BlockSet => write!(f, "block-set"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub dedup: Dedup,
    /// Give up after expanding this many states.
    pub max_states: Option<usize>,
    /// Give up after this much time.
    pub time_limit: Option<Duration>,
    /// Print a line to stdout every time the search reaches a new depth.
    pub print_status: bool,
}

impl SolverConfig {
    pub fn dedup(mut self, dedup: Dedup) -> Self {
        self.dedup = dedup;
        self
    }

    pub fn max_states(mut self, max_states: usize) -> Self {
        self.max_states = Some(max_states);
        self
    }

    pub fn time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn print_status(mut self, print_status: bool) -> Self {
        self.print_status = print_status;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            dedup: Dedup::Identity,
            max_states: None,
            time_limit: None,
            print_status: false,
        }
    }
}
