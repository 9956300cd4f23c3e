use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

fn sep(n: usize) -> String {
    (n as u64).separated_string()
}

/// Counts of states per depth (number of pushes from the start).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    duplicate_states: Vec<usize>,
    visited_states: Vec<usize>,
    configurations: usize,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    /// All generated states including the start and duplicates.
    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    /// Generated states thrown away as equivalent to an already known state.
    pub fn total_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// States taken from the queue and expanded (or found to be the goal).
    pub fn total_visited(&self) -> usize {
        self.visited_states.iter().sum()
    }

    /// States that made it into the queue.
    pub fn total_unique(&self) -> usize {
        self.total_created() - self.total_duplicates()
    }

    /// Distinct block configurations (ignoring the player) that made it into the queue.
    pub fn total_configurations(&self) -> usize {
        self.configurations
    }

    pub fn max_depth(&self) -> usize {
        self.visited_states.len().saturating_sub(1)
    }

    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    /// Returns true when this is the first state visited at `depth`.
    pub(crate) fn add_visited(&mut self, depth: usize) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_configuration(&mut self) {
        self.configurations += 1;
    }

    fn add(counts: &mut Vec<usize>, depth: usize) -> bool {
        let mut ret = false;
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn at(counts: &[usize], depth: usize) -> usize {
        counts.get(depth).cloned().unwrap_or(0)
    }

    /// One line summary used for status updates during the search.
    pub fn summary(&self) -> String {
        format!(
            "created: {}, unique: {}, configurations: {}, duplicates: {}, visited: {}",
            sep(self.total_created()),
            sep(self.total_unique()),
            sep(self.total_configurations()),
            sep(self.total_duplicates()),
            sep(self.total_visited()),
        )
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", sep(self.total_created()))?;
        writeln!(f, "total duplicates: {}", sep(self.total_duplicates()))?;
        writeln!(f, "total configurations: {}", sep(self.total_configurations()))?;
        writeln!(f, "total visited: {}", sep(self.total_visited()))
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", sep(self.total_created()))?;
        writeln!(f, "Unique states total: {}", sep(self.total_unique()))?;
        writeln!(
            f,
            "Block configurations total: {}",
            sep(self.total_configurations())
        )?;
        writeln!(f, "Duplicates total: {}", sep(self.total_duplicates()))?;
        writeln!(f, "Visited total: {}", sep(self.total_visited()))?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Duplicates"),
            Cell::new("Visited"),
        ]));
        // created is always the longest, the last layer is created but never visited
        for depth in 0..self.created_states.len() {
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&sep(Self::at(&self.created_states, depth))),
                Cell::new(&sep(Self::at(&self.duplicate_states, depth))),
                Cell::new(&sep(Self::at(&self.visited_states, depth))),
            ]));
        }
        write!(f, "{}", table)
    }
}
