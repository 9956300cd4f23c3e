pub mod engine;

mod backtracking;
mod reachability;
mod stats;

use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::time::Instant;

use fnv::FnvHashMap;
use log::{debug, info};
use typed_arena::Arena;

use crate::config::{Dedup, SolverConfig};
use crate::data::Pos;
use crate::level::Level;
use crate::map::Board;
use crate::moves::{Moves, Push};
use crate::state::State;
use crate::Solve;

use self::engine::Engine;

pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    /// A push that isn't legal in the state it was applied to.
    IllegalMove(Push),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::IllegalMove(push) => write!(
                f,
                "Illegal push {} - the block can't be pushed in this direction",
                push
            ),
        }
    }
}

impl Error for SolverErr {}

/// How the search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    /// Every reachable state was explored without reaching the goal.
    Unsolvable,
    /// The state or time limit ran out first - the level might still be solvable.
    BudgetExhausted,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Solved(ref solution) => write!(f, "Solved in {} pushes", solution.push_cnt()),
            Outcome::Unsolvable => write!(f, "No solution"),
            Outcome::BudgetExhausted => write!(f, "No solution found within budget"),
        }
    }
}

/// A shortest (in pushes) path from the initial state to a goal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    states: Vec<State>,
    pushes: Vec<Push>,
}

impl Solution {
    fn new(states: Vec<State>) -> Self {
        let pushes = states
            .windows(2)
            .map(|pair| backtracking::push_between(&pair[0], &pair[1]))
            .collect();
        Solution { states, pushes }
    }

    /// Includes both the initial and the final state.
    pub fn path_states(&self) -> &[State] {
        &self.states
    }

    /// Number of states on the path.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn push_cnt(&self) -> usize {
        self.pushes.len()
    }

    pub fn pushes(&self) -> &[Push] {
        &self.pushes
    }

    pub fn final_state(&self) -> &State {
        // the path always contains at least the initial state
        &self.states[self.states.len() - 1]
    }

    /// Renders every state of the path by replaying it on the board.
    ///
    /// Snapshots are for display - a player standing on a target hides it
    /// so they don't always parse back into the same board.
    pub fn snapshots(&self, board: &Board) -> Vec<String> {
        let mut engine = Engine::new(board, &self.states[0]);
        self.states
            .iter()
            .map(|state| {
                engine.teleport_to(state);
                board.format_with_state(engine.current()).to_string()
            })
            .collect()
    }

    /// All player moves including steps between pushes.
    pub fn moves(&self, board: &Board) -> Result<Moves, SolverErr> {
        backtracking::reconstruct_moves(board, &self.states[0], &self.pushes)
    }
}

pub struct SolverOk {
    pub outcome: Outcome,
    pub stats: Stats,
    pub dedup: Dedup,
}

impl SolverOk {
    fn new(outcome: Outcome, stats: Stats, dedup: Dedup) -> Self {
        Self {
            outcome,
            stats,
            dedup,
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self.outcome {
            Outcome::Solved(ref solution) => Some(solution),
            _ => None,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (dedup: {})", self.outcome, self.dedup)?;
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, config: &SolverConfig) -> SolverOk {
        solve(self, config)
    }
}

fn solve(level: &Level, config: &SolverConfig) -> SolverOk {
    // all blocks have to end up on a target and there's no way to remove them
    if level.block_cnt() > level.board.targets().len() {
        info!(
            "More blocks ({}) than targets ({}), not searching",
            level.block_cnt(),
            level.board.targets().len()
        );
        return SolverOk::new(Outcome::Unsolvable, Stats::new(), config.dedup);
    }

    search(level, config, |_| {})
}

/// Breadth first search over pushes.
///
/// States with the same block configuration are the same node if the player
/// can walk from one to the other, only the first one found is kept.
/// `on_enqueue` sees every state that makes it into the queue.
fn search<F>(level: &Level, config: &SolverConfig, mut on_enqueue: F) -> SolverOk
where
    F: FnMut(&State),
{
    debug!("Search called, dedup: {}", config.dedup);

    let started = Instant::now();
    let mut stats = Stats::new();

    let arena = Arena::new();
    let mut engine = Engine::new(&level.board, &level.state);
    // block configuration -> player positions it was reached with
    let mut history: FnvHashMap<Vec<Pos>, Vec<Pos>> = FnvHashMap::default();
    let mut prevs: FnvHashMap<&State, &State> = FnvHashMap::default();
    let mut to_visit = VecDeque::new();

    let start: &State = arena.alloc(level.state.clone());
    history.insert(start.config_key(config.dedup), vec![start.player_pos]);
    // initial state is its own prev - hack to avoid Option
    prevs.insert(start, start);
    stats.add_created(0);
    stats.add_configuration();
    on_enqueue(start);
    to_visit.push_back((start, 0));

    let mut expanded = 0;
    while let Some((cur, depth)) = to_visit.pop_front() {
        if stats.add_visited(depth) {
            debug!("Visited new depth: {}", depth);
            if config.print_status {
                println!("Visited new depth: {}", depth);
                println!("{}", stats.summary());
            }
        }

        if engine.is_goal(cur) {
            debug!("Solved, backtracking path");
            let path = backtracking::backtrack_prevs(&prevs, cur);
            let path = path.into_iter().cloned().collect();
            info!("Solved: {}", stats.summary());
            return SolverOk::new(
                Outcome::Solved(Solution::new(path)),
                stats,
                config.dedup,
            );
        }

        // only expanding counts against the budget
        if config.max_states.map_or(false, |max| expanded >= max)
            || config.time_limit.map_or(false, |limit| started.elapsed() > limit)
        {
            info!("Budget exhausted after expanding {} states", expanded);
            return SolverOk::new(Outcome::BudgetExhausted, stats, config.dedup);
        }
        expanded += 1;

        for (_, next) in engine.expand(cur) {
            stats.add_created(depth + 1);

            let key = next.config_key(config.dedup);
            if let Some(players) = history.get_mut(&key) {
                // the engine ends up wherever we teleport it,
                // `expand` moves it back to the state being expanded
                engine.teleport_to(&next);
                if players.iter().any(|&p| engine.is_reachable(p)) {
                    stats.add_duplicate(depth + 1);
                    continue;
                }
                players.push(next.player_pos);
            } else {
                history.insert(key, vec![next.player_pos]);
                stats.add_configuration();
            }

            let next: &State = arena.alloc(next);
            on_enqueue(next);
            prevs.insert(next, cur);
            to_visit.push_back((next, depth + 1));
        }
    }

    info!("No solution: {}", stats.summary());
    SolverOk::new(Outcome::Unsolvable, stats, config.dedup)
}
