use std::fmt::{self, Debug, Formatter};

use crate::data::{Pos, DIRECTIONS};
use crate::map::Board;
use crate::moves::Push;
use crate::solver::reachability::Reachability;
use crate::solver::SolverErr;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Simulates pushes on a board.
///
/// States are plain values - the engine only keeps scratch data describing
/// the last state it was teleported to (block occupancy and reachable cells)
/// so asking about another state never modifies the one being expanded.
pub struct Engine<'a> {
    board: &'a Board,
    block_grid: Vec2d<Option<usize>>,
    reach: Reachability,
    current: State,
}

impl<'a> Engine<'a> {
    pub fn new(board: &'a Board, state: &State) -> Self {
        let mut engine = Engine {
            board,
            block_grid: board.grid().scratchpad(),
            reach: Reachability::new(board),
            current: State::new(state.player_pos, Vec::new()),
        };
        engine.teleport_to(state);
        engine
    }

    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// The state the engine was last teleported to.
    pub fn current(&self) -> &State {
        &self.current
    }

    /// Overwrites all positions with `state` and recomputes reachability.
    ///
    /// Not a move - there doesn't need to be a sequence of pushes leading here.
    pub fn teleport_to(&mut self, state: &State) {
        for &b in &self.current.blocks {
            if self.block_grid.contains(b) {
                self.block_grid[b] = None;
            }
        }
        for (i, &b) in state.blocks.iter().enumerate() {
            if self.block_grid.contains(b) {
                self.block_grid[b] = Some(i);
            }
        }
        self.current.clone_from(state);
        self.reach
            .recompute(self.board, &self.block_grid, self.current.player_pos);
    }

    /// Reachable from the current player position without pushing.
    pub fn is_reachable(&self, pos: Pos) -> bool {
        self.reach.is_reachable(pos)
    }

    fn has_block(&self, pos: Pos) -> bool {
        self.block_grid.get(pos).map_or(false, Option::is_some)
    }

    pub fn is_legal(&self, push: Push) -> bool {
        let block_pos = match self.current.blocks.get(push.block) {
            Some(&pos) => pos,
            None => return false,
        };
        let ahead = block_pos + push.dir;
        self.is_reachable(block_pos - push.dir) && !self.board.is_wall(ahead) && !self.has_block(ahead)
    }

    /// Pushes available in the current state.
    ///
    /// Blocks are tried in id order, for each block the player side goes up, down, left, right.
    pub fn legal_pushes(&self) -> Vec<Push> {
        let mut pushes = Vec::new();
        for (id, &block_pos) in self.current.blocks.iter().enumerate() {
            for &side in &DIRECTIONS {
                let push_dir = side.inverse();
                let ahead = block_pos + push_dir;
                if self.is_reachable(block_pos + side)
                    && !self.board.is_wall(ahead)
                    && !self.has_block(ahead)
                {
                    pushes.push(Push::new(id, push_dir));
                }
            }
        }
        pushes
    }

    /// Performs `push` from `state`, the engine ends up in the new state.
    pub fn apply_push(&mut self, state: &State, push: Push) -> Result<State, SolverErr> {
        if self.current != *state {
            self.teleport_to(state);
        }
        if !self.is_legal(push) {
            return Err(SolverErr::IllegalMove(push));
        }
        let new_state = state.pushed(push);
        self.teleport_to(&new_state);
        Ok(new_state)
    }

    /// All successors of `state` together with the pushes leading to them.
    ///
    /// The engine is left in `state`.
    pub fn expand(&mut self, state: &State) -> Vec<(Push, State)> {
        if self.current != *state {
            self.teleport_to(state);
        }
        self.legal_pushes()
            .into_iter()
            .map(|push| (push, state.pushed(push)))
            .collect()
    }

    pub fn is_goal(&self, state: &State) -> bool {
        self.board.is_goal(state)
    }
}

impl Debug for Engine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board.format_with_state(&self.current))
    }
}
