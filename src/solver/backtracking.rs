use std::collections::{HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::data::{Dir, Pos};
use crate::map::Board;
use crate::moves::{Moves, Push};
use crate::solver::engine::Engine;
use crate::solver::SolverErr;
use crate::state::State;

/// Follows `prevs` from `final_state` back to the start (which is its own prev).
///
/// Returned in order from the start.
pub(crate) fn backtrack_prevs<T, H>(prevs: &HashMap<T, T, H>, final_state: T) -> Vec<T>
where
    T: Clone + Eq + Hash,
    H: BuildHasher,
{
    let mut states = Vec::new();
    let mut cur = &final_state;
    loop {
        states.push(cur.clone());
        let prev = &prevs[cur];
        if prev == cur {
            states.reverse();
            return states;
        }
        cur = prev;
    }
}

/// The push between two consecutive states of a solution.
pub(crate) fn push_between(old: &State, new: &State) -> Push {
    let (block, (&old_pos, &new_pos)) = old
        .blocks
        .iter()
        .zip(&new.blocks)
        .enumerate()
        .find(|&(_, (old_pos, new_pos))| old_pos != new_pos)
        .expect("There must be exactly one push between states");
    Push::new(block, old_pos.dir_to(new_pos))
}

/// Turns pushes into player moves, walking the player between pushes.
///
/// Every push is replayed through the engine so pushes that don't belong
/// to this board or initial state are reported instead of producing garbage.
pub(crate) fn reconstruct_moves(
    board: &Board,
    initial_state: &State,
    pushes: &[Push],
) -> Result<Moves, SolverErr> {
    let mut engine = Engine::new(board, initial_state);
    let mut moves = Moves::default();
    let mut cur = initial_state.clone();

    for &push in pushes {
        let next = engine.apply_push(&cur, push)?;
        let block_pos = cur.blocks[push.block];
        let steps = player_steps(board, &cur, cur.player_pos, block_pos - push.dir)
            .ok_or(SolverErr::IllegalMove(push))?;
        moves.walk_and_push(&steps, push.dir);
        cur = next;
    }

    Ok(moves)
}

/// Shortest walk between two cells without touching any block.
fn player_steps(board: &Board, state: &State, src_pos: Pos, dest_pos: Pos) -> Option<Vec<Dir>> {
    if src_pos == dest_pos {
        return Some(Vec::new());
    }

    let mut prevs = HashMap::new();
    prevs.insert(src_pos, src_pos);

    let mut to_visit = VecDeque::new();
    to_visit.push_back(src_pos);

    'bfs: loop {
        let player_pos = to_visit.pop_front()?;

        for &new_player_pos in &player_pos.neighbors() {
            if board.is_wall(new_player_pos)
                || state.block_at(new_player_pos).is_some()
                || prevs.contains_key(&new_player_pos)
            {
                continue;
            }

            prevs.insert(new_player_pos, player_pos);
            if new_player_pos == dest_pos {
                break 'bfs;
            }
            to_visit.push_back(new_player_pos);
        }
    }

    let positions = backtrack_prevs(&prevs, dest_pos);
    Some(
        positions
            .windows(2)
            .map(|pair| pair[0].dir_to(pair[1]))
            .collect(),
    )
}
