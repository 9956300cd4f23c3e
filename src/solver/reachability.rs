use crate::data::Pos;
use crate::map::Board;
use crate::vec2d::Vec2d;

/// Cells the player can walk to without pushing anything.
///
/// Instead of clearing a visited grid before every flood fill, each cell remembers
/// the generation in which it was last reached. Starting a new fill just bumps the generation.
#[derive(Debug, Clone)]
pub(crate) struct Reachability {
    stamps: Vec2d<u32>,
    generation: u32,
    to_visit: Vec<Pos>,
}

impl Reachability {
    pub(crate) fn new(board: &Board) -> Self {
        Reachability {
            stamps: board.grid().scratchpad(),
            // nothing is reachable until the first fill
            generation: 1,
            to_visit: Vec::new(),
        }
    }

    /// `blocks` marks cells occupied by a block.
    pub(crate) fn recompute(&mut self, board: &Board, blocks: &Vec2d<Option<usize>>, start: Pos) {
        if self.generation == u32::max_value() {
            self.stamps.fill(0);
            self.generation = 0;
        }
        self.generation += 1;
        let generation = self.generation;

        if board.is_wall(start) {
            // can't happen for states created by the parser or the engine
            return;
        }

        self.stamps[start] = generation;
        self.to_visit.clear();
        self.to_visit.push(start);

        while let Some(cur) = self.to_visit.pop() {
            for &next in &cur.neighbors() {
                // is_wall also filters out positions outside the grid
                if board.is_wall(next) || blocks[next].is_some() || self.stamps[next] == generation
                {
                    continue;
                }
                self.stamps[next] = generation;
                self.to_visit.push(next);
            }
        }
    }

    pub(crate) fn is_reachable(&self, pos: Pos) -> bool {
        self.stamps.get(pos).map_or(false, |&s| s == self.generation)
    }

    #[cfg(test)]
    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }
}
