use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The static part of a level - walls and targets.
///
/// Never changes after parsing, blocks and the player live in `State`.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec2d<MapCell>,
    targets: Vec<Pos>,
}

impl Board {
    pub(crate) fn new(grid: Vec2d<MapCell>, targets: Vec<Pos>) -> Self {
        Board { grid, targets }
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.rows(), self.grid.cols())
    }

    /// Cells outside the grid count as walls.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.cell(pos) == MapCell::Wall
    }

    pub fn is_target(&self, pos: Pos) -> bool {
        self.cell(pos) == MapCell::Target
    }

    pub fn cell(&self, pos: Pos) -> MapCell {
        self.grid.get(pos).cloned().unwrap_or(MapCell::Wall)
    }

    pub fn targets(&self) -> &[Pos] {
        &self.targets
    }

    /// True iff every block lies on a target.
    pub fn is_goal(&self, state: &State) -> bool {
        // all blocks on a target, not all targets covered - there can be more targets than blocks
        state.blocks.iter().all(|&b| self.is_target(b))
    }

    pub(crate) fn grid(&self) -> &Vec2d<MapCell> {
        &self.grid
    }

    pub fn format_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(&self.grid, Some(state))
    }

    pub fn format(&self) -> MapFormatter<'_> {
        MapFormatter::new(&self.grid, None)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn geometry() {
        let level: Level = r"
######
#P XO#
######
"
        .parse()
        .unwrap();
        let board = &level.board;

        assert_eq!(board.dimensions(), (3, 6));
        assert!(board.is_wall(Pos::new(0, 0)));
        assert!(!board.is_wall(Pos::new(1, 1)));
        // blocks are not terrain
        assert!(!board.is_wall(Pos::new(1, 3)));
        assert!(board.is_target(Pos::new(1, 4)));
        assert!(!board.is_target(Pos::new(1, 3)));
        assert_eq!(board.targets(), &[Pos::new(1, 4)]);

        assert!(board.is_wall(Pos { r: -1, c: 2 }));
        assert!(board.is_wall(Pos::new(1, 6)));
        assert!(board.is_wall(Pos::new(3, 0)));
    }

    #[test]
    fn goal_test() {
        let level: Level = r"
#######
#P@ XO#
#######
"
        .parse()
        .unwrap();
        assert!(!level.board.is_goal(&level.state));

        let mut state = level.state.clone();
        state.blocks[1] = Pos::new(1, 5);
        assert!(level.board.is_goal(&state));

        let empty = State::new(Pos::new(1, 1), Vec::new());
        assert!(level.board.is_goal(&empty));
    }

    #[test]
    fn formatting_board() {
        let input = r"
#####
#PXO#
#####
"
        .trim_start_matches('\n');
        let level: Level = input.parse().unwrap();
        assert_eq!(level.board.to_string(), "#####\n#  O#\n#####\n");
        assert_eq!(format!("{:?}", level.board), "#####\n#  O#\n#####\n");
    }
}
