use std::fmt::{self, Debug, Display, Formatter};

use crate::map::Board;
use crate::map_formatter::MapFormatter;
use crate::parser;
use crate::parser::ParserErr;
use crate::state::State;

/// A puzzle as parsed - the board and the initial state.
#[derive(Clone, PartialEq, Eq)]
pub struct Level {
    pub board: Board,
    pub state: State,
}

impl Level {
    pub fn new(board: Board, state: State) -> Self {
        Level { board, state }
    }

    pub fn from_grid(grid: &[Vec<char>]) -> Result<Level, ParserErr> {
        parser::parse_grid(grid)
    }

    pub fn format(&self) -> MapFormatter<'_> {
        self.board.format_with_state(&self.state)
    }

    pub fn block_cnt(&self) -> usize {
        self.state.blocks.len()
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.format())
    }
}
