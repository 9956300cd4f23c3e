use std::convert::TryFrom;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{CellKind, MapCell, Pos};
use crate::level::Level;
use crate::map::Board;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Why a board couldn't be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    /// Unrecognized symbol at `[row, col]`
    Pos(usize, usize),
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    MultiplePlayers,
    NoPlayer,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "Empty board"),
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} cells, expected {} like the first row",
                row, found, expected
            ),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(level: &str) -> Result<Self, Self::Err> {
        // trim newlines so we can specify levels using raw strings more easily,
        // spaces are significant (empty cells)
        let level = level.trim_matches(|c| c == '\n' || c == '\r');
        let grid: Vec<Vec<char>> = level.lines().map(|line| line.chars().collect()).collect();
        parse_grid(&grid)
    }
}

/// Builds a level from a rectangular grid of cell symbols.
///
/// Blocks get their ids in row-major order.
pub fn parse_grid(grid: &[Vec<char>]) -> Result<Level, ParserErr> {
    let cols = match grid.first() {
        Some(row) if !row.is_empty() => row.len(),
        _ => return Err(ParserErr::Empty),
    };

    let mut cells = Vec::with_capacity(grid.len());
    let mut targets = Vec::new();
    let mut blocks = Vec::new();
    let mut player_pos = None;

    for (r, row) in grid.iter().enumerate() {
        if row.len() != cols {
            return Err(ParserErr::InconsistentWidth {
                row: r,
                expected: cols,
                found: row.len(),
            });
        }

        let mut line_cells = Vec::with_capacity(cols);
        for (c, &symbol) in row.iter().enumerate() {
            let pos = Pos::new(r, c);
            let kind = CellKind::try_from(symbol).map_err(|_| ParserErr::Pos(r, c))?;

            if kind == CellKind::Player {
                if player_pos.is_some() {
                    return Err(ParserErr::MultiplePlayers);
                }
                player_pos = Some(pos);
            }
            if kind.has_block() {
                blocks.push(pos);
            }
            if kind.is_target() {
                targets.push(pos);
            }

            line_cells.push(match kind {
                CellKind::Wall => MapCell::Wall,
                _ if kind.is_target() => MapCell::Target,
                _ => MapCell::Empty,
            });
        }
        cells.push(line_cells);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;
    Ok(Level::new(
        Board::new(Vec2d::new(cells), targets),
        State::new(player_pos, blocks),
    ))
}
