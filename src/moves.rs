use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;

/// Push block with id `block` one cell in `dir`.
///
/// The player ends up in the cell the block left.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Push {
    pub block: usize,
    pub dir: Dir,
}

impl Push {
    pub fn new(block: usize, dir: Dir) -> Self {
        Push { block, dir }
    }
}

impl Display for Push {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.block, self.dir.to_string().to_uppercase())
    }
}

impl Debug for Push {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// One cell of player movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Walking into an empty cell.
    Step(Dir),
    /// Walking into a block's cell, moving the block.
    Push(Dir),
}

/// Everything the player does to carry out a solution, in LURD notation
/// (lower case steps, upper case pushes).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Moves {
    moves: Vec<Move>,
}

impl Moves {
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn move_cnt(&self) -> usize {
        self.moves.len()
    }

    pub fn push_cnt(&self) -> usize {
        self.moves
            .iter()
            .filter(|mov| match mov {
                Move::Push(_) => true,
                Move::Step(_) => false,
            })
            .count()
    }

    /// Walk along `steps` and then push in `push_dir`.
    pub(crate) fn walk_and_push(&mut self, steps: &[Dir], push_dir: Dir) {
        self.moves.extend(steps.iter().map(|&dir| Move::Step(dir)));
        self.moves.push(Move::Push(push_dir));
    }
}

impl Display for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in &self.moves {
            match *mov {
                Move::Step(dir) => write!(f, "{}", dir)?,
                Move::Push(dir) => write!(f, "{}", dir.to_string().to_uppercase())?,
            }
        }
        Ok(())
    }
}

impl Debug for Moves {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
