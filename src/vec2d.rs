use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    /// Expects all rows to have the same length.
    pub(crate) fn new(grid: Vec<Vec<T>>) -> Self {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        debug_assert!(grid.iter().all(|row| row.len() == cols));

        let data = grid.into_iter().flatten().collect();
        Vec2d { data, rows, cols }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn positions(&self) -> Positions {
        Positions {
            cols: self.cols,
            cur: 0,
            len: self.data.len(),
        }
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && (pos.r as usize) < self.rows && (pos.c as usize) < self.cols
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self[pos])
        } else {
            None
        }
    }

    pub(crate) fn scratchpad<U: Default + Clone>(&self) -> Vec2d<U> {
        self.scratchpad_with_default(U::default())
    }

    pub(crate) fn scratchpad_with_default<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub(crate) fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for cell in &mut self.data {
            *cell = value.clone();
        }
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{} out of bounds", pos);
        pos.r as usize * self.cols + pos.c as usize
    }
}

/// Row-major iterator over all positions of a grid.
#[derive(Debug, Clone)]
pub(crate) struct Positions {
    cols: usize,
    cur: usize,
    len: usize,
}

impl Iterator for Positions {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.cur >= self.len {
            return None;
        }
        let pos = Pos::new(self.cur / self.cols, self.cur % self.cols);
        self.cur += 1;
        Some(pos)
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.data.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = self.index_of(index);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.data[index]
    }
}
