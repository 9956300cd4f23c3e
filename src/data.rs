use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};

/// One symbol of the input grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Empty,
    Wall,
    Block,
    Player,
    Target,
    BlockOnTarget,
}

impl CellKind {
    /// The player can stand on the cell (ignoring blocks moved there later).
    pub fn is_walkable(self) -> bool {
        match self {
            CellKind::Empty | CellKind::Player | CellKind::Target => true,
            CellKind::Wall | CellKind::Block | CellKind::BlockOnTarget => false,
        }
    }

    pub fn has_block(self) -> bool {
        self == CellKind::Block || self == CellKind::BlockOnTarget
    }

    pub fn is_target(self) -> bool {
        self == CellKind::Target || self == CellKind::BlockOnTarget
    }
}

impl TryFrom<char> for CellKind {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ' ' => Ok(CellKind::Empty),
            '#' => Ok(CellKind::Wall),
            'X' => Ok(CellKind::Block),
            'P' => Ok(CellKind::Player),
            'O' => Ok(CellKind::Target),
            '@' => Ok(CellKind::BlockOnTarget),
            _ => Err(c),
        }
    }
}

/// Static terrain - blocks and the player are tracked by `State`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    Empty,
    Wall,
    Target,
}

impl Default for MapCell {
    fn default() -> Self {
        MapCell::Empty
    }
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MapCell::Empty => write!(f, " "),
            MapCell::Wall => write!(f, "#"),
            MapCell::Target => write!(f, "."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Block,
    Player,
}

impl Default for Contents {
    fn default() -> Self {
        Contents::Empty
    }
}

// signed so that neighbors of border cells don't need special casing,
// anything outside the grid is treated as wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: usize, c: usize) -> Pos {
        Pos {
            r: r as i32,
            c: c as i32,
        }
    }

    pub(crate) fn neighbors(self) -> [Pos; 4] {
        [self + Dir::Up, self + Dir::Down, self + Dir::Left, self + Dir::Right]
    }

    /// Direction to an adjacent position.
    pub(crate) fn dir_to(self, other: Pos) -> Dir {
        match (other.r - self.r, other.c - self.c) {
            (-1, 0) => Dir::Up,
            (1, 0) => Dir::Down,
            (0, -1) => Dir::Left,
            (0, 1) => Dir::Right,
            _ => panic!("Positions {} and {} are not adjacent", self, other),
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Order in which the move generator tries the sides of a block.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

impl Dir {
    pub fn inverse(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.offset();
        Pos {
            r: self.r + dr,
            c: self.c + dc,
        }
    }
}

impl Sub<Dir> for Pos {
    type Output = Pos;

    fn sub(self, dir: Dir) -> Pos {
        self + dir.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_are_inverse() {
        let pos = Pos::new(3, 3);
        for &dir in &DIRECTIONS {
            assert_eq!(dir.inverse().inverse(), dir);
            assert_ne!(dir.inverse(), dir);
            assert_eq!(pos + dir + dir.inverse(), pos);
            assert_eq!(pos - dir + dir, pos);
            assert_eq!(pos.dir_to(pos + dir), dir);
        }
    }

    #[test]
    fn cell_symbols() {
        let symbols = " #XPO@";
        let kinds: Vec<_> = symbols.chars().map(|c| CellKind::try_from(c).unwrap()).collect();
        assert_eq!(
            kinds,
            vec![
                CellKind::Empty,
                CellKind::Wall,
                CellKind::Block,
                CellKind::Player,
                CellKind::Target,
                CellKind::BlockOnTarget,
            ]
        );
        assert_eq!(CellKind::try_from('$'), Err('$'));

        let walkable: Vec<_> = kinds.iter().map(|k| k.is_walkable()).collect();
        assert_eq!(walkable, vec![true, false, false, true, true, false]);
    }

    #[test]
    fn negative_neighbors() {
        let corner = Pos::new(0, 0);
        let n = corner.neighbors();
        assert_eq!(n[0], Pos { r: -1, c: 0 });
        assert_eq!(n[2], Pos { r: 0, c: -1 });
    }
}
