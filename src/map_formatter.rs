use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Contents, MapCell, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

/// Renders a board, optionally with blocks and the player on it, using the input symbols.
///
/// The input alphabet has no symbol for the player standing on a target so it's drawn as `P`.
/// Such output is for display only, parsing it again loses that target.
pub struct MapFormatter<'a> {
    grid: &'a Vec2d<MapCell>,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(grid: &'a Vec2d<MapCell>, state: Option<&'a State>) -> Self {
        Self { grid, state }
    }

    fn contents(&self) -> Vec2d<Contents> {
        let mut contents: Vec2d<Contents> = self.grid.scratchpad();
        if let Some(state) = self.state {
            for &b in &state.blocks {
                contents[b] = Contents::Block;
            }
            contents[state.player_pos] = Contents::Player;
        }
        contents
    }

    fn symbol(cell: MapCell, contents: Contents) -> char {
        match (cell, contents) {
            (MapCell::Empty, Contents::Empty) => ' ',
            (MapCell::Empty, Contents::Block) => 'X',
            (MapCell::Wall, Contents::Empty) => '#',
            (MapCell::Wall, _) => unreachable!("Wall with non-empty contents"),
            (MapCell::Target, Contents::Empty) => 'O',
            (MapCell::Target, Contents::Block) => '@',
            (_, Contents::Player) => 'P',
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let contents = self.contents();
        // always rectangular so it can be parsed again
        for r in 0..self.grid.rows() {
            for c in 0..self.grid.cols() {
                let pos = Pos::new(r, c);
                write!(f, "{}", Self::symbol(self.grid[pos], contents[pos]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn all_symbols() {
        let input = "######\n#P@ X#\n#  O #\n######\n";
        let level: Level = input.parse().unwrap();
        assert_eq!(level.to_string(), input);
        assert_eq!(level.board.format().to_string(), "######\n# O  #\n#  O #\n######\n");
    }

    #[test]
    fn player_on_target_is_display_only() {
        let level: Level = "#####\n#XPO#\n#####".parse().unwrap();
        let mut state = level.state.clone();
        state.player_pos = Pos::new(1, 3);

        let snapshot = level.board.format_with_state(&state).to_string();
        assert_eq!(snapshot, "#####\n#X P#\n#####\n");

        // the target under the player is gone after parsing
        let reparsed: Level = snapshot.parse().unwrap();
        assert!(reparsed.board.targets().is_empty());
        assert_ne!(reparsed.board, level.board);
    }
}
