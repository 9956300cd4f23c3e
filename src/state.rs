use crate::config::Dedup;
use crate::data::Pos;
use crate::moves::Push;

/// Player position and block positions ordered by block id.
///
/// Unlike a normalized representation the blocks are never sorted -
/// the index into `blocks` is the block's identity.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub player_pos: Pos,
    pub blocks: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, blocks: Vec<Pos>) -> State {
        State { player_pos, blocks }
    }

    /// The state after performing `push` - does not check legality.
    pub(crate) fn pushed(&self, push: Push) -> State {
        let mut blocks = self.blocks.clone();
        let old_pos = blocks[push.block];
        blocks[push.block] = old_pos + push.dir;
        State::new(old_pos, blocks)
    }

    /// Key identifying the block configuration, the player is ignored.
    pub(crate) fn config_key(&self, dedup: Dedup) -> Vec<Pos> {
        match dedup {
            Dedup::Identity => self.blocks.clone(),
            Dedup::BlockSet => {
                let mut blocks = self.blocks.clone();
                blocks.sort();
                blocks
            }
        }
    }

    pub(crate) fn block_at(&self, pos: Pos) -> Option<usize> {
        self.blocks.iter().position(|&b| b == pos)
    }
}
