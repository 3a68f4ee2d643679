use log::debug;
use rand::rngs::SmallRng;

use crate::{core::choose_attack, game::PlayerView};

use super::{Move, Player};

/// Automated player that attacks a uniformly random unmarked cell.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn next_move(&mut self, rng: &mut SmallRng, view: &PlayerView<'_>) -> anyhow::Result<Move> {
        let pos = choose_attack(rng, view.opponent_board)
            .ok_or_else(|| anyhow::anyhow!("no unmarked cell left to attack"))?;
        debug!("[{}] attacks position {}", view.role, pos);
        Ok(Move::Attack(pos))
    }
}
