//! Player trait and implementations
//!
//! A player is the move source and output sink of one participant:
//! - AiPlayer: uniform random attacks on unmarked cells
//! - CliPlayer: interactive console player
//!
//! The turn-taking itself lives in [`crate::player_node::PlayerNode`].

#![cfg(feature = "std")]

use std::path::Path;

use rand::rngs::SmallRng;

use crate::{
    core::{GuessResult, Position},
    game::PlayerView,
    protocol::Role,
};

/// A move requested by a player on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Attack the given cell.
    Attack(Position),
    /// Dump the boards to the text file and keep the turn.
    Pause,
    /// Save the resumable game and leave the round.
    ReturnToMenu,
}

/// Which file a save notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveKind {
    /// Human-readable board dump written on pause.
    Pause,
    /// Resumable game state written when returning to the menu.
    Menu,
}

/// Interface implemented by different player types.
pub trait Player: Send {
    /// Choose the next move. Only called while this participant owns the
    /// turn.
    fn next_move(&mut self, rng: &mut SmallRng, view: &PlayerView<'_>) -> anyhow::Result<Move>;

    /// A round is starting with this player in `role`.
    fn handle_round_start(&mut self, _role: Role) {}

    /// Inform the player of the result of its last attack.
    fn handle_attack_result(&mut self, _pos: Position, _result: GuessResult) {}

    /// The requested cell was already attacked; another move will be asked.
    fn handle_rejected_attack(&mut self, _pos: Position) {}

    /// Inform the player of an opponent attack against its board.
    fn handle_opponent_attack(&mut self, _pos: Position, _result: GuessResult) {}

    /// A save was attempted; `path` is `None` when it failed or no save
    /// location is configured.
    fn handle_saved(&mut self, _kind: SaveKind, _path: Option<&Path>) {}

    /// The round ended with a winner.
    fn handle_game_over(&mut self, _won: bool) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::{parse_command, CliPlayer, LineInput};
