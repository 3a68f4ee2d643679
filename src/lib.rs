#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod game;
pub mod protocol;

#[cfg(feature = "std")]
pub mod arena;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod menu;
#[cfg(feature = "std")]
pub mod persistence;
#[cfg(feature = "std")]
pub mod player;
#[cfg(feature = "std")]
pub mod player_node;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
pub use game::*;
pub use protocol::*;

#[cfg(feature = "std")]
pub use arena::{ArenaError, ChannelLink, TurnArena, TurnLink};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use persistence::{LoadError, SaveFiles};
#[cfg(feature = "std")]
pub use player::{AiPlayer, CliPlayer, Move, Player, SaveKind};
#[cfg(feature = "std")]
pub use player_node::PlayerNode;
#[cfg(feature = "std")]
pub use session::{RoundOutcome, Session, SessionError};
