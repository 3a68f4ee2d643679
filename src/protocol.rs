//! Turn protocol values exchanged between the two participants.

use core::fmt;

use crate::core::{GuessResult, Position};

/// Logical participant. The numeric codes are the save file encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// The spawned, automated participant.
    Child,
    /// The initiating participant, normally human controlled.
    Parent,
}

impl Role {
    pub const fn code(self) -> i64 {
        match self {
            Role::Child => 0,
            Role::Parent => 1,
        }
    }

    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Role::Child),
            1 => Some(Role::Parent),
            _ => None,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Role::Child => Role::Parent,
            Role::Parent => Role::Child,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Child => write!(f, "Child"),
            Role::Parent => write!(f, "Parent"),
        }
    }
}

/// Whose move it is, or how the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    ChildTurn,
    ParentTurn,
    /// A participant sank the last enemy ship.
    GameOver,
    /// The human side left for the menu; the game can be resumed.
    ReturnToMenu,
}

impl TurnState {
    /// Every round starts with the parent to move.
    pub const INITIAL: TurnState = TurnState::ParentTurn;

    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Child => TurnState::ChildTurn,
            Role::Parent => TurnState::ParentTurn,
        }
    }

    /// The participant allowed to act, or `None` in a terminal state.
    pub const fn owner(self) -> Option<Role> {
        match self {
            TurnState::ChildTurn => Some(Role::Child),
            TurnState::ParentTurn => Some(Role::Parent),
            TurnState::GameOver | TurnState::ReturnToMenu => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        self.owner().is_none()
    }

    pub const fn code(self) -> i64 {
        match self {
            TurnState::ChildTurn => 0,
            TurnState::ParentTurn => 1,
            TurnState::GameOver => -1,
            TurnState::ReturnToMenu => -2,
        }
    }

    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TurnState::ChildTurn),
            1 => Some(TurnState::ParentTurn),
            -1 => Some(TurnState::GameOver),
            -2 => Some(TurnState::ReturnToMenu),
            _ => None,
        }
    }
}

/// Message published by the active participant when it gives up the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnMessage {
    /// New turn state.
    pub turn: TurnState,
    /// Reserved auxiliary byte, carried unchanged.
    pub data: u8,
    /// The attack that ended the sender's turn, if any.
    pub attack: Option<(Position, GuessResult)>,
}

impl TurnMessage {
    pub const fn new(turn: TurnState, data: u8) -> Self {
        Self {
            turn,
            data,
            attack: None,
        }
    }

    pub fn with_attack(mut self, attack: Option<(Position, GuessResult)>) -> Self {
        self.attack = attack;
        self
    }
}
