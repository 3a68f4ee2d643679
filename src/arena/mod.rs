//! Turn arena: the only state the two participants share.
//!
//! The arena tracks whose move it is plus the reserved data byte. Exactly one
//! participant owns the turn at any time; only the owner may hand it over or
//! end the round, and the other side blocks on the link until that happens.
//! Each side keeps its own view of the state and the views only change by
//! sending or receiving a [`TurnMessage`], so two writers can never race.

#![cfg(feature = "std")]

use core::fmt;

use log::debug;

use crate::core::{GuessResult, Position};
use crate::protocol::{Role, TurnMessage, TurnState};

pub mod channel;
pub use channel::ChannelLink;

/// Carries turn messages between the two participants.
#[async_trait::async_trait]
pub trait TurnLink: Send + Sync {
    async fn send(&mut self, msg: TurnMessage) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<TurnMessage>;
}

/// Protocol violations detected by the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// A participant tried to act while the turn belongs elsewhere.
    NotYourTurn { role: Role, state: TurnState },
    /// The round already reached a terminal state.
    Finished(TurnState),
    /// `finish` was called with a non-terminal state.
    NotTerminal(TurnState),
    /// The peer sent a state that does not follow from the current one.
    UnexpectedState { role: Role, state: TurnState },
    /// The other end of the link is gone.
    PeerClosed,
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaError::NotYourTurn { role, state } => {
                write!(f, "{} cannot act while the turn state is {:?}", role, state)
            }
            ArenaError::Finished(state) => write!(f, "Round already finished with {:?}", state),
            ArenaError::NotTerminal(state) => write!(f, "{:?} is not a terminal state", state),
            ArenaError::UnexpectedState { role, state } => {
                write!(f, "{} received unexpected turn state {:?}", role, state)
            }
            ArenaError::PeerClosed => write!(f, "Peer closed the turn arena"),
        }
    }
}

impl std::error::Error for ArenaError {}

/// One participant's handle on the turn arena.
pub struct TurnArena {
    role: Role,
    state: TurnState,
    data: u8,
    link: Box<dyn TurnLink>,
}

impl TurnArena {
    /// Create a fresh arena and return the parent's and the child's ends.
    /// Both start in [`TurnState::INITIAL`] with a zero data byte.
    pub fn open() -> (TurnArena, TurnArena) {
        let (parent, child) = ChannelLink::pair();
        (
            TurnArena::with_link(Role::Parent, Box::new(parent)),
            TurnArena::with_link(Role::Child, Box::new(child)),
        )
    }

    /// Wrap an existing link for `role`.
    pub fn with_link(role: Role, link: Box<dyn TurnLink>) -> Self {
        Self {
            role,
            state: TurnState::INITIAL,
            data: 0,
            link,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The turn state as last observed by this participant.
    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn data(&self) -> u8 {
        self.data
    }

    pub fn is_my_turn(&self) -> bool {
        self.state.owner() == Some(self.role)
    }

    /// Block until this participant owns the turn or the round has ended.
    ///
    /// Returns at once when that is already the case; the returned message
    /// then carries no attack. Otherwise returns the peer's message, whose
    /// `attack` is the move the peer just made.
    pub async fn wait_for_turn(&mut self) -> anyhow::Result<TurnMessage> {
        if self.is_my_turn() || self.state.is_terminal() {
            return Ok(TurnMessage::new(self.state, self.data));
        }
        let msg = self.link.recv().await?;
        if msg.turn.owner() == Some(self.role.other()) {
            return Err(anyhow::anyhow!(ArenaError::UnexpectedState {
                role: self.role,
                state: msg.turn,
            }));
        }
        debug!("[{}] turn state {:?} -> {:?}", self.role, self.state, msg.turn);
        self.state = msg.turn;
        self.data = msg.data;
        Ok(msg)
    }

    /// Pass the turn to the other participant after a completed move.
    pub async fn hand_off(&mut self, attack: Option<(Position, GuessResult)>) -> anyhow::Result<()> {
        self.ensure_owner()?;
        let next = TurnState::for_role(self.role.other());
        self.publish(next, attack).await
    }

    /// End the round with `terminal` (`GameOver` or `ReturnToMenu`).
    pub async fn finish(
        &mut self,
        terminal: TurnState,
        attack: Option<(Position, GuessResult)>,
    ) -> anyhow::Result<()> {
        if !terminal.is_terminal() {
            return Err(anyhow::anyhow!(ArenaError::NotTerminal(terminal)));
        }
        self.ensure_owner()?;
        self.publish(terminal, attack).await
    }

    /// Release this end of the arena.
    pub fn close(self) {
        debug!("[{}] arena released in state {:?}", self.role, self.state);
    }

    fn ensure_owner(&self) -> anyhow::Result<()> {
        if self.state.is_terminal() {
            return Err(anyhow::anyhow!(ArenaError::Finished(self.state)));
        }
        if !self.is_my_turn() {
            return Err(anyhow::anyhow!(ArenaError::NotYourTurn {
                role: self.role,
                state: self.state,
            }));
        }
        Ok(())
    }

    async fn publish(
        &mut self,
        turn: TurnState,
        attack: Option<(Position, GuessResult)>,
    ) -> anyhow::Result<()> {
        let msg = TurnMessage::new(turn, self.data).with_attack(attack);
        self.link.send(msg).await?;
        debug!("[{}] turn state {:?} -> {:?}", self.role, self.state, turn);
        self.state = turn;
        Ok(())
    }
}
