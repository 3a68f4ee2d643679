//! Menu-level game state and the round driver.
//!
//! A [`Session`] owns the parent's view of the game between rounds. Starting
//! a round deep-copies that state into one [`GameEngine`] per participant,
//! runs the child on its own task and the parent inline, and folds the
//! parent's copy back in when the round ends.

#![cfg(feature = "std")]

use core::fmt;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{
    arena::TurnArena,
    core::{auto_place, Grid, ShipLayout},
    game::{GameEngine, GameSnapshot},
    persistence::SaveFiles,
    player::Player,
    player_node::PlayerNode,
    protocol::{Role, TurnState},
    ui::render_boards,
};

/// Menu actions refused in the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The action needs a started or loaded game.
    NoGameInProgress,
    /// `play_round` was called before a game was started, loaded or
    /// continued.
    NotReady,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoGameInProgress => {
                write!(f, "No game in progress. Start a new game or load a game first.")
            }
            SessionError::NotReady => write!(f, "No game has been started"),
        }
    }
}

impl std::error::Error for SessionError {}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RoundOutcome {
    pub final_state: TurnState,
    /// Set when the round ended with `GameOver`.
    pub winner: Option<Role>,
    pub parent_attacks: usize,
    pub child_attacks: usize,
}

/// Parent-perspective game state between rounds.
#[derive(Debug, Clone)]
pub struct Session {
    board: Grid,
    opponent_board: Grid,
    ships: ShipLayout,
    opponent_ships: ShipLayout,
    data: u8,
    /// A game was interrupted and can be continued.
    resumable: bool,
    /// The next `play_round` may start.
    ready: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Grid::new(),
            opponent_board: Grid::new(),
            ships: ShipLayout::new(),
            opponent_ships: ShipLayout::new(),
            data: 0,
            resumable: false,
            ready: false,
        }
    }

    /// Place both fleets at random and clear both grids.
    pub fn start_new<R: Rng>(&mut self, rng: &mut R) {
        auto_place(rng, &mut self.ships);
        auto_place(rng, &mut self.opponent_ships);
        self.board.clear();
        self.opponent_board.clear();
        self.data = 0;
        self.resumable = false;
        self.ready = true;
        info!("new game started");
    }

    /// Adopt a loaded snapshot, whichever participant it was saved by.
    pub fn load_into(&mut self, snapshot: GameSnapshot) {
        let snapshot = snapshot.perspective(Role::Parent);
        self.board = snapshot.board;
        self.opponent_board = snapshot.opponent_board;
        self.ships = snapshot.ships;
        self.opponent_ships = snapshot.opponent_ships;
        self.data = snapshot.data;
        self.resumable = true;
        self.ready = true;
        info!("saved game loaded");
    }

    /// Resume an interrupted game on the next round.
    pub fn continue_game(&mut self) -> Result<(), SessionError> {
        if !self.resumable {
            return Err(SessionError::NoGameInProgress);
        }
        self.ready = true;
        Ok(())
    }

    /// Re-place our own fleet and forget the attacks received so far.
    pub fn relocate_ships<R: Rng>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        if !self.resumable {
            return Err(SessionError::NoGameInProgress);
        }
        auto_place(rng, &mut self.ships);
        self.board.clear();
        info!("ships relocated");
        Ok(())
    }

    pub fn is_resumable(&self) -> bool {
        self.resumable
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn opponent_board(&self) -> &Grid {
        &self.opponent_board
    }

    pub fn ships(&self) -> &ShipLayout {
        &self.ships
    }

    pub fn opponent_ships(&self) -> &ShipLayout {
        &self.opponent_ships
    }

    /// Parent-perspective snapshot with the parent to move.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            turn: TurnState::INITIAL,
            data: self.data,
            player: Role::Parent,
            board: self.board,
            opponent_board: self.opponent_board,
            ships: self.ships,
            opponent_ships: self.opponent_ships,
        }
    }

    /// Own grid with ships, then the attacks made against the opponent.
    pub fn render_grids(&self) -> Result<String, SessionError> {
        if !self.resumable {
            return Err(SessionError::NoGameInProgress);
        }
        Ok(render_boards(&self.board, &self.ships, &self.opponent_board))
    }

    /// Play one round between `parent` and `child`.
    ///
    /// The child runs on a spawned task with its own deep copy of the state
    /// and an RNG seeded from `rng`. The parent runs on the calling task and
    /// uses `saves` for pause and menu saves. The arena is released only
    /// after the child has exited.
    pub async fn play_round(
        &mut self,
        parent: Box<dyn Player>,
        child: Box<dyn Player>,
        rng: &mut SmallRng,
        saves: Option<SaveFiles>,
    ) -> anyhow::Result<RoundOutcome> {
        if !self.ready {
            return Err(anyhow::anyhow!(SessionError::NotReady));
        }
        let snapshot = self.snapshot();
        let (parent_arena, child_arena) = TurnArena::open();

        let parent_engine = GameEngine::for_role(Role::Parent, &snapshot);
        let child_engine = GameEngine::for_role(Role::Child, &snapshot);
        let mut child_rng = SmallRng::from_rng(rng);

        let child_task = tokio::spawn(async move {
            let mut node = PlayerNode::new(child, child_engine, child_arena);
            let end = node.run(&mut child_rng).await;
            let (engine, arena) = node.into_parts();
            arena.close();
            end.map(|state| (state, engine))
        });

        let mut parent_node = PlayerNode::new(parent, parent_engine, parent_arena);
        if let Some(saves) = saves {
            parent_node = parent_node.with_saves(saves);
        }
        let parent_end = parent_node.run(rng).await;
        let (parent_engine, parent_arena) = parent_node.into_parts();

        let parent_end = match parent_end {
            Ok(state) => state,
            Err(e) => {
                // Unblock the child before joining it.
                parent_arena.close();
                match child_task.await {
                    Ok(Ok((state, _))) => debug!("child left the aborted round in {:?}", state),
                    Ok(Err(child_err)) => warn!("child participant failed: {}", child_err),
                    Err(join_err) => warn!("child participant task failed: {}", join_err),
                }
                return Err(e);
            }
        };
        let (child_end, child_engine) = child_task.await??;
        parent_arena.close();
        debug!("round finished: parent {:?}, child {:?}", parent_end, child_end);

        if parent_end != child_end {
            return Err(anyhow::anyhow!(
                "participants disagree on the round result: parent {:?}, child {:?}",
                parent_end,
                child_end
            ));
        }

        let winner = match parent_end {
            TurnState::GameOver if parent_engine.has_won() => Some(Role::Parent),
            TurnState::GameOver if child_engine.has_won() => Some(Role::Child),
            _ => None,
        };

        self.board = *parent_engine.board();
        self.opponent_board = *parent_engine.opponent_board();
        self.ready = false;
        self.resumable = parent_end == TurnState::ReturnToMenu;

        let outcome = RoundOutcome {
            final_state: parent_end,
            winner,
            parent_attacks: parent_engine.attack_count(),
            child_attacks: child_engine.attack_count(),
        };
        info!("round ended: {:?}", outcome);
        Ok(outcome)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
