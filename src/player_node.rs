#![cfg(feature = "std")]

use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::{
    arena::TurnArena,
    core::BoardError,
    game::GameEngine,
    persistence::SaveFiles,
    player::{Move, Player, SaveKind},
    protocol::TurnState,
};

/// One participant of a round: a player, its private game copy and its end
/// of the turn arena.
pub struct PlayerNode {
    player: Box<dyn Player>,
    engine: GameEngine,
    arena: TurnArena,
    saves: Option<SaveFiles>,
}

impl PlayerNode {
    pub fn new(player: Box<dyn Player>, engine: GameEngine, arena: TurnArena) -> Self {
        Self {
            player,
            engine,
            arena,
            saves: None,
        }
    }

    /// Write pause dumps and menu saves to `saves`.
    pub fn with_saves(mut self, saves: SaveFiles) -> Self {
        self.saves = Some(saves);
        self
    }

    /// Play until the round reaches a terminal state and return it.
    ///
    /// While the opponent owns the turn this waits on the arena; incoming
    /// attacks are applied to our board as they arrive.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<TurnState> {
        let role = self.engine.role();
        info!("[{}] round started in state {:?}", role, self.arena.state());
        self.player.handle_round_start(role);

        loop {
            let msg = self.arena.wait_for_turn().await?;
            if let Some((pos, reported)) = msg.attack {
                let result = self.engine.record_incoming(pos).map_err(|e| anyhow::anyhow!(e))?;
                if result != reported {
                    warn!("[{}] opponent reported {} at {}, board says {}", role, reported, pos, result);
                }
                self.player.handle_opponent_attack(pos, result);
            }

            match msg.turn {
                TurnState::GameOver => {
                    self.player.handle_game_over(self.engine.has_won());
                    info!("[{}] round over, status {:?}", role, self.engine.status());
                    return Ok(TurnState::GameOver);
                }
                TurnState::ReturnToMenu => {
                    info!("[{}] round left for the menu", role);
                    return Ok(TurnState::ReturnToMenu);
                }
                _ => {}
            }

            if let Some(end) = self.take_turn(rng).await? {
                return Ok(end);
            }
        }
    }

    /// Ask the player for moves until one is resolved. Returns the terminal
    /// state if the move ended the round.
    async fn take_turn(&mut self, rng: &mut SmallRng) -> anyhow::Result<Option<TurnState>> {
        let role = self.engine.role();
        loop {
            let mv = self.player.next_move(rng, &self.engine.view())?;
            match mv {
                Move::Pause => {
                    let snapshot = self.engine.snapshot(self.arena.state(), self.arena.data());
                    let path = self.saves.as_ref().and_then(|s| s.try_dump_boards(&snapshot));
                    self.player.handle_saved(SaveKind::Pause, path);
                }
                Move::ReturnToMenu => {
                    let snapshot = self.engine.snapshot(self.arena.state(), self.arena.data());
                    let path = self.saves.as_ref().and_then(|s| {
                        let saved = s.try_save_state(&snapshot);
                        s.try_dump_boards(&snapshot);
                        saved
                    });
                    self.player.handle_saved(SaveKind::Menu, path);
                    self.arena.finish(TurnState::ReturnToMenu, None).await?;
                    info!("[{}] returning to menu", role);
                    return Ok(Some(TurnState::ReturnToMenu));
                }
                Move::Attack(pos) => {
                    let result = match self.engine.attack(pos) {
                        Ok(result) => result,
                        Err(BoardError::AlreadyAttacked(_)) => {
                            debug!("[{}] {} already attacked", role, pos);
                            self.player.handle_rejected_attack(pos);
                            continue;
                        }
                        Err(e) => return Err(anyhow::anyhow!(e)),
                    };
                    debug!("[{}] attack at {}: {}", role, pos, result);
                    self.player.handle_attack_result(pos, result);

                    if self.engine.has_won() {
                        self.arena.finish(TurnState::GameOver, Some((pos, result))).await?;
                        self.player.handle_game_over(true);
                        info!("[{}] sank the last ship and won", role);
                        return Ok(Some(TurnState::GameOver));
                    }
                    self.arena.hand_off(Some((pos, result))).await?;
                    return Ok(None);
                }
            }
        }
    }

    /// Current turn state as seen by this participant.
    pub fn state(&self) -> TurnState {
        self.arena.state()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Split the node into its game copy and its arena end.
    pub fn into_parts(self) -> (GameEngine, TurnArena) {
        (self.engine, self.arena)
    }
}
