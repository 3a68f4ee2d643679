use crate::{
    core::{BoardError, Grid, GuessResult, Position, ShipLayout},
    protocol::{Role, TurnState},
};

/// Full resumable state, expressed from the point of view of `player`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub turn: TurnState,
    pub data: u8,
    pub player: Role,
    /// Attacks received by `player`.
    pub board: Grid,
    /// Attacks made by `player`.
    pub opponent_board: Grid,
    pub ships: ShipLayout,
    pub opponent_ships: ShipLayout,
}

impl GameSnapshot {
    /// A fresh snapshot: parent to move, nothing attacked yet.
    pub fn new(player: Role, ships: ShipLayout, opponent_ships: ShipLayout) -> Self {
        Self {
            turn: TurnState::INITIAL,
            data: 0,
            player,
            board: Grid::new(),
            opponent_board: Grid::new(),
            ships,
            opponent_ships,
        }
    }

    /// The same game seen by `role`. Own and opponent fields swap when
    /// `role` differs from the snapshot's owner.
    pub fn perspective(self, role: Role) -> Self {
        if role == self.player {
            return self;
        }
        Self {
            turn: self.turn,
            data: self.data,
            player: role,
            board: self.opponent_board,
            opponent_board: self.board,
            ships: self.opponent_ships,
            opponent_ships: self.ships,
        }
    }
}

/// Current status of a game, as seen by one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What a player is shown when asked for a move. The rival's fleet is
/// hidden.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    pub role: Role,
    pub board: &'a Grid,
    pub opponent_board: &'a Grid,
    pub ships: &'a ShipLayout,
}

/// One participant's private copy of the game.
#[derive(Debug, Clone)]
pub struct GameEngine {
    role: Role,
    board: Grid,
    opponent_board: Grid,
    ships: ShipLayout,
    opponent_ships: ShipLayout,
}

impl GameEngine {
    /// A new game for `role` with both fleets already placed.
    pub fn new(role: Role, ships: ShipLayout, opponent_ships: ShipLayout) -> Self {
        Self::from_snapshot(&GameSnapshot::new(role, ships, opponent_ships))
    }

    /// Deep copy of `snapshot` as seen by `role`.
    pub fn for_role(role: Role, snapshot: &GameSnapshot) -> Self {
        Self::from_snapshot(&snapshot.perspective(role))
    }

    /// Restore an engine from a snapshot, keeping the snapshot's role.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self {
            role: snapshot.player,
            board: snapshot.board,
            opponent_board: snapshot.opponent_board,
            ships: snapshot.ships,
            opponent_ships: snapshot.opponent_ships,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Attacks received against our fleet.
    pub fn board(&self) -> &Grid {
        &self.board
    }

    /// Our attacks against the opponent.
    pub fn opponent_board(&self) -> &Grid {
        &self.opponent_board
    }

    pub fn ships(&self) -> &ShipLayout {
        &self.ships
    }

    pub fn opponent_ships(&self) -> &ShipLayout {
        &self.opponent_ships
    }

    /// Resolve our attack at `pos` against the opponent's fleet.
    pub fn attack(&mut self, pos: Position) -> Result<GuessResult, BoardError> {
        self.opponent_board.mark_attack(&self.opponent_ships, pos)
    }

    /// Apply an opponent attack at `pos` to our own board.
    pub fn record_incoming(&mut self, pos: Position) -> Result<GuessResult, BoardError> {
        self.board.mark_attack(&self.ships, pos)
    }

    /// Every opponent ship cell has been hit.
    pub fn has_won(&self) -> bool {
        self.opponent_board.all_sunk(&self.opponent_ships)
    }

    /// Every one of our ship cells has been hit.
    pub fn has_lost(&self) -> bool {
        self.board.all_sunk(&self.ships)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.has_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Number of attacks this participant has made.
    pub fn attack_count(&self) -> usize {
        self.opponent_board.marked_count()
    }

    pub fn view(&self) -> PlayerView<'_> {
        PlayerView {
            role: self.role,
            board: &self.board,
            opponent_board: &self.opponent_board,
            ships: &self.ships,
        }
    }

    /// Generate a snapshot of the current state with the given turn values.
    pub fn snapshot(&self, turn: TurnState, data: u8) -> GameSnapshot {
        GameSnapshot {
            turn,
            data,
            player: self.role,
            board: self.board,
            opponent_board: self.opponent_board,
            ships: self.ships,
            opponent_ships: self.opponent_ships,
        }
    }
}
