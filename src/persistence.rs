//! Save files: the resumable game state and the human-readable board dump.
//!
//! The resumable save is plain text: `turn data player` on the first line,
//! then the board, opponent board, ships and opponent ships as 64
//! whitespace-separated integers each. The board dump holds the same four
//! grids as labelled 8×8 blocks.

#![cfg(feature = "std")]

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::{
    core::{Cell, Grid, Position, ShipLayout, BOARD_SIZE, GRID_CELLS},
    game::GameSnapshot,
    protocol::{Role, TurnState},
};

pub const DEFAULT_SAVE_FILE: &str = "savegame.txt";
pub const DEFAULT_DUMP_FILE: &str = "boards.txt";

/// Why a saved game could not be loaded. Every variant means "no saved
/// game" to the player.
#[derive(Debug)]
pub enum LoadError {
    /// There is no save file.
    NotFound,
    /// The save file exists but could not be read.
    Io(io::Error),
    /// A field is missing, not an integer, or out of range.
    Malformed { field: &'static str, index: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound => write!(f, "No saved game found"),
            LoadError::Io(e) => write!(f, "Failed to read saved game: {}", e),
            LoadError::Malformed { field, index } => {
                write!(f, "Saved game is corrupted: bad {} value at field {}", field, index)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound
        } else {
            LoadError::Io(err)
        }
    }
}

fn write_codes<W: Write>(w: &mut W, codes: impl Iterator<Item = u8>) -> io::Result<()> {
    let line: Vec<String> = codes.map(|c| c.to_string()).collect();
    writeln!(w, "{}", line.join(" "))
}

fn grid_codes(grid: &Grid) -> impl Iterator<Item = u8> + '_ {
    grid.cells().iter().map(|c| c.code())
}

fn layout_codes(ships: &ShipLayout) -> impl Iterator<Item = u8> + '_ {
    Position::all().map(|pos| u8::from(ships.contains(pos)))
}

/// Write `snapshot` in the resumable save format.
pub fn write_snapshot<W: Write>(w: &mut W, snapshot: &GameSnapshot) -> io::Result<()> {
    writeln!(
        w,
        "{} {} {}",
        snapshot.turn.code(),
        snapshot.data,
        snapshot.player.code()
    )?;
    write_codes(w, grid_codes(&snapshot.board))?;
    write_codes(w, grid_codes(&snapshot.opponent_board))?;
    write_codes(w, layout_codes(&snapshot.ships))?;
    write_codes(w, layout_codes(&snapshot.opponent_ships))
}

/// Sequential reader over the integer fields of a save file.
struct Fields<'a> {
    tokens: std::str::SplitWhitespace<'a>,
    index: usize,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace(),
            index: 0,
        }
    }

    fn next<T>(&mut self, field: &'static str, decode: impl FnOnce(i64) -> Option<T>) -> Result<T, LoadError> {
        let index = self.index;
        self.index += 1;
        self.tokens
            .next()
            .and_then(|tok| tok.parse::<i64>().ok())
            .and_then(decode)
            .ok_or(LoadError::Malformed { field, index })
    }

    fn grid(&mut self, field: &'static str) -> Result<Grid, LoadError> {
        let mut cells = [Cell::Unmarked; GRID_CELLS];
        for cell in cells.iter_mut() {
            *cell = self.next(field, Cell::from_code)?;
        }
        Ok(Grid::from_cells(cells))
    }

    fn layout(&mut self, field: &'static str) -> Result<ShipLayout, LoadError> {
        let mut layout = ShipLayout::new();
        for pos in Position::all() {
            let occupied = self.next(field, |v| match v {
                0 => Some(false),
                1 => Some(true),
                _ => None,
            })?;
            if occupied {
                layout.occupy(pos);
            }
        }
        Ok(layout)
    }
}

/// Parse the resumable save format. Trailing content is ignored.
pub fn read_snapshot(text: &str) -> Result<GameSnapshot, LoadError> {
    let mut fields = Fields::new(text);
    let turn = fields.next("turn", TurnState::from_code)?;
    let data = fields.next("data", |v| u8::try_from(v).ok())?;
    let player = fields.next("player", Role::from_code)?;
    let board = fields.grid("board")?;
    let opponent_board = fields.grid("opponent board")?;
    let ships = fields.layout("ships")?;
    let opponent_ships = fields.layout("opponent ships")?;
    Ok(GameSnapshot {
        turn,
        data,
        player,
        board,
        opponent_board,
        ships,
        opponent_ships,
    })
}

fn write_block<W: Write>(
    w: &mut W,
    label: &str,
    codes: impl Iterator<Item = u8>,
) -> io::Result<()> {
    writeln!(w, "{}:", label)?;
    let codes: Vec<String> = codes.map(|c| c.to_string()).collect();
    for row in codes.chunks(BOARD_SIZE as usize) {
        writeln!(w, "{}", row.join(" "))?;
    }
    Ok(())
}

/// Write the four grids of `snapshot` as labelled 8×8 blocks.
pub fn write_board_dump<W: Write>(w: &mut W, snapshot: &GameSnapshot) -> io::Result<()> {
    write_block(w, "Player's Board", grid_codes(&snapshot.board))?;
    writeln!(w)?;
    write_block(w, "Player's Ships", layout_codes(&snapshot.ships))?;
    writeln!(w)?;
    write_block(w, "Opponent's Board", grid_codes(&snapshot.opponent_board))?;
    writeln!(w)?;
    write_block(w, "Opponent's Ships", layout_codes(&snapshot.opponent_ships))
}

/// Locations of the resumable save and the board dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFiles {
    save_path: PathBuf,
    dump_path: PathBuf,
}

impl SaveFiles {
    pub fn new(save_path: impl Into<PathBuf>, dump_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
            dump_path: dump_path.into(),
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn dump_path(&self) -> &Path {
        &self.dump_path
    }

    /// Write the resumable game state.
    pub fn save_state(&self, snapshot: &GameSnapshot) -> io::Result<()> {
        let mut buf = Vec::new();
        write_snapshot(&mut buf, snapshot)?;
        fs::write(&self.save_path, buf)?;
        debug!("game state saved to {}", self.save_path.display());
        Ok(())
    }

    /// Load the resumable game state.
    pub fn load_state(&self) -> Result<GameSnapshot, LoadError> {
        let text = fs::read_to_string(&self.save_path)?;
        read_snapshot(&text)
    }

    /// Write the human-readable board dump.
    pub fn dump_boards(&self, snapshot: &GameSnapshot) -> io::Result<()> {
        let mut buf = Vec::new();
        write_board_dump(&mut buf, snapshot)?;
        fs::write(&self.dump_path, buf)?;
        debug!("boards dumped to {}", self.dump_path.display());
        Ok(())
    }

    /// [`save_state`](Self::save_state), logging failure instead of
    /// returning it. Returns the path on success.
    pub fn try_save_state(&self, snapshot: &GameSnapshot) -> Option<&Path> {
        match self.save_state(snapshot) {
            Ok(()) => Some(self.save_path()),
            Err(e) => {
                error!("Failed to save game state to {}: {}", self.save_path.display(), e);
                None
            }
        }
    }

    /// [`dump_boards`](Self::dump_boards), logging failure instead of
    /// returning it. Returns the path on success.
    pub fn try_dump_boards(&self, snapshot: &GameSnapshot) -> Option<&Path> {
        match self.dump_boards(snapshot) {
            Ok(()) => Some(self.dump_path()),
            Err(e) => {
                error!("Failed to save boards to {}: {}", self.dump_path.display(), e);
                None
            }
        }
    }
}

impl Default for SaveFiles {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE, DEFAULT_DUMP_FILE)
    }
}
