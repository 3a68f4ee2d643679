use std::io::{self, BufRead, Cursor, Write};
use std::path::Path;

use rand::rngs::SmallRng;

use crate::{
    core::{GuessResult, Position, BOARD_SIZE},
    game::PlayerView,
    protocol::Role,
    ui::render_boards,
};

use super::{Move, Player, SaveKind};

/// Source of input lines for [`CliPlayer`].
pub trait LineInput: Send {
    /// Read the next line, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl LineInput for io::Stdin {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

impl<T: AsRef<[u8]> + Send> LineInput for Cursor<T> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Parse one line of turn input.
///
/// Accepts `row col` (two integers in `[0, 7]`), or a line starting with
/// `p`/`P` (pause) or `m`/`M` (return to menu).
pub fn parse_command(input: &str) -> Result<Move, String> {
    let input = input.trim();
    match input.chars().next() {
        None => return Err("Empty input.".to_string()),
        Some('p' | 'P') => return Ok(Move::Pause),
        Some('m' | 'M') => return Ok(Move::ReturnToMenu),
        Some(_) => {}
    }
    let mut parts = input.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Enter a row and a column separated by a space.".to_string());
    };
    let max = BOARD_SIZE as usize - 1;
    let row: usize = row
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 0-{}.", row, max))?;
    let col: usize = col
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 0-{}.", col, max))?;
    Position::from_row_col(row, col)
        .map(Move::Attack)
        .ok_or_else(|| format!("Coordinates ({}, {}) out of bounds - must be 0-{}.", row, col, max))
}

/// Interactive console player.
pub struct CliPlayer<I: LineInput, O: Write + Send> {
    input: I,
    output: O,
}

impl CliPlayer<io::Stdin, io::Stdout> {
    /// Player reading from stdin and writing to stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<I: LineInput, O: Write + Send> CliPlayer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    fn say(&mut self, msg: &str) {
        let _ = writeln!(self.output, "{}", msg);
        let _ = self.output.flush();
    }
}

impl<I: LineInput, O: Write + Send> Player for CliPlayer<I, O> {
    fn next_move(&mut self, _rng: &mut SmallRng, view: &PlayerView<'_>) -> anyhow::Result<Move> {
        let boards = render_boards(view.board, view.ships, view.opponent_board);
        writeln!(self.output, "\n{}", boards)?;
        loop {
            write!(
                self.output,
                "\nYour turn. Enter attack coordinates (row col), 'p' to pause, or 'm' to return to menu: "
            )?;
            self.output.flush()?;
            let Some(line) = self.input.next_line()? else {
                // Input closed: keep the game resumable.
                self.say("");
                return Ok(Move::ReturnToMenu);
            };
            match parse_command(&line) {
                Ok(mv) => return Ok(mv),
                Err(msg) => self.say(&format!("{} Try again.", msg)),
            }
        }
    }

    fn handle_round_start(&mut self, role: Role) {
        self.say(&format!("\nGame started. You are the {} player.", role));
    }

    fn handle_attack_result(&mut self, _pos: Position, result: GuessResult) {
        self.say(&format!("{}!", result));
    }

    fn handle_rejected_attack(&mut self, _pos: Position) {
        self.say("Position already attacked. Try again.");
    }

    fn handle_opponent_attack(&mut self, pos: Position, result: GuessResult) {
        self.say(&format!("\nOpponent attacks position {}", pos));
        match result {
            GuessResult::Hit => self.say("Opponent hits your ship!"),
            GuessResult::Miss => self.say("Opponent misses."),
        }
    }

    fn handle_saved(&mut self, kind: SaveKind, path: Option<&Path>) {
        match (kind, path) {
            (SaveKind::Pause, Some(path)) => {
                self.say(&format!("\nGame paused. Boards saved to '{}'.", path.display()))
            }
            (SaveKind::Pause, None) => self.say("\nGame paused. Boards could not be saved."),
            (SaveKind::Menu, Some(path)) => {
                self.say(&format!("\nGame state saved to '{}'.", path.display()));
                self.say("Returning to menu...");
            }
            (SaveKind::Menu, None) => {
                self.say("\nGame state could not be saved.");
                self.say("Returning to menu...");
            }
        }
    }

    fn handle_game_over(&mut self, won: bool) {
        if won {
            self.say("\nYou won! Congratulations.");
        } else {
            self.say("\nThe opponent won the game.");
        }
    }
}
