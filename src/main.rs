use std::io::{self, Write};
use std::path::PathBuf;

use battleship_arena::{
    init_logging,
    menu::{parse_choice, render_menu, MenuChoice},
    AiPlayer, CliPlayer, Player, SaveFiles, Session, TurnState,
};
use clap::Parser;
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Battleship against an automated opponent", long_about = None)]
struct Cli {
    /// Resumable save written when returning to the menu.
    #[arg(long, default_value = battleship_arena::persistence::DEFAULT_SAVE_FILE)]
    save_file: PathBuf,
    /// Board dump written on pause and on exit.
    #[arg(long, default_value = battleship_arena::persistence::DEFAULT_DUMP_FILE)]
    dump_file: PathBuf,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Let the computer play the parent side as well.
    #[arg(long)]
    autoplay: bool,
    /// Log level; overrides BATTLESHIP_LOG.
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    match io::stdin().read_line(&mut line)? {
        0 => Ok(None),
        _ => Ok(Some(line)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let saves = SaveFiles::new(cli.save_file, cli.dump_file);
    let mut session = Session::new();

    loop {
        let in_progress = session.is_resumable();
        print!("{}", render_menu(in_progress));
        io::stdout().flush()?;
        let Some(line) = read_line()? else {
            println!("\nExiting the game. Goodbye!");
            return Ok(());
        };

        match parse_choice(&line, in_progress) {
            Some(MenuChoice::NewGame) => {
                session.start_new(&mut rng);
                println!("\nNew game started.");
            }
            Some(MenuChoice::LoadGame) => match saves.load_state() {
                Ok(snapshot) => {
                    session.load_into(snapshot);
                    println!("\nGame loaded successfully.");
                }
                Err(e) => {
                    log::debug!("load failed: {}", e);
                    println!("\nNo saved game found.");
                }
            },
            Some(MenuChoice::Continue) => match session.continue_game() {
                Ok(()) => println!("\nContinuing the game..."),
                Err(e) => println!("\n{}", e),
            },
            Some(MenuChoice::DisplayGrids) => match session.render_grids() {
                Ok(grids) => println!("\n{}", grids),
                Err(e) => println!("\n{}", e),
            },
            Some(MenuChoice::RelocateShips) => match session.relocate_ships(&mut rng) {
                Ok(()) => println!("\nYour ships have been relocated."),
                Err(e) => println!("\n{}", e),
            },
            Some(MenuChoice::Exit) => {
                if in_progress {
                    println!("\nExiting the game. Saving final board states...");
                    saves.try_dump_boards(&session.snapshot());
                } else {
                    println!("\nExiting the game. Goodbye!");
                }
                return Ok(());
            }
            None => println!("\nInvalid choice. Please enter a valid option."),
        }

        if session.is_ready() {
            let parent: Box<dyn Player> = if cli.autoplay {
                Box::new(AiPlayer::new())
            } else {
                Box::new(CliPlayer::stdio())
            };
            let outcome = session
                .play_round(parent, Box::new(AiPlayer::new()), &mut rng, Some(saves.clone()))
                .await?;
            if let (TurnState::GameOver, Some(winner), true) =
                (outcome.final_state, outcome.winner, cli.autoplay)
            {
                println!(
                    "\nGame over: {} won after {} parent and {} child attacks.",
                    winner, outcome.parent_attacks, outcome.child_attacks
                );
            }
        }
    }
}
