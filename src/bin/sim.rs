use battleship_arena::{init_logging, AiPlayer, Session};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    init_logging(None);

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::new();
    session.start_new(&mut rng);

    let outcome = session
        .play_round(Box::new(AiPlayer::new()), Box::new(AiPlayer::new()), &mut rng, None)
        .await?;

    let result = json!({
        "seed": seed,
        "outcome": outcome,
        "winner": outcome.winner.map(|role| role.to_string()),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
