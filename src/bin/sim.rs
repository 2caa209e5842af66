use rand::{rngs::SmallRng, SeedableRng};
use seabattle::prelude::*;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut engine = GameEngine::setup(&mut rng, &GameConfig::default())?;
    // Primary fires blind; secondary skips cells already targeted.
    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::with_memory();
    let phase = engine.run(&mut p1, &mut p2, &mut rng)?;

    let winner = match phase {
        Phase::PrimaryWon => Some("primary"),
        Phase::SecondaryWon => Some("secondary"),
        Phase::InProgress => None,
    };
    let summary = |side: Side| {
        let board = engine.board(side);
        json!({
            "shots": engine.shots_fired(side),
            "ships_lost": board.destroyed_count(),
            "fleet": board.ships().len(),
        })
    };

    let result = json!({
        "seed": seed,
        "phase": phase,
        "primary": summary(Side::Primary),
        "secondary": summary(Side::Secondary),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
