#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, ui, AiPlayer, CliPlayer, GameConfig, GameEngine, GameError, Phase, Player,
    Side, DEFAULT_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg(feature = "std")]
enum FirstMove {
    Human,
    Computer,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer on the local machine.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, value_enum, default_value_t = FirstMove::Human)]
        first: FirstMove,
        #[arg(long, help = "Computer never fires at the same cell twice")]
        ai_memory: bool,
    },
    /// Watch the computer play against itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            size,
            first,
            ai_memory,
        } => {
            let mut rng = make_rng(seed);
            let config = GameConfig::with_board_size(size);
            let mut engine = GameEngine::setup(&mut rng, &config)?;
            let human = match first {
                FirstMove::Human => Side::Primary,
                FirstMove::Computer => Side::Secondary,
            };
            engine.set_hidden(human, false);
            engine.set_hidden(human.opponent(), true);

            let mut player = CliPlayer::new();
            let mut ai = if ai_memory {
                AiPlayer::with_memory()
            } else {
                AiPlayer::new()
            };
            ui::print_greeting(size);
            match play_interactive(&mut engine, human, &mut player, &mut ai, &mut rng) {
                Ok(()) => {}
                Err(GameError::InputClosed) => {
                    println!("\nInput closed, leaving the game.");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
            println!("{}", "-".repeat(20));
            if engine.phase().winner() == Some(human) {
                println!("You defeated the computer!");
            } else {
                println!("The computer won!");
            }
        }
        Commands::Auto { seed, size } => {
            let mut rng = make_rng(seed);
            let config = GameConfig::with_board_size(size);
            let mut engine = GameEngine::setup(&mut rng, &config)?;
            engine.set_hidden(Side::Secondary, false);
            let mut p1 = AiPlayer::with_memory();
            let mut p2 = AiPlayer::with_memory();
            let phase = engine.run(&mut p1, &mut p2, &mut rng)?;
            ui::print_boards(engine.board(Side::Primary), engine.board(Side::Secondary));
            let winner = match phase {
                Phase::PrimaryWon => "primary",
                Phase::SecondaryWon => "secondary",
                Phase::InProgress => "nobody",
            };
            println!(
                "Winner: {} ({} vs {} shots)",
                winner,
                engine.shots_fired(Side::Primary),
                engine.shots_fired(Side::Secondary)
            );
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play_interactive<R: std::io::BufRead>(
    engine: &mut GameEngine,
    human: Side,
    player: &mut CliPlayer<R>,
    ai: &mut AiPlayer,
    rng: &mut SmallRng,
) -> Result<(), GameError> {
    while !engine.is_over() {
        ui::print_boards(engine.board(human), engine.board(human.opponent()));
        println!("{}", "*".repeat(27));
        let acting: &mut dyn Player = if engine.acting_side() == human {
            println!("Your turn!");
            &mut *player
        } else {
            println!("Computer's turn!");
            &mut *ai
        };
        let report = engine.play_turn(acting, rng)?;
        println!("{}", ui::describe_turn(&report, human));
    }
    ui::print_boards(engine.board(human), engine.board(human.opponent()));
    Ok(())
}
