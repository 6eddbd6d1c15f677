use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, settings::SETTINGS_FILE, CliDriver, DensityTargeting, FleetSpec, GameSession,
    HuntTargeting, Settings, Targeting, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

const RULES: &str = "\
RULES

1. Each side has a fleet of 10 ships:
   - one ship of 4 cells
   - two ships of 3 cells
   - three ships of 2 cells
   - four ships of 1 cell
2. Ships may not touch each other, not even at the corners.
3. Players take turns firing at a cell of the opponent's board.
4. A hit earns another shot.
5. A miss passes the turn to the opponent.
6. The game goes on until one fleet is completely sunk.
7. Whoever sinks the whole enemy fleet first wins.";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file holding the saved board size.
    #[arg(long, global = true, default_value = SETTINGS_FILE)]
    settings: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    /// Finish off wounded ships, otherwise shoot at random.
    Hunt,
    /// Shoot where the remaining ships most likely are.
    Density,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Board size for this game (6-15); defaults to the saved setting")]
        size: Option<usize>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place your fleet at random instead of by hand")]
        auto: bool,
        #[arg(long, default_value_t = 1000, help = "Pause before each opponent shot")]
        pause_ms: u64,
        #[arg(long, value_enum, default_value_t = Strategy::Hunt)]
        strategy: Strategy,
    },
    /// Print the rules of the game.
    Rules,
    /// Show or change the saved board size.
    Settings {
        #[arg(long)]
        size: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut settings = Settings::load(&cli.settings);

    match cli.command {
        Commands::Play {
            size,
            seed,
            auto,
            pause_ms,
            strategy,
        } => {
            // --size applies to this game only; the saved default is unchanged
            let mut game = settings;
            if let Some(size) = size {
                game.set_board_size(size)?;
            }
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let pause = Duration::from_millis(pause_ms);
            let result = match strategy {
                Strategy::Hunt => {
                    run_game(game.board_size, HuntTargeting::new(), rng, auto, pause).await
                }
                Strategy::Density => {
                    run_game(game.board_size, DensityTargeting::new(), rng, auto, pause).await
                }
            };
            if let Err(e) = result {
                eprintln!("Game ended with an error: {}", e);
            }
        }
        Commands::Rules => println!("{}", RULES),
        Commands::Settings { size } => {
            if let Some(size) = size {
                settings.set_board_size(size)?;
            }
            println!(
                "Board size: {} (allowed {}-{})",
                settings.board_size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            );
        }
    }

    settings.save(&cli.settings)?;
    Ok(())
}

async fn run_game<T: Targeting>(
    size: usize,
    targeting: T,
    rng: SmallRng,
    auto: bool,
    pause: Duration,
) -> anyhow::Result<()> {
    let mut session = GameSession::with_targeting(size, FleetSpec::standard(), targeting, rng)?;
    if auto {
        session.auto_place_fleet()?;
    }
    let stdin = io::stdin();
    let mut driver = CliDriver::new(stdin.lock(), io::stdout()).with_pause(pause);
    if driver.play(&mut session).await?.is_none() {
        println!("\nGame abandoned.");
    }
    Ok(())
}
