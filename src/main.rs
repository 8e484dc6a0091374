use anyhow::Context;
use clap::Parser;
use gridstrike::{
    init_logging, input, placer, ui, EngineState, GameEngine, GameError, Grid, MatchConfig,
    DEFAULT_BOARD_SIZE, DEFAULT_NUM_SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Human vs. computer grid guessing game", long_about = None)]
struct Cli {
    /// Board side length (both sides use the same board).
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Ships per side; also the number of hits needed to win.
    #[arg(long, default_value_t = DEFAULT_NUM_SHIPS)]
    ships: usize,

    /// Fix RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = MatchConfig::new(cli.size, cli.ships)
        .context("invalid match configuration (check --size and --ships)")?;

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    ui::print_banner(config.size, config.ships);
    let player_name = input::request_player_name()?;
    println!("{}", "-".repeat(35));

    let mut player_grid = Grid::new(config.size, config.ships)?;
    let mut computer_grid = Grid::new(config.size, config.ships)?;
    placer::populate(&mut player_grid, &mut rng)?;
    placer::populate(&mut computer_grid, &mut rng)?;

    let mut engine = GameEngine::new(player_grid, computer_grid);
    run_match(&mut engine, &mut rng, &player_name)
}

fn run_match(engine: &mut GameEngine, rng: &mut SmallRng, player_name: &str) -> anyhow::Result<()> {
    loop {
        match engine.state() {
            EngineState::AwaitingPlayerGuess => {
                ui::print_match_view(player_name, engine.player_grid(), engine.computer_grid());
                println!("\nPlayer's turn:");
                let coord = loop {
                    let (row, col) = input::request_coordinate(engine.computer_grid().size())?;
                    match engine.check_player_guess(row, col) {
                        Ok(coord) => break coord,
                        Err(GameError::OutOfBounds) => {
                            println!("That coordinate is outside the board. Try again.")
                        }
                        Err(GameError::AlreadyGuessed) => {
                            println!("You already guessed that cell. Try again.")
                        }
                        Err(e) => return Err(e.into()),
                    }
                };
                let outcome = engine.player_guess(coord)?;
                println!("You guessed {} - {}!", coord, outcome);
            }
            EngineState::AwaitingComputerGuess => {
                println!("\nComputer's turn:");
                if let Some((coord, outcome)) = engine.computer_guess(rng)? {
                    println!("Computer guessed {} and it was a {}", coord, outcome);
                }
                ui::print_scores(engine.scores());
            }
            EngineState::Finished(result) => {
                ui::print_match_view(player_name, engine.player_grid(), engine.computer_grid());
                ui::print_scores(engine.scores());
                println!("{}", result);
                return Ok(());
            }
        }
    }
}
