//! hex-mc: play Hex against a Monte Carlo engine.
//!
//! ## Usage
//!
//! - `hex-mc` - Play as side A against the computer on a 7x7 board
//! - `hex-mc play --opponent human` - Two humans at one terminal
//! - `hex-mc demo` - Watch the engine play both sides
//! - `hex-mc analyze 3,3 2,4` - Score every reply after the given moves
//!
//! Side A connects the top and bottom rows, side B the left and right
//! columns. Moves are typed as `row,col`.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::warn;

use hex_mc::board::Board;
use hex_mc::console::{Outcome, Session};
use hex_mc::constants::{DEFAULT_BOARD_SIZE, DEFAULT_WORKERS, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use hex_mc::evaluator::{Evaluator, EvaluatorConfig, select_best};
use hex_mc::game::{Controller, Game};
use hex_mc::position::{Side, parse_coord};

/// hex-mc: Hex with a Monte Carlo computer player
#[derive(Parser)]
#[command(name = "hex-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine activity to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal; you are side A
    Play {
        /// Who plays side B
        #[arg(long, value_enum, default_value_t = Opponent::Computer)]
        opponent: Opponent,

        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Let the engine play both sides
    Demo {
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Score every free cell of a position
    Analyze {
        /// Side to evaluate for
        #[arg(long, value_enum, default_value_t = SideArg::B)]
        side: SideArg,

        /// Moves played so far as `row,col`, alternating from side A
        moves: Vec<String>,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Opponent {
    Human,
    Computer,
}

#[derive(Copy, Clone, ValueEnum)]
enum SideArg {
    A,
    B,
}

impl From<SideArg> for Side {
    fn from(s: SideArg) -> Self {
        match s {
            SideArg::A => Side::A,
            SideArg::B => Side::B,
        }
    }
}

#[derive(Args)]
struct EngineArgs {
    /// Board size (3 to 11)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Worker threads per candidate move
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Playouts per worker (defaults to a cap that shrinks on larger boards)
    #[arg(long)]
    rollouts: Option<usize>,

    /// Seed for reproducible engine moves
    #[arg(long)]
    seed: Option<u64>,

    /// Stop scoring further candidates after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,
}

impl EngineArgs {
    /// Requested size, or the default if it is not playable.
    fn board_size(&self) -> usize {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            self.size
        } else {
            warn!(
                "board size {} unsupported, using {DEFAULT_BOARD_SIZE}",
                self.size
            );
            DEFAULT_BOARD_SIZE
        }
    }

    fn evaluator(&self, size: usize) -> Evaluator {
        let mut config = EvaluatorConfig::for_size(size);
        config.workers = self.workers;
        if let Some(rollouts) = self.rollouts {
            config.rollouts_per_worker = rollouts;
        }
        config.seed = self.seed;
        config.time_limit = self.time_limit_ms.map(Duration::from_millis);
        Evaluator::new(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Some(Commands::Play { opponent, engine }) => {
            let b = match opponent {
                Opponent::Human => Controller::Human,
                Opponent::Computer => Controller::Computer,
            };
            run_game(&engine, Controller::Human, b)
        }
        Some(Commands::Demo { engine }) => {
            run_game(&engine, Controller::Computer, Controller::Computer)
        }
        Some(Commands::Analyze {
            side,
            moves,
            engine,
        }) => run_analyze(&engine, side.into(), &moves),
        None => run_game(
            &EngineArgs {
                size: DEFAULT_BOARD_SIZE,
                workers: DEFAULT_WORKERS,
                rollouts: None,
                seed: None,
                time_limit_ms: None,
            },
            Controller::Human,
            Controller::Computer,
        ),
    }
}

fn run_game(engine: &EngineArgs, a: Controller, b: Controller) -> Result<()> {
    let size = engine.board_size();
    let game = Game::new(size, a, b, engine.evaluator(size)).context("setting up the game")?;

    println!("Hex {size}x{size}: side A joins top and bottom, side B joins left and right");
    let stdin = io::stdin();
    let mut session = Session::new(game, stdin.lock(), io::stdout());
    match session.run()? {
        Outcome::Won(_) => {}
        Outcome::Abandoned => println!("Game abandoned."),
    }
    Ok(())
}

fn run_analyze(engine: &EngineArgs, side: Side, moves: &[String]) -> Result<()> {
    let size = engine.board_size();
    let mut board = Board::new(size)?;

    let mut to_move = Side::A;
    for mv in moves {
        let Some(coord) = parse_coord(mv) else {
            bail!("cannot read move {mv:?}, expected row,col");
        };
        board
            .try_place(to_move, coord)
            .with_context(|| format!("replaying move {mv}"))?;
        to_move = to_move.opponent();
    }
    println!("{board}");

    let scores = engine.evaluator(size).evaluate(&board, side)?;
    for m in &scores {
        println!("{:>6}  {:.3}", m.position.to_string(), m.score);
    }
    if let Some(best) = select_best(&scores) {
        println!("Best move for side {side}: {} ({:.3})", best.position, best.score);
    }
    Ok(())
}
