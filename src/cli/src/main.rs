#![warn(clippy::pedantic)]

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use color_eyre::{eyre::WrapErr, owo_colors::OwoColorize};
use cube_model::{Cube, Move, MoveKind};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use resolution::{Phase, ResolutionStrategy, Singmaster, SolverConfig};

/// Scrambles, inspects and solves cubes layer by layer
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the unfolded cube after applying a scramble.
    Show {
        /// The scramble to apply, e.g. "R U' F2".
        scramble: String,
        /// The number of layers of the cube.
        #[arg(short, long, default_value_t = 3)]
        dimension: usize,
    },
    /// Find the moves that solve the first two layers after a scramble.
    Solve {
        /// The scramble to apply, e.g. "R U' F2".
        scramble: String,
        /// The solver configuration file to use, in TOML format.
        #[arg(long, short = 'c', value_name = "SOLVER_CONFIG")]
        config: Option<PathBuf>,
        /// Stop after this phase.
        #[arg(long, value_enum, default_value_t = PhaseArg::SecondLayer)]
        through: PhaseArg,
    },
    /// Print a random scramble.
    Scramble {
        /// How many face turns to make.
        #[arg(short, long, default_value_t = 25)]
        length: usize,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum PhaseArg {
    Orient,
    Cross,
    Corners,
    SecondLayer,
    LastLayer,
}

impl From<PhaseArg> for Phase {
    fn from(value: PhaseArg) -> Self {
        match value {
            PhaseArg::Orient => Phase::OrientFirstLayer,
            PhaseArg::Cross => Phase::FirstLayerCross,
            PhaseArg::Corners => Phase::FirstLayerCorners,
            PhaseArg::SecondLayer => Phase::SecondLayer,
            PhaseArg::LastLayer => Phase::LastLayer,
        }
    }
}

fn scrambled(scramble: &str, dimension: usize) -> color_eyre::Result<Cube> {
    let mut cube = Cube::new(dimension)?;
    let moves = Move::parse_sequence(scramble).wrap_err("Could not read the scramble")?;
    for mv in moves {
        mv.perform(&mut cube)?;
    }
    Ok(cube)
}

/// Random face turns, never turning the same face twice in a row.
fn random_scramble(rng: &mut fastrand::Rng, length: usize) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::with_capacity(length);
    while moves.len() < length {
        let kind = MoveKind::FACES[rng.usize(0..MoveKind::FACES.len())];
        if moves.last().is_some_and(|last| last.kind == kind) {
            continue;
        }
        moves.push(Move {
            kind,
            inverse: rng.bool(),
        });
    }
    moves
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    match cli.command {
        Commands::Show {
            scramble,
            dimension,
        } => {
            let cube = scrambled(&scramble, dimension)?;
            print!("{cube}");
        }
        Commands::Solve {
            scramble,
            config,
            through,
        } => {
            let config = match config {
                Some(path) => SolverConfig::load(&path)
                    .wrap_err_with(|| format!("Failed to load {}", path.display()))?,
                None => SolverConfig::default(),
            };
            info!("Using {config:?}");

            let cube = scrambled(&scramble, 3)?;
            let strategy = Singmaster::with_config(&cube, config)?;
            let solution = strategy.solve_through(through.into())?;

            println!("{} {}", strategy.name().bold(), strategy.description());
            println!("{}", solution.to_string().green());
            println!("{} moves", solution.len());
            if let Some(phase) = solution.pending_phase() {
                println!("{}", format!("The {phase} phase remains").yellow());
            }
        }
        Commands::Scramble { length, seed } => {
            let mut rng = match seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            println!("{}", Move::render_sequence(&random_scramble(&mut rng, length)));
        }
    }

    Ok(())
}
