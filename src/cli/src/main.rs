#![warn(clippy::pedantic)]

mod report;

use std::{fs, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use cube_core::{Color, Cube, CubeBuilder, parse_moves, random_scramble};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use layered_solver::{LayeredSolver, SolverConfig};
use log::{LevelFilter, debug, info};
use report::{Output, print_instructions, print_moves};
use serde::Deserialize;

/// Solves a 3x3 cube layer by layer
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Solver and output settings, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a scanned cube.
    Solve {
        /// Six groups of eight facelet letters, one group per side in the order
        /// W R O Y G B, separated by spaces or commas.
        facelets: String,
    },
    /// Scramble a solved cube and solve it again.
    Scramble {
        /// Seed for the scramble; a random one is used when absent.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of quarter turns in the scramble.
        #[arg(long, default_value_t = 30)]
        length: usize,
    },
    /// Apply a move sequence to a solved cube and show the result.
    Apply {
        /// The move sequence to apply, e.g. "R Y' G2".
        moves: String,
    },
}

/// Contents of the `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CliConfig {
    solver: SolverConfig,
    output: Output,
}

impl CliConfig {
    fn load(path: Option<&PathBuf>) -> color_eyre::Result<Self> {
        let Some(path) = path else {
            return Ok(CliConfig::default());
        };

        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Could not read the configuration file {path:?}"))?;
        let config = toml::from_str::<CliConfig>(&text)
            .wrap_err_with(|| format!("Could not parse the configuration file {path:?}"))?;
        Ok(config)
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = CliConfig::load(cli.config.as_ref())?;
    debug!("Using {config:?}");
    let solver = LayeredSolver::new(config.solver)?;

    match cli.command {
        Commands::Solve { facelets } => {
            let mut cube = parse_facelets(&facelets)?;
            let instructions = solver.solve(&mut cube)?;
            print_instructions(&instructions, config.output)?;
        }
        Commands::Scramble { seed, length } => {
            let seed = seed.unwrap_or_else(|| fastrand::u64(..));
            info!("Scrambling with seed {seed}");

            let scramble = random_scramble(&mut fastrand::Rng::with_seed(seed), length);
            let mut cube = Cube::solved();
            cube.apply_all(scramble.iter().copied());

            if config.output == Output::Text {
                print!("Scramble: ");
                print_moves(&scramble);
                println!("{cube}\n");
            }
            let instructions = solver.solve(&mut cube)?;
            print_instructions(&instructions, config.output)?;
        }
        Commands::Apply { moves } => {
            let moves = parse_moves(&moves)?;
            let mut cube = Cube::solved();
            cube.apply_all(moves);
            match config.output {
                Output::Text => println!("{cube}"),
                Output::Json => {
                    let sides = cube.faces().iter().map(|face| face.colors()).collect_vec();
                    println!("{}", serde_json::to_string_pretty(&sides)?);
                }
            }
        }
    }

    Ok(())
}

/// Reads the facelets of all six sides, given in [`Color::ALL`] order.
fn parse_facelets(text: &str) -> color_eyre::Result<Cube> {
    let groups = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|group| !group.is_empty())
        .collect_vec();

    if groups.len() != Color::ALL.len() {
        return Err(eyre!(
            "Expected {} groups of facelets, found {}",
            Color::ALL.len(),
            groups.len()
        ));
    }

    let mut builder = CubeBuilder::new();
    for (side, group) in Color::ALL.into_iter().zip(groups) {
        let values = group
            .chars()
            .map(|letter| {
                Color::from_letter(letter)
                    .map(|color| color as u8)
                    .ok_or_else(|| eyre!("`{letter}` on the {side} side is not a color letter"))
            })
            .collect::<color_eyre::Result<Vec<_>>>()?;
        builder.add_side(side, &values)?;
    }

    Ok(builder.build()?)
}
