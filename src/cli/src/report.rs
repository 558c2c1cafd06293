use cube_core::{Color, Move};
use itertools::Itertools;
use layered_solver::SolveInstructions;
use owo_colors::OwoColorize;
use serde::Deserialize;

/// How solutions are printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Text,
    Json,
}

fn paint(mv: Move) -> String {
    let text = mv.to_string();
    match mv.side {
        Color::White => text.white().to_string(),
        Color::Red => text.red().to_string(),
        Color::Orange => text.truecolor(255, 140, 0).to_string(),
        Color::Yellow => text.yellow().to_string(),
        Color::Green => text.green().to_string(),
        Color::Blue => text.blue().to_string(),
    }
}

pub fn print_moves(moves: &[Move]) {
    println!("{}", moves.iter().map(|&mv| paint(mv)).join(" "));
}

pub fn print_instructions(
    instructions: &SolveInstructions,
    output: Output,
) -> color_eyre::Result<()> {
    if output == Output::Json {
        println!("{}", serde_json::to_string_pretty(instructions)?);
        return Ok(());
    }

    for phase in instructions.phases() {
        let moves = instructions.phase_moves(phase).unwrap_or_default();
        print!("{:<22} {:>3} ", phase.bold(), moves.len());
        print_moves(moves);
    }

    let markers = instructions.markers();
    if !markers.is_empty() {
        println!();
        for (index, marker) in markers {
            println!(
                "{:>4}  {} {}",
                index.dimmed(),
                marker.id,
                marker.colors.iter().join("/")
            );
        }
    }

    println!("{} {} moves", "Total:".bold(), instructions.len());
    Ok(())
}
