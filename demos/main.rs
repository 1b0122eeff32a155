//! Load a terrain grid, print it, and evaluate single-step moves on it.
//!
//! ```text
//! stepcost-demo --grid demos/data/field.txt --move 0,2:0,3 --move 2,3:1,4
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::Parser;
use stepcost_core::Position;
use stepcost_moves::{MovementEvaluator, RenderConfig, SpatialIndex, render};

#[derive(Debug, Parser)]
#[command(author, version, about = "Evaluate single-step moves on a terrain grid")]
struct Cli {
    /// Path to the grid file (rows, columns, then one symbol per cell)
    #[arg(long)]
    grid: PathBuf,

    /// Move to evaluate, written `row,col:row,col`; may be repeated
    #[arg(long = "move", value_name = "FROM:TO")]
    moves: Vec<MoveQuery>,

    /// Skip printing the grid
    #[arg(long)]
    no_render: bool,
}

#[derive(Debug, Clone, Copy)]
struct MoveQuery {
    from: Position,
    to: Position,
}

impl FromStr for MoveQuery {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((from, to)) = s.split_once(':') else {
            bail!("expected FROM:TO, got {s:?}");
        };
        Ok(Self {
            from: parse_position(from)?,
            to: parse_position(to)?,
        })
    }
}

fn parse_position(s: &str) -> Result<Position> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected row,col, got {s:?}");
    };
    let x = x.trim().parse().with_context(|| format!("bad row in {s:?}"))?;
    let y = y.trim().parse().with_context(|| format!("bad column in {s:?}"))?;
    Ok(Position::new(x, y))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let index = SpatialIndex::from_path(&cli.grid)
        .with_context(|| format!("loading {}", cli.grid.display()))?;

    if !cli.no_render {
        print!("{}", render(&index, &RenderConfig::default()));
    }

    let evaluator = MovementEvaluator::new(&index);
    if cli.moves.is_empty() {
        eprintln!("no --move given, evaluating the neighbours of {}", Position::ZERO);
        for (to, movement) in evaluator.neighbours(Position::ZERO)? {
            println!("{} -> {to}: {movement}", Position::ZERO);
        }
        return Ok(());
    }

    for q in &cli.moves {
        match evaluator.evaluate(q.from, q.to) {
            Ok(movement) => println!("{} -> {}: {movement}", q.from, q.to),
            Err(err) => println!("{} -> {}: invalid ({err})", q.from, q.to),
        }
    }
    Ok(())
}
