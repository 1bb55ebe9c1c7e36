use std::io;

use clap::Parser;
use lights_out::core::{DEFAULT_CHANCE_LIGHT_STARTS_ON, DEFAULT_COLS, DEFAULT_ROWS};
use lights_out::{run_session, BoardConfig, BoardEngine, TextView};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "lights-out", version, about = "Play Lights Out in the terminal")]
struct Args {
    /// Number of rows
    #[arg(long, env = "LIGHTS_OUT_ROWS", default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of columns
    #[arg(long, env = "LIGHTS_OUT_COLS", default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Chance in [0, 1] that a light starts on
    #[arg(long, env = "LIGHTS_OUT_CHANCE", default_value_t = DEFAULT_CHANCE_LIGHT_STARTS_ON)]
    chance: f64,

    /// Seed for a reproducible game (random when omitted)
    #[arg(long, env = "LIGHTS_OUT_SEED")]
    seed: Option<u64>,

    /// Glyph for lit cells
    #[arg(long, default_value_t = 'O')]
    lit: char,

    /// Glyph for unlit cells
    #[arg(long, default_value_t = '.')]
    unlit: char,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = BoardConfig::new(args.rows, args.cols, args.chance);
    let mut engine = match args.seed {
        Some(seed) => BoardEngine::with_seed(config, seed)?,
        None => BoardEngine::new(config)?,
    };
    info!("session seed {}", engine.seed());

    let view = TextView::new().with_glyphs(args.lit, args.unlit);
    let stdin = io::stdin();
    let summary = run_session(&mut engine, &view, stdin.lock(), io::stdout())?;

    println!(
        "{} games, {} solved (seed {})",
        summary.games_played,
        summary.wins,
        engine.seed()
    );
    Ok(())
}
