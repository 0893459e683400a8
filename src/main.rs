use std::{
    env::args,
    fs,
    io::{self, stdout, Write},
    path::PathBuf,
    process::exit,
    thread,
};

use lifeboard::{
    config::{Config, ConfigError},
    view::{self, Mode},
    Board, Evolution, Seed, Sim, View,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Board(#[from] lifeboard::Error),

    #[error("could not draw: {0}")]
    Draw(#[from] io::Error),
}

pub fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(error) = run() {
        eprintln!("[error] {error}");
        exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = Config::from_args(args().skip(1))?;
    let content = fs::read_to_string(&config.seed_path).map_err(|source| AppError::Read {
        path: config.seed_path.clone(),
        source,
    })?;

    let board = Board::from(Seed::parse_with(&content, config.glyphs)?);
    info!(path = %config.seed_path.display(), "loaded {}", view::summary(&board));

    let mut sim = Sim::new(board);
    let view = View::new(config.glyphs, config.mode);
    let mut out = stdout().lock();

    let mut evolution = Evolution::Running;
    view.display(&mut out, &sim, evolution)?;
    while sim.generation() < config.generations && !evolution.is_settled() {
        if view.mode() == Mode::Terminal {
            thread::sleep(config.interval);
        }
        evolution = sim.step();
        view.display(&mut out, &sim, evolution)?;
    }
    if view.mode() == Mode::Terminal {
        writeln!(out)?;
    }
    Ok(())
}
