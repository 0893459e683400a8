//! Command line configuration of the `lifeboard` binary.
//!
//! ```text
//! lifeboard <seed-path> [--generations N] [--interval MS] [--alive C] [--dead C] [--plain]
//! ```

use std::{path::PathBuf, time::Duration};

use crate::{view::Mode, Glyphs};

pub const DEFAULT_GENERATIONS: u64 = 100;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("must provide a path argument")]
    MissingPath,

    #[error("{0} expects a value")]
    MissingValue(String),

    #[error("{flag} expects a number, got '{value}'")]
    InvalidNumber { flag: String, value: String },

    #[error("{flag} expects a single character, got '{value}'")]
    InvalidGlyph { flag: String, value: String },

    #[error("unknown flag {0}")]
    UnknownFlag(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed_path: PathBuf,
    /// upper bound on the number of computed generations.
    pub generations: u64,
    /// pause between two frames in terminal mode.
    pub interval: Duration,
    pub glyphs: Glyphs,
    pub mode: Mode,
}

impl Config {
    /// Parses arguments, the program name excluded.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut seed_path = None;
        let mut generations = DEFAULT_GENERATIONS;
        let mut interval = DEFAULT_INTERVAL;
        let mut glyphs = Glyphs::default();
        let mut mode = Mode::Terminal;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--generations" => generations = number(&arg, args.next())?,
                "--interval" => interval = Duration::from_millis(number(&arg, args.next())?),
                "--alive" => glyphs.alive = glyph(&arg, args.next())?,
                "--dead" => glyphs.dead = glyph(&arg, args.next())?,
                "--plain" => mode = Mode::Plain,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()))
                }
                _ if seed_path.is_none() => seed_path = Some(PathBuf::from(&arg)),
                _ => return Err(ConfigError::UnexpectedArgument(arg.clone())),
            }
        }

        Ok(Self {
            seed_path: seed_path.ok_or(ConfigError::MissingPath)?,
            generations,
            interval,
            glyphs,
            mode,
        })
    }
}

fn number(flag: &str, value: Option<String>) -> Result<u64, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value,
    })
}

fn glyph(flag: &str, value: Option<String>) -> Result<char, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidGlyph {
            flag: flag.to_string(),
            value,
        }),
    }
}
