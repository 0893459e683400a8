//! The game of life on a fixed-size grid with open boundaries.
//!
//! ```
//! use lifeboard::Board;
//!
//! let mut board: Board = "---\n111\n---".parse().unwrap();
//! board.cycle();
//! assert_eq!(board.render(), "-1-\n-1-\n-1-");
//! ```

pub use utils::Pos;
mod utils;

pub use error::{Error, Result, SeedError};
mod error;

pub use world::{Board, Cell};
mod world;

pub use rule::next_state;
pub mod rule;

pub use seed::{Glyphs, Seed};
pub mod seed;

pub use sim::{Evolution, History, Sim};
pub mod sim;

pub use view::View;
pub mod view;

pub mod config;
