pub mod cli;

pub use cli::{CliController, DEFAULT_HEIGHT, DEFAULT_WIDTH};
