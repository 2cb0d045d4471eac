pub mod cli;
pub mod display;

pub use cli::Cli;
