pub mod collect;
pub mod commands;

pub use commands::Cli;
