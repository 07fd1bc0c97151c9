pub mod aggregate;
pub mod cli;
pub mod discovery;
pub mod errors;
pub mod models;
pub mod output;
pub mod parsers;
pub mod render;
pub mod thresholds;
pub mod trends;
