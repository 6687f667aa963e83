pub mod cli;
pub mod error;
pub mod package;
pub mod report;
pub mod training;
pub mod types;
pub mod utils;
