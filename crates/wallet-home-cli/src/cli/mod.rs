pub mod commands;
pub mod simulated;

pub use commands::{run, Command, SessionArgs};
