mod command;
mod runner;

pub use command::Command;
pub use runner::{run, run_seed};
