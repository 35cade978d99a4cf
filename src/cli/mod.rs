//! CLI commands
//!
//! Command implementations for the `catalog-bot` binary.

mod browse;
mod process;
mod style;

pub use browse::{run_list, run_show};
pub use process::{ProcessArgs, run_process};
