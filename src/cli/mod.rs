//! Line-oriented console shell over a [`Session`](crate::core::Session).

mod args;
pub mod commands;
pub mod core;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;

pub use shell::{run_cli, SCRIPT_ENV_VAR};
