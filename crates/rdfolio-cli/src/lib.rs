//! # RDFolio CLI Library
//!
//! Command definitions and execution for the `rdfolio` binary. Each command
//! is one synchronous read-modify-write pass over a mapping snapshot.

pub mod commands;

pub use commands::{Cli, Command, CommandExecutor};
