//! Geostationary navigation command-line tool.
//!
//! The binary is a thin wrapper: argument parsing lives in [`cli`],
//! configuration loading in [`settings`], and each subcommand in
//! [`commands`] returns a JSON document.

pub mod cli;
pub mod commands;
pub mod settings;
