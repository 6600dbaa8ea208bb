//! Command-line interface
//!
//! Argument definitions and command handlers for the `mapdocs` binary.

pub mod args;
pub mod commands;
