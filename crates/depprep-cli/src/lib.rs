//! Shared implementation of the `depprep-extract` and `depprep-configure`
//! command-line utilities.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod progress;
