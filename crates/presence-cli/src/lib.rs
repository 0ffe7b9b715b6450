//! # presence-cli
//!
//! Command line front end that normalizes presence JSON documents.

pub mod app;
pub mod commands;
pub mod input;

pub use commands::{Cli, RootCommand};
