//! Presence normalizer entry point
//!
//! Run with:
//! ```bash
//! cargo run -p presence-cli -- activity activity.json
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use std::process::ExitCode;

use clap::Parser;
use presence_cli::Cli;

fn main() -> ExitCode {
    presence_cli::app::run(Cli::parse())
}
