//! Command line surface

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use presence_common::{AppConfig, AppError, AppResult};
use presence_core::{normalize_activity_json, normalize_user_json, normalize_users_json};
use serde::Serialize;
use tracing::info;

use crate::input::InputSource;

#[derive(Parser, Debug, Clone)]
#[command(name = "presence", version, about = "Normalize rich presence records")]
pub struct Cli {
    /// Print single-line JSON
    #[arg(long, global = true)]
    pub compact: bool,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: RootCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RootCommand {
    /// Normalize a single user
    User(InputArgs),
    /// Normalize a JSON array of users, rejecting duplicate ids
    Users(InputArgs),
    /// Normalize a single activity
    Activity(InputArgs),
    /// Normalize an activity and print its compact wire form
    Wire(InputArgs),
    /// Print the resolved configuration
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON file to read; stdin when omitted or `-`
    pub file: Option<PathBuf>,
}

impl InputArgs {
    fn source(&self) -> InputSource {
        InputSource::new(self.file.clone())
    }
}

impl Cli {
    /// Run the selected command, writing the resulting document to `out`
    pub fn execute(
        &self,
        config: &AppConfig,
        stdin: &mut dyn Read,
        out: &mut dyn Write,
    ) -> AppResult<()> {
        let limits = config.normalize.limits();

        match &self.command {
            RootCommand::User(args) => {
                let value = args.source().read_json(stdin)?;
                let user = normalize_user_json(&value)?;
                info!(user_id = %user.id, "User normalized");
                self.emit(out, &user)
            }
            RootCommand::Users(args) => {
                let value = args.source().read_json(stdin)?;
                let users = normalize_users_json(&value)?;
                info!(count = users.len(), "Users normalized");
                self.emit(out, &users)
            }
            RootCommand::Activity(args) => {
                let value = args.source().read_json(stdin)?;
                let activity = normalize_activity_json(&value, &limits)?;
                self.emit(out, &activity)
            }
            RootCommand::Wire(args) => {
                let value = args.source().read_json(stdin)?;
                let activity = normalize_activity_json(&value, &limits)?;
                self.emit(out, &activity.to_wire())
            }
            RootCommand::Config => self.emit(out, config),
        }
    }

    fn emit<T: Serialize + ?Sized>(&self, out: &mut dyn Write, value: &T) -> AppResult<()> {
        let rendered = if self.compact {
            serde_json::to_string(value)
        } else {
            serde_json::to_string_pretty(value)
        }
        .map_err(AppError::internal)?;

        writeln!(out, "{rendered}")?;
        Ok(())
    }
}
