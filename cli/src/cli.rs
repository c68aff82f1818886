//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::infra::config::YamlSlotStore;

/// Parallels Desktop VM slots for build agents
#[derive(Parser)]
#[command(
    name = "deskcloud",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List configured VM slots
    Slots,

    /// List selectable post-build behaviors
    Behaviors,

    /// Show the command a slot receives after a build
    PostBuild(commands::post_build::PostBuildArgs),

    /// Validate the slot file
    Check,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<()> {
        let Cli { json, command } = self;
        let store = YamlSlotStore::default();
        match command {
            Command::Slots => commands::slots::run(&store, json),
            Command::Behaviors => commands::behaviors::run(json),
            Command::PostBuild(args) => commands::post_build::run(&store, &args, json),
            Command::Check => commands::check::run(&store),
            Command::Version => commands::version::run(json),
        }
    }
}
