//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod config;
pub mod deals;
pub mod directory;
pub mod market;
pub mod matching;
pub mod news;
pub mod portfolio;
pub mod teaser;

/// Dispatch a command to its handler
pub fn run(ctx: &mut AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Directory(args) => directory::run(ctx, args),
        Commands::Match(args) => matching::run(ctx, args),
        Commands::Teaser(args) => teaser::run(ctx, args),
        Commands::Market(args) => market::run(ctx, args),
        Commands::Deals(args) => deals::run(ctx, args),
        Commands::Portfolio(args) => portfolio::run(ctx, args),
        Commands::News(args) => news::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}
