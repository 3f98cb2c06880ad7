//! Command-line interface definitions.
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;

/// FlowDeck - deal sourcing and investor directory from the terminal
#[derive(Parser, Debug)]
#[command(name = "flowdeck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable machine-readable JSON output
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/flowdeck/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the investor/advisor directory
    Directory(commands::directory::DirectoryArgs),

    /// Score the directory against a startup profile
    #[command(name = "match")]
    Match(commands::matching::MatchArgs),

    /// Generate an anonymized deal teaser
    Teaser(commands::teaser::TeaserArgs),

    /// Stock quotes, IPO calendar and market overview
    Market(commands::market::MarketArgs),

    /// Manage the deal pipeline board
    Deals(commands::deals::DealsArgs),

    /// Track portfolio companies and goals
    Portfolio(commands::portfolio::PortfolioArgs),

    /// Browse the news feed
    News(commands::news::NewsArgs),

    /// Show the effective configuration
    Config(commands::config::ConfigArgs),
}
