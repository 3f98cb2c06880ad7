//! Application context shared by all CLI commands.

use crate::cli::Cli;
use crate::config::Config;
use crate::directory::EntityStore;
use crate::error::Result;
use crate::market::QuoteClient;
use crate::matching::MatchClient;
use crate::news::NewsFeed;
use crate::pipeline::{NetworkDeal, StageBoard};
use crate::portfolio::Portfolio;
use crate::seed;

/// Everything a command needs: effective config, output mode, and the
/// seeded working datasets.
pub struct AppContext {
    pub config: Config,
    /// JSON output for machine consumption.
    pub machine_mode: bool,
    pub store: EntityStore,
    pub board: StageBoard,
    pub portfolio: Portfolio,
    pub news: NewsFeed,
    pub network_deals: Vec<NetworkDeal>,
}

impl AppContext {
    /// Build the context from parsed CLI flags.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        tracing::debug!(page_size = config.directory.page_size, "config loaded");

        Ok(Self {
            config,
            machine_mode: cli.machine,
            store: seed::entity_store()?,
            board: seed::stage_board()?,
            portfolio: seed::portfolio(),
            news: seed::news_feed(),
            network_deals: seed::network_deals(),
        })
    }

    /// Client for the matching service, built from config.
    pub fn match_client(&self) -> Result<MatchClient> {
        MatchClient::from_config(&self.config.matching)
    }

    /// Client for the market-data service, built from config.
    pub fn quote_client(&self) -> Result<QuoteClient> {
        QuoteClient::from_config(&self.config.market)
    }
}
