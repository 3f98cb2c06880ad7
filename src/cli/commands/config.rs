//! flowdeck config - Show the effective configuration

use clap::Args;

use crate::app::AppContext;
use crate::error::{FdError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print as TOML instead of the human summary
    #[arg(long)]
    pub toml: bool,
}

pub fn run(ctx: &mut AppContext, args: &ConfigArgs) -> Result<()> {
    if ctx.machine_mode {
        println!("{}", serde_json::to_string(&redacted(ctx))?);
        return Ok(());
    }

    if args.toml {
        let rendered = toml::to_string_pretty(&redacted(ctx))
            .map_err(|err| FdError::Config(format!("render config: {err}")))?;
        print!("{rendered}");
        return Ok(());
    }

    let config = &ctx.config;
    println!("directory.page_size = {}", config.directory.page_size);
    println!("matching.endpoint   = {}", config.matching.endpoint);
    println!("matching.model      = {}", config.matching.model);
    println!(
        "matching.api_key    = {}",
        if config.matching.api_key.is_some() { "<set>" } else { "<unset>" }
    );
    println!("market.endpoint     = {}", config.market.endpoint);
    println!(
        "market.api_key      = {}",
        if config.market.api_key.is_some() { "<set>" } else { "<unset>" }
    );
    Ok(())
}

/// The config with secrets masked; keys never leave the process.
fn redacted(ctx: &AppContext) -> crate::config::Config {
    let mut config = ctx.config.clone();
    if config.matching.api_key.is_some() {
        config.matching.api_key = Some("<redacted>".to_string());
    }
    if config.market.api_key.is_some() {
        config.market.api_key = Some("<redacted>".to_string());
    }
    config
}
