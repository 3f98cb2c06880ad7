//! flowdeck market - Quotes, IPO calendar and index overview

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct MarketArgs {
    /// Ticker symbol to quote
    pub symbol: Option<String>,

    /// Show upcoming IPOs
    #[arg(long)]
    pub ipos: bool,

    /// Show the market index overview
    #[arg(long)]
    pub overview: bool,
}

pub fn run(ctx: &mut AppContext, args: &MarketArgs) -> Result<()> {
    let client = ctx.quote_client()?;

    if let Some(ref symbol) = args.symbol {
        let quote = client.stock_quote(symbol);
        if ctx.machine_mode {
            println!("{}", serde_json::to_string(&quote)?);
        } else {
            let change = format!("{:+.2}%", quote.change_percent);
            let change = if quote.change_percent >= 0.0 {
                change.green()
            } else {
                change.red()
            };
            println!("{}  ${:.2}  {}", quote.symbol.bold(), quote.price, change);
            println!(
                "    vol {}  mcap {}  p/e {:.1}  52w {:.2}-{:.2}{}",
                quote.volume,
                quote.market_cap,
                quote.pe_ratio,
                quote.low_52,
                quote.high_52,
                if quote.synthetic {
                    "  (synthetic)".dimmed().to_string()
                } else {
                    String::new()
                }
            );
        }
    }

    if args.ipos {
        let ipos = client.upcoming_ipos();
        if ctx.machine_mode {
            println!("{}", serde_json::to_string(&ipos)?);
        } else {
            for ipo in &ipos {
                println!(
                    "{}  {}  files {}  {}",
                    ipo.symbol.bold(),
                    ipo.company_name,
                    ipo.filing_date,
                    ipo.offering_price.as_deref().unwrap_or("-").dimmed()
                );
            }
        }
    }

    if args.overview || (args.symbol.is_none() && !args.ipos) {
        let overview = client.market_overview();
        if ctx.machine_mode {
            println!("{}", serde_json::to_string(&overview)?);
        } else {
            for index in &overview {
                let change = format!("{:+.1}%", index.change);
                let change = if index.change >= 0.0 {
                    change.green()
                } else {
                    change.red()
                };
                println!("{:<12} {:>10.2}  {}", index.name.bold(), index.value, change);
            }
        }
    }

    Ok(())
}
