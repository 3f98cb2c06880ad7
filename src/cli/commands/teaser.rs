//! flowdeck teaser - Generate an anonymized deal teaser

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::matching::TeaserInputs;

#[derive(Args, Debug)]
pub struct TeaserArgs {
    /// Company name (kept anonymized in the output)
    #[arg(long)]
    pub company: String,

    /// Industry sector
    #[arg(long)]
    pub industry: String,

    /// Key highlights, comma-separated
    #[arg(long)]
    pub highlights: String,
}

pub fn run(ctx: &mut AppContext, args: &TeaserArgs) -> Result<()> {
    let client = ctx.match_client()?;
    let teaser = client.generate_teaser(&TeaserInputs {
        company_name: args.company.clone(),
        industry: args.industry.clone(),
        key_highlights: args.highlights.clone(),
    });

    if ctx.machine_mode {
        println!("{}", serde_json::json!({ "teaser": teaser }));
    } else {
        println!("{teaser}");
    }
    Ok(())
}
