//! flowdeck match - Score the directory against a startup profile

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::directory::{DirectoryView, ScoreIndex, TypeFilter};
use crate::error::Result;
use crate::matching::MatchingProfile;

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Company name
    #[arg(long)]
    pub company: String,

    /// Industry sector
    #[arg(long)]
    pub industry: String,

    /// Location
    #[arg(long, default_value = "")]
    pub location: String,

    /// Capital sought, in dollars
    #[arg(long, default_value = "0")]
    pub raise: f64,

    /// Funding stage (e.g. Seed, Series A)
    #[arg(long, default_value = "Seed")]
    pub stage: String,

    /// Executive summary or pitch text
    #[arg(long, default_value = "")]
    pub description: String,

    /// How many scored entities to show
    #[arg(long, short, default_value = "10")]
    pub limit: usize,
}

pub fn run(ctx: &mut AppContext, args: &MatchArgs) -> Result<()> {
    let client = ctx.match_client()?;
    if !client.is_configured() && !ctx.machine_mode {
        println!(
            "{} No matching API key configured; results will be empty.",
            "!".yellow()
        );
    }

    let profile = MatchingProfile {
        company_name: args.company.clone(),
        industry: args.industry.clone(),
        location: args.location.clone(),
        raise_amount: args.raise,
        stage: args.stage.clone(),
        description: args.description.clone(),
        deck_file_name: None,
    };

    // Only investors are candidates for a raise.
    let criteria = crate::directory::FilterCriteria::new().entity_type(TypeFilter::Investor);
    let candidates: Vec<_> = ctx
        .store
        .entities()
        .iter()
        .filter(|e| criteria.matches(e))
        .cloned()
        .collect();

    let scores = client.analyze_match(&profile, &candidates);

    if ctx.machine_mode {
        println!("{}", serde_json::json!({ "matches": scores }));
        return Ok(());
    }

    if scores.is_empty() {
        println!("{} No matches returned.", "!".yellow());
        return Ok(());
    }

    // Rank the whole directory by the returned scores and show the top slice.
    let index = ScoreIndex::new(scores.clone())?;
    let mut view = DirectoryView::new(args.limit.max(1));
    view.set_type_filter(TypeFilter::Investor);
    view.set_scores(index);
    let page = view.run(&ctx.store);

    for entity in &page.entities {
        let score = view.scores().score_for(&entity.id);
        if score <= 0.0 {
            break;
        }
        println!(
            "{:>5.1}  {}  {}",
            score,
            entity.name.bold(),
            entity.location.dimmed()
        );
        if let Some(rationale) = view.scores().rationale_for(&entity.id) {
            println!("       {rationale}");
        }
    }

    Ok(())
}
