//! flowdeck directory - Browse and filter the entity directory

use clap::Args;
use colored::Colorize;

use crate::app::AppContext;
use crate::directory::{DirectoryView, Entity, SortDirection, SortField, SortSpec, TypeFilter};
use crate::error::{FdError, Result};

#[derive(Args, Debug)]
pub struct DirectoryArgs {
    /// Free-text search over name, description and focus areas
    #[arg(long, short)]
    pub search: Option<String>,

    /// Type tab: all, investor, family-office, advisor, legal
    #[arg(long, short = 't', default_value = "all")]
    pub r#type: String,

    /// Location substring filter
    #[arg(long, short)]
    pub location: Option<String>,

    /// Focus-area substring filter
    #[arg(long, short)]
    pub focus: Option<String>,

    /// Minimum check size in dollars
    #[arg(long)]
    pub min_check: Option<f64>,

    /// Sort column: name, type, location, aum
    #[arg(long, default_value = "name")]
    pub sort: String,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Page number (1-based)
    #[arg(long, short, default_value = "1")]
    pub page: usize,

    /// Results per page (default from config)
    #[arg(long)]
    pub page_size: Option<usize>,
}

pub fn run(ctx: &mut AppContext, args: &DirectoryArgs) -> Result<()> {
    let page_size = args.page_size.unwrap_or(ctx.config.directory.page_size);
    let mut view = DirectoryView::new(page_size);

    view.set_type_filter(parse_type_filter(&args.r#type)?);
    if let Some(ref search) = args.search {
        view.set_search(search.clone());
    }
    if let Some(ref location) = args.location {
        view.set_location(location.clone());
    }
    if let Some(ref focus) = args.focus {
        view.set_focus_area(focus.clone());
    }
    view.set_min_check(args.min_check);

    let field: SortField = args.sort.parse()?;
    let direction = if args.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    view.set_sort(SortSpec::new(field, direction));
    view.set_page(args.page);

    let result = view.run(&ctx.store);

    if ctx.machine_mode {
        println!(
            "{}",
            serde_json::json!({
                "entities": result.entities,
                "page": result.window.page,
                "total_pages": result.window.total_pages,
                "total_results": result.window.total_results,
            })
        );
        return Ok(());
    }

    if result.entities.is_empty() {
        println!("{} No entities match the current filters.", "!".yellow());
        return Ok(());
    }

    for entity in &result.entities {
        print_entity(entity);
    }

    let footer = format!(
        "Page {} of {} ({} results)",
        result.window.page, result.window.total_pages, result.window.total_results
    );
    println!("{}", footer.dimmed());

    Ok(())
}

fn print_entity(entity: &Entity) {
    let checks = match (&entity.min_check_size, &entity.max_check_size) {
        (Some(min), Some(max)) => format!("{min} - {max}"),
        (Some(min), None) => format!("{min}+"),
        _ => "-".to_string(),
    };
    println!(
        "{}  {}  {}",
        entity.name.bold(),
        entity.entity_type.to_string().cyan(),
        entity.location.dimmed()
    );
    println!(
        "    rating {:.1}  aum {}  checks {}  deals {}",
        entity.rating,
        entity.aum.as_deref().unwrap_or("-"),
        checks,
        entity.deal_count.map_or("-".to_string(), |d| d.to_string()),
    );
}

fn parse_type_filter(raw: &str) -> Result<TypeFilter> {
    match raw.to_lowercase().as_str() {
        "all" => Ok(TypeFilter::All),
        "investor" => Ok(TypeFilter::Investor),
        "family-office" | "family_office" | "fo" => Ok(TypeFilter::FamilyOffice),
        "advisor" => Ok(TypeFilter::Advisor),
        "legal" => Ok(TypeFilter::Legal),
        other => Err(FdError::InvalidInput(format!(
            "unknown type '{other}'. Valid: all, investor, family-office, advisor, legal"
        ))),
    }
}
