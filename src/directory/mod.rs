//! Directory search and ranking engine.
//!
//! The directory is an immutable, ordered collection of investors, advisors
//! and legal-service providers. Searching runs a purely functional pipeline:
//!
//! filter ([`FilterCriteria`]) -> rank ([`SortSpec`] or match scores) ->
//! paginate ([`PageWindow`]).
//!
//! The only state carried across calls is the current page number, owned by
//! [`DirectoryView`], which resets it whenever filters, search text, sort
//! field, or the score index change.

pub mod engine;
pub mod entity;
pub mod filter;
pub mod page;
pub mod score;
pub mod sort;

pub use engine::{DirectoryPage, DirectoryView};
pub use entity::{Entity, EntityStore, EntityType, parse_currency};
pub use filter::{FilterCriteria, TypeFilter};
pub use page::{DEFAULT_PAGE_SIZE, PageWindow};
pub use score::{MatchScore, ScoreIndex};
pub use sort::{SortDirection, SortField, SortSpec, rank};
