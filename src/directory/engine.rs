//! The directory view: pipeline driver and page-number state.
//!
//! Filtering, ranking and pagination are pure functions over immutable
//! snapshots; [`DirectoryView`] only remembers the active criteria, sort
//! spec, score index, and the current page. Every input change recomputes
//! the pipeline in full.

use crate::directory::entity::{Entity, EntityStore};
use crate::directory::filter::{FilterCriteria, TypeFilter};
use crate::directory::page::{DEFAULT_PAGE_SIZE, PageWindow};
use crate::directory::score::ScoreIndex;
use crate::directory::sort::{SortDirection, SortField, SortSpec, rank};

/// One page of ranked results plus its window metadata.
#[derive(Debug, Clone)]
pub struct DirectoryPage {
    pub entities: Vec<Entity>,
    pub window: PageWindow,
}

/// View-state holder for the directory screen.
///
/// The page number is the only value that persists across calls. Changing
/// the search text, type tab, location/focus filters, check threshold, sort
/// *field*, or the score index resets it to 1. Toggling the sort *direction*
/// does not: a direction flip refines the same view rather than forming a
/// new query, and that asymmetry is preserved deliberately.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    criteria: FilterCriteria,
    sort: SortSpec,
    scores: ScoreIndex,
    page: usize,
    page_size: usize,
}

impl Default for DirectoryView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl DirectoryView {
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::new(),
            sort: SortSpec::default(),
            scores: ScoreIndex::empty(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreIndex {
        &self.scores
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the search text. Resets the page when the text changes.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.criteria.search != term {
            self.criteria.search = term;
            self.page = 1;
        }
    }

    /// Switch the type tab. Resets the page when the selection changes.
    pub fn set_type_filter(&mut self, filter: TypeFilter) {
        if self.criteria.entity_type != filter {
            self.criteria.entity_type = filter;
            self.page = 1;
        }
    }

    /// Replace the location filter. Resets the page when it changes.
    pub fn set_location(&mut self, location: impl Into<String>) {
        let location = location.into();
        if self.criteria.location != location {
            self.criteria.location = location;
            self.page = 1;
        }
    }

    /// Replace the focus-area filter. Resets the page when it changes.
    pub fn set_focus_area(&mut self, focus: impl Into<String>) {
        let focus = focus.into();
        if self.criteria.focus_area != focus {
            self.criteria.focus_area = focus;
            self.page = 1;
        }
    }

    /// Replace the minimum check-size threshold. Resets the page when it
    /// changes.
    pub fn set_min_check(&mut self, threshold: Option<f64>) {
        if self.criteria.min_check != threshold {
            self.criteria.min_check = threshold;
            self.page = 1;
        }
    }

    /// Replace the whole criteria value. Resets the page when it differs.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if self.criteria != criteria {
            self.criteria = criteria;
            self.page = 1;
        }
    }

    /// Select a sort column the way a header click does: selecting the
    /// active field toggles direction and keeps the page; selecting a new
    /// field switches to it ascending and resets the page.
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort.field == field {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortSpec::new(field, SortDirection::Ascending);
            self.page = 1;
        }
    }

    /// Replace the sort spec wholesale. A field change resets the page; a
    /// pure direction change does not.
    pub fn set_sort(&mut self, spec: SortSpec) {
        if self.sort.field != spec.field {
            self.page = 1;
        }
        self.sort = spec;
    }

    /// Install a new score index (typically the result of a matching call).
    /// Always resets the page: stale page numbers must never survive a
    /// ranking change.
    pub fn set_scores(&mut self, scores: ScoreIndex) {
        self.scores = scores;
        self.page = 1;
    }

    /// Drop all match scores, returning to the user-selected sort order.
    pub fn clear_scores(&mut self) {
        self.set_scores(ScoreIndex::empty());
    }

    /// Request a page. Out-of-range values are clamped during [`Self::run`].
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Run filter -> rank -> paginate over a store snapshot.
    ///
    /// Pure with respect to the store; the view's own page number is clamped
    /// to the computed window so a later `next_page` starts from the page
    /// actually shown.
    pub fn run(&mut self, store: &EntityStore) -> DirectoryPage {
        let filtered: Vec<&Entity> = store
            .entities()
            .iter()
            .filter(|e| self.criteria.matches(e))
            .collect();
        let ranked = rank(filtered, &self.scores, self.sort);

        let window = PageWindow::compute(self.page, self.page_size, ranked.len());
        self.page = window.page;

        let entities = ranked[window.start..window.end]
            .iter()
            .map(|e| (*e).clone())
            .collect();
        DirectoryPage { entities, window }
    }
}
