//! Filter criteria for narrowing the directory.
//!
//! A criteria value composes independent predicates; an entity passes only
//! if all of them hold:
//! - type selector (with the FAMILY_OFFICE refinement)
//! - free-text search over name, focus areas, and description
//! - location substring
//! - focus-area substring
//! - minimum check-size compatibility

use crate::directory::entity::{Entity, EntityType};

/// Type selector for the directory tabs.
///
/// `FamilyOffice` is not a stored type tag: it matches investors whose focus
/// areas carry the "family office" subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Investor,
    FamilyOffice,
    Advisor,
    Legal,
}

impl TypeFilter {
    fn matches(self, entity: &Entity) -> bool {
        match self {
            Self::All => true,
            Self::Investor => entity.entity_type == EntityType::Investor,
            Self::FamilyOffice => {
                entity.entity_type == EntityType::Investor
                    && entity
                        .focus_areas
                        .iter()
                        .any(|f| f.to_lowercase().contains("family office"))
            }
            Self::Advisor => entity.entity_type == EntityType::Advisor,
            Self::Legal => entity.entity_type == EntityType::Legal,
        }
    }
}

/// Active filter configuration. Not persisted; the caller owns mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub entity_type: TypeFilter,
    pub search: String,
    pub location: String,
    pub focus_area: String,
    pub min_check: Option<f64>,
}

impl FilterCriteria {
    /// Criteria that matches every entity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type selector.
    #[must_use]
    pub fn entity_type(mut self, filter: TypeFilter) -> Self {
        self.entity_type = filter;
        self
    }

    /// Set the free-text search string.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Set the location substring filter.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the focus-area substring filter.
    #[must_use]
    pub fn focus_area(mut self, focus: impl Into<String>) -> Self {
        self.focus_area = focus.into();
        self
    }

    /// Set the minimum check-size threshold.
    #[must_use]
    pub fn min_check(mut self, threshold: f64) -> Self {
        self.min_check = Some(threshold);
        self
    }

    /// Check if no filters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entity_type == TypeFilter::All
            && self.search.is_empty()
            && self.location.is_empty()
            && self.focus_area.is_empty()
            && self.min_check.is_none()
    }

    /// Check if an entity passes all active filters. Pure; malformed optional
    /// fields degrade permissively and never reject.
    #[must_use]
    pub fn matches(&self, entity: &Entity) -> bool {
        if !self.entity_type.matches(entity) {
            return false;
        }

        if !self.search.is_empty() {
            let term = self.search.to_lowercase();
            let hit = entity.name.to_lowercase().contains(&term)
                || entity
                    .focus_areas
                    .iter()
                    .any(|f| f.to_lowercase().contains(&term))
                || entity.description.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if !self.location.is_empty()
            && !entity
                .location
                .to_lowercase()
                .contains(&self.location.to_lowercase())
        {
            return false;
        }

        if !self.focus_area.is_empty() {
            let focus = self.focus_area.to_lowercase();
            if !entity
                .focus_areas
                .iter()
                .any(|f| f.to_lowercase().contains(&focus))
            {
                return false;
            }
        }

        if let Some(threshold) = self.min_check {
            let max = entity.max_check_value();
            // A max of 0 means no declared upper bound (or unparseable);
            // treated as compatible with any threshold.
            if max > 0.0 && max < threshold {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entity(id: &str, entity_type: EntityType, focus: &[&str]) -> Entity {
        Entity {
            id: id.to_string(),
            name: format!("Entity {id}"),
            entity_type,
            description: "We invest in B2B SaaS companies.".to_string(),
            location: "Munich, Germany".to_string(),
            focus_areas: focus.iter().map(ToString::to_string).collect(),
            min_check_size: Some("$50,000".to_string()),
            max_check_size: Some("$5,000,000".to_string()),
            contact_email: "contact@example.com".to_string(),
            website: "https://example.com".to_string(),
            rating: 4.0,
            aum: Some("$100M".to_string()),
            deal_count: Some(8),
        }
    }

    #[test]
    fn test_empty_criteria_matches_all() {
        let criteria = FilterCriteria::new();
        assert!(criteria.is_empty());
        let entity = make_entity("a", EntityType::Legal, &["M&A"]);
        assert!(criteria.matches(&entity));
    }

    #[test]
    fn test_type_partition() {
        let investor = make_entity("i", EntityType::Investor, &["SaaS"]);
        let advisor = make_entity("a", EntityType::Advisor, &["Valuation"]);
        let legal = make_entity("l", EntityType::Legal, &["M&A"]);

        let by_investor = FilterCriteria::new().entity_type(TypeFilter::Investor);
        assert!(by_investor.matches(&investor));
        assert!(!by_investor.matches(&advisor));
        assert!(!by_investor.matches(&legal));

        let by_advisor = FilterCriteria::new().entity_type(TypeFilter::Advisor);
        assert!(by_advisor.matches(&advisor));
        assert!(!by_advisor.matches(&investor));

        let by_legal = FilterCriteria::new().entity_type(TypeFilter::Legal);
        assert!(by_legal.matches(&legal));
        assert!(!by_legal.matches(&advisor));
    }

    #[test]
    fn test_family_office_refinement() {
        let fo = make_entity("fo", EntityType::Investor, &["Early Revenue", "Family office"]);
        let vc = make_entity("vc", EntityType::Investor, &["Early Revenue", "VC"]);
        // An advisor with the tag still fails the type half of the predicate.
        let advisor = make_entity("ad", EntityType::Advisor, &["Family Office Services"]);

        let criteria = FilterCriteria::new().entity_type(TypeFilter::FamilyOffice);
        assert!(criteria.matches(&fo));
        assert!(!criteria.matches(&vc));
        assert!(!criteria.matches(&advisor));
    }

    #[test]
    fn test_family_office_is_case_insensitive() {
        let fo = make_entity("fo", EntityType::Investor, &["FAMILY OFFICE"]);
        let criteria = FilterCriteria::new().entity_type(TypeFilter::FamilyOffice);
        assert!(criteria.matches(&fo));
    }

    #[test]
    fn test_search_spans_name_focus_description() {
        let entity = make_entity("a", EntityType::Investor, &["Fintech"]);

        assert!(FilterCriteria::new().search("entity a").matches(&entity));
        assert!(FilterCriteria::new().search("FINTECH").matches(&entity));
        assert!(FilterCriteria::new().search("b2b saas").matches(&entity));
        assert!(!FilterCriteria::new().search("biotech").matches(&entity));
    }

    #[test]
    fn test_location_substring() {
        let entity = make_entity("a", EntityType::Investor, &[]);
        assert!(FilterCriteria::new().location("munich").matches(&entity));
        assert!(FilterCriteria::new().location("germany").matches(&entity));
        assert!(!FilterCriteria::new().location("paris").matches(&entity));
    }

    #[test]
    fn test_focus_area_substring() {
        let entity = make_entity("a", EntityType::Investor, &["Deep Tech", "Proptech"]);
        assert!(FilterCriteria::new().focus_area("deep").matches(&entity));
        assert!(FilterCriteria::new().focus_area("PROP").matches(&entity));
        assert!(!FilterCriteria::new().focus_area("biotech").matches(&entity));
    }

    #[test]
    fn test_check_size_threshold() {
        let entity = make_entity("a", EntityType::Investor, &[]);
        // max parses to 5,000,000
        assert!(FilterCriteria::new().min_check(1_000_000.0).matches(&entity));
        assert!(FilterCriteria::new().min_check(5_000_000.0).matches(&entity));
        assert!(!FilterCriteria::new().min_check(5_000_001.0).matches(&entity));
    }

    #[test]
    fn test_check_size_permissive_when_unparseable() {
        let mut entity = make_entity("a", EntityType::Investor, &[]);
        entity.max_check_size = Some("Unlimited".to_string());
        assert!(FilterCriteria::new().min_check(1_000_000.0).matches(&entity));

        entity.max_check_size = None;
        assert!(FilterCriteria::new().min_check(1_000_000.0).matches(&entity));
    }

    #[test]
    fn test_filter_idempotence() {
        let entities = vec![
            make_entity("a", EntityType::Investor, &["SaaS"]),
            make_entity("b", EntityType::Advisor, &["Valuation"]),
            make_entity("c", EntityType::Legal, &["M&A"]),
        ];
        let criteria = FilterCriteria::new().search("invest");

        let first: Vec<&str> = entities
            .iter()
            .filter(|e| criteria.matches(e))
            .map(|e| e.id.as_str())
            .collect();
        let second: Vec<&str> = entities
            .iter()
            .filter(|e| criteria.matches(e))
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_combined_criteria() {
        let entity = make_entity("a", EntityType::Investor, &["Fintech", "Family office"]);
        let criteria = FilterCriteria::new()
            .entity_type(TypeFilter::FamilyOffice)
            .search("fintech")
            .location("germany")
            .min_check(100_000.0);
        assert!(criteria.matches(&entity));

        let miss = criteria.clone().location("paris");
        assert!(!miss.matches(&entity));
    }
}
