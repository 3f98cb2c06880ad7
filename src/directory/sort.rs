//! Ranking for filtered directory results.
//!
//! When any filtered entity carries a positive match score, score order wins
//! outright; the user's sort spec only applies to unscored result sets. Both
//! paths use a stable sort so equal keys keep store insertion order.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::directory::entity::Entity;
use crate::directory::score::ScoreIndex;
use crate::error::{FdError, Result};

/// Sortable entity attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Type,
    Location,
    Aum,
}

impl FromStr for SortField {
    type Err = FdError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            "location" => Ok(Self::Location),
            "aum" => Ok(Self::Aum),
            other => Err(FdError::UnknownSortField(other.to_string())),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Type => write!(f, "type"),
            Self::Location => write!(f, "location"),
            Self::Aum => write!(f, "aum"),
        }
    }
}

/// Sort direction flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Field plus direction; the fallback ordering when no scores are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    #[must_use]
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    fn compare(&self, a: &Entity, b: &Entity) -> Ordering {
        let ordering = match self.field {
            SortField::Name => compare_text(&a.name, &b.name),
            SortField::Type => compare_text(&a.entity_type.to_string(), &b.entity_type.to_string()),
            SortField::Location => compare_text(&a.location, &b.location),
            SortField::Aum => compare_text(
                a.aum.as_deref().unwrap_or(""),
                b.aum.as_deref().unwrap_or(""),
            ),
        };
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Rank a filtered result set.
///
/// A full O(n log n) pass over the input; no incremental maintenance. The
/// input order (store insertion order, post-filter) is the tie-break for
/// equal keys on both paths.
#[must_use]
pub fn rank<'a>(
    filtered: Vec<&'a Entity>,
    scores: &ScoreIndex,
    spec: SortSpec,
) -> Vec<&'a Entity> {
    let mut ranked = filtered;
    if scores.any_positive(ranked.iter().map(|e| e.id.as_str())) {
        ranked.sort_by(|a, b| {
            scores
                .score_for(&b.id)
                .partial_cmp(&scores.score_for(&a.id))
                .unwrap_or(Ordering::Equal)
        });
    } else {
        ranked.sort_by(|a, b| spec.compare(a, b));
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::entity::EntityType;
    use crate::directory::score::MatchScore;

    fn make_entity(id: &str, name: &str, aum: &str) -> Entity {
        Entity {
            id: id.to_string(),
            name: name.to_string(),
            entity_type: EntityType::Investor,
            description: String::new(),
            location: "Austin, TX".to_string(),
            focus_areas: vec![],
            min_check_size: None,
            max_check_size: None,
            contact_email: String::new(),
            website: String::new(),
            rating: 4.0,
            aum: Some(aum.to_string()),
            deal_count: None,
        }
    }

    fn scores(entries: &[(&str, f64)]) -> ScoreIndex {
        ScoreIndex::new(
            entries
                .iter()
                .map(|(id, score)| MatchScore {
                    entity_id: (*id).to_string(),
                    score: *score,
                    rationale: String::new(),
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_score_override_beats_sort_spec() {
        let a = make_entity("a", "Alpha", "$10M");
        let b = make_entity("b", "Beta", "$50M");
        let c = make_entity("c", "Gamma", "$100M");
        let index = scores(&[("a", 40.0), ("c", 90.0)]);

        // Name-descending would put Gamma first anyway; use ascending to
        // prove scores win.
        let spec = SortSpec::new(SortField::Name, SortDirection::Ascending);
        let ranked = rank(vec![&a, &b, &c], &index, spec);
        let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_zero_score_ties_keep_insertion_order() {
        let a = make_entity("a", "Zeta", "$10M");
        let b = make_entity("b", "Alpha", "$50M");
        let c = make_entity("c", "Mid", "$100M");
        let index = scores(&[("c", 90.0)]);

        let ranked = rank(
            vec![&a, &b, &c],
            &index,
            SortSpec::new(SortField::Name, SortDirection::Ascending),
        );
        let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        // c wins on score; a and b both score 0 and keep their relative order.
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_fallback_sort_by_name() {
        let z = make_entity("z", "Zeta", "$10M");
        let a = make_entity("a", "Alpha", "$50M");
        let m = make_entity("m", "Mid", "$100M");
        let empty = ScoreIndex::empty();

        let asc = rank(
            vec![&z, &a, &m],
            &empty,
            SortSpec::new(SortField::Name, SortDirection::Ascending),
        );
        let names: Vec<&str> = asc.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);

        let desc = rank(
            vec![&z, &a, &m],
            &empty,
            SortSpec::new(SortField::Name, SortDirection::Descending),
        );
        let names: Vec<&str> = desc.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Mid", "Alpha"]);
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let a = make_entity("a", "alpha", "");
        let b = make_entity("b", "Beta", "");
        let ranked = rank(
            vec![&b, &a],
            &ScoreIndex::empty(),
            SortSpec::new(SortField::Name, SortDirection::Ascending),
        );
        let names: Vec<&str> = ranked.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "Beta"]);
    }

    #[test]
    fn test_sort_by_aum_string() {
        let a = make_entity("a", "A", "$10M");
        let b = make_entity("b", "B", "$5B+");
        let empty = ScoreIndex::empty();
        let ranked = rank(
            vec![&a, &b],
            &empty,
            SortSpec::new(SortField::Aum, SortDirection::Ascending),
        );
        // Formatted strings compare lexicographically: "$10M" < "$5B+".
        let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_aum_sorts_first_ascending() {
        let mut a = make_entity("a", "A", "");
        a.aum = None;
        let b = make_entity("b", "B", "$10M");
        let ranked = rank(
            vec![&b, &a],
            &ScoreIndex::empty(),
            SortSpec::new(SortField::Aum, SortDirection::Ascending),
        );
        let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!("name".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!("AUM".parse::<SortField>().unwrap(), SortField::Aum);
        assert!("rating".parse::<SortField>().is_err());
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }
}
