//! Property tests for the pure pieces of the directory pipeline.

use proptest::prelude::*;

use flowdeck::directory::{
    DEFAULT_PAGE_SIZE, Entity, EntityType, MatchScore, PageWindow, ScoreIndex, SortDirection,
    SortField, SortSpec, parse_currency, rank,
};

fn entity(idx: usize, name: &str) -> Entity {
    Entity {
        id: format!("e{idx}"),
        name: name.to_string(),
        entity_type: EntityType::Investor,
        description: String::new(),
        location: String::new(),
        focus_areas: Vec::new(),
        min_check_size: None,
        max_check_size: None,
        contact_email: String::new(),
        website: String::new(),
        rating: 0.0,
        aum: None,
        deal_count: None,
    }
}

proptest! {
    #[test]
    fn page_window_is_always_in_range(page in 0usize..10_000, total in 0usize..5_000) {
        let window = PageWindow::compute(page, DEFAULT_PAGE_SIZE, total);
        prop_assert!(window.page >= 1);
        prop_assert!(window.page <= window.total_pages);
        prop_assert!(window.total_pages >= 1);
        prop_assert!(window.start <= window.end);
        prop_assert!(window.end <= total);
    }

    #[test]
    fn page_windows_tile_the_result_set(total in 0usize..2_000, size in 1usize..100) {
        let mut covered = 0;
        let window = PageWindow::compute(1, size, total);
        for page in 1..=window.total_pages {
            let w = PageWindow::compute(page, size, total);
            prop_assert_eq!(w.start, covered);
            covered = w.end;
        }
        prop_assert_eq!(covered, total);
    }

    #[test]
    fn parse_currency_never_panics(raw in "\\PC*") {
        let value = parse_currency(&raw);
        prop_assert!(value.is_finite());
    }

    #[test]
    fn parse_currency_reads_plain_dollar_amounts(amount in 0u32..100_000_000) {
        let formatted = format!("${amount}");
        prop_assert_eq!(parse_currency(&formatted), f64::from(amount));
    }

    #[test]
    fn rank_is_a_permutation(names in proptest::collection::vec("[a-zA-Z ]{1,12}", 0..50)) {
        let entities: Vec<Entity> = names
            .iter()
            .enumerate()
            .map(|(i, n)| entity(i, n))
            .collect();
        let refs: Vec<&Entity> = entities.iter().collect();
        let spec = SortSpec::new(SortField::Name, SortDirection::Ascending);
        let ranked = rank(refs, &ScoreIndex::empty(), spec);

        prop_assert_eq!(ranked.len(), entities.len());
        let mut before: Vec<&str> = entities.iter().map(|e| e.id.as_str()).collect();
        let mut after: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn equal_sort_keys_preserve_input_order(count in 1usize..30) {
        // All names identical: a stable sort must keep store order.
        let entities: Vec<Entity> = (0..count).map(|i| entity(i, "same")).collect();
        let refs: Vec<&Entity> = entities.iter().collect();
        let spec = SortSpec::new(SortField::Name, SortDirection::Descending);
        let ranked = rank(refs, &ScoreIndex::empty(), spec);

        let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        let expected: Vec<String> = (0..count).map(|i| format!("e{i}")).collect();
        prop_assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn any_positive_score_puts_scored_entities_first(
        scored in 1usize..10,
        unscored in 1usize..10,
    ) {
        let total = scored + unscored;
        let entities: Vec<Entity> = (0..total).map(|i| entity(i, "zzz")).collect();
        let scores: Vec<MatchScore> = (0..scored)
            .map(|i| MatchScore {
                entity_id: format!("e{i}"),
                score: 10.0 + i as f64,
                rationale: String::new(),
            })
            .collect();
        let index = ScoreIndex::new(scores).unwrap();

        let refs: Vec<&Entity> = entities.iter().collect();
        let spec = SortSpec::new(SortField::Name, SortDirection::Ascending);
        let ranked = rank(refs, &index, spec);

        for (pos, e) in ranked.iter().enumerate() {
            let has_score = index.score_for(&e.id) > 0.0;
            prop_assert_eq!(has_score, pos < scored);
        }
        // Scored block is ordered by score descending.
        let head: Vec<f64> = ranked[..scored].iter().map(|e| index.score_for(&e.id)).collect();
        for pair in head.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }
}
