//! Property tests for fuzzy matching and ranking invariants.

use chrono::{Duration, TimeZone, Utc};
use foodshare_search::{
    levenshtein_distance, parse_query, rank_results, similarity, SearchUserContext,
    SearchableItem,
};
use proptest::prelude::*;

fn item() -> impl Strategy<Value = SearchableItem> {
    (
        "[a-z]{1,4}",
        prop::collection::vec(prop::sample::select(vec!["bread", "milk", "apples", "soup", "fresh"]), 1..4),
        prop::sample::select(vec!["bakery", "dairy", "produce", "prepared"]),
        0i64..30,
        0u64..10_000,
    )
        .prop_map(|(id, words, category, age_days, views)| SearchableItem {
            id,
            title: words.join(" "),
            description: String::new(),
            category: category.to_string(),
            dietary_tags: Vec::new(),
            author_id: "author".into(),
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() - Duration::days(age_days),
            location: None,
            view_count: views,
        })
}

proptest! {
    #[test]
    fn edit_distance_identity(s in "\\PC{0,12}") {
        prop_assert_eq!(levenshtein_distance(&s, &s), 0);
        prop_assert_eq!(levenshtein_distance(&s, ""), s.chars().count());
    }

    #[test]
    fn edit_distance_symmetric(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
    }

    #[test]
    fn similarity_bounded(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn ranking_sorted_and_deterministic(
        query in prop::sample::select(vec!["bread", "fresh milk", "soup today", "", "aples"]),
        items in prop::collection::vec(item(), 0..20),
    ) {
        let context = SearchUserContext::anonymous(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        let parsed = parse_query(query);

        let first = rank_results(&parsed, &items, &context);
        let second = rank_results(&parsed, &items, &context);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), items.len());

        for pair in first.windows(2) {
            prop_assert!(pair[0].total >= pair[1].total);
            if pair[0].total == pair[1].total {
                prop_assert!(pair[0].item.id <= pair[1].item.id);
            }
        }
        for result in &first {
            prop_assert!(result.total >= 0.0);
        }
    }
}
