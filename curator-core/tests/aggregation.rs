//! Selection aggregation behaviour.

mod support;

use curator_core::bulk::{Aggregate, aggregate};
use curator_model::prelude::*;
use support::{gallery, init_tracing, performer, studio, tag};

#[test]
fn identical_titles_aggregate_to_the_title() {
    let selection = vec![
        gallery("1").with_title("Beach"),
        gallery("2").with_title("Beach"),
        gallery("3").with_title("Beach"),
    ];
    let result = aggregate(&selection);
    assert_eq!(result.title, Aggregate::Shared(Some("Beach".to_string())));
    assert_eq!(result.title.value().map(String::as_str), Some("Beach"));
}

#[test]
fn differing_titles_aggregate_to_indeterminate() {
    let selection = vec![gallery("1").with_title("A"), gallery("2").with_title("B")];
    let result = aggregate(&selection);
    assert!(result.title.is_indeterminate());
    assert_eq!(result.title.value(), None);
}

#[test]
fn indeterminate_does_not_reconverge() {
    init_tracing();
    let selection = vec![
        gallery("1").with_title("A"),
        gallery("2").with_title("B"),
        gallery("3").with_title("A"),
        gallery("4").with_title("A"),
    ];
    assert!(aggregate(&selection).title.is_indeterminate());
}

#[test]
fn missing_title_disagrees_with_present_title() {
    let selection = vec![gallery("1"), gallery("2").with_title("A")];
    assert!(aggregate(&selection).title.is_indeterminate());

    let both_missing = vec![gallery("1"), gallery("2")];
    assert_eq!(aggregate(&both_missing).title, Aggregate::Shared(None));
}

#[test]
fn performer_aggregation_ignores_record_order() {
    let ids = ["p3", "p1", "p2"];
    let orderings: [[usize; 3]; 4] = [[0, 1, 2], [2, 1, 0], [1, 2, 0], [1, 0, 2]];

    let expected = vec![performer("p1"), performer("p2"), performer("p3")];
    for first in orderings {
        for second in orderings {
            let mut a = gallery("1");
            for idx in first {
                a = a.with_performer(performer(ids[idx]), ids[idx]);
            }
            let mut b = gallery("2");
            for idx in second {
                b = b.with_performer(performer(ids[idx]), ids[idx]);
            }
            assert_eq!(aggregate(&[a, b]).performer_ids, expected);
        }
    }
}

#[test]
fn mismatched_sets_collapse_to_empty() {
    let selection = vec![
        gallery("1").with_tag(tag("t1"), "one"),
        gallery("2").with_tag(tag("t2"), "two"),
        gallery("3").with_tag(tag("t1"), "one"),
    ];
    assert!(aggregate(&selection).tag_ids.is_empty());
}

#[test]
fn mixed_organized_is_indeterminate() {
    let selection = vec![
        gallery("1").with_organized(true),
        gallery("2").with_organized(false),
    ];
    assert!(aggregate(&selection).organized.is_indeterminate());

    let agreed = vec![
        gallery("1").with_organized(false),
        gallery("2").with_organized(false),
    ];
    assert_eq!(aggregate(&agreed).organized, Aggregate::Shared(false));
}

#[test]
fn rating_and_studio_follow_scalar_rules() {
    let selection = vec![
        gallery("1")
            .with_title("A")
            .with_rating(5)
            .with_studio(studio("s1"), "North")
            .with_organized(true),
        gallery("2")
            .with_title("A")
            .with_rating(3)
            .with_studio(studio("s1"), "North")
            .with_organized(true),
    ];
    let result = aggregate(&selection);
    assert_eq!(result.title, Aggregate::Shared(Some("A".to_string())));
    assert!(result.rating.is_indeterminate());
    assert_eq!(result.studio_id.value(), Some(&studio("s1")));
    assert_eq!(result.organized, Aggregate::Shared(true));
}

#[test]
fn aggregation_works_over_borrowed_records() {
    let owned = vec![gallery("1").with_rating(Rating::new(2)), gallery("2").with_rating(Rating::new(2))];
    let borrowed: Vec<&SelectedGallery> = owned.iter().collect();
    assert_eq!(aggregate(&borrowed).rating, Aggregate::Shared(Some(Rating::new(2))));
}
