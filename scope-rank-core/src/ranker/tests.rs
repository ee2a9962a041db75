//! Unit coverage for the ranker.

use std::cmp::Ordering;
use std::sync::Arc;

use rstest::{fixture, rstest};

use super::{Ranked, Ranker};
use crate::test_support::{CountingWeigher, TableWeigher};
use crate::{Priority, TokenPrefixWeigher, Weigher, Weight};

#[derive(Debug, PartialEq, Eq)]
struct Rule {
    id: u32,
    selector: Option<&'static str>,
}

const fn rule(id: u32, selector: &'static str) -> Rule {
    Rule {
        id,
        selector: Some(selector),
    }
}

fn ids<'c>(rules: impl IntoIterator<Item = &'c Rule>) -> Vec<u32> {
    rules.into_iter().map(|r| r.id).collect()
}

#[fixture]
fn table() -> TableWeigher {
    TableWeigher::new()
        .with_score("high", 3)
        .with_score("mid", 2)
        .with_score("low", 1)
        .with_score("none", 0)
}

#[rstest]
fn compare_is_ascending(table: TableWeigher) {
    let ranker = Ranker::new("any", |r: &Rule| r.selector, table);
    let low = rule(1, "low");
    let high = rule(2, "high");

    assert_eq!(ranker.compare(&low, &high), Ordering::Less);
    assert_eq!(ranker.compare(&high, &low), Ordering::Greater);
    assert_eq!(ranker.compare(&high, &rule(3, "high")), Ordering::Equal);
}

#[rstest]
fn missing_selector_compares_as_no_match(table: TableWeigher) {
    let ranker = Ranker::new("any", |r: &Rule| r.selector, table);
    let unscoped = Rule {
        id: 1,
        selector: None,
    };

    assert_eq!(ranker.weigh(&unscoped), Weight::ZERO);
    assert_eq!(ranker.compare(&unscoped, &rule(2, "none")), Ordering::Equal);
    assert_eq!(ranker.compare(&unscoped, &rule(3, "low")), Ordering::Less);
}

#[rstest]
fn sort_and_filter_is_best_first_without_non_matches(table: TableWeigher) {
    let ranker = Ranker::new("any", |r: &Rule| r.selector, table);
    let rules = [
        rule(1, "low"),
        rule(2, "none"),
        rule(3, "high"),
        Rule {
            id: 4,
            selector: None,
        },
        rule(5, "unknown"),
        rule(6, "mid"),
    ];

    assert_eq!(ids(ranker.sort_and_filter(&rules)), [3, 6, 1]);
}

#[rstest]
fn ties_keep_encounter_order(table: TableWeigher) {
    let ranker = Ranker::new("any", |r: &Rule| r.selector, table);
    let rules = [
        rule(1, "mid"),
        rule(2, "high"),
        rule(3, "mid"),
        rule(4, "high"),
        rule(5, "mid"),
    ];

    assert_eq!(ids(ranker.sort_and_filter(&rules)), [2, 4, 1, 3, 5]);
    assert_eq!(ranker.max(&rules).map(|r| r.id), Some(2));
}

#[rstest]
fn priority_dominates_score() {
    let weigher = TableWeigher::new()
        .with_weight("deep", Weight::normal(9))
        .with_weight("pinned", Weight::new(1, Priority::High))
        .with_weight("demoted", Weight::new(20, Priority::Low));
    let ranker = Ranker::new("any", |r: &Rule| r.selector, weigher);
    let rules = [rule(1, "demoted"), rule(2, "deep"), rule(3, "pinned")];

    assert_eq!(ids(ranker.sort_and_filter(&rules)), [3, 2, 1]);
    assert_eq!(ranker.max(&rules).map(|r| r.id), Some(3));
}

#[rstest]
fn ranked_reports_weights(table: TableWeigher) {
    let ranker = Ranker::new("any", |r: &Rule| r.selector, table);
    let rules = [rule(1, "low"), rule(2, "high")];
    let [low, high] = &rules;

    let ranked = ranker.ranked(&rules);

    assert_eq!(
        ranked,
        [
            Ranked {
                weight: Weight::normal(3),
                candidate: high,
            },
            Ranked {
                weight: Weight::normal(1),
                candidate: low,
            },
        ]
    );
}

#[rstest]
#[case::empty(&[])]
#[case::all_zero(&["none", "unknown"])]
fn nothing_matches(table: TableWeigher, #[case] selectors: &[&'static str]) {
    let ranker = Ranker::new("any", |r: &Rule| r.selector, table);
    let rules: Vec<Rule> = selectors.iter().zip(1..).map(|(&s, id)| rule(id, s)).collect();

    assert!(ranker.sort_and_filter(&rules).is_empty());
    assert!(ranker.max(&rules).is_none());
}

#[rstest]
fn projection_without_selector_skips_the_weigher() {
    let weigher = CountingWeigher::new(TokenPrefixWeigher);
    let ranker = Ranker::new("source.rust", |r: &Rule| r.selector, &weigher);
    let rules = [
        Rule {
            id: 1,
            selector: None,
        },
        rule(2, "source"),
    ];

    assert_eq!(ids(ranker.sort_and_filter(&rules)), [2]);
    assert_eq!(weigher.calls(), 1);
}

#[rstest]
fn target_is_kept_verbatim() {
    let ranker = Ranker::new("source.java  keyword", |s: &str| Some(s), TokenPrefixWeigher);
    assert_eq!(ranker.target().as_str(), "source.java  keyword");
}

#[rstest]
fn ranks_unsized_candidates() {
    let ranker = Ranker::new("source.java", |s: &str| Some(s), TokenPrefixWeigher);
    let selectors = ["text", "source", "source.java"];

    let ranked = ranker.sort_and_filter(selectors.iter().copied());

    assert_eq!(ranked, ["source.java", "source"]);
}

#[rstest]
fn shared_ranker_agrees_across_threads() {
    let weigher: Arc<dyn Weigher> = Arc::new(TokenPrefixWeigher);
    let ranker = Ranker::new("a.b.c", |s: &String| Some(s.as_str()), weigher);
    let selectors: Vec<String> = ["a", "a.b.c", "x", "a.b"]
        .into_iter()
        .map(String::from)
        .collect();

    let results: Vec<Vec<&String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| ranker.sort_and_filter(&selectors)))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| panic!("ranking thread panicked"))
            })
            .collect()
    });

    for result in results {
        let ranked: Vec<&str> = result.into_iter().map(String::as_str).collect();
        assert_eq!(ranked, ["a.b.c", "a.b", "a"]);
    }
}

struct PanickingWeigher;

impl Weigher for PanickingWeigher {
    fn weigh(&self, _selector: &str, _scope: &str) -> Weight {
        panic!("weigher exploded");
    }
}

#[rstest]
#[should_panic(expected = "weigher exploded")]
fn weigher_panics_propagate() {
    let ranker = Ranker::new("any", |r: &Rule| r.selector, PanickingWeigher);
    assert!(ranker.sort_and_filter(&[rule(1, "low")]).is_empty());
}

#[rstest]
#[should_panic(expected = "projection exploded")]
fn projection_panics_propagate(table: TableWeigher) {
    let ranker = Ranker::new("any", exploding_projection, table);
    assert!(ranker.max(&[rule(1, "low")]).is_none());
}

fn exploding_projection(_rule: &Rule) -> Option<&str> {
    panic!("projection exploded");
}
