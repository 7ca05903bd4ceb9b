//! Finder tests against the in-memory fake provider.

mod common;

use std::sync::Arc;

use common::{MemoryProvider, visit, visit_with};
use hindsight::{Error, FilterConfig, Transition, VisitFinder, VisitQuery};

#[tokio::test]
async fn empty_page_search_yields_none() {
    let provider = Arc::new(MemoryProvider::new());
    let finder = VisitFinder::new(provider);

    let records = finder.visits_data(&VisitQuery::new()).await.unwrap();
    assert!(records.is_none());

    let entries = finder
        .search(&VisitQuery::new(), &FilterConfig::default())
        .await
        .unwrap();
    assert!(entries.is_none());
}

#[tokio::test]
async fn visits_outside_the_window_are_excluded() {
    let provider = Arc::new(
        MemoryProvider::new().page(
            "http://x.com/a",
            "A",
            vec![visit(500), visit(100), visit(50), visit(5)],
        ),
    );
    let finder = VisitFinder::new(provider);

    let query = VisitQuery::new().between(10, 200);
    let records = finder.visits_data(&query).await.unwrap().unwrap();
    let times: Vec<i64> = records.iter().map(|r| r.datetime_ms).collect();
    assert_eq!(times, vec![100, 50]);
}

#[tokio::test]
async fn records_are_sorted_newest_first_across_pages() {
    let provider = Arc::new(
        MemoryProvider::new()
            .page("http://a.com/", "A", vec![visit(30), visit(90)])
            .page("http://b.com/", "B", vec![visit(60)]),
    );
    let finder = VisitFinder::new(provider);

    let records = finder
        .visits_data(&VisitQuery::new().between(0, 100))
        .await
        .unwrap()
        .unwrap();
    let times: Vec<i64> = records.iter().map(|r| r.datetime_ms).collect();
    assert_eq!(times, vec![90, 60, 30]);
}

#[tokio::test]
async fn max_count_truncates_after_sorting() {
    let provider = Arc::new(
        MemoryProvider::new().page("http://a.com/", "A", vec![visit(10), visit(30), visit(20)]),
    );
    let finder = VisitFinder::new(provider);

    let query = VisitQuery::new().between(0, 100).limit(2);
    let records = finder.visits_data(&query).await.unwrap().unwrap();
    let times: Vec<i64> = records.iter().map(|r| r.datetime_ms).collect();
    assert_eq!(times, vec![30, 20]);
}

#[tokio::test]
async fn reversed_window_is_rejected() {
    let provider = Arc::new(MemoryProvider::new());
    let finder = VisitFinder::new(provider);

    let query = VisitQuery::new().between(200, 100);
    let result = finder.visits_data(&query).await;
    assert!(matches!(result, Err(Error::InvalidQuery(_))));
}

#[tokio::test]
async fn one_failing_page_does_not_fail_the_call() {
    let provider = Arc::new(
        MemoryProvider::new()
            .page("http://ok.com/", "Ok", vec![visit(100)])
            .page("http://bad.com/", "Bad", vec![visit(90)])
            .fail_visits_for("http://bad.com/"),
    );
    let finder = VisitFinder::new(provider);

    let records = finder
        .visits_data(&VisitQuery::new().between(0, 200))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, "http://ok.com/");
}

// Scenario: one page with a link visit at t=100 and a reload at t=50. After
// the descending sort the reload is not at index 0, so the reload rule does
// not touch it; it is the same-URL adjacency rule that collapses it.
#[tokio::test]
async fn trailing_reload_is_collapsed_by_adjacency_not_reload_rule() {
    let provider = Arc::new(MemoryProvider::new().page(
        "http://x.com/a",
        "A",
        vec![
            visit_with(100, Transition::Link),
            visit_with(50, Transition::Reload),
        ],
    ));
    let finder = VisitFinder::new(provider);

    let query = VisitQuery::new().between(0, 200);
    let entries = finder
        .search(&query, &FilterConfig::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].datetime_ms(), 100);

    // With the adjacency rule disabled the reload survives, confirming the
    // reload rule only ever applies to the newest record.
    let keep_dupes = FilterConfig {
        exclude_reload: true,
        exclude_protocol_change: false,
    };
    let entries = finder.search(&query, &keep_dupes).await.unwrap().unwrap();
    let times: Vec<i64> = entries.iter().map(|e| e.datetime_ms()).collect();
    assert_eq!(times, vec![100, 50]);
}

#[tokio::test]
async fn head_reload_is_dropped() {
    let provider = Arc::new(MemoryProvider::new().page(
        "http://x.com/a",
        "A",
        vec![visit_with(100, Transition::Reload)],
    ));
    let finder = VisitFinder::new(provider);

    let entries = finder
        .search(
            &VisitQuery::new().between(0, 200),
            &FilterConfig::default(),
        )
        .await
        .unwrap()
        .unwrap();
    assert!(entries.is_empty());
}

// Scenario: consecutive http/https visits to the same path keep only the
// newer one.
#[tokio::test]
async fn protocol_change_is_collapsed() {
    let provider = Arc::new(
        MemoryProvider::new()
            .page("http://y.com/p", "P", vec![visit(300)])
            .page("https://y.com/p", "P", vec![visit(299)]),
    );
    let finder = VisitFinder::new(provider);

    let entries = finder
        .search(
            &VisitQuery::new().between(0, 400),
            &FilterConfig::default(),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].url, "http://y.com/p");
    assert_eq!(entries[0].datetime_ms(), 300);
}

#[tokio::test]
async fn text_filter_matches_title_or_url() {
    let provider = Arc::new(
        MemoryProvider::new()
            .page("http://rust-lang.org/", "Home", vec![visit(100)])
            .page("http://example.com/", "Rust by Example", vec![visit(90)])
            .page("http://other.org/", "Other", vec![visit(80)]),
    );
    let finder = VisitFinder::new(provider);

    let query = VisitQuery::new().with_text("rust").between(0, 200);
    let records = finder.visits_data(&query).await.unwrap().unwrap();
    assert_eq!(records.len(), 2);
}

// The accumulate loop re-queries with the remaining count and a window
// below the oldest record seen. A page lost to the page cap in round one
// (here: the cap is spent on a page whose visit fetch fails) is picked up
// by a later round instead of silently shrinking the result.
#[tokio::test]
async fn search_accumulates_across_rounds_after_partial_failure() {
    let provider = Arc::new(
        MemoryProvider::new()
            .page("http://bad.com/", "Bad", vec![visit(100)])
            .page("http://b.com/", "B", vec![visit(90)])
            .page("http://c.com/", "C", vec![visit(80)])
            .fail_visits_for("http://bad.com/"),
    );
    let finder = VisitFinder::new(Arc::clone(&provider));

    let query = VisitQuery::new().between(0, 200).limit(2);
    let entries = finder
        .search(&query, &FilterConfig::default())
        .await
        .unwrap()
        .unwrap();
    let times: Vec<i64> = entries.iter().map(|e| e.datetime_ms()).collect();
    assert_eq!(times, vec![90, 80]);
    // Two page searches: the first round was starved by the failing page.
    assert_eq!(provider.search_calls(), 2);
}

// When history runs out before the cap is met, the loop stops on the
// empty-search sentinel and returns what it has.
#[tokio::test]
async fn search_returns_short_when_history_runs_out() {
    let provider = Arc::new(
        MemoryProvider::new()
            .page("http://a.com/", "A", vec![visit(100)])
            .page("http://b.com/", "B", vec![visit(90)]),
    );
    let finder = VisitFinder::new(provider);

    let query = VisitQuery::new().between(0, 200).limit(5);
    let entries = finder
        .search(&query, &FilterConfig::default())
        .await
        .unwrap()
        .unwrap();
    let times: Vec<i64> = entries.iter().map(|e| e.datetime_ms()).collect();
    assert_eq!(times, vec![100, 90]);
}

// Filter attrition is not compensated after the fact: the loop stops once
// the raw count reaches the cap, so the filtered page may be smaller.
#[tokio::test]
async fn filtered_page_may_undershoot_the_cap() {
    let provider = Arc::new(
        MemoryProvider::new()
            .page("http://y.com/p", "P", vec![visit(300)])
            .page("https://y.com/p", "P", vec![visit(299)]),
    );
    let finder = VisitFinder::new(provider);

    let query = VisitQuery::new().between(0, 400).limit(2);
    let entries = finder
        .search(&query, &FilterConfig::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn equal_millisecond_visits_tie_break_on_id() {
    let provider = Arc::new(MemoryProvider::new().page(
        "http://a.com/",
        "A",
        vec![
            hindsight::VisitEvent {
                visit_time_ms: 100,
                id: 1,
                referring_id: None,
                transition: Transition::Link,
            },
            hindsight::VisitEvent {
                visit_time_ms: 100,
                id: 2,
                referring_id: None,
                transition: Transition::Link,
            },
        ],
    ));
    let finder = VisitFinder::new(provider);

    let records = finder
        .visits_data(&VisitQuery::new().between(0, 200))
        .await
        .unwrap()
        .unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
}
