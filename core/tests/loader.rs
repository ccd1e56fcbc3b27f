mod support;

use std::time::Duration;

use animeviewer_core::{load_catalog, FetchError, ListingScreen, LoaderOptions};
use pretty_assertions::assert_eq;
use support::FakeCatalog;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn four_pages_of_25_give_100_entries_in_page_order() {
    let source = FakeCatalog::new(4, 25);
    let list = load_catalog(&source, &LoaderOptions::default()).await.unwrap();

    assert_eq!(list.len(), 100);
    assert_eq!(list.iter().map(|e| e.id).collect::<Vec<_>>(), (1..=100).collect::<Vec<_>>());
    assert_eq!(source.requested_pages(), vec![1, 2, 3, 4]);
}

#[tokio::test(start_paused = true)]
async fn pages_are_requested_one_at_a_time_with_a_pause() {
    let source = FakeCatalog::new(4, 25);
    let opts = LoaderOptions::default();
    let started = Instant::now();
    load_catalog(&source, &opts).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(source.max_in_flight(), 1);
    let calls = source.calls();
    for pair in calls.windows(2) {
        let gap = pair[1].1 - pair[0].1;
        assert!(gap >= source.latency + opts.page_delay, "gap {gap:?} too short");
    }
    // No pause after the last page.
    let expected = source.latency * 4 + opts.page_delay * 3;
    assert!(elapsed >= expected);
    assert!(elapsed < expected + opts.page_delay);
}

#[tokio::test(start_paused = true)]
async fn a_failing_page_aborts_the_rest() {
    let source = FakeCatalog::new(4, 25).failing_on(3);
    let err = load_catalog(&source, &LoaderOptions::default()).await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 500 }));
    assert_eq!(source.requested_pages(), vec![1, 2, 3]);
}

#[tokio::test(start_paused = true)]
async fn failure_never_exposes_partial_pages_to_the_screen() {
    let source = FakeCatalog::new(4, 25).failing_on(4);
    let mut screen = ListingScreen::default();
    let ticket = screen.mount();
    let result = load_catalog(&source, &LoaderOptions::default()).await;
    assert!(screen.complete(ticket, result));

    assert!(screen.state().failure().is_some());
    assert_eq!(screen.search().total(), 0);
    assert_eq!(screen.search().visible_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn huge_page_count_still_reports_the_first_error() {
    let source = FakeCatalog::new(4, 25).failing_on(1);
    let opts = LoaderOptions { pages: u32::MAX, page_size: 25, ..LoaderOptions::default() };
    let err = load_catalog(&source, &opts).await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 500 }));
    assert_eq!(source.requested_pages(), vec![1]);
}

#[tokio::test(start_paused = true)]
async fn respects_custom_page_count_and_size() {
    let source = FakeCatalog::new(10, 10);
    let opts = LoaderOptions { pages: 2, page_size: 10, page_delay: Duration::from_millis(1) };
    let list = load_catalog(&source, &opts).await.unwrap();

    assert_eq!(list.len(), opts.capacity());
    assert_eq!(list.last().map(|e| e.id), Some(20));
    assert_eq!(source.requested_pages(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn load_then_search_then_clear() {
    let source = FakeCatalog::new(4, 25);
    let mut screen = ListingScreen::default();
    let ticket = screen.mount();
    let result = load_catalog(&source, &LoaderOptions::default()).await;
    assert!(screen.complete(ticket, result));
    let all: Vec<u32> = screen.search().visible().map(|e| e.id).collect();
    assert_eq!(all.len(), 100);

    screen.set_query("naruto");
    let hits: Vec<_> = screen.search().visible().collect();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|e| e.title.to_lowercase().contains("naruto")));
    let expected = (1..=100u32).filter(|id| id % 10 == 0 || id % 7 == 0).count();
    assert_eq!(hits.len(), expected);

    screen.clear_query();
    assert_eq!(screen.search().visible().map(|e| e.id).collect::<Vec<_>>(), all);
}
