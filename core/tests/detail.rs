mod support;

use animeviewer_core::{fetch_detail, DetailFetcher, ErrorKind, FetchError};
use support::FakeCatalog;

#[tokio::test(start_paused = true)]
async fn detail_for_id_1_has_id_1() {
    let source = FakeCatalog::new(4, 25);
    let detail = fetch_detail(&source, 1).await.unwrap();
    assert_eq!(detail.id(), 1);
    assert_eq!(detail.entry.title, "Anime 1");
}

#[tokio::test(start_paused = true)]
async fn unknown_id_surfaces_not_found_state() {
    let source = FakeCatalog::new(4, 25);
    let mut screen = DetailFetcher::default();
    let ticket = screen.activate(Some(424242)).unwrap();

    let result = fetch_detail(&source, ticket.key).await;
    assert!(matches!(result, Err(FetchError::NotFound { id: 424242 })));
    assert!(screen.complete(ticket, result));
    assert_eq!(screen.state().failure().map(|f| f.kind), Some(ErrorKind::NotFound));
}

#[tokio::test(start_paused = true)]
async fn switching_ids_mid_flight_keeps_the_newest() {
    let source = FakeCatalog::new(4, 25);
    let mut screen = DetailFetcher::default();
    let a = screen.activate(Some(3)).unwrap();
    let b = screen.activate(Some(4)).unwrap();

    let (ra, rb) = tokio::join!(fetch_detail(&source, a.key), fetch_detail(&source, b.key));
    assert!(screen.complete(b, rb));
    assert!(!screen.complete(a, ra));
    assert_eq!(screen.state().value().map(|d| d.id()), Some(4));
}
