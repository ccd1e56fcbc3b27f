#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use animeviewer_core::{CatalogEntry, CatalogEntryDetail, CatalogPage, CatalogSource, FetchError};
use async_trait::async_trait;
use tokio::time::Instant;

pub fn title_for(id: u32) -> String {
    if id % 10 == 0 {
        format!("NARUTO Part {id}")
    } else if id % 7 == 0 {
        format!("Boruto: Naruto Next Generations {id}")
    } else {
        format!("Anime {id}")
    }
}

pub fn entry(id: u32) -> CatalogEntry {
    CatalogEntry { id, title: title_for(id), score: 7.5, year: 2000, media_type: "TV".into(), ..Default::default() }
}

/// In-memory catalog that records how it was called.
pub struct FakeCatalog {
    pub pages: u32,
    pub page_size: u32,
    pub fail_on_page: Option<u32>,
    pub latency: Duration,
    calls: Mutex<Vec<(u32, Instant)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeCatalog {
    pub fn new(pages: u32, page_size: u32) -> Self {
        Self {
            pages,
            page_size,
            fail_on_page: None,
            latency: Duration::from_millis(50),
            calls: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    pub fn calls(&self) -> Vec<(u32, Instant)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.calls().into_iter().map(|(p, _)| p).collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for FakeCatalog {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<CatalogPage, FetchError> {
        self.calls.lock().unwrap().push((page, Instant::now()));
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_on_page == Some(page) {
            return Err(FetchError::Status { status: 500 });
        }
        let size = limit.min(self.page_size);
        let first = (page - 1) * self.page_size + 1;
        Ok(CatalogPage {
            entries: (first..first + size).map(entry).collect(),
            has_next_page: page < self.pages,
        })
    }

    async fn fetch_detail(&self, id: u32) -> Result<CatalogEntryDetail, FetchError> {
        tokio::time::sleep(self.latency).await;
        if id == 0 || id > self.pages * self.page_size {
            return Err(FetchError::NotFound { id });
        }
        Ok(CatalogEntryDetail { entry: entry(id), rank: id, popularity: id, ..Default::default() })
    }
}
