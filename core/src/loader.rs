use std::time::Duration;

use tracing::{debug, info, warn};

use crate::api::CatalogSource;
use crate::error::FetchError;
use crate::models::CatalogEntry;

pub const DEFAULT_PAGES: u32 = 4;
pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);
/// Largest page count the loader will be configured with.
pub const MAX_PAGES: u32 = 20;

// Upper bound on the up-front reservation; the list still grows past it.
const MAX_PREALLOC: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    pub pages: u32,
    pub page_size: u32,
    /// Pause between two page requests (remote rate limit).
    pub page_delay: Duration,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self { pages: DEFAULT_PAGES, page_size: DEFAULT_PAGE_SIZE, page_delay: DEFAULT_PAGE_DELAY }
    }
}

impl LoaderOptions {
    pub fn capacity(&self) -> usize {
        self.pages as usize * self.page_size as usize
    }
}

/// Fetches pages `1..=pages` one after another and concatenates them.
///
/// The first failing page aborts the load; pages already received are
/// discarded with it.
pub async fn load_catalog<S>(source: &S, opts: &LoaderOptions) -> Result<Vec<CatalogEntry>, FetchError>
where
    S: CatalogSource + ?Sized,
{
    let mut all = Vec::with_capacity(opts.capacity().min(MAX_PREALLOC));
    for page in 1..=opts.pages {
        debug!(page, limit = opts.page_size, "fetching catalog page");
        let batch = match source.fetch_page(page, opts.page_size).await {
            Ok(batch) => batch,
            Err(e) => {
                warn!(page, error = %e, "catalog page failed, aborting load");
                return Err(e);
            }
        };
        if !batch.has_next_page && page < opts.pages {
            debug!(page, "remote reports no further pages");
        }
        all.extend(batch.entries);
        if page < opts.pages {
            tokio::time::sleep(opts.page_delay).await;
        }
    }
    all.truncate(opts.capacity());
    info!(count = all.len(), "catalog loaded");
    Ok(all)
}
