use crate::error::{FetchError, Failure};
use crate::models::CatalogEntry;
use crate::search::SearchState;
use crate::state::{FetchSlot, FetchState, Ticket};

/// Listing screen state: the catalog load plus the search over it.
#[derive(Debug, Clone, Default)]
pub struct ListingScreen {
    load: FetchSlot<(), ()>,
    search: SearchState,
}

impl ListingScreen {
    /// Starts a fresh load. The previous list is dropped.
    pub fn mount(&mut self) -> Ticket<()> {
        self.search.set_source(Vec::new());
        self.load.begin(())
    }

    pub fn unmount(&mut self) {
        self.load.reset();
        self.search = SearchState::default();
    }

    pub fn complete(&mut self, ticket: Ticket<()>, result: Result<Vec<CatalogEntry>, FetchError>) -> bool {
        match result {
            Ok(entries) => {
                let applied = self.load.complete(ticket, Ok(()));
                if applied {
                    self.search.set_source(entries);
                }
                applied
            }
            Err(e) => self.load.complete(ticket, Err(Failure::from(e))),
        }
    }

    pub fn state(&self) -> &FetchState<()> {
        self.load.state()
    }

    pub fn is_mounted(&self) -> bool {
        !matches!(self.load.state(), FetchState::Idle)
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn set_query(&mut self, query: &str) {
        self.search.set_query(query);
    }

    pub fn clear_query(&mut self) {
        self.search.clear();
    }
}
