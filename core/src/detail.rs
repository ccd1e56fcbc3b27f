use tracing::{info, warn};

use crate::api::CatalogSource;
use crate::error::{FetchError, Failure};
use crate::models::CatalogEntryDetail;
use crate::state::{FetchSlot, FetchState, Ticket};

pub async fn fetch_detail<S>(source: &S, id: u32) -> Result<CatalogEntryDetail, FetchError>
where
    S: CatalogSource + ?Sized,
{
    info!(id, "fetching anime detail");
    source.fetch_detail(id).await.inspect_err(|e| warn!(id, error = %e, "detail fetch failed"))
}

/// Detail screen state: one fetch per identifier while the screen is active.
#[derive(Debug, Clone, Default)]
pub struct DetailFetcher {
    slot: FetchSlot<u32, CatalogEntryDetail>,
}

impl DetailFetcher {
    /// Called when the screen becomes active for `id`. Returns the ticket of a
    /// fetch to issue, or `None` when nothing should be fetched.
    pub fn activate(&mut self, id: Option<u32>) -> Option<Ticket<u32>> {
        match id {
            None => {
                self.slot.reset();
                None
            }
            Some(id) if self.slot.current_key() == Some(id) => None,
            Some(id) => Some(self.slot.begin(id)),
        }
    }

    /// Called when the screen is left; any in-flight result will be ignored.
    pub fn deactivate(&mut self) {
        self.slot.reset();
    }

    pub fn complete(&mut self, ticket: Ticket<u32>, result: Result<CatalogEntryDetail, FetchError>) -> bool {
        self.slot.complete(ticket, result.map_err(Failure::from))
    }

    pub fn state(&self) -> &FetchState<CatalogEntryDetail> {
        self.slot.state()
    }

    pub fn current_id(&self) -> Option<u32> {
        self.slot.current_key()
    }
}
