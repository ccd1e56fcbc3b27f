use animeviewer_core::{
    CatalogEntry, CatalogEntryDetail, DetailFetcher, Failure, FetchError, ListingScreen, Route, Ticket,
};
use tracing::{debug, info};

use crate::images::DecodedCover;

/// Results sent back from background tasks to the UI thread.
#[derive(Debug)]
pub enum Msg {
    CatalogLoaded {
        ticket: Ticket<()>,
        result: Result<Vec<CatalogEntry>, FetchError>,
    },
    DetailLoaded {
        ticket: Ticket<u32>,
        result: Result<CatalogEntryDetail, FetchError>,
    },
    CoverDecoded(DecodedCover),
    CoverFailed { url: String },
}

/// Background work a navigation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    LoadCatalog(Ticket<()>),
    LoadDetail(Ticket<u32>),
}

/// Router plus the state of both screens.
#[derive(Debug, Default)]
pub struct AppState {
    route: Route,
    mounted: bool,
    pub listing: ListingScreen,
    pub detail: DetailFetcher,
    pub search_input: String,
}

impl AppState {
    pub fn route(&self) -> Route {
        self.route
    }

    /// Mounts the initial route.
    pub fn boot(&mut self, route: Route) -> Option<Effect> {
        self.route = route;
        self.mount_current()
    }

    pub fn navigate(&mut self, route: Route) -> Option<Effect> {
        if self.mounted && route == self.route {
            return None;
        }
        info!(from = %self.route, to = %route, "navigate");
        // Moving between two detail ids keeps the screen; only the id changes.
        let same_screen = matches!((self.route, route), (Route::Detail(_), Route::Detail(_)));
        if !same_screen {
            self.unmount_current();
        }
        self.route = route;
        self.mount_current()
    }

    fn mount_current(&mut self) -> Option<Effect> {
        self.mounted = true;
        match self.route {
            Route::Listing => {
                self.search_input.clear();
                Some(Effect::LoadCatalog(self.listing.mount()))
            }
            Route::Detail(id) => self.detail.activate(id).map(Effect::LoadDetail),
            Route::NotFound => None,
        }
    }

    fn unmount_current(&mut self) {
        match self.route {
            Route::Listing => self.listing.unmount(),
            Route::Detail(_) => self.detail.deactivate(),
            Route::NotFound => {}
        }
        self.mounted = false;
    }

    pub fn set_query(&mut self, query: &str) {
        if self.search_input != query {
            self.search_input = query.to_string();
        }
        self.listing.set_query(query);
    }

    pub fn clear_query(&mut self) {
        self.search_input.clear();
        self.listing.clear_query();
    }

    /// Applies a fetch result. Returns the failure when a fresh error was
    /// applied, so the caller can surface it.
    pub fn apply(&mut self, msg: Msg) -> Option<Failure> {
        match msg {
            Msg::CatalogLoaded { ticket, result } => {
                let failure = result.as_ref().err().map(Failure::from);
                if !self.listing.complete(ticket, result) {
                    debug!(generation = ticket.generation, "dropping stale catalog result");
                    return None;
                }
                failure
            }
            Msg::DetailLoaded { ticket, result } => {
                let failure = result.as_ref().err().map(Failure::from);
                if !self.detail.complete(ticket, result) {
                    debug!(id = ticket.key, generation = ticket.generation, "dropping stale detail result");
                    return None;
                }
                failure
            }
            Msg::CoverDecoded(_) | Msg::CoverFailed { .. } => None,
        }
    }
}
