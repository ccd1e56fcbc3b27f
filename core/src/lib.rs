//! Headless side of the viewer: the Jikan client, the paged catalog loader,
//! title search and the detail fetcher, with the screen state they drive.

mod api;
mod detail;
mod error;
mod listing;
mod loader;
mod models;
mod routes;
mod search;
mod state;

pub use api::{CatalogPage, CatalogSource, JikanClient, DEFAULT_BASE_URL};
pub use detail::{fetch_detail, DetailFetcher};
pub use error::{ErrorKind, Failure, FetchError};
pub use listing::ListingScreen;
pub use loader::{load_catalog, LoaderOptions, DEFAULT_PAGES, DEFAULT_PAGE_DELAY, DEFAULT_PAGE_SIZE, MAX_PAGES};
pub use models::*;
pub use routes::Route;
pub use search::{filter_entries, matching_indices, SearchState};
pub use state::{FetchSlot, FetchState, Ticket};
