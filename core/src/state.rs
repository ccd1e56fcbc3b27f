//! Fetch lifecycle shared by the listing and detail screens.
//!
//! A screen owns a [`FetchSlot`]. Each mount (or identifier change) calls
//! [`FetchSlot::begin`], which hands out a [`Ticket`]; the spawned request
//! carries that ticket back with its result. Results whose ticket is no longer
//! the current one are dropped, so a slow response for a screen that has
//! already moved on never overwrites newer state.

use crate::error::Failure;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Error(Failure),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Success(v) => Some(v),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            FetchState::Error(f) => Some(f),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket<K> {
    pub generation: u64,
    pub key: K,
}

#[derive(Debug, Clone)]
pub struct FetchSlot<K, T> {
    state: FetchState<T>,
    current: Option<Ticket<K>>,
    generation: u64,
}

impl<K, T> Default for FetchSlot<K, T> {
    fn default() -> Self {
        Self { state: FetchState::Idle, current: None, generation: 0 }
    }
}

impl<K: Copy + PartialEq, T> FetchSlot<K, T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FetchState<T> {
        &mut self.state
    }

    /// Key of the fetch this slot is currently tracking.
    pub fn current_key(&self) -> Option<K> {
        self.current.map(|t| t.key)
    }

    pub fn begin(&mut self, key: K) -> Ticket<K> {
        self.generation += 1;
        let ticket = Ticket { generation: self.generation, key };
        self.current = Some(ticket);
        self.state = FetchState::Loading;
        ticket
    }

    /// Applies a result. Returns false when the ticket is stale or the slot is
    /// no longer loading.
    pub fn complete(&mut self, ticket: Ticket<K>, result: Result<T, Failure>) -> bool {
        if self.current != Some(ticket) || !self.state.is_loading() {
            return false;
        }
        self.state = match result {
            Ok(v) => FetchState::Success(v),
            Err(f) => FetchState::Error(f),
        };
        true
    }

    /// Puts the slot back to idle and invalidates any outstanding ticket.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.current = None;
        self.state = FetchState::Idle;
    }
}
