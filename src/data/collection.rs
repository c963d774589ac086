//! Loaded/unloaded container for a fetched collection and the `dbn` lookup.

use crate::data::model::Keyed;

/// Coarse load status derived from a [`Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No successful fetch has completed yet
    Unloaded,
    /// Fetched, but the endpoint returned no usable records
    Empty,
    /// Fetched with at least one record
    Populated,
}

/// A fetched collection, or the sentinel standing in for it until the first
/// successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection<T> {
    Unloaded,
    Loaded(Vec<T>),
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::Unloaded
    }
}

impl<T> Collection<T> {
    pub fn state(&self) -> LoadState {
        match self {
            Collection::Unloaded => LoadState::Unloaded,
            Collection::Loaded(items) if items.is_empty() => LoadState::Empty,
            Collection::Loaded(_) => LoadState::Populated,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Collection::Loaded(_))
    }

    /// Records in received order; empty while unloaded.
    pub fn items(&self) -> &[T] {
        match self {
            Collection::Unloaded => &[],
            Collection::Loaded(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items().get(index)
    }
}

impl<T: Keyed> Collection<T> {
    /// First record whose `dbn` equals `dbn`, scanning in collection order.
    ///
    /// Returns `None` while unloaded or when nothing matches; neither is an error.
    pub fn find_by_dbn(&self, dbn: &str) -> Option<&T> {
        self.items().iter().find(|record| record.dbn() == dbn)
    }
}
