//! Application state: both fetched collections, the detail overlay, and pending alerts.
//!
//! A single owner (the application loop) mutates this in response to load events and
//! user input, so updates never interleave.

use crate::data::{Collection, LoadEvent, SatScore, School};
use std::collections::VecDeque;

/// Text shown once for every failed fetch.
pub const FETCH_ALERT: &str = "Could not retrieve data from the server! Please try again";

/// Detail overlay state. The open variant carries the selected school.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Open(School),
}

/// What dismissed the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Tap outside the overlay box
    Background,
    /// The overlay's own close control
    CloseControl,
}

/// The selected school joined with its SAT record, when one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailView<'a> {
    pub school: &'a School,
    pub scores: Option<&'a SatScore>,
}

#[derive(Debug, Default)]
pub struct AppState {
    schools: Collection<School>,
    scores: Collection<SatScore>,
    overlay: Overlay,
    alerts: VecDeque<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schools(&self) -> &Collection<School> {
        &self.schools
    }

    pub fn scores(&self) -> &Collection<SatScore> {
        &self.scores
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn is_overlay_open(&self) -> bool {
        matches!(self.overlay, Overlay::Open(_))
    }

    /// The school shown in the overlay, if it is open.
    pub fn selected(&self) -> Option<&School> {
        match &self.overlay {
            Overlay::Open(school) => Some(school),
            Overlay::Closed => None,
        }
    }

    /// Apply the outcome of a startup fetch.
    ///
    /// Success replaces the collection. Failure queues an alert and leaves the
    /// collection as it was.
    pub fn apply_load(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Schools(Ok(decoded)) => {
                log::info!(
                    "loaded {} schools ({} rejected)",
                    decoded.records.len(),
                    decoded.rejected
                );
                self.schools = Collection::Loaded(decoded.records);
            }
            LoadEvent::Scores(Ok(decoded)) => {
                log::info!(
                    "loaded {} SAT records ({} rejected)",
                    decoded.records.len(),
                    decoded.rejected
                );
                self.scores = Collection::Loaded(decoded.records);
            }
            LoadEvent::Schools(Err(error)) | LoadEvent::Scores(Err(error)) => {
                log::error!("{error}");
                self.alerts.push_back(FETCH_ALERT.to_string());
            }
        }
    }

    /// Open the overlay for the school at `index` in the list.
    ///
    /// Returns false when there is no such school.
    pub fn open_detail(&mut self, index: usize) -> bool {
        match self.schools.get(index) {
            Some(school) => {
                log::debug!("opening detail for {}", school.dbn);
                self.overlay = Overlay::Open(school.clone());
                true
            }
            None => false,
        }
    }

    /// Close the overlay and clear the selection. Returns false if it was not open.
    pub fn close_detail(&mut self, reason: CloseReason) -> bool {
        if !self.is_overlay_open() {
            return false;
        }
        log::debug!("closing detail ({reason:?})");
        self.overlay = Overlay::Closed;
        true
    }

    /// Selected school joined with the first SAT record sharing its `dbn`.
    pub fn detail(&self) -> Option<DetailView<'_>> {
        self.selected().map(|school| DetailView {
            school,
            scores: self.scores.find_by_dbn(&school.dbn),
        })
    }

    /// Alert currently shown, if any.
    pub fn alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn pending_alerts(&self) -> usize {
        self.alerts.len()
    }

    pub fn dismiss_alert(&mut self) -> bool {
        self.alerts.pop_front().is_some()
    }
}
