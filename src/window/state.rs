//! Incremental result window
//!
//! Tracks the contiguous slice `[from, to)` of a result set of known size
//! (`records_filtered`) that is currently materialised, and grows it one page
//! at a time in either direction.
//!
//! # Fetch lifecycle
//!
//! ```text
//! begin_fetch_previous() ──→ Some(ticket)      loading = true
//!         │                        │
//!         │ (while loading)        └─→ fetcher.fetch_more(ticket.request())
//!         └─→ None (dropped)                  │
//!                                             ↓
//!                         complete(ticket, result) ──→ Merged / Failed / Discarded
//! ```
//!
//! - At most one fetch is in flight; triggers while loading are dropped.
//! - A failed fetch leaves records and bounds untouched and clears `loading`.
//! - Only the ticket currently in flight can complete. A ticket issued
//!   before the last `reset`, under other filter variables, or replayed
//!   after its fetch finished is discarded.
//! - After every merge `to - from == records().len() <= records_filtered`.
//! - Merged records never duplicate an identity already materialised.

use super::error::WindowError;
use super::fetch::{FetchError, FetchRequest, FetchedPage, PageFetcher, Record};
use crate::query::FilterVars;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Direction in which the window grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

/// Handle for one in-flight fetch
///
/// Only the most recently issued ticket can complete a fetch.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    id: u64,
    direction: Direction,
    generation: u64,
    request: FetchRequest,
}

impl FetchTicket {
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Variables to pass to the fetcher
    #[must_use]
    pub const fn request(&self) -> &FetchRequest {
        &self.request
    }
}

/// Effect of completing a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MergeOutcome {
    /// Page merged; `added` new identities materialised
    Merged { added: usize },
    /// Fetch failed, state unchanged
    Failed,
    /// Ticket was stale, result ignored
    Discarded,
    /// Nothing was fetched (busy, or no more items in that direction)
    Skipped,
}

/// State exposed to the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub from: usize,
    pub to: usize,
    pub loading: bool,
    pub records_filtered: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Materialised slice of a paged result set
#[derive(Debug, Clone)]
pub struct ResultWindow<R> {
    records: Vec<R>,
    records_filtered: usize,
    max_items_per_page: usize,
    from: usize,
    to: usize,
    filters: FilterVars,
    generation: u64,
    next_ticket: u64,
    in_flight: Option<u64>,
}

impl<R: Record> ResultWindow<R> {
    /// Create a new builder for constructing a `ResultWindow`
    #[must_use]
    pub fn builder() -> ResultWindowBuilder<R> {
        ResultWindowBuilder::new()
    }

    /// Records in result order
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// First materialised index
    #[must_use]
    pub const fn from(&self) -> usize {
        self.from
    }

    /// One past the last materialised index
    #[must_use]
    pub const fn to(&self) -> usize {
        self.to
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub const fn records_filtered(&self) -> usize {
        self.records_filtered
    }

    #[must_use]
    pub const fn max_items_per_page(&self) -> usize {
        self.max_items_per_page
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterVars {
        &self.filters
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.from > 0
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.to < self.records_filtered
    }

    #[must_use]
    pub const fn view(&self) -> WindowView {
        WindowView {
            from: self.from,
            to: self.to,
            loading: self.loading(),
            records_filtered: self.records_filtered,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }

    /// Start fetching the page before `from`
    ///
    /// Returns `None` while another fetch is in flight or when `from` is 0.
    pub fn begin_fetch_previous(&mut self) -> Option<FetchTicket> {
        self.begin(Direction::Previous)
    }

    /// Start fetching the page after `to`
    ///
    /// Returns `None` while another fetch is in flight or when the window
    /// already reaches `records_filtered`.
    pub fn begin_fetch_next(&mut self) -> Option<FetchTicket> {
        self.begin(Direction::Next)
    }

    fn begin(&mut self, direction: Direction) -> Option<FetchTicket> {
        if self.loading() {
            debug!(?direction, "fetch already in flight; dropping trigger");
            return None;
        }

        let (from, to) = match direction {
            Direction::Previous => {
                if self.from == 0 {
                    return None;
                }
                (self.from.saturating_sub(self.max_items_per_page), self.from - 1)
            }
            Direction::Next => {
                if self.to >= self.records_filtered {
                    return None;
                }
                let end = self
                    .to
                    .saturating_add(self.max_items_per_page)
                    .min(self.records_filtered);
                (self.to, end - 1)
            }
        };

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(id);
        debug!(?direction, ticket = id, from, to, "fetching more results");

        Some(FetchTicket {
            id,
            direction,
            generation: self.generation,
            request: FetchRequest {
                filters: self.filters.clone(),
                from,
                to,
            },
        })
    }

    /// Whether `ticket` is the fetch in flight for the current result set
    #[must_use]
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        self.in_flight == Some(ticket.id)
            && ticket.generation == self.generation
            && ticket.request.filters == self.filters
    }

    /// Finish the fetch behind `ticket`
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<FetchedPage<R>, FetchError>,
    ) -> MergeOutcome {
        if !self.is_current(&ticket) {
            debug!(
                ticket = ticket.id,
                in_flight = ?self.in_flight,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return MergeOutcome::Discarded;
        }

        self.in_flight = None;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                warn!(
                    error = %e,
                    from = ticket.request.from,
                    to = ticket.request.to,
                    "fetch more failed"
                );
                return MergeOutcome::Failed;
            }
        };

        if let Some(total) = page.records_filtered
            && total != self.records_filtered
        {
            debug!(
                previous = self.records_filtered,
                total, "backend reported a new result total"
            );
            self.records_filtered = total;
        }

        let mut incoming = unique_incoming(&self.records, page.products);
        let requested = ticket.request.len();

        match ticket.direction {
            Direction::Previous => {
                // the page sits right before `from`; keep its tail
                let excess = incoming.len().saturating_sub(requested);
                incoming.drain(..excess);
                let added = incoming.len();
                incoming.append(&mut self.records);
                self.records = incoming;
                self.from = self.to.saturating_sub(self.records.len());
                self.enforce_bounds();
                MergeOutcome::Merged { added }
            }
            Direction::Next => {
                incoming.truncate(requested);
                let added = incoming.len();
                self.records.extend(incoming);
                self.to = self.from + self.records.len();
                self.enforce_bounds();
                MergeOutcome::Merged { added }
            }
        }

    }

    /// Replace the window after the filter context or page changed
    ///
    /// Any fetch still in flight becomes stale.
    pub fn reset(&mut self, filters: FilterVars, records: Vec<R>, records_filtered: usize, page: u32) {
        let (records, from, to) = place(records, records_filtered, self.max_items_per_page, page);

        self.records = records;
        self.records_filtered = records_filtered;
        self.from = from;
        self.to = to;
        self.filters = filters;
        self.generation += 1;
        self.in_flight = None;
    }

    /// Keep `[from, to)` inside the total with exactly `to - from` records
    fn enforce_bounds(&mut self) {
        if self.to > self.records_filtered {
            warn!(
                from = self.from,
                to = self.to,
                records_filtered = self.records_filtered,
                "window extends past the backend total; truncating"
            );
            self.to = self.records_filtered;
            self.from = self.from.min(self.to);
            self.records.truncate(self.to - self.from);
        }
    }
}

impl<R: Record + Send> ResultWindow<R> {
    /// Fetch and merge the previous page through `fetcher`
    pub async fn fetch_previous<F>(&mut self, fetcher: &F) -> MergeOutcome
    where
        F: PageFetcher<R> + ?Sized,
    {
        self.fetch(Direction::Previous, fetcher).await
    }

    /// Fetch and merge the next page through `fetcher`
    pub async fn fetch_next<F>(&mut self, fetcher: &F) -> MergeOutcome
    where
        F: PageFetcher<R> + ?Sized,
    {
        self.fetch(Direction::Next, fetcher).await
    }

    async fn fetch<F>(&mut self, direction: Direction, fetcher: &F) -> MergeOutcome
    where
        F: PageFetcher<R> + ?Sized,
    {
        let Some(ticket) = self.begin(direction) else {
            return MergeOutcome::Skipped;
        };

        let result = fetcher.fetch_more(ticket.request()).await;
        self.complete(ticket, result)
    }
}

/// Incoming records whose identity is not materialised yet, first occurrence wins
fn unique_incoming<R: Record>(existing: &[R], incoming: Vec<R>) -> Vec<R> {
    let mut seen: HashSet<String> = existing.iter().map(|r| r.record_id().to_owned()).collect();
    incoming
        .into_iter()
        .filter(|record| seen.insert(record.record_id().to_owned()))
        .collect()
}

/// Position `records` as page `page` of a result set of `records_filtered`
fn place<R>(
    mut records: Vec<R>,
    records_filtered: usize,
    max_items_per_page: usize,
    page: u32,
) -> (Vec<R>, usize, usize) {
    let page_index = usize::try_from(page.max(1) - 1).unwrap_or(usize::MAX);
    let from = page_index
        .saturating_mul(max_items_per_page)
        .min(records_filtered);
    let capacity = records_filtered - from;

    if records.len() > capacity {
        warn!(
            materialised = records.len(),
            capacity, "more records than the backend total; truncating"
        );
        records.truncate(capacity);
    }

    let to = from + records.len();
    (records, from, to)
}

/// Builder for `ResultWindow`
///
/// ```
/// # use facetnav::window::{Product, ResultWindow};
/// let window = ResultWindow::<Product>::builder()
///     .records(vec![Product::new("p1", "Shoe")])
///     .records_filtered(30)
///     .max_items_per_page(10)
///     .page(2)
///     .build()
///     .unwrap();
/// assert_eq!((window.from(), window.to()), (10, 11));
/// ```
#[derive(Debug)]
pub struct ResultWindowBuilder<R> {
    records: Vec<R>,
    records_filtered: Option<usize>,
    max_items_per_page: Option<usize>,
    page: u32,
    filters: FilterVars,
}

impl<R: Record> ResultWindowBuilder<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            records_filtered: None,
            max_items_per_page: None,
            page: 1,
            filters: FilterVars::default(),
        }
    }

    /// Records materialised for the current page
    #[must_use]
    pub fn records(mut self, records: Vec<R>) -> Self {
        self.records = records;
        self
    }

    /// Total size of the result set (required)
    #[must_use]
    pub const fn records_filtered(mut self, records_filtered: usize) -> Self {
        self.records_filtered = Some(records_filtered);
        self
    }

    /// Page size (required, at least 1)
    #[must_use]
    pub const fn max_items_per_page(mut self, max_items_per_page: usize) -> Self {
        self.max_items_per_page = Some(max_items_per_page);
        self
    }

    /// Current 1-based page
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Filter variables of the current search
    #[must_use]
    pub fn filters(mut self, filters: FilterVars) -> Self {
        self.filters = filters;
        self
    }

    /// Build the `ResultWindow`
    ///
    /// # Errors
    ///
    /// Returns `WindowError::MissingField` if `records_filtered` or
    /// `max_items_per_page` is not set and `WindowError::InvalidPageSize`
    /// for a page size of 0.
    pub fn build(self) -> Result<ResultWindow<R>, WindowError> {
        let records_filtered = self
            .records_filtered
            .ok_or(WindowError::MissingField("recordsFiltered"))?;
        let max_items_per_page = self
            .max_items_per_page
            .ok_or(WindowError::MissingField("maxItemsPerPage"))?;

        if max_items_per_page == 0 {
            return Err(WindowError::InvalidPageSize);
        }

        let (records, from, to) = place(self.records, records_filtered, max_items_per_page, self.page);

        Ok(ResultWindow {
            records,
            records_filtered,
            max_items_per_page,
            from,
            to,
            filters: self.filters,
            generation: 0,
            next_ticket: 0,
            in_flight: None,
        })
    }
}

impl<R: Record> Default for ResultWindowBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
