//! List-view state: search, sort, filters and the current page of results.
//!
//! [`ListState`] holds no I/O. A controller asks it for a [`FetchTicket`],
//! performs the request, and hands the result back. Only the most recent
//! ticket may update the state, so responses that arrive out of order are
//! dropped instead of overwriting newer data.

use std::collections::BTreeSet;

use crate::pagination::{self, DEFAULT_PAGE_SIZE};
use crate::resource::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire value for the `sortOrder` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The parameters that determine which rows a list shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub page: u32,
    pub limit: u32,
    /// `None` means the resource's default sort column.
    pub sort_field: Option<String>,
    pub sort_order: SortOrder,
    pub filters: BTreeSet<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            sort_field: None,
            sort_order: SortOrder::default(),
            filters: BTreeSet::new(),
        }
    }
}

impl ListQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: pagination::clamp_limit(limit),
            ..Self::default()
        }
    }

    /// Search text with surrounding whitespace removed; `None` when blank.
    pub fn search_term(&self) -> Option<&str> {
        Some(self.search.trim()).filter(|s| !s.is_empty())
    }

    /// Active filters joined with commas; `None` when no filter is active.
    pub fn filter_value(&self) -> Option<String> {
        if self.filters.is_empty() {
            None
        } else {
            Some(self.filters.iter().cloned().collect::<Vec<_>>().join(","))
        }
    }
}

/// One page of results as reported by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total rows matching the query across all pages.
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// The last fetch failed; `items` still holds the last good page.
    Failed,
}

/// Proof that a fetch was started, carrying the query it was started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ListQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer fetch was started after this one; the result was discarded.
    Stale,
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    query: ListQuery,
    items: Vec<T>,
    total: u64,
    status: ListStatus,
    error: Option<String>,
    latest_seq: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(ListQuery::default())
    }
}

impl<T> ListState<T> {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            items: Vec::new(),
            total: 0,
            status: ListStatus::Idle,
            error: None,
            latest_seq: 0,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn total_pages(&self) -> u32 {
        pagination::total_pages(self.total, self.query.limit)
    }

    // ---- query changes (each returns whether a refetch is needed) ----

    /// Replace the search text and go back to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        let search = search.into();
        if search == self.query.search {
            return false;
        }
        self.query.search = search;
        self.query.page = 1;
        true
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.query.page {
            return false;
        }
        self.query.page = page;
        true
    }

    /// Sort by `field`. Selecting the current column flips the order; a new
    /// column starts ascending. Always returns to page 1.
    pub fn sort_by(&mut self, field: impl Into<String>) -> bool {
        let field = field.into();
        if self.query.sort_field.as_deref() == Some(field.as_str()) {
            self.query.sort_order = self.query.sort_order.toggled();
        } else {
            self.query.sort_field = Some(field);
            self.query.sort_order = SortOrder::Asc;
        }
        self.query.page = 1;
        true
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> bool {
        if order == self.query.sort_order {
            return false;
        }
        self.query.sort_order = order;
        self.query.page = 1;
        true
    }

    /// Add `value` to the active filters, or remove it if already active.
    /// Always returns to page 1.
    pub fn toggle_filter(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if !self.query.filters.remove(&value) {
            self.query.filters.insert(value);
        }
        self.query.page = 1;
        true
    }

    pub fn clear_filters(&mut self) -> bool {
        if self.query.filters.is_empty() {
            return false;
        }
        self.query.filters.clear();
        self.query.page = 1;
        true
    }

    // ---- fetch lifecycle ----

    /// Mark a fetch as in flight and return its ticket. Any ticket issued
    /// earlier becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.status = ListStatus::Loading;
        FetchTicket {
            seq: self.latest_seq,
            query: self.query.clone(),
        }
    }

    /// Apply the result of the fetch identified by `ticket`.
    ///
    /// On failure the previous items stay in place and `error` is set.
    /// Loading is cleared whenever the ticket is current.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<Page<T>, String>,
    ) -> FetchOutcome {
        if ticket.seq != self.latest_seq {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total = page.total;
                self.error = None;
                self.status = ListStatus::Ready;
                FetchOutcome::Applied
            }
            Err(message) => {
                self.error = Some(message);
                self.status = ListStatus::Failed;
                FetchOutcome::Failed
            }
        }
    }

    /// Whether the current page is empty even though earlier pages exist.
    pub fn page_emptied(&self) -> bool {
        self.items.is_empty() && self.query.page > 1
    }

    /// Move to the page that should be shown after local removals.
    /// Returns whether the page changed.
    pub fn settle_page(&mut self) -> bool {
        let page = pagination::page_after_removal(self.query.page, self.items.len());
        self.set_page(page)
    }
}

impl<T: Resource> ListState<T> {
    /// Remove the row with `id` after the backend confirmed the delete.
    pub fn remove_local(&mut self, id: &T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == Some(id))?;
        self.total = self.total.saturating_sub(1);
        Some(self.items.remove(index))
    }

    /// Swap in the server's copy of a row. Returns whether a row matched.
    pub fn replace_local(&mut self, updated: T) -> bool {
        let Some(id) = updated.id().cloned() else {
            return false;
        };
        match self.items.iter_mut().find(|item| item.id() == Some(&id)) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }
}
