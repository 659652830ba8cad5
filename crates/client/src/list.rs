//! Paginated, searchable, sortable, filterable list of one resource.
//!
//! A [`ListController`] owns a [`ListState`] and is the only thing that
//! fetches for it. Every query change that alters the state triggers
//! exactly one fetch; failures are reported once through the notifier and
//! leave the previously shown rows in place.

use masjid_core::list::{FetchOutcome, ListQuery, ListState, ListStatus, SortOrder};
use masjid_core::resource::Resource;

use crate::context::ClientContext;
use crate::error::ClientResult;
use crate::resource::ResourceClient;

pub struct ListController<R: Resource> {
    api: ResourceClient<R>,
    state: ListState<R>,
}

impl<R: Resource> ListController<R> {
    pub fn new(ctx: ClientContext) -> Self {
        let query = ListQuery::with_limit(ctx.page_size);
        Self::with_query(ctx, query)
    }

    pub fn with_query(ctx: ClientContext, query: ListQuery) -> Self {
        Self {
            api: ResourceClient::new(ctx),
            state: ListState::new(query),
        }
    }

    pub fn state(&self) -> &ListState<R> {
        &self.state
    }

    pub fn items(&self) -> &[R] {
        self.state.items()
    }

    pub fn total(&self) -> u64 {
        self.state.total()
    }

    pub fn total_pages(&self) -> u32 {
        self.state.total_pages()
    }

    pub fn query(&self) -> &ListQuery {
        self.state.query()
    }

    pub fn status(&self) -> ListStatus {
        self.state.status()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Fetch the current page for the current query.
    ///
    /// Without a session token nothing is sent; the list keeps its rows and
    /// the user is told to sign in again.
    ///
    /// Each call awaits its own fetch, so the controller never sees
    /// [`FetchOutcome::Stale`]. The ticket guard in [`ListState`] is for
    /// callers that drive overlapping fetches against the state directly.
    pub async fn refetch(&mut self) -> ClientResult<FetchOutcome> {
        let ticket = self.state.begin_fetch();
        let result = self.api.list(&ticket.query).await;

        let (outcome, failure) = match result {
            Ok(page) => (self.state.complete_fetch(&ticket, Ok(page)), None),
            Err(err) => {
                let outcome = self.state.complete_fetch(&ticket, Err(err.user_message()));
                (outcome, Some(err))
            }
        };

        match (outcome, failure) {
            (FetchOutcome::Failed, Some(err)) => {
                tracing::warn!(
                    resource = R::PATH,
                    page = ticket.query.page,
                    error = %err,
                    "List fetch failed"
                );
                self.api.context().notify_error(&err);
                Err(err)
            }
            (outcome, _) => Ok(outcome),
        }
    }

    async fn refetch_if(&mut self, changed: bool) -> ClientResult<()> {
        if changed {
            self.refetch().await?;
        }
        Ok(())
    }

    /// Replace the search text. Returns to page 1.
    pub async fn set_search(&mut self, search: impl Into<String>) -> ClientResult<()> {
        let changed = self.state.set_search(search);
        self.refetch_if(changed).await
    }

    pub async fn set_page(&mut self, page: u32) -> ClientResult<()> {
        let changed = self.state.set_page(page);
        self.refetch_if(changed).await
    }

    /// Sort by `field`; choosing the current column flips the order.
    pub async fn sort_by(&mut self, field: impl Into<String>) -> ClientResult<()> {
        let changed = self.state.sort_by(field);
        self.refetch_if(changed).await
    }

    pub async fn set_sort_order(&mut self, order: SortOrder) -> ClientResult<()> {
        let changed = self.state.set_sort_order(order);
        self.refetch_if(changed).await
    }

    /// Add or remove one filter value. Returns to page 1.
    pub async fn toggle_filter(&mut self, value: impl Into<String>) -> ClientResult<()> {
        let changed = self.state.toggle_filter(value);
        self.refetch_if(changed).await
    }

    pub async fn clear_filters(&mut self) -> ClientResult<()> {
        let changed = self.state.clear_filters();
        self.refetch_if(changed).await
    }

    /// Delete the row with `id`.
    ///
    /// After the backend confirms, the row is removed locally. If that
    /// empties a page beyond the first, the previous page is fetched;
    /// otherwise the current page is fetched again so rows from later pages
    /// move up. On failure the list is left untouched.
    pub async fn delete_item(&mut self, id: &R::Id) -> ClientResult<()> {
        if let Err(err) = self.api.delete(id).await {
            tracing::warn!(resource = R::PATH, %id, error = %err, "Delete failed");
            self.api.context().notify_error(&err);
            return Err(err);
        }

        self.state.remove_local(id);
        self.api
            .context()
            .notify_success(format!("{} berhasil dihapus", R::LABEL));

        if self.state.settle_page() {
            tracing::debug!(
                resource = R::PATH,
                page = self.state.query().page,
                "Page emptied by delete, moving back"
            );
        }
        self.refetch().await?;
        Ok(())
    }

    /// Save a changed row, e.g. approving a viewer-access request, and show
    /// the server's copy in its place.
    pub async fn update_item(&mut self, entity: &R) -> ClientResult<R> {
        match self.api.update(entity).await {
            Ok(saved) => {
                self.state.replace_local(saved.clone());
                self.api
                    .context()
                    .notify_success(format!("{} berhasil diperbarui", R::LABEL));
                Ok(saved)
            }
            Err(err) => {
                tracing::warn!(resource = R::PATH, error = %err, "Update failed");
                self.api.context().notify_error(&err);
                Err(err)
            }
        }
    }
}
