//! Typed CRUD calls for any [`Resource`].
//!
//! This is the only place that knows how list queries map onto query
//! parameters and how entities travel over the wire. Controllers call it;
//! it never touches controller state.

use std::marker::PhantomData;

use serde_json::Value;

use masjid_core::list::{ListQuery, Page};
use masjid_core::resource::{self, Resource};

use crate::context::ClientContext;
use crate::envelope;
use crate::error::{ClientError, ClientResult};
use crate::transport::ApiRequest;

pub struct ResourceClient<R> {
    ctx: ClientContext,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            ctx,
            _resource: PhantomData,
        }
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }

    /// Build the `GET /api/<resource>` request for `query`.
    ///
    /// Fails with [`ClientError::MissingToken`] before anything is built
    /// when the session has no token.
    pub fn list_request(&self, query: &ListQuery) -> ClientResult<ApiRequest> {
        let token = self.ctx.token()?;
        let sort_by = query.sort_field.as_deref().unwrap_or(R::DEFAULT_SORT);

        let mut request = ApiRequest::get(resource::collection_path::<R>())
            .bearer(token)
            .query("page", query.page.to_string())
            .query("limit", query.limit.to_string())
            .query("sortBy", sort_by)
            .query("sortOrder", query.sort_order.as_str());

        if let Some(search) = query.search_term() {
            request = request.query("search", search);
        }
        if let (Some(param), Some(value)) = (R::FILTER_PARAM, query.filter_value()) {
            request = request.query(param, value);
        }
        if R::MASJID_SCOPED {
            if let Some(masjid_id) = self.ctx.session.current_masjid_id() {
                request = request.query("masjid_id", masjid_id.to_string());
            }
        }
        Ok(request)
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Page<R>> {
        let request = self.list_request(query)?;
        tracing::debug!(resource = R::PATH, page = query.page, "Fetching list");
        let body = self.ctx.transport.send(request).await?;
        let page = envelope::parse_page(body, R::COLLECTION_KEY)?;
        tracing::debug!(
            resource = R::PATH,
            rows = page.items.len(),
            total = page.total,
            "List fetched"
        );
        Ok(page)
    }

    pub async fn get(&self, id: &R::Id) -> ClientResult<R> {
        let token = self.ctx.token()?;
        let request = ApiRequest::get(resource::item_path::<R>(id)).bearer(token);
        let body = self.ctx.transport.send(request).await?;
        envelope::parse_entity(body)
    }

    /// Create a new record. Scoped resources get the session's masjid when
    /// the draft does not name one.
    pub async fn create(&self, mut draft: R) -> ClientResult<R> {
        let token = self.ctx.token()?;
        if R::MASJID_SCOPED {
            if let Some(masjid_id) = self.ctx.session.current_masjid_id() {
                draft.set_masjid_id(masjid_id);
            }
        }
        let request = ApiRequest::post(resource::create_path::<R>()).bearer(token);
        let saved = self.write(request, &draft).await?;
        tracing::info!(resource = R::PATH, id = ?saved.id(), "Record created");
        Ok(saved)
    }

    /// Replace an existing record with `entity`.
    pub async fn update(&self, entity: &R) -> ClientResult<R> {
        let token = self.ctx.token()?;
        let id = entity.id().ok_or(ClientError::MissingId)?;
        let request = ApiRequest::put(resource::update_path::<R>(id)).bearer(token);
        let saved = self.write(request, entity).await?;
        tracing::info!(resource = R::PATH, %id, "Record updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: &R::Id) -> ClientResult<()> {
        let token = self.ctx.token()?;
        let request = ApiRequest::delete(resource::delete_path::<R>(id)).bearer(token);
        let body = self.ctx.transport.send(request).await?;
        envelope::ensure_accepted(&body)?;
        tracing::info!(resource = R::PATH, %id, "Record deleted");
        Ok(())
    }

    /// Send `payload` and decode the server's copy. Fields the server does
    /// not echo keep the submitted value.
    async fn write(&self, request: ApiRequest, payload: &R) -> ClientResult<R> {
        let local = serde_json::to_value(payload)?;
        let body = self.ctx.transport.send(request.json(local.clone())).await?;
        let server = envelope::entity_value(body)?;
        let merged: Value = envelope::merge_authoritative(local, server);
        Ok(serde_json::from_value(merged)?)
    }
}
