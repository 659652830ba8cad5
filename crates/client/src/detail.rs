//! View, edit and create a single record.

use masjid_core::detail::{DetailState, DetailStatus};
use masjid_core::models::Editable;
use masjid_core::resource::Resource;
use masjid_core::validation::FieldErrors;

use crate::context::ClientContext;
use crate::error::{ClientError, ClientResult};
use crate::resource::ResourceClient;

/// Drives a [`DetailState`] against the backend.
///
/// An invalid draft never reaches the network: [`DetailController::save`]
/// fails with [`ClientError::Invalid`] and the errors are available per
/// field through [`DetailController::field_errors`].
pub struct DetailController<R: Resource> {
    api: ResourceClient<R>,
    state: DetailState<R>,
}

impl<R: Resource> DetailController<R> {
    pub fn new(ctx: ClientContext) -> Self {
        Self {
            api: ResourceClient::new(ctx),
            state: DetailState::new(),
        }
    }

    pub fn state(&self) -> &DetailState<R> {
        &self.state
    }

    pub fn status(&self) -> DetailStatus {
        self.state.status()
    }

    /// The last copy the server confirmed.
    pub fn entity(&self) -> Option<&R> {
        self.state.canonical()
    }

    pub fn draft(&self) -> Option<&R> {
        self.state.draft()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        self.state.field_errors()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    pub async fn load(&mut self, id: &R::Id) -> ClientResult<()> {
        self.state.begin_load()?;
        match self.api.get(id).await {
            Ok(entity) => {
                self.state.finish_load(Ok(entity));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(resource = R::PATH, %id, error = %err, "Load failed");
                self.state.finish_load(Err(err.user_message()));
                self.api.context().notify_error(&err);
                Err(err)
            }
        }
    }

    pub fn start_edit(&mut self) -> ClientResult<()> {
        Ok(self.state.begin_edit()?)
    }

    /// Open an empty draft for a new record.
    pub fn start_create(&mut self) -> ClientResult<()> {
        self.start_create_from(R::default())
    }

    pub fn start_create_from(&mut self, draft: R) -> ClientResult<()> {
        Ok(self.state.begin_create(draft)?)
    }

    pub fn edit(&mut self, update: <R as Editable>::Update) -> ClientResult<()> {
        Ok(self.state.edit(update)?)
    }

    /// Drop the draft and show the confirmed copy again.
    pub fn cancel(&mut self) {
        self.state.cancel();
    }

    /// Validate and submit the draft: `PUT` for an existing record, `POST`
    /// for a new one. On failure the draft stays open unchanged.
    pub async fn save(&mut self) -> ClientResult<R> {
        let payload = self.state.begin_save()?;
        let creating = payload.id().is_none();

        let result = if creating {
            self.api.create(payload).await
        } else {
            self.api.update(&payload).await
        };

        match result {
            Ok(saved) => {
                self.state.finish_save(Ok(saved.clone()));
                let verb = if creating { "ditambahkan" } else { "diperbarui" };
                self.api
                    .context()
                    .notify_success(format!("{} berhasil {verb}", R::LABEL));
                Ok(saved)
            }
            Err(err) => {
                tracing::warn!(resource = R::PATH, creating, error = %err, "Save failed");
                self.state.finish_save(Err(err.user_message()));
                self.api.context().notify_error(&err);
                Err(err)
            }
        }
    }

    /// Delete the loaded record and forget it.
    pub async fn delete(&mut self) -> ClientResult<()> {
        let id = self
            .state
            .canonical()
            .and_then(|entity| entity.id().cloned())
            .ok_or(ClientError::MissingId)?;

        match self.api.delete(&id).await {
            Ok(()) => {
                self.state.reset();
                self.api
                    .context()
                    .notify_success(format!("{} berhasil dihapus", R::LABEL));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(resource = R::PATH, %id, error = %err, "Delete failed");
                self.api.context().notify_error(&err);
                Err(err)
            }
        }
    }
}
