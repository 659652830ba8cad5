//! Detail/edit state for a single entity.
//!
//! The canonical copy is the last one the server confirmed. While editing,
//! a separate draft shadows it; the draft is dropped on cancel and replaced
//! by the server's copy on a successful save.

use crate::error::CoreError;
use crate::models::{Editable, FieldUpdate};
use crate::resource::Resource;
use crate::validation::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailStatus {
    /// Nothing loaded and no draft open.
    #[default]
    Idle,
    Loading,
    Viewing,
    Editing,
    Saving,
    /// Loading failed and there is no canonical copy to show.
    Failed,
}

#[derive(Debug, Clone)]
pub struct DetailState<T> {
    status: DetailStatus,
    canonical: Option<T>,
    draft: Option<T>,
    field_errors: FieldErrors,
    error: Option<String>,
}

impl<T> Default for DetailState<T> {
    fn default() -> Self {
        Self {
            status: DetailStatus::Idle,
            canonical: None,
            draft: None,
            field_errors: FieldErrors::new(),
            error: None,
        }
    }
}

impl<T: Resource> DetailState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> DetailStatus {
        self.status
    }

    pub fn canonical(&self) -> Option<&T> {
        self.canonical.as_ref()
    }

    pub fn draft(&self) -> Option<&T> {
        self.draft.as_ref()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.status == DetailStatus::Editing
    }

    /// Whether the open draft is a new record rather than an edit.
    pub fn is_creating(&self) -> bool {
        self.draft.as_ref().is_some_and(|draft| draft.id().is_none())
    }

    // ---- loading ----

    /// Start a (re)load. An open draft is discarded, so a failed load can
    /// only land in `Viewing` or `Failed` without one.
    pub fn begin_load(&mut self) -> Result<(), CoreError> {
        if self.status == DetailStatus::Saving {
            return Err(CoreError::InvalidState("a save is in flight"));
        }
        self.draft = None;
        self.field_errors.clear();
        self.error = None;
        self.status = DetailStatus::Loading;
        Ok(())
    }

    /// On failure a previously loaded copy stays visible.
    pub fn finish_load(&mut self, result: Result<T, String>) {
        match result {
            Ok(entity) => {
                self.canonical = Some(entity);
                self.draft = None;
                self.field_errors.clear();
                self.error = None;
                self.status = DetailStatus::Viewing;
            }
            Err(message) => {
                self.error = Some(message);
                self.status = if self.canonical.is_some() {
                    DetailStatus::Viewing
                } else {
                    DetailStatus::Failed
                };
            }
        }
    }

    // ---- editing ----

    /// Open a draft copied from the canonical entity.
    pub fn begin_edit(&mut self) -> Result<(), CoreError> {
        if self.status != DetailStatus::Viewing {
            return Err(CoreError::InvalidState("edit requires a loaded entity"));
        }
        let canonical = self
            .canonical
            .as_ref()
            .ok_or(CoreError::InvalidState("edit requires a loaded entity"))?;
        self.draft = Some(canonical.clone());
        self.field_errors.clear();
        self.error = None;
        self.status = DetailStatus::Editing;
        Ok(())
    }

    /// Open a draft for a record that does not exist yet.
    pub fn begin_create(&mut self, draft: T) -> Result<(), CoreError> {
        if matches!(self.status, DetailStatus::Loading | DetailStatus::Saving) {
            return Err(CoreError::InvalidState("a request is in flight"));
        }
        self.draft = Some(draft);
        self.field_errors.clear();
        self.error = None;
        self.status = DetailStatus::Editing;
        Ok(())
    }

    /// Apply a typed update to the draft. Clears only that field's error.
    pub fn edit(&mut self, update: <T as Editable>::Update) -> Result<(), CoreError> {
        if self.status != DetailStatus::Editing {
            return Err(CoreError::InvalidState("no draft is open"));
        }
        let draft = self
            .draft
            .as_mut()
            .ok_or(CoreError::InvalidState("no draft is open"))?;
        self.field_errors.clear_field(update.field_name());
        draft.apply(update);
        Ok(())
    }

    /// Discard the draft. The canonical copy is untouched.
    pub fn cancel(&mut self) {
        if self.status != DetailStatus::Editing {
            return;
        }
        self.draft = None;
        self.field_errors.clear();
        self.error = None;
        self.status = if self.canonical.is_some() {
            DetailStatus::Viewing
        } else {
            DetailStatus::Idle
        };
    }

    // ---- saving ----

    /// Validate the draft and, if valid, enter `Saving` and return the
    /// payload to submit. An invalid draft stays open with its field errors.
    pub fn begin_save(&mut self) -> Result<T, CoreError> {
        if self.status != DetailStatus::Editing {
            return Err(CoreError::InvalidState("no draft is open"));
        }
        let draft = self
            .draft
            .as_ref()
            .ok_or(CoreError::InvalidState("no draft is open"))?;
        let errors = draft.validate();
        if !errors.is_empty() {
            self.field_errors = errors.clone();
            return Err(CoreError::Invalid(errors));
        }
        let payload = draft.clone();
        self.field_errors.clear();
        self.error = None;
        self.status = DetailStatus::Saving;
        Ok(payload)
    }

    /// Success replaces the canonical copy with the server's; failure
    /// reopens the draft unchanged.
    pub fn finish_save(&mut self, result: Result<T, String>) {
        if self.status != DetailStatus::Saving {
            return;
        }
        match result {
            Ok(saved) => {
                self.canonical = Some(saved);
                self.draft = None;
                self.error = None;
                self.status = DetailStatus::Viewing;
            }
            Err(message) => {
                self.error = Some(message);
                self.status = DetailStatus::Editing;
            }
        }
    }

    /// Forget everything, e.g. after the entity was deleted.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
