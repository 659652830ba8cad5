//! Backend resource metadata: where each entity lives and how its list
//! endpoint is shaped.

use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::Editable;
use crate::types::DbId;
use crate::validation::Validate;

/// How a resource names its mutation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStyle {
    /// `POST /api/x`, `PUT /api/x/{id}`, `DELETE /api/x/{id}`.
    Rest,
    /// `POST /api/x/add`, `PUT /api/x/update/{id}`, `DELETE /api/x/delete/{id}`.
    Verb,
}

/// An entity exposed by the backend as a REST collection.
pub trait Resource:
    Clone + Debug + Default + Serialize + DeserializeOwned + Editable + Validate + Send + Sync + 'static
{
    type Id: Clone + Debug + Display + PartialEq + Send + Sync + 'static;

    /// Path segment under `/api/`.
    const PATH: &'static str;

    /// Singular display name used in notifications.
    const LABEL: &'static str;

    /// Key holding the item array in list responses when it is not `data`.
    const COLLECTION_KEY: Option<&'static str> = None;

    const ROUTES: RouteStyle = RouteStyle::Rest;

    /// Query parameter that carries the active filter values.
    const FILTER_PARAM: Option<&'static str> = None;

    /// Sort column sent when the user has not picked one.
    const DEFAULT_SORT: &'static str = "created_at";

    /// Whether list requests and new records carry the session's masjid.
    const MASJID_SCOPED: bool = false;

    /// Server-assigned identifier; `None` for an unsaved draft.
    fn id(&self) -> Option<&Self::Id>;

    /// Attach a masjid to a new record. No-op for unscoped resources.
    fn set_masjid_id(&mut self, _masjid_id: DbId) {}
}

pub fn collection_path<R: Resource>() -> String {
    format!("/api/{}", R::PATH)
}

/// The id as a single percent-encoded path segment.
fn id_segment<R: Resource>(id: &R::Id) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}

pub fn item_path<R: Resource>(id: &R::Id) -> String {
    format!("/api/{}/{}", R::PATH, id_segment::<R>(id))
}

pub fn create_path<R: Resource>() -> String {
    match R::ROUTES {
        RouteStyle::Rest => collection_path::<R>(),
        RouteStyle::Verb => format!("/api/{}/add", R::PATH),
    }
}

pub fn update_path<R: Resource>(id: &R::Id) -> String {
    match R::ROUTES {
        RouteStyle::Rest => item_path::<R>(id),
        RouteStyle::Verb => format!("/api/{}/update/{}", R::PATH, id_segment::<R>(id)),
    }
}

pub fn delete_path<R: Resource>(id: &R::Id) -> String {
    match R::ROUTES {
        RouteStyle::Rest => item_path::<R>(id),
        RouteStyle::Verb => format!("/api/{}/delete/{}", R::PATH, id_segment::<R>(id)),
    }
}
