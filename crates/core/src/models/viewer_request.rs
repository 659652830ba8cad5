//! Viewer-access request entity.

use serde::{Deserialize, Serialize};

use crate::models::enums::RequestStatus;
use crate::resource::Resource;
use crate::types::{DbId, Timestamp};

/// A request from an outside party for read-only access to a masjid's data.
///
/// Unlike the other resources these are keyed by an opaque string id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nama: String,
    pub email: String,
    pub masjid_id: Option<DbId>,
    pub alasan: Option<String>,
    pub status: Option<RequestStatus>,
    #[serde(skip_serializing)]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing)]
    pub updated_at: Option<Timestamp>,
}

impl ViewerRequest {
    /// Copy of this request with a new review status, for approve/reject actions.
    pub fn with_status(&self, status: RequestStatus) -> Self {
        Self {
            status: Some(status),
            ..self.clone()
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, None | Some(RequestStatus::Pending))
    }
}

define_fields! {
    ViewerRequest => ViewerRequestField {
        Nama(String) => nama,
        Email(String) => email,
        MasjidId(Option<DbId>) => masjid_id,
        Alasan(Option<String>) => alasan,
        Status(Option<RequestStatus>) => status,
    }
}

impl Resource for ViewerRequest {
    type Id = String;

    const PATH: &'static str = "viewer-access";
    const LABEL: &'static str = "Permintaan akses";
    const COLLECTION_KEY: Option<&'static str> = Some("requests");
    const FILTER_PARAM: Option<&'static str> = Some("status");
    const MASJID_SCOPED: bool = true;

    fn id(&self) -> Option<&String> {
        self.id.as_ref()
    }

    fn set_masjid_id(&mut self, masjid_id: DbId) {
        self.masjid_id.get_or_insert(masjid_id);
    }
}
