//! Stakeholder entity.

use serde::{Deserialize, Serialize};

use crate::models::enums::StakeholderKind;
use crate::resource::Resource;
use crate::types::{DbId, Timestamp};

/// A partner, donor or institution involved in a masjid's programs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stakeholder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub nama_stakeholder: String,
    pub jenis: Option<StakeholderKind>,
    pub telepon: String,
    pub email: String,
    pub alamat: Option<String>,
    pub masjid_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing)]
    pub updated_at: Option<Timestamp>,
}

define_fields! {
    /// Typed edit of a single [`Stakeholder`] field.
    Stakeholder => StakeholderField {
        NamaStakeholder(String) => nama_stakeholder,
        Jenis(Option<StakeholderKind>) => jenis,
        Telepon(String) => telepon,
        Email(String) => email,
        Alamat(Option<String>) => alamat,
    }
}

impl Resource for Stakeholder {
    type Id = DbId;

    const PATH: &'static str = "stakeholders";
    const LABEL: &'static str = "Stakeholder";
    const COLLECTION_KEY: Option<&'static str> = Some("stakeholders");
    const FILTER_PARAM: Option<&'static str> = Some("jenis");
    const DEFAULT_SORT: &'static str = "nama_stakeholder";
    const MASJID_SCOPED: bool = true;

    fn id(&self) -> Option<&DbId> {
        self.id.as_ref()
    }

    fn set_masjid_id(&mut self, masjid_id: DbId) {
        self.masjid_id.get_or_insert(masjid_id);
    }
}
