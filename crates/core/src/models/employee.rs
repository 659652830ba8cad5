//! Employee (pegawai) entity.

use serde::{Deserialize, Serialize};

use crate::models::enums::EmployeeStatus;
use crate::resource::{Resource, RouteStyle};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub nama: String,
    pub jabatan: String,
    pub email: String,
    pub telepon: String,
    pub status: Option<EmployeeStatus>,
    pub masjid_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing)]
    pub updated_at: Option<Timestamp>,
}

define_fields! {
    Employee => EmployeeField {
        Nama(String) => nama,
        Jabatan(String) => jabatan,
        Email(String) => email,
        Telepon(String) => telepon,
        Status(Option<EmployeeStatus>) => status,
    }
}

impl Resource for Employee {
    type Id = DbId;

    const PATH: &'static str = "employee";
    const LABEL: &'static str = "Pegawai";
    const COLLECTION_KEY: Option<&'static str> = Some("employees");
    const ROUTES: RouteStyle = RouteStyle::Verb;
    const FILTER_PARAM: Option<&'static str> = Some("status");
    const DEFAULT_SORT: &'static str = "nama";
    const MASJID_SCOPED: bool = true;

    fn id(&self) -> Option<&DbId> {
        self.id.as_ref()
    }

    fn set_masjid_id(&mut self, masjid_id: DbId) {
        self.masjid_id.get_or_insert(masjid_id);
    }
}
