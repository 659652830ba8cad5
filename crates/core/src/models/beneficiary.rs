//! Beneficiary (penerima manfaat) entity.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Beneficiary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub nama: String,
    pub nik: Option<String>,
    pub alamat: Option<String>,
    pub telepon: Option<String>,
    pub kategori: Option<String>,
    pub program_id: Option<DbId>,
    pub masjid_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing)]
    pub updated_at: Option<Timestamp>,
}

define_fields! {
    Beneficiary => BeneficiaryField {
        Nama(String) => nama,
        Nik(Option<String>) => nik,
        Alamat(Option<String>) => alamat,
        Telepon(Option<String>) => telepon,
        Kategori(Option<String>) => kategori,
        ProgramId(Option<DbId>) => program_id,
    }
}

impl Resource for Beneficiary {
    type Id = DbId;

    const PATH: &'static str = "beneficiaries";
    const LABEL: &'static str = "Penerima manfaat";
    const COLLECTION_KEY: Option<&'static str> = Some("beneficiaries");
    const FILTER_PARAM: Option<&'static str> = Some("kategori");
    const DEFAULT_SORT: &'static str = "nama";
    const MASJID_SCOPED: bool = true;

    fn id(&self) -> Option<&DbId> {
        self.id.as_ref()
    }

    fn set_masjid_id(&mut self, masjid_id: DbId) {
        self.masjid_id.get_or_insert(masjid_id);
    }
}
