//! Masjid entity.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Masjid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub nama_masjid: String,
    pub alamat: String,
    pub kota: Option<String>,
    pub telepon: Option<String>,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing)]
    pub updated_at: Option<Timestamp>,
}

define_fields! {
    Masjid => MasjidField {
        NamaMasjid(String) => nama_masjid,
        Alamat(String) => alamat,
        Kota(Option<String>) => kota,
        Telepon(Option<String>) => telepon,
        Email(Option<String>) => email,
    }
}

impl Resource for Masjid {
    type Id = DbId;

    const PATH: &'static str = "masjid";
    const LABEL: &'static str = "Masjid";
    const COLLECTION_KEY: Option<&'static str> = Some("masjids");
    const DEFAULT_SORT: &'static str = "nama_masjid";

    fn id(&self) -> Option<&DbId> {
        self.id.as_ref()
    }
}
