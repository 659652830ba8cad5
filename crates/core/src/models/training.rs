//! Training (pelatihan) entity.

use serde::{Deserialize, Serialize};

use crate::models::enums::TrainingStatus;
use crate::resource::{Resource, RouteStyle};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Training {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub nama_pelatihan: String,
    pub deskripsi: Option<String>,
    pub lokasi: Option<String>,
    pub tanggal_mulai: Option<String>,
    pub tanggal_selesai: Option<String>,
    /// Seats available; never negative.
    pub kuota: i64,
    pub status: Option<TrainingStatus>,
    pub masjid_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing)]
    pub updated_at: Option<Timestamp>,
}

define_fields! {
    Training => TrainingField {
        NamaPelatihan(String) => nama_pelatihan,
        Deskripsi(Option<String>) => deskripsi,
        Lokasi(Option<String>) => lokasi,
        TanggalMulai(Option<String>) => tanggal_mulai,
        TanggalSelesai(Option<String>) => tanggal_selesai,
        Kuota(i64) => kuota,
        Status(Option<TrainingStatus>) => status,
    }
}

impl Resource for Training {
    type Id = DbId;

    const PATH: &'static str = "training";
    const LABEL: &'static str = "Pelatihan";
    const COLLECTION_KEY: Option<&'static str> = Some("trainings");
    const ROUTES: RouteStyle = RouteStyle::Verb;
    const FILTER_PARAM: Option<&'static str> = Some("status");
    const DEFAULT_SORT: &'static str = "tanggal_mulai";
    const MASJID_SCOPED: bool = true;

    fn id(&self) -> Option<&DbId> {
        self.id.as_ref()
    }

    fn set_masjid_id(&mut self, masjid_id: DbId) {
        self.masjid_id.get_or_insert(masjid_id);
    }
}
