//! Program entity.

use serde::{Deserialize, Serialize};

use crate::models::enums::ProgramStatus;
use crate::resource::Resource;
use crate::types::{Amount, DbId, Timestamp};

/// A community program run by a masjid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Program {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub nama_program: String,
    pub deskripsi: Option<String>,
    pub kategori: Option<String>,
    pub status: Option<ProgramStatus>,
    pub anggaran: Amount,
    /// ISO date (`YYYY-MM-DD` or RFC 3339).
    pub tanggal_mulai: Option<String>,
    pub tanggal_selesai: Option<String>,
    pub penanggung_jawab: Option<String>,
    pub masjid_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing)]
    pub updated_at: Option<Timestamp>,
}

define_fields! {
    /// Typed edit of a single [`Program`] field.
    Program => ProgramField {
        NamaProgram(String) => nama_program,
        Deskripsi(Option<String>) => deskripsi,
        Kategori(Option<String>) => kategori,
        Status(Option<ProgramStatus>) => status,
        Anggaran(Amount) => anggaran,
        TanggalMulai(Option<String>) => tanggal_mulai,
        TanggalSelesai(Option<String>) => tanggal_selesai,
        PenanggungJawab(Option<String>) => penanggung_jawab,
    }
}

impl Resource for Program {
    type Id = DbId;

    const PATH: &'static str = "program";
    const LABEL: &'static str = "Program";
    const COLLECTION_KEY: Option<&'static str> = Some("programs");
    const FILTER_PARAM: Option<&'static str> = Some("status");
    const MASJID_SCOPED: bool = true;

    fn id(&self) -> Option<&DbId> {
        self.id.as_ref()
    }

    fn set_masjid_id(&mut self, masjid_id: DbId) {
        self.masjid_id.get_or_insert(masjid_id);
    }
}
