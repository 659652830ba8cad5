//! Publication entity.

use serde::{Deserialize, Serialize};

use crate::models::enums::{Media, PublicationStatus, Tone};
use crate::resource::Resource;
use crate::types::{DbId, Timestamp};

/// An announcement or article prepared for a social channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub judul: String,
    pub konten: String,
    pub tone: Option<Tone>,
    pub media: Option<Media>,
    pub tanggal_publikasi: Option<String>,
    pub status: Option<PublicationStatus>,
    /// Public link of an uploaded cover image.
    pub gambar_url: Option<String>,
    pub masjid_id: Option<DbId>,
    #[serde(skip_serializing)]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing)]
    pub updated_at: Option<Timestamp>,
}

define_fields! {
    Publication => PublicationField {
        Judul(String) => judul,
        Konten(String) => konten,
        Tone(Option<Tone>) => tone,
        Media(Option<Media>) => media,
        TanggalPublikasi(Option<String>) => tanggal_publikasi,
        Status(Option<PublicationStatus>) => status,
        GambarUrl(Option<String>) => gambar_url,
    }
}

impl Resource for Publication {
    type Id = DbId;

    const PATH: &'static str = "publikasi";
    const LABEL: &'static str = "Publikasi";
    const FILTER_PARAM: Option<&'static str> = Some("media");
    const MASJID_SCOPED: bool = true;

    fn id(&self) -> Option<&DbId> {
        self.id.as_ref()
    }

    fn set_masjid_id(&mut self, masjid_id: DbId) {
        self.masjid_id.get_or_insert(masjid_id);
    }
}
