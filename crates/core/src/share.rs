//! WhatsApp share links.
//!
//! [`build_share_link`] only builds the URL; opening it is the caller's job.

use crate::format::{format_period, format_rupiah, EMPTY_CELL};
use crate::models::{Activity, Program, Publication, Training};

/// WhatsApp click-to-chat endpoint without a fixed recipient.
pub const WHATSAPP_SHARE_URL: &str = "https://wa.me/";

/// An entity that can be summarised as a chat message.
pub trait Shareable {
    /// Multi-line message body. WhatsApp renders `*text*` as bold.
    fn share_text(&self) -> String;
}

/// `https://wa.me/?text=<url-encoded share text>`.
pub fn build_share_link<T: Shareable + ?Sized>(entity: &T) -> String {
    format!(
        "{WHATSAPP_SHARE_URL}?text={}",
        urlencoding::encode(&entity.share_text())
    )
}

/// Collects `Label: value` lines, skipping blank values.
struct ShareText {
    lines: Vec<String>,
}

impl ShareText {
    fn titled(title: String) -> Self {
        Self {
            lines: vec![format!("*{title}*")],
        }
    }

    fn line(mut self, label: &str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref().trim();
        if !value.is_empty() && value != EMPTY_CELL {
            self.lines.push(format!("{label}: {value}"));
        }
        self
    }

    fn paragraph(mut self, text: Option<&str>) -> Self {
        if let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) {
            self.lines.push(String::new());
            self.lines.push(text.to_string());
        }
        self
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

impl Shareable for Program {
    fn share_text(&self) -> String {
        ShareText::titled(format!("Program: {}", self.nama_program))
            .line("Status", self.status.map(|s| s.label()).unwrap_or_default())
            .line("Kategori", self.kategori.as_deref().unwrap_or_default())
            .line(
                "Periode",
                format_period(self.tanggal_mulai.as_deref(), self.tanggal_selesai.as_deref()),
            )
            .line("Anggaran", format_rupiah(self.anggaran))
            .line(
                "Penanggung jawab",
                self.penanggung_jawab.as_deref().unwrap_or_default(),
            )
            .paragraph(self.deskripsi.as_deref())
            .finish()
    }
}

impl Shareable for Activity {
    fn share_text(&self) -> String {
        ShareText::titled(format!("Kegiatan: {}", self.nama_kegiatan))
            .line("Status", self.status.map(|s| s.label()).unwrap_or_default())
            .line(
                "Waktu",
                format_period(self.tanggal_mulai.as_deref(), self.tanggal_selesai.as_deref()),
            )
            .line("Lokasi", self.lokasi.as_deref().unwrap_or_default())
            .line("Penerima manfaat", {
                let total = self.total_beneficiaries();
                if total > 0 {
                    format!("{total} orang")
                } else {
                    String::new()
                }
            })
            .paragraph(self.deskripsi.as_deref())
            .finish()
    }
}

impl Shareable for Publication {
    fn share_text(&self) -> String {
        ShareText::titled(self.judul.clone())
            .paragraph(Some(self.konten.as_str()))
            .finish()
    }
}

impl Shareable for Training {
    fn share_text(&self) -> String {
        ShareText::titled(format!("Pelatihan: {}", self.nama_pelatihan))
            .line(
                "Jadwal",
                format_period(self.tanggal_mulai.as_deref(), self.tanggal_selesai.as_deref()),
            )
            .line("Lokasi", self.lokasi.as_deref().unwrap_or_default())
            .line("Kuota", format!("{} peserta", self.kuota))
            .paragraph(self.deskripsi.as_deref())
            .finish()
    }
}
