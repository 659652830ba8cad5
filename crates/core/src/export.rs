//! CSV export of list views.

use crate::format::{display_date_or_dash, format_currency, EMPTY_CELL};
use crate::models::{Beneficiary, Employee, Program, Stakeholder};

/// A record that can be written as a spreadsheet row.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

/// Quote a cell when it contains a separator, quote or line break.
fn escape_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn write_line(out: &mut String, cells: impl IntoIterator<Item = impl AsRef<str>>) {
    let line: Vec<String> = cells
        .into_iter()
        .map(|cell| escape_cell(cell.as_ref()))
        .collect();
    out.push_str(&line.join(","));
    out.push_str("\r\n");
}

/// Header line followed by one line per record, CRLF-terminated.
pub fn to_csv<T: Tabular>(records: &[T]) -> String {
    let mut out = String::new();
    write_line(&mut out, T::headers());
    for record in records {
        write_line(&mut out, record.row());
    }
    out
}

fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(EMPTY_CELL)
        .to_string()
}

impl Tabular for Program {
    fn headers() -> &'static [&'static str] {
        &["Nama Program", "Kategori", "Status", "Anggaran", "Mulai", "Selesai"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.nama_program.clone(),
            or_dash(self.kategori.as_deref()),
            or_dash(self.status.map(|s| s.label())),
            format_currency(self.anggaran),
            display_date_or_dash(self.tanggal_mulai.as_deref()),
            display_date_or_dash(self.tanggal_selesai.as_deref()),
        ]
    }
}

impl Tabular for Stakeholder {
    fn headers() -> &'static [&'static str] {
        &["Nama", "Jenis", "Telepon", "Email", "Alamat"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.nama_stakeholder.clone(),
            or_dash(self.jenis.map(|j| j.label())),
            self.telepon.clone(),
            self.email.clone(),
            or_dash(self.alamat.as_deref()),
        ]
    }
}

impl Tabular for Beneficiary {
    fn headers() -> &'static [&'static str] {
        &["Nama", "NIK", "Kategori", "Telepon", "Alamat"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.nama.clone(),
            or_dash(self.nik.as_deref()),
            or_dash(self.kategori.as_deref()),
            or_dash(self.telepon.as_deref()),
            or_dash(self.alamat.as_deref()),
        ]
    }
}

impl Tabular for Employee {
    fn headers() -> &'static [&'static str] {
        &["Nama", "Jabatan", "Email", "Telepon", "Status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.nama.clone(),
            self.jabatan.clone(),
            self.email.clone(),
            self.telepon.clone(),
            or_dash(self.status.map(|s| s.label())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StakeholderKind;

    #[test]
    fn cells_with_commas_and_quotes_are_escaped() {
        assert_eq!(escape_cell("Jl. Masjid, No. 1"), "\"Jl. Masjid, No. 1\"");
        assert_eq!(escape_cell("Pak \"Haji\""), "\"Pak \"\"Haji\"\"\"");
        assert_eq!(escape_cell("biasa"), "biasa");
    }

    #[test]
    fn csv_has_header_and_rows() {
        let rows = vec![Stakeholder {
            nama_stakeholder: "Yayasan Amal".to_string(),
            jenis: Some(StakeholderKind::Organization),
            telepon: "081234567890".to_string(),
            email: "amal@yayasan.or.id".to_string(),
            alamat: Some("Jl. Merdeka, 5".to_string()),
            ..Default::default()
        }];
        let csv = to_csv(&rows);
        assert_eq!(
            csv,
            "Nama,Jenis,Telepon,Email,Alamat\r\n\
             Yayasan Amal,Organisasi,081234567890,amal@yayasan.or.id,\"Jl. Merdeka, 5\"\r\n"
        );
    }

    #[test]
    fn program_row_formats_currency() {
        let program = Program {
            nama_program: "Qurban".to_string(),
            anggaran: 45_000_000,
            ..Default::default()
        };
        assert_eq!(program.row()[3], "45.000.000");
        assert_eq!(program.row()[2], "-");
    }
}
