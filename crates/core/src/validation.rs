//! Client-side form validation.
//!
//! Validators are pure functions from a draft to [`FieldErrors`]. Checks run
//! in a fixed order and the first failing check of a field is the only
//! message recorded for it, so an empty phone number reports "required"
//! rather than "wrong length".

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::format::parse_date;
use crate::models::{
    Activity, Beneficiary, Employee, Masjid, Program, Publication, Stakeholder, Training,
    ViewerRequest,
};
use crate::types::Amount;

/// Minimum number of digits in a phone number.
pub const PHONE_MIN_DIGITS: usize = 10;

/// Maximum number of digits in a phone number.
pub const PHONE_MAX_DIGITS: usize = 15;

/// Length of an Indonesian national identity number (NIK).
pub const NIK_DIGITS: usize = 16;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// ---------------------------------------------------------------------------
// FieldErrors
// ---------------------------------------------------------------------------

/// Field name → message, in the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Record `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if !self.contains(&field) {
            self.entries.push((field, message.into()));
        }
    }

    /// Record the outcome of a single rule, if it failed.
    pub fn check(&mut self, field: impl Into<String>, outcome: Option<String>) {
        if let Some(message) = outcome {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }

    /// Drop the message for `field` and for any of its indexed rows
    /// (`stakeholders[0].nama` when clearing `stakeholders`).
    pub fn clear_field(&mut self, field: &str) {
        let row_prefix = format!("{field}[");
        self.entries
            .retain(|(name, _)| name != field && !name.starts_with(&row_prefix));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// A draft that can check itself before submission.
pub trait Validate {
    fn validate(&self) -> FieldErrors;
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Fails when the trimmed value is empty.
pub fn required(value: &str, message: &str) -> Option<String> {
    value.trim().is_empty().then(|| message.to_string())
}

/// Fails when an enumerated field has no selection.
pub fn required_choice<T>(value: &Option<T>, message: &str) -> Option<String> {
    value.is_none().then(|| message.to_string())
}

/// Fails unless the value is 10–15 ASCII digits and nothing else.
pub fn phone(value: &str) -> Option<String> {
    let value = value.trim();
    let digits_only = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
    let length_ok = (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&value.len());
    if digits_only && length_ok {
        None
    } else {
        Some(format!(
            "Nomor telepon harus {PHONE_MIN_DIGITS}-{PHONE_MAX_DIGITS} digit angka"
        ))
    }
}

/// Fails unless the value looks like `local@domain.tld`.
pub fn email(value: &str) -> Option<String> {
    if EMAIL_RE.is_match(value.trim()) {
        None
    } else {
        Some("Format email tidak valid".to_string())
    }
}

/// Fails unless the value is exactly 16 digits.
pub fn nik(value: &str) -> Option<String> {
    let value = value.trim();
    if value.len() == NIK_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        Some(format!("NIK harus {NIK_DIGITS} digit angka"))
    }
}

pub fn non_negative(value: Amount, message: &str) -> Option<String> {
    (value < 0).then(|| message.to_string())
}

/// Fails when a present value is not a parseable date.
pub fn date(value: &str) -> Option<String> {
    parse_date(value)
        .err()
        .map(|_| "Format tanggal tidak valid".to_string())
}

/// Fails when both dates parse and the end precedes the start.
pub fn date_order(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let start = parse_date(start?).ok()?;
    let end = parse_date(end?).ok()?;
    (end < start).then(|| "Tanggal selesai tidak boleh sebelum tanggal mulai".to_string())
}

/// Treat blank optional strings as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn check_period(
    errors: &mut FieldErrors,
    start: &Option<String>,
    end: &Option<String>,
    start_required: bool,
) {
    match present(start) {
        Some(value) => errors.check("tanggal_mulai", date(value)),
        None if start_required => errors.insert("tanggal_mulai", "Tanggal mulai wajib diisi"),
        None => {}
    }
    if let Some(value) = present(end) {
        errors.check("tanggal_selesai", date(value));
    }
    errors.check("tanggal_selesai", date_order(present(start), present(end)));
}

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

pub fn validate_stakeholder(form: &Stakeholder) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check(
        "nama_stakeholder",
        required(&form.nama_stakeholder, "Nama stakeholder wajib diisi"),
    );
    errors.check(
        "jenis",
        required_choice(&form.jenis, "Jenis stakeholder wajib dipilih"),
    );
    errors.check("telepon", required(&form.telepon, "Nomor telepon wajib diisi"));
    errors.check("telepon", phone(&form.telepon));
    errors.check("email", required(&form.email, "Email wajib diisi"));
    errors.check("email", email(&form.email));
    errors
}

pub fn validate_program(form: &Program) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check(
        "nama_program",
        required(&form.nama_program, "Nama program wajib diisi"),
    );
    errors.check(
        "status",
        required_choice(&form.status, "Status program wajib dipilih"),
    );
    errors.check(
        "anggaran",
        non_negative(form.anggaran, "Anggaran tidak boleh negatif"),
    );
    check_period(&mut errors, &form.tanggal_mulai, &form.tanggal_selesai, true);
    errors
}

pub fn validate_activity(form: &Activity) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check(
        "nama_kegiatan",
        required(&form.nama_kegiatan, "Nama kegiatan wajib diisi"),
    );
    errors.check(
        "program_id",
        required_choice(&form.program_id, "Program wajib dipilih"),
    );
    errors.check(
        "status",
        required_choice(&form.status, "Status kegiatan wajib dipilih"),
    );
    errors.check(
        "anggaran",
        non_negative(form.anggaran, "Anggaran tidak boleh negatif"),
    );
    check_period(&mut errors, &form.tanggal_mulai, &form.tanggal_selesai, true);

    for (i, row) in form.stakeholders.iter().enumerate() {
        errors.check(
            format!("stakeholders[{i}].nama"),
            required(&row.nama, "Nama stakeholder wajib diisi"),
        );
    }
    for (i, row) in form.beneficiaries.iter().enumerate() {
        errors.check(
            format!("beneficiaries[{i}].nama"),
            required(&row.nama, "Nama penerima manfaat wajib diisi"),
        );
        errors.check(
            format!("beneficiaries[{i}].jumlah"),
            non_negative(row.jumlah, "Jumlah tidak boleh negatif"),
        );
    }
    for (i, row) in form.employees.iter().enumerate() {
        errors.check(
            format!("employees[{i}].nama"),
            required(&row.nama, "Nama pegawai wajib diisi"),
        );
    }
    errors
}

pub fn validate_beneficiary(form: &Beneficiary) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check("nama", required(&form.nama, "Nama penerima manfaat wajib diisi"));
    if let Some(value) = present(&form.nik) {
        errors.check("nik", nik(value));
    }
    if let Some(value) = present(&form.telepon) {
        errors.check("telepon", phone(value));
    }
    errors
}

pub fn validate_employee(form: &Employee) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check("nama", required(&form.nama, "Nama pegawai wajib diisi"));
    errors.check("jabatan", required(&form.jabatan, "Jabatan wajib diisi"));
    errors.check("email", required(&form.email, "Email wajib diisi"));
    errors.check("email", email(&form.email));
    errors.check("telepon", required(&form.telepon, "Nomor telepon wajib diisi"));
    errors.check("telepon", phone(&form.telepon));
    errors.check(
        "status",
        required_choice(&form.status, "Status pegawai wajib dipilih"),
    );
    errors
}

pub fn validate_publication(form: &Publication) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check("judul", required(&form.judul, "Judul wajib diisi"));
    errors.check("konten", required(&form.konten, "Konten wajib diisi"));
    errors.check("tone", required_choice(&form.tone, "Tone wajib dipilih"));
    errors.check("media", required_choice(&form.media, "Media wajib dipilih"));
    if let Some(value) = present(&form.tanggal_publikasi) {
        errors.check("tanggal_publikasi", date(value));
    }
    errors
}

pub fn validate_training(form: &Training) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check(
        "nama_pelatihan",
        required(&form.nama_pelatihan, "Nama pelatihan wajib diisi"),
    );
    check_period(&mut errors, &form.tanggal_mulai, &form.tanggal_selesai, true);
    errors.check("kuota", non_negative(form.kuota, "Kuota tidak boleh negatif"));
    errors
}

pub fn validate_viewer_request(form: &ViewerRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check("nama", required(&form.nama, "Nama wajib diisi"));
    errors.check("email", required(&form.email, "Email wajib diisi"));
    errors.check("email", email(&form.email));
    errors.check(
        "masjid_id",
        required_choice(&form.masjid_id, "Masjid wajib dipilih"),
    );
    errors
}

pub fn validate_masjid(form: &Masjid) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check(
        "nama_masjid",
        required(&form.nama_masjid, "Nama masjid wajib diisi"),
    );
    errors.check("alamat", required(&form.alamat, "Alamat wajib diisi"));
    if let Some(value) = present(&form.telepon) {
        errors.check("telepon", phone(value));
    }
    if let Some(value) = present(&form.email) {
        errors.check("email", email(value));
    }
    errors
}

macro_rules! impl_validate {
    ($($entity:ty => $validator:ident),+ $(,)?) => {
        $(
            impl Validate for $entity {
                fn validate(&self) -> FieldErrors {
                    $validator(self)
                }
            }
        )+
    };
}

impl_validate! {
    Stakeholder => validate_stakeholder,
    Program => validate_program,
    Activity => validate_activity,
    Beneficiary => validate_beneficiary,
    Employee => validate_employee,
    Publication => validate_publication,
    Training => validate_training,
    ViewerRequest => validate_viewer_request,
    Masjid => validate_masjid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityStakeholder, ActivityStatus, EmployeeStatus, Media, ProgramStatus,
        StakeholderKind, Tone,
    };

    fn valid_stakeholder() -> Stakeholder {
        Stakeholder {
            nama_stakeholder: "Yayasan Amal".to_string(),
            jenis: Some(StakeholderKind::Organization),
            telepon: "081234567890".to_string(),
            email: "amal@yayasan.or.id".to_string(),
            ..Default::default()
        }
    }

    // -- rules ---------------------------------------------------------------

    #[test]
    fn required_rejects_whitespace() {
        assert!(required("   ", "wajib").is_some());
        assert!(required(" x ", "wajib").is_none());
    }

    #[test]
    fn phone_accepts_ten_to_fifteen_digits() {
        assert!(phone("0812345678").is_none());
        assert!(phone("081234567890123").is_none());
        assert!(phone("081234567").is_some());
        assert!(phone("0812345678901234").is_some());
    }

    #[test]
    fn phone_rejects_non_digits() {
        assert!(phone("+6281234567890").is_some());
        assert!(phone("0812-3456-7890").is_some());
    }

    #[test]
    fn email_requires_domain_with_tld() {
        assert!(email("ahmad@masjid.id").is_none());
        assert!(email("ahmad@masjid").is_some());
        assert!(email("ahmad.masjid.id").is_some());
        assert!(email("ah mad@masjid.id").is_some());
    }

    #[test]
    fn date_order_ignores_unparseable_dates() {
        assert!(date_order(Some("2024-03-05"), Some("2024-03-01")).is_some());
        assert!(date_order(Some("2024-03-05"), Some("2024-03-05")).is_none());
        assert!(date_order(Some("nanti"), Some("2024-03-01")).is_none());
        assert!(date_order(None, Some("2024-03-01")).is_none());
    }

    // -- stakeholder ---------------------------------------------------------

    #[test]
    fn empty_stakeholder_reports_every_required_field() {
        let errors = validate_stakeholder(&Stakeholder::default());
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["nama_stakeholder", "jenis", "telepon", "email"]);
        assert_eq!(errors.get("telepon"), Some("Nomor telepon wajib diisi"));
    }

    #[test]
    fn nine_digit_phone_is_rejected() {
        let form = Stakeholder {
            telepon: "081234567".to_string(),
            ..valid_stakeholder()
        };
        let errors = validate_stakeholder(&form);
        assert_eq!(errors.len(), 1);
        assert!(errors.get("telepon").unwrap().contains("10-15"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = Stakeholder {
            email: "amal@yayasan".to_string(),
            ..valid_stakeholder()
        };
        let errors = validate_stakeholder(&form);
        assert_eq!(errors.get("email"), Some("Format email tidak valid"));
        assert!(!errors.contains("telepon"));
    }

    #[test]
    fn valid_stakeholder_passes() {
        assert!(valid_stakeholder().validate().is_empty());
    }

    // -- employee ------------------------------------------------------------

    fn valid_employee() -> Employee {
        Employee {
            nama: "Ahmad Fauzi".to_string(),
            jabatan: "Marbot".to_string(),
            email: "ahmad@masjid.id".to_string(),
            telepon: "081298765432".to_string(),
            status: Some(EmployeeStatus::Active),
            ..Default::default()
        }
    }

    #[test]
    fn empty_employee_requires_contact_details() {
        let errors = validate_employee(&Employee::default());
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["nama", "jabatan", "email", "telepon", "status"]);
        assert_eq!(errors.get("email"), Some("Email wajib diisi"));
        assert_eq!(errors.get("telepon"), Some("Nomor telepon wajib diisi"));
    }

    #[test]
    fn employee_phone_and_email_formats_are_checked() {
        let cases = [
            ("081234567", "ahmad@masjid.id", "telepon"),
            ("0812345678901234", "ahmad@masjid.id", "telepon"),
            ("081298765432", "ahmad@masjid", "email"),
        ];
        for (telepon, email, field) in cases {
            let form = Employee {
                telepon: telepon.to_string(),
                email: email.to_string(),
                ..valid_employee()
            };
            let errors = validate_employee(&form);
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field], "{telepon} {email}");
        }
        assert!(valid_employee().validate().is_empty());
    }

    // -- training ------------------------------------------------------------

    fn valid_training() -> Training {
        Training {
            nama_pelatihan: "Pelatihan Khatib".to_string(),
            tanggal_mulai: Some("2024-07-01".to_string()),
            tanggal_selesai: Some("2024-07-03".to_string()),
            kuota: 30,
            ..Default::default()
        }
    }

    #[test]
    fn negative_quota_is_rejected() {
        let form = Training {
            kuota: -1,
            ..valid_training()
        };
        let errors = validate_training(&form);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("kuota"), Some("Kuota tidak boleh negatif"));

        let unlimited = Training {
            kuota: 0,
            ..valid_training()
        };
        assert!(validate_training(&unlimited).is_empty());
    }

    #[test]
    fn training_end_before_start_is_rejected() {
        let form = Training {
            tanggal_selesai: Some("2024-06-30".to_string()),
            ..valid_training()
        };
        let errors = validate_training(&form);
        assert_eq!(
            errors.get("tanggal_selesai"),
            Some("Tanggal selesai tidak boleh sebelum tanggal mulai")
        );

        let undated = Training {
            tanggal_mulai: None,
            ..valid_training()
        };
        assert_eq!(
            validate_training(&undated).get("tanggal_mulai"),
            Some("Tanggal mulai wajib diisi")
        );
    }

    // -- masjid --------------------------------------------------------------

    #[test]
    fn masjid_contact_fields_are_optional() {
        let form = Masjid {
            nama_masjid: "Masjid Al-Ikhlas".to_string(),
            alamat: "Jl. Melati 3".to_string(),
            telepon: Some("  ".to_string()),
            email: None,
            ..Default::default()
        };
        assert!(validate_masjid(&form).is_empty());

        let errors = validate_masjid(&Masjid::default());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["nama_masjid", "alamat"]);
    }

    #[test]
    fn masjid_contact_fields_are_checked_when_present() {
        let form = Masjid {
            nama_masjid: "Masjid Al-Ikhlas".to_string(),
            alamat: "Jl. Melati 3".to_string(),
            telepon: Some("021-555".to_string()),
            email: Some("takmir@".to_string()),
            ..Default::default()
        };
        let errors = validate_masjid(&form);
        assert_eq!(errors.get("telepon"), Some("Nomor telepon harus 10-15 digit angka"));
        assert_eq!(errors.get("email"), Some("Format email tidak valid"));
    }

    // -- other forms ---------------------------------------------------------

    #[test]
    fn program_rejects_negative_budget_and_reversed_period() {
        let form = Program {
            nama_program: "Santunan Yatim".to_string(),
            status: Some(ProgramStatus::Planned),
            anggaran: -5,
            tanggal_mulai: Some("2024-05-01".to_string()),
            tanggal_selesai: Some("2024-04-01".to_string()),
            ..Default::default()
        };
        let errors = validate_program(&form);
        assert!(errors.contains("anggaran"));
        assert!(errors.contains("tanggal_selesai"));
        assert!(!errors.contains("tanggal_mulai"));
    }

    #[test]
    fn activity_reports_rows_by_index() {
        let form = Activity {
            nama_kegiatan: "Kajian Subuh".to_string(),
            program_id: Some(1),
            status: Some(ActivityStatus::Running),
            tanggal_mulai: Some("2024-05-01".to_string()),
            stakeholders: vec![
                ActivityStakeholder {
                    nama: "Pak RT".to_string(),
                    ..Default::default()
                },
                ActivityStakeholder::default(),
            ],
            ..Default::default()
        };
        let errors = validate_activity(&form);
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["stakeholders[1].nama"]);
    }

    #[test]
    fn beneficiary_optional_fields_only_checked_when_present() {
        let mut form = Beneficiary {
            nama: "Fatimah".to_string(),
            nik: Some("".to_string()),
            ..Default::default()
        };
        assert!(validate_beneficiary(&form).is_empty());

        form.nik = Some("12345".to_string());
        assert!(validate_beneficiary(&form).contains("nik"));
    }

    #[test]
    fn publication_requires_tone_and_media() {
        let form = Publication {
            judul: "Jadwal Ramadhan".to_string(),
            konten: "...".to_string(),
            tone: Some(Tone::Formal),
            ..Default::default()
        };
        let errors = validate_publication(&form);
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["media"]);

        let form = Publication {
            media: Some(Media::Instagram),
            ..form
        };
        assert!(validate_publication(&form).is_empty());
    }

    #[test]
    fn viewer_request_requires_masjid() {
        let form = ViewerRequest {
            nama: "Budi".to_string(),
            email: "budi@mail.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            validate_viewer_request(&form).get("masjid_id"),
            Some("Masjid wajib dipilih")
        );
    }

    // -- FieldErrors ---------------------------------------------------------

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "first");
        errors.insert("email", "second");
        assert_eq!(errors.get("email"), Some("first"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn clear_field_removes_indexed_rows() {
        let mut errors = FieldErrors::new();
        errors.insert("stakeholders[0].nama", "x");
        errors.insert("stakeholders_note", "y");
        errors.insert("nama_kegiatan", "z");
        errors.clear_field("stakeholders");
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["stakeholders_note", "nama_kegiatan"]);
    }

    #[test]
    fn display_joins_entries() {
        let mut errors = FieldErrors::new();
        errors.insert("nama", "wajib");
        errors.insert("email", "salah");
        assert_eq!(errors.to_string(), "nama: wajib; email: salah");
    }
}
