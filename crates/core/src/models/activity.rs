//! Activity (kegiatan) entity and its embedded participant rows.
//!
//! Stakeholders, beneficiaries and employees attached to an activity are
//! value rows owned by the activity: they have no identity outside the
//! parent's edit session and are edited by index.

use serde::{Deserialize, Serialize};

use crate::models::enums::ActivityStatus;
use crate::models::{Editable, FieldUpdate};
use crate::resource::Resource;
use crate::types::{Amount, DbId, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityStakeholder {
    pub stakeholder_id: Option<DbId>,
    pub nama: String,
    pub peran: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityBeneficiary {
    pub beneficiary_id: Option<DbId>,
    pub nama: String,
    /// Number of people reached through this row.
    pub jumlah: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityEmployee {
    pub employee_id: Option<DbId>,
    pub nama: String,
    pub tugas: Option<String>,
}

/// A scheduled activity belonging to a program.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub program_id: Option<DbId>,
    pub nama_kegiatan: String,
    pub deskripsi: Option<String>,
    pub lokasi: Option<String>,
    pub tanggal_mulai: Option<String>,
    pub tanggal_selesai: Option<String>,
    pub status: Option<ActivityStatus>,
    pub anggaran: Amount,
    pub stakeholders: Vec<ActivityStakeholder>,
    pub beneficiaries: Vec<ActivityBeneficiary>,
    pub employees: Vec<ActivityEmployee>,
    #[serde(skip_serializing)]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing)]
    pub updated_at: Option<Timestamp>,
}

impl Activity {
    /// Total people reached across all beneficiary rows.
    pub fn total_beneficiaries(&self) -> i64 {
        self.beneficiaries.iter().map(|row| row.jumlah.max(0)).sum()
    }
}

/// Typed edit of an [`Activity`] draft.
///
/// Row variants address embedded rows by index; an index past the end is
/// ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivityField {
    ProgramId(Option<DbId>),
    NamaKegiatan(String),
    Deskripsi(Option<String>),
    Lokasi(Option<String>),
    TanggalMulai(Option<String>),
    TanggalSelesai(Option<String>),
    Status(Option<ActivityStatus>),
    Anggaran(Amount),
    AddStakeholder(ActivityStakeholder),
    UpdateStakeholder(usize, ActivityStakeholder),
    RemoveStakeholder(usize),
    AddBeneficiary(ActivityBeneficiary),
    UpdateBeneficiary(usize, ActivityBeneficiary),
    RemoveBeneficiary(usize),
    AddEmployee(ActivityEmployee),
    UpdateEmployee(usize, ActivityEmployee),
    RemoveEmployee(usize),
}

impl FieldUpdate for ActivityField {
    fn field_name(&self) -> &'static str {
        use ActivityField::*;
        match self {
            ProgramId(_) => "program_id",
            NamaKegiatan(_) => "nama_kegiatan",
            Deskripsi(_) => "deskripsi",
            Lokasi(_) => "lokasi",
            TanggalMulai(_) => "tanggal_mulai",
            TanggalSelesai(_) => "tanggal_selesai",
            Status(_) => "status",
            Anggaran(_) => "anggaran",
            AddStakeholder(_) | UpdateStakeholder(..) | RemoveStakeholder(_) => "stakeholders",
            AddBeneficiary(_) | UpdateBeneficiary(..) | RemoveBeneficiary(_) => "beneficiaries",
            AddEmployee(_) | UpdateEmployee(..) | RemoveEmployee(_) => "employees",
        }
    }
}

fn replace_row<T>(rows: &mut [T], index: usize, row: T) {
    if let Some(slot) = rows.get_mut(index) {
        *slot = row;
    }
}

fn remove_row<T>(rows: &mut Vec<T>, index: usize) {
    if index < rows.len() {
        rows.remove(index);
    }
}

impl Editable for Activity {
    type Update = ActivityField;

    fn apply(&mut self, update: ActivityField) {
        use ActivityField::*;
        match update {
            ProgramId(value) => self.program_id = value,
            NamaKegiatan(value) => self.nama_kegiatan = value,
            Deskripsi(value) => self.deskripsi = value,
            Lokasi(value) => self.lokasi = value,
            TanggalMulai(value) => self.tanggal_mulai = value,
            TanggalSelesai(value) => self.tanggal_selesai = value,
            Status(value) => self.status = value,
            Anggaran(value) => self.anggaran = value,
            AddStakeholder(row) => self.stakeholders.push(row),
            UpdateStakeholder(i, row) => replace_row(&mut self.stakeholders, i, row),
            RemoveStakeholder(i) => remove_row(&mut self.stakeholders, i),
            AddBeneficiary(row) => self.beneficiaries.push(row),
            UpdateBeneficiary(i, row) => replace_row(&mut self.beneficiaries, i, row),
            RemoveBeneficiary(i) => remove_row(&mut self.beneficiaries, i),
            AddEmployee(row) => self.employees.push(row),
            UpdateEmployee(i, row) => replace_row(&mut self.employees, i, row),
            RemoveEmployee(i) => remove_row(&mut self.employees, i),
        }
    }
}

impl Resource for Activity {
    type Id = DbId;

    const PATH: &'static str = "kegiatan";
    const LABEL: &'static str = "Kegiatan";
    const COLLECTION_KEY: Option<&'static str> = Some("kegiatan");
    const FILTER_PARAM: Option<&'static str> = Some("status");
    const DEFAULT_SORT: &'static str = "tanggal_mulai";

    fn id(&self) -> Option<&DbId> {
        self.id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(nama: &str) -> ActivityStakeholder {
        ActivityStakeholder {
            nama: nama.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn row_updates_address_by_index() {
        let mut activity = Activity::default();
        activity.apply(ActivityField::AddStakeholder(row("A")));
        activity.apply(ActivityField::AddStakeholder(row("B")));
        activity.apply(ActivityField::UpdateStakeholder(1, row("C")));
        activity.apply(ActivityField::RemoveStakeholder(0));

        let names: Vec<&str> = activity.stakeholders.iter().map(|r| r.nama.as_str()).collect();
        assert_eq!(names, vec!["C"]);
    }

    #[test]
    fn out_of_range_row_edits_are_ignored() {
        let mut activity = Activity::default();
        activity.apply(ActivityField::AddEmployee(ActivityEmployee::default()));
        activity.apply(ActivityField::UpdateEmployee(5, ActivityEmployee::default()));
        activity.apply(ActivityField::RemoveEmployee(5));
        assert_eq!(activity.employees.len(), 1);
    }

    #[test]
    fn row_variants_report_collection_field() {
        assert_eq!(ActivityField::RemoveBeneficiary(0).field_name(), "beneficiaries");
        assert_eq!(ActivityField::Anggaran(0).field_name(), "anggaran");
    }

    #[test]
    fn total_beneficiaries_ignores_negative_rows() {
        let activity = Activity {
            beneficiaries: vec![
                ActivityBeneficiary {
                    jumlah: 12,
                    ..Default::default()
                },
                ActivityBeneficiary {
                    jumlah: -3,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(activity.total_beneficiaries(), 12);
    }
}
