//! Closed enumerations for the `status`, `jenis`, `tone` and `media` fields.
//!
//! Each enum serializes to the backend's snake_case wire string and carries
//! a human-readable label for tables, badges and share texts.

use crate::error::CoreError;

macro_rules! define_choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = ($wire:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every allowed value, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire string sent to and received from the backend.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            /// Display label.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $wire => Ok($name::$variant), )+
                    other => Err(CoreError::InvalidChoice {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

define_choice_enum! {
    /// Program lifecycle status.
    ProgramStatus ("status") {
        Planned = ("direncanakan", "Direncanakan"),
        Running = ("berjalan", "Berjalan"),
        Finished = ("selesai", "Selesai"),
    }
}

define_choice_enum! {
    /// Activity (kegiatan) lifecycle status.
    ActivityStatus ("status") {
        NotStarted = ("belum_mulai", "Belum Mulai"),
        Running = ("berjalan", "Berjalan"),
        Finished = ("selesai", "Selesai"),
    }
}

define_choice_enum! {
    /// Stakeholder category (`jenis`).
    StakeholderKind ("jenis") {
        Individual = ("individu", "Individu"),
        Organization = ("organisasi", "Organisasi"),
        Company = ("perusahaan", "Perusahaan"),
        Government = ("pemerintah", "Pemerintah"),
    }
}

define_choice_enum! {
    /// Employment status.
    EmployeeStatus ("status") {
        Active = ("aktif", "Aktif"),
        Inactive = ("nonaktif", "Nonaktif"),
    }
}

define_choice_enum! {
    /// Writing tone of a publication.
    Tone ("tone") {
        Formal = ("formal", "Formal"),
        Casual = ("santai", "Santai"),
        Inspirational = ("inspiratif", "Inspiratif"),
    }
}

define_choice_enum! {
    /// Channel a publication is published on.
    Media ("media") {
        Instagram = ("instagram", "Instagram"),
        Facebook = ("facebook", "Facebook"),
        Website = ("website", "Website"),
        WhatsApp = ("whatsapp", "WhatsApp"),
    }
}

define_choice_enum! {
    /// Publication workflow status.
    PublicationStatus ("status") {
        Draft = ("draft", "Draft"),
        Published = ("terbit", "Terbit"),
    }
}

define_choice_enum! {
    /// Training registration status.
    TrainingStatus ("status") {
        Open = ("dibuka", "Dibuka"),
        Closed = ("ditutup", "Ditutup"),
        Finished = ("selesai", "Selesai"),
    }
}

define_choice_enum! {
    /// Viewer-access request review status.
    RequestStatus ("status") {
        Pending = ("pending", "Menunggu"),
        Approved = ("approved", "Disetujui"),
        Rejected = ("rejected", "Ditolak"),
    }
}

define_choice_enum! {
    /// Dashboard account role.
    UserRole ("role") {
        SuperAdmin = ("superadmin", "Super Admin"),
        Admin = ("admin", "Admin"),
        Viewer = ("viewer", "Viewer"),
    }
}
