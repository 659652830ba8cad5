//! Entity models, their typed field updates, and shared traits.

/// A single typed field edit applied to an entity draft.
pub trait FieldUpdate: Clone + std::fmt::Debug + Send + Sync {
    /// Wire name of the field this update touches.
    fn field_name(&self) -> &'static str;
}

/// An entity whose draft can be edited one field at a time.
pub trait Editable {
    type Update: FieldUpdate;

    /// Apply a typed update to this value in place.
    fn apply(&mut self, update: Self::Update);
}

/// Generates a `<Entity>Field` enum with one variant per editable field and
/// the matching [`Editable`] implementation.
macro_rules! define_fields {
    (
        $(#[$meta:meta])*
        $entity:ident => $name:ident {
            $( $variant:ident($ty:ty) => $field:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $( $variant($ty) ),+
        }

        impl crate::models::FieldUpdate for $name {
            fn field_name(&self) -> &'static str {
                match self {
                    $( $name::$variant(_) => stringify!($field) ),+
                }
            }
        }

        impl crate::models::Editable for $entity {
            type Update = $name;

            fn apply(&mut self, update: $name) {
                match update {
                    $( $name::$variant(value) => self.$field = value ),+
                }
            }
        }
    };
}

pub mod activity;
pub mod beneficiary;
pub mod employee;
pub mod enums;
pub mod masjid;
pub mod program;
pub mod publication;
pub mod stakeholder;
pub mod training;
pub mod user;
pub mod viewer_request;

pub use activity::{
    Activity, ActivityBeneficiary, ActivityEmployee, ActivityField, ActivityStakeholder,
};
pub use beneficiary::{Beneficiary, BeneficiaryField};
pub use employee::{Employee, EmployeeField};
pub use enums::{
    ActivityStatus, EmployeeStatus, Media, ProgramStatus, PublicationStatus, RequestStatus,
    StakeholderKind, Tone, TrainingStatus, UserRole,
};
pub use masjid::{Masjid, MasjidField};
pub use program::{Program, ProgramField};
pub use publication::{Publication, PublicationField};
pub use stakeholder::{Stakeholder, StakeholderField};
pub use training::{Training, TrainingField};
pub use user::User;
pub use viewer_request::{ViewerRequest, ViewerRequestField};
