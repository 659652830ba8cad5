//! Signed-in dashboard user.

use serde::{Deserialize, Serialize};

use crate::models::enums::UserRole;
use crate::types::{DbId, Timestamp};

/// The account stored in the session alongside the bearer token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<DbId>,
    pub nama: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub masjid_id: Option<DbId>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

impl User {
    /// Viewers may browse but not mutate.
    pub fn can_edit(&self) -> bool {
        matches!(self.role, Some(UserRole::Admin | UserRole::SuperAdmin))
    }
}
