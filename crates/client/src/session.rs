//! Session capability consumed by the controllers.
//!
//! The dashboard persists `token`, `user` and `currentMasjidId` locally.
//! Controllers never read that storage directly; they ask a
//! [`SessionProvider`], which keeps them testable with an in-memory session.

use std::path::Path;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use masjid_core::models::User;
use masjid_core::types::DbId;

use crate::error::ClientError;

pub trait SessionProvider: Send + Sync {
    /// Bearer token, or `None` when signed out.
    fn token(&self) -> Option<String>;

    fn current_masjid_id(&self) -> Option<DbId>;

    fn user(&self) -> Option<User>;
}

/// The persisted session record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionData {
    pub token: Option<String>,
    pub user: Option<User>,
    pub current_masjid_id: Option<DbId>,
}

impl SessionData {
    /// Read a session file. A missing file is an empty session.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No session file, starting signed out");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ClientError> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

/// Session held in memory, read once at construction.
#[derive(Debug, Default)]
pub struct MemorySession {
    data: RwLock<SessionData>,
}

impl MemorySession {
    pub fn new(data: SessionData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Session with only a token set.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(SessionData {
            token: Some(token.into()),
            ..Default::default()
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        Ok(Self::new(SessionData::load(path)?))
    }

    pub fn snapshot(&self) -> SessionData {
        self.read().clone()
    }

    pub fn set_token(&self, token: Option<String>) {
        self.write().token = token;
    }

    pub fn set_current_masjid_id(&self, masjid_id: Option<DbId>) {
        self.write().current_masjid_id = masjid_id;
    }

    pub fn set_user(&self, user: Option<User>) {
        self.write().user = user;
    }

    /// Sign out.
    pub fn clear(&self) {
        *self.write() = SessionData::default();
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionData> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionData> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionProvider for MemorySession {
    fn token(&self) -> Option<String> {
        self.read()
            .token
            .clone()
            .filter(|token| !token.trim().is_empty())
    }

    fn current_masjid_id(&self) -> Option<DbId> {
        self.read().current_masjid_id
    }

    fn user(&self) -> Option<User> {
        self.read().user.clone()
    }
}
