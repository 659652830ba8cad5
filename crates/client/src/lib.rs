//! Async data-access layer for the masjid administration dashboard.
//!
//! Controllers in this crate are the only components that talk to the
//! backend. Views read their state and call their operations; each
//! controller owns its request lifecycle and reports failures through a
//! [`notify::Notifier`].

pub mod api;
pub mod config;
pub mod context;
pub mod detail;
pub mod envelope;
pub mod error;
pub mod list;
pub mod notify;
pub mod resource;
pub mod session;
pub mod transport;
pub mod upload;

pub use context::ClientContext;
pub use detail::DetailController;
pub use error::{ClientError, ClientResult};
pub use list::ListController;
