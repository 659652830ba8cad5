//! Pure domain logic for the masjid administration dashboard.
//!
//! Entity models, typed updates, form validation, display formatting,
//! WhatsApp share links, pagination math, and the list/detail state
//! machines the async controllers in `masjid-client` drive. Nothing in
//! this crate performs I/O.

pub mod detail;
pub mod error;
pub mod export;
pub mod format;
pub mod list;
pub mod models;
pub mod pagination;
pub mod resource;
pub mod share;
pub mod types;
pub mod upload;
pub mod validation;
