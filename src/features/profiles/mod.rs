//! Public profile data per identity.
//!
//! The identity provider owns accounts; this feature only keeps the
//! display data other users see (name, avatar, email), provisioned lazily
//! from token claims on first access.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProfileService;
