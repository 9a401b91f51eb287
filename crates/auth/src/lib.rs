//! Authentication for ClinicDesk.
//!
//! This crate provides:
//! - Credential validation against the seeded users collection
//! - Session creation, restoration and teardown

mod error;
mod service;

pub use error::*;
pub use service::*;
