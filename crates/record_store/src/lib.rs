//! Key-value backed record storage for ClinicDesk.
//!
//! This crate provides the persistence layer: a flat key-value adapter,
//! the three record collections stored through it, the one-time seed
//! dataset, the login session, patient form validation and attachment
//! uploads.

mod attachments;
mod error;
mod kv;
mod seed;
mod session;
mod store;
mod validate;

pub use attachments::*;
pub use error::*;
pub use kv::*;
pub use seed::*;
pub use session::*;
pub use store::*;
pub use validate::*;
