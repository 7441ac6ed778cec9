//! # DefenseSync Core
//!
//! Domain types shared by the storage and API crates: the candidate calendar,
//! the judge roster, submitted responses, the error taxonomy and the
//! [`store::ResponseStore`] contract every storage backend implements.

pub mod calendar;
pub mod errors;
pub mod models;
pub mod roster;
pub mod selection;
pub mod store;
