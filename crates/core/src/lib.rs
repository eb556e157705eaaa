//! Domain types and pure logic shared by the data-access layer and the API.
//!
//! Nothing in this crate performs I/O.

pub mod auth;
pub mod error;
pub mod feed;
pub mod fields;
pub mod types;
