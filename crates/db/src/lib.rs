//! Data-access layer for Investo.
//!
//! One [`Backend`] contract, two implementations: [`RemoteBackend`] talks to
//! a managed REST database, [`FallbackStore`] keeps everything in process
//! memory. [`select_backend`] picks one at startup.

pub mod backend;
pub mod error;
pub mod fallback;
pub mod models;
pub mod remote;
pub mod selector;

pub use backend::{Backend, BackendKind, SharedBackend};
pub use error::{DbError, DbResult};
pub use fallback::FallbackStore;
pub use remote::{RemoteBackend, RemoteConfig};
pub use selector::select_backend;
