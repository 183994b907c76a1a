//! Core of the roster user-management console.
//!
//! The crate is platform neutral: it compiles for the browser (`wasm32`), where
//! the Leptos app in `apps/web` drives it, and natively, where the tests run.
//!
//! ## Flow
//!
//! 1. **Startup:** `SessionStore::initialize` hydrates the session from a
//!    `KeyValueStore` (browser local storage in production). Corrupt data is
//!    discarded and logged.
//! 2. **Login / registration:** forms are checked by `validation`, then the
//!    store calls the `UserService`. A successful response is written through
//!    to storage before the caller is told to navigate to the dashboard.
//! 3. **Requests:** `HttpClient` reads the persisted session before every call
//!    and sends `Authorization: Bearer <token>` when one is present.
//! 4. **Dashboard:** the fetched list is searched and paginated client side by
//!    `directory::Listing`.
//!
//! Tokens and passwords must never be logged.

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod routes;
pub mod session;
pub mod storage;
pub mod types;
pub mod validation;

pub use api::{HttpClient, UserService};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use routes::Route;
pub use session::{Outcome, SessionStore, Snapshot};
pub use storage::{KeyValueStore, MemoryStore};
pub use types::{ApiResponse, LoginCredentials, RegisterData, Session, User, UserStatus};
