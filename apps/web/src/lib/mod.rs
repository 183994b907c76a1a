//! Shared frontend utilities: configuration, browser storage, logging, theme
//! classes and build metadata.
//!
//! The session lives in `window.localStorage` under a single key (default
//! `authState`). The API client reads the token from there before every
//! request, so nothing here caches credentials. Callers must still avoid
//! logging tokens or passwords.

pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod logging;
pub(crate) mod storage;
pub(crate) mod theme;
