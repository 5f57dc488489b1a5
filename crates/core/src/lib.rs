//! Domain core for the scriptpad backend.
//!
//! Pure logic shared by the store, cache and HTTP layers: identifiers and
//! timestamps, the caller identity model, the permission engine, cache key
//! derivation and the outcome types that replace sentinel ids internally.
//! Nothing in this crate performs I/O.

pub mod cache_keys;
pub mod comments;
pub mod error;
pub mod identity;
pub mod permissions;
pub mod roles;
pub mod scripts;
pub mod types;
