//! Request extractors.
//!
//! - [`identity::CurrentCaller`] -- Resolves the caller once per request from
//!   an optional JWT Bearer token. Anonymous callers are allowed.

pub mod identity;
