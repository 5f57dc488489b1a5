//! Identity-provider integration.
//!
//! - [`jwt`] -- verification (and, for tooling and tests, minting) of the
//!   HS256 access tokens issued by the identity provider.
//! - [`links`] -- login/logout page URLs handed to the browser.

pub mod jwt;
pub mod links;
