//! HTTP handlers. Thin: decode the request, call a service with the
//! caller, encode the result in the shape the editor expects.

pub mod comments;
pub mod scripts;
pub mod user;
