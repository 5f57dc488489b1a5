//! Script and comment services.
//!
//! Each service combines a store, the shared cache and the permission
//! engine. The caller is always passed in explicitly. Cache failures are
//! logged by the `scriptpad_cache` helpers and never fail an operation.

pub mod comments;
pub mod scripts;

pub use comments::CommentService;
pub use scripts::ScriptService;
