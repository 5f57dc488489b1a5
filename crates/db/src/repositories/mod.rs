//! Repositories: one zero-sized struct per table, async functions over `&PgPool`.

pub mod comment_repo;
pub mod script_repo;

pub use comment_repo::CommentRepo;
pub use script_repo::ScriptRepo;
