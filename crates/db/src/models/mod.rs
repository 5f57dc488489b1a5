pub mod comment;
pub mod script;
