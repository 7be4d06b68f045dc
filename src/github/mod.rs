pub mod actions;
mod client;
mod comment;
pub mod context;

pub use client::GhClient;
pub use comment::{failure_message, CommentReconciler};
