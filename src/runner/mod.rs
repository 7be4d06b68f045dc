mod executor;
mod orchestrator;

pub use orchestrator::{Orchestrator, RunReport};
