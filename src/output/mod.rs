mod report;
mod summary;

pub use report::{render_final, render_placeholder, with_marker, AggregateReport};
pub use summary::write_summary;
