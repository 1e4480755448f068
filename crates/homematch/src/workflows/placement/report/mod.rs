mod export;
mod summary;
pub mod views;

pub use export::write_csv;
pub use summary::{render_line, render_text, AllocationReport};
