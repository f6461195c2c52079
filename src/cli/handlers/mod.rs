//! Command handlers for the CLI.
//!
//! Handlers write to the writer they are given rather than to stdout, so
//! tests can capture their output.

mod completions;
mod presets;
mod slug;
mod unique;


pub use completions::handle_completions;
pub use presets::handle_presets;
pub use slug::handle_slug;
pub use unique::handle_unique;
