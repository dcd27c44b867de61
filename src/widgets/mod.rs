//! Widget data providers.
//!
//! Each provider fetches one well-known public endpoint, parses its JSON
//! shape, and formats a short display string. Providers are independent: a
//! failing or pending fetch leaves the `--` placeholder in its slot and never
//! touches the others or the navigation core. Parsing is split from fetching
//! so the response shapes stay testable offline.

pub mod clock;
pub mod github;
pub mod satellite;
pub mod seismic;
pub mod weather;

/// Display value shown before data arrives or after a failed fetch.
pub const PLACEHOLDER: &str = "--";

/// Render an optional widget value, falling back to the placeholder.
pub fn display_or_placeholder<T>(value: Option<&T>, render: impl Fn(&T) -> String) -> String {
    value.map(render).unwrap_or_else(|| PLACEHOLDER.to_string())
}
