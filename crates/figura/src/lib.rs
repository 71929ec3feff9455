//! # Figura
//!
//! A small library for measuring geometric shapes.
//!
//! Figura extracts the classic shape/area walkthrough into a standalone
//! component: tagged shape variants, capability traits for area and volume,
//! a fail-fast aggregator over heterogeneous values, and a presenter that
//! renders totals without touching the computation.
//!
//! ## Architecture
//!
//! - **Shapes**: variant structs with one capability implementation each
//! - **Aggregator**: polymorphic summation over the area capability
//! - **Presenter**: pure rendering into structured or markup text
//!
//! Everything is synchronous and pure; values are constructed, measured,
//! and discarded within a single call. See the design documentation for
//! decision records.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod error;
pub mod measure;
pub mod present;
pub mod shape;

// Re-export main types
pub use aggregate::{aggregate, total_area, total_volume, Value};
pub use error::{FiguraError, Result};
pub use measure::{Area, Volume};
pub use present::{present, AggregateReport, Format};
pub use shape::{Circle, Cube, Shape, Square};

/// Figura version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
