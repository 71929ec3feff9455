//! Measurement capabilities for shapes
//!
//! Aggregation is written against these traits rather than against the
//! concrete variants, so adding a shape never touches the aggregator.

/// Capability of a figure to produce a surface area.
pub trait Area {
    /// Area in square units
    fn area(&self) -> f64;
}

/// Capability of a solid figure to produce an enclosed volume.
///
/// Every solid also has a surface area, hence the supertrait.
pub trait Volume: Area {
    /// Volume in cubic units
    fn volume(&self) -> f64;
}
