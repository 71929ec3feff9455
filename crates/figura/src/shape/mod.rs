//! Shape representation: variant structs and the tagged `Shape` enum

mod display;
mod impls;

use serde::{Deserialize, Serialize};

use crate::measure::{Area, Volume};

/// A circle in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Radius, non-negative and finite
    pub radius: f64,
}

/// An axis-aligned square in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Square {
    /// Side length, non-negative and finite
    pub side: f64,
}

/// A cube in space, the only solid variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    /// Edge length, non-negative and finite
    pub side: f64,
}

/// A geometric figure capable of producing an area.
///
/// Each variant wraps its own struct so the measurement capabilities live
/// as one trait implementation per shape; the enum only dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Circle variant
    Circle(Circle),
    /// Square variant
    Square(Square),
    /// Cube variant
    Cube(Cube),
}

impl Area for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Area for Square {
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl Area for Cube {
    /// Area of a single face.
    fn area(&self) -> f64 {
        self.side * self.side
    }
}

impl Volume for Cube {
    fn volume(&self) -> f64 {
        self.side * self.side * self.side
    }
}

impl Area for Shape {
    fn area(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.area(),
            Shape::Square(s) => s.area(),
            Shape::Cube(c) => c.area(),
        }
    }
}
