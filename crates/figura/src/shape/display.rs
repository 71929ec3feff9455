//! Display implementations for shapes

use std::fmt;

use super::{Circle, Cube, Shape, Square};

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle(r = {})", self.radius)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "square(s = {})", self.side)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cube(s = {})", self.side)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(c) => write!(f, "{}", c),
            Shape::Square(s) => write!(f, "{}", s),
            Shape::Cube(c) => write!(f, "{}", c),
        }
    }
}
