//! Shape constructors, predicates, and From conversions

use crate::error::{FiguraError, Result};
use crate::measure::Volume;

use super::{Circle, Cube, Shape, Square};

// Zero is accepted: degenerate shapes have zero area, which keeps the
// measurement identities valid over all non-negative inputs.
fn check_dimension(shape: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FiguraError::InvalidDimension { shape, value });
    }
    Ok(())
}

impl Circle {
    /// Create a circle, rejecting negative or non-finite radii.
    pub fn new(radius: f64) -> Result<Self> {
        check_dimension("circle", radius)?;
        Ok(Self { radius })
    }
}

impl Square {
    /// Create a square, rejecting negative or non-finite side lengths.
    pub fn new(side: f64) -> Result<Self> {
        check_dimension("square", side)?;
        Ok(Self { side })
    }
}

impl Cube {
    /// Create a cube, rejecting negative or non-finite edge lengths.
    pub fn new(side: f64) -> Result<Self> {
        check_dimension("cube", side)?;
        Ok(Self { side })
    }
}

impl Shape {
    /// Create a circle shape
    pub fn circle(radius: f64) -> Result<Self> {
        Circle::new(radius).map(Shape::Circle)
    }

    /// Create a square shape
    pub fn square(side: f64) -> Result<Self> {
        Square::new(side).map(Shape::Square)
    }

    /// Create a cube shape
    pub fn cube(side: f64) -> Result<Self> {
        Cube::new(side).map(Shape::Cube)
    }

    /// Check if the shape encloses a volume
    pub fn is_solid(&self) -> bool {
        matches!(self, Shape::Cube(_))
    }

    /// The enclosed volume, for solid variants
    pub fn volume(&self) -> Option<f64> {
        match self {
            Shape::Cube(c) => Some(c.volume()),
            Shape::Circle(_) | Shape::Square(_) => None,
        }
    }

    /// Variant name, for display and error reporting
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Square(_) => "square",
            Shape::Cube(_) => "cube",
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Square> for Shape {
    fn from(square: Square) -> Self {
        Shape::Square(square)
    }
}

impl From<Cube> for Shape {
    fn from(cube: Cube) -> Self {
        Shape::Cube(cube)
    }
}
