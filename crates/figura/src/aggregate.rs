//! Aggregation over heterogeneous sequences of values

use crate::error::{FiguraError, Result};
use crate::measure::Area;
use crate::shape::Shape;

/// A value that may appear in an aggregation input.
///
/// Aggregation is polymorphic over the area capability rather than a type
/// tag; values without that capability make the call fail fast instead of
/// being skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A geometric shape
    Shape(Shape),
    /// A bare number
    Number(f64),
    /// A piece of text
    Text(String),
}

impl Value {
    /// Create a text value
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Name of the value's type, for error reporting
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Shape(_) => "shape",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
        }
    }

    /// Extract the shape, if this value is one
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Value::Shape(shape) => Some(shape),
            _ => None,
        }
    }
}

impl From<Shape> for Value {
    fn from(shape: Shape) -> Self {
        Value::Shape(shape)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

/// Sum the area of every shape in `values`.
///
/// Empty input yields `0.0`. The first element without the area capability
/// aborts the call with [`FiguraError::TypeMismatch`].
pub fn aggregate(values: &[Value]) -> Result<f64> {
    let mut total = 0.0;
    for value in values {
        let shape = value.as_shape().ok_or_else(|| FiguraError::TypeMismatch {
            expected: "shape".to_string(),
            got: value.type_name().to_string(),
        })?;
        total += shape.area();
    }
    Ok(total)
}

/// Sum the area of a homogeneous shape sequence.
pub fn total_area(shapes: &[Shape]) -> f64 {
    shapes.iter().map(Area::area).sum()
}

/// Sum the volume of a sequence of solid shapes.
///
/// Planar shapes have no volume; the first one encountered aborts the call
/// with [`FiguraError::TypeMismatch`].
pub fn total_volume(shapes: &[Shape]) -> Result<f64> {
    let mut total = 0.0;
    for shape in shapes {
        total += shape.volume().ok_or_else(|| FiguraError::TypeMismatch {
            expected: "solid shape".to_string(),
            got: shape.type_name().to_string(),
        })?;
    }
    Ok(total)
}
