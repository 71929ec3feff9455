//! Tests for aggregation over heterogeneous values

use std::f64::consts::PI;

use figura::*;
use pretty_assertions::assert_eq;

#[test]
fn test_aggregate_empty() {
    assert_eq!(aggregate(&[]).unwrap(), 0.0);
}

#[test]
fn test_aggregate_mixed_shapes() {
    let values = vec![
        Value::from(Shape::circle(2.0).unwrap()),
        Value::from(Shape::square(5.0).unwrap()),
        Value::from(Shape::square(6.0).unwrap()),
    ];

    let total = aggregate(&values).unwrap();
    assert!((total - (4.0 * PI + 25.0 + 36.0)).abs() < 1e-12);
}

#[test]
fn test_aggregate_rejects_non_shape() {
    let values = vec![
        Value::Number(3.0),
        Value::from(Shape::square(2.0).unwrap()),
    ];

    let err = aggregate(&values).unwrap_err();
    assert_eq!(
        err,
        FiguraError::TypeMismatch {
            expected: "shape".to_string(),
            got: "number".to_string(),
        }
    );
}

#[test]
fn test_aggregate_fails_fast_on_text() {
    // A mismatch in the middle aborts the call even though shapes follow
    let values = vec![
        Value::from(Shape::circle(1.0).unwrap()),
        Value::text("not a shape"),
        Value::from(Shape::square(2.0).unwrap()),
    ];

    assert!(matches!(
        aggregate(&values),
        Err(FiguraError::TypeMismatch { .. })
    ));
}

#[test]
fn test_total_area_matches_aggregate() {
    let shapes = vec![Shape::circle(1.0).unwrap(), Shape::cube(2.0).unwrap()];
    let values: Vec<Value> = shapes.iter().copied().map(Value::from).collect();

    assert_eq!(total_area(&shapes), aggregate(&values).unwrap());
}

#[test]
fn test_total_volume_over_solids() {
    let solids = vec![Shape::cube(2.0).unwrap(), Shape::cube(3.0).unwrap()];
    assert_eq!(total_volume(&solids).unwrap(), 35.0);
    assert_eq!(total_volume(&[]).unwrap(), 0.0);
}

#[test]
fn test_total_volume_rejects_planar_shapes() {
    let mixed = vec![Shape::cube(2.0).unwrap(), Shape::square(1.0).unwrap()];

    let err = total_volume(&mixed).unwrap_err();
    assert_eq!(
        err,
        FiguraError::TypeMismatch {
            expected: "solid shape".to_string(),
            got: "square".to_string(),
        }
    );
}

#[test]
fn test_value_type_names() {
    assert_eq!(Value::Number(1.0).type_name(), "number");
    assert_eq!(Value::text("x").type_name(), "text");
    assert_eq!(Value::from(Shape::circle(1.0).unwrap()).type_name(), "shape");
}

#[test]
fn test_value_as_shape() {
    let shape = Shape::square(2.0).unwrap();
    assert_eq!(Value::from(shape).as_shape(), Some(&shape));
    assert_eq!(Value::from(2.0).as_shape(), None);
}
