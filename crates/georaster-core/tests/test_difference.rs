mod common;

use georaster_core::algebra::combine_difference;
use georaster_core::error::ErrorKind;
use georaster_core::frame::{BoundingBox, Operation};

use common::{filled_raster, ramp_raster};

#[test]
fn test_difference_over_intersection() {
    let a = ramp_raster("lir", "2023-01-03", (0.0, 600.0), (0.0, 300.0), 30.0);
    let b = filled_raster("lir", "2023-01-04", (300.0, 900.0), (0.0, 300.0), 30.0, 1.0);

    let out = combine_difference(&a, &b).unwrap();
    assert_eq!(out.shape(), (10, 10));
    // a's columns 10..20 minus one
    assert_eq!(out.grid()[[0, 0]], 9.0);
    assert_eq!(out.grid()[[9, 9]], 198.0);

    let frame = out.meta().unwrap();
    assert_eq!(frame.bbox, BoundingBox::new((300.0, 600.0), (0.0, 300.0)).unwrap());
    assert_eq!(frame.operation, Some(Operation::Subtract));
    assert_eq!(frame.date, a.meta().unwrap().date);
    assert_eq!(frame.time, "12:00:00_and_12:00:00");
}

#[test]
fn test_difference_of_identical_scenes_is_zero() {
    let a = ramp_raster("lir", "2023-01-03", (0.0, 600.0), (0.0, 300.0), 30.0);
    let b = ramp_raster("lir", "2023-01-05", (0.0, 600.0), (0.0, 300.0), 30.0);
    let out = combine_difference(&a, &b).unwrap();
    assert_eq!(out.shape(), (10, 20));
    assert!(out.grid().iter().all(|&v| v == 0.0));
}

#[test]
fn test_difference_without_overlap() {
    let a = filled_raster("lir", "2023-01-03", (0.0, 600.0), (0.0, 300.0), 30.0, 1.0);
    let far = filled_raster("lir", "2023-01-04", (900.0, 1200.0), (0.0, 300.0), 30.0, 1.0);
    assert_eq!(combine_difference(&a, &far).unwrap_err().kind(), ErrorKind::NoOverlap);

    // Sharing only an edge is not an overlap
    let touching = filled_raster("lir", "2023-01-04", (600.0, 900.0), (0.0, 300.0), 30.0, 1.0);
    assert_eq!(
        combine_difference(&a, &touching).unwrap_err().kind(),
        ErrorKind::NoOverlap
    );
}

#[test]
fn test_difference_requires_different_days() {
    let a = filled_raster("lir", "2023-01-03", (0.0, 600.0), (0.0, 300.0), 30.0, 1.0);
    let b = filled_raster("lir", "2023-01-03", (0.0, 600.0), (0.0, 300.0), 30.0, 2.0);
    assert_eq!(
        combine_difference(&a, &b).unwrap_err().kind(),
        ErrorKind::IncompatibleOperands
    );
}

#[test]
fn test_difference_requires_same_instrument() {
    let a = filled_raster("lir", "2023-01-03", (0.0, 600.0), (0.0, 300.0), 30.0, 1.0);
    let b = filled_raster("ising", "2023-01-04", (0.0, 600.0), (0.0, 300.0), 30.0, 2.0);
    assert_eq!(
        combine_difference(&a, &b).unwrap_err().kind(),
        ErrorKind::IncompatibleOperands
    );
}
