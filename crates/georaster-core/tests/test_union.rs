mod common;

use ndarray::Array2;

use georaster_core::algebra::combine_union;
use georaster_core::error::ErrorKind;
use georaster_core::frame::{BoundingBox, Operation};
use georaster_core::raster::Raster;

use common::{filled_raster, ramp_raster};

const DAY: &str = "2023-01-03";

#[test]
fn test_union_extent_and_shape() {
    let a = filled_raster("manannan", DAY, (0.0, 600.0), (0.0, 300.0), 15.0, 1.0);
    let b = filled_raster("manannan", DAY, (450.0, 900.0), (100.0, 400.0), 15.0, 2.0);

    let out = combine_union(&a, &b).unwrap();
    // 400 / 15 = 26.67 rounds to 27 rows
    assert_eq!(out.shape(), (27, 60));

    let frame = out.meta().unwrap();
    assert_eq!(frame.bbox, BoundingBox::new((0.0, 900.0), (0.0, 400.0)).unwrap());
    assert_eq!(frame.resolution, 15.0);
    assert_eq!(frame.instrument, "manannan");
    assert_eq!(frame.time, "12:00:00_and_12:00:00");
    assert_eq!(frame.operation, Some(Operation::Add));
}

#[test]
fn test_union_second_operand_wins_overlap() {
    let a = filled_raster("manannan", DAY, (0.0, 600.0), (0.0, 300.0), 15.0, 1.0);
    let b = filled_raster("manannan", DAY, (450.0, 900.0), (100.0, 400.0), 15.0, 2.0);

    let out = combine_union(&a, &b).unwrap();
    let grid = out.grid();

    // a occupies rows 7..27, cols 0..40; b rows 0..20, cols 30..60
    assert_eq!(grid[[10, 35]], 2.0);
    assert_eq!(grid[[10, 5]], 1.0);
    assert_eq!(grid[[25, 35]], 1.0);
    assert_eq!(grid[[0, 0]], 0.0);
    assert_eq!(grid[[26, 59]], 0.0);
    // 670 cells of a outside the overlap plus 600 cells of b
    assert_eq!(grid.sum(), 670.0 + 1200.0);
}

#[test]
fn test_union_of_disjoint_rasters() {
    let a = filled_raster("lir", DAY, (0.0, 300.0), (0.0, 150.0), 15.0, 1.0);
    let b = filled_raster("lir", DAY, (300.0, 600.0), (0.0, 300.0), 15.0, 2.0);
    assert_eq!(a.shape(), (10, 20));
    assert_eq!(b.shape(), (20, 20));

    let out = combine_union(&a, &b).unwrap();
    assert_eq!(out.shape(), (20, 40));
    // a sits at the bottom of the taller canvas
    assert_eq!(out.grid()[[0, 0]], 0.0);
    assert_eq!(out.grid()[[19, 0]], 1.0);
    assert_eq!(out.grid()[[0, 39]], 2.0);
}

#[test]
fn test_union_with_itself_is_unchanged() {
    let a = ramp_raster("lir", DAY, (0.0, 600.0), (0.0, 300.0), 30.0);
    let out = combine_union(&a, &a).unwrap();
    assert_eq!(out.grid(), a.grid());
}

#[test]
fn test_union_requires_same_instrument() {
    let a = filled_raster("lir", DAY, (0.0, 600.0), (0.0, 300.0), 30.0, 1.0);
    let b = filled_raster("manannan", DAY, (0.0, 600.0), (0.0, 300.0), 30.0, 1.0);
    let err = combine_union(&a, &b).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleOperands);
}

#[test]
fn test_union_requires_same_day() {
    let a = filled_raster("lir", DAY, (0.0, 600.0), (0.0, 300.0), 30.0, 1.0);
    let b = filled_raster("lir", "2023-01-04", (0.0, 600.0), (0.0, 300.0), 30.0, 1.0);
    let err = combine_union(&a, &b).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompatibleOperands);
}

#[test]
fn test_union_requires_frames() {
    let a = filled_raster("lir", DAY, (0.0, 600.0), (0.0, 300.0), 30.0, 1.0);
    let b = Raster::frameless(Array2::zeros((10, 20)));
    assert_eq!(
        combine_union(&a, &b).unwrap_err().kind(),
        ErrorKind::IncompatibleOperands
    );
    assert_eq!(
        combine_union(&b, &a).unwrap_err().kind(),
        ErrorKind::IncompatibleOperands
    );
}
