#![allow(dead_code)]

use chrono::NaiveDate;
use ndarray::Array2;

use georaster_core::frame::{BoundingBox, GeoFrame};
use georaster_core::raster::Raster;

pub const OBSERVATORY: &str = "aigean";

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Frame over `x` × `y` at `resolution`, acquired at noon on `day`.
pub fn frame(instrument: &str, day: &str, x: (f64, f64), y: (f64, f64), resolution: f64) -> GeoFrame {
    GeoFrame::new(
        BoundingBox::new(x, y).unwrap(),
        resolution,
        OBSERVATORY,
        instrument,
        date(day),
        "12:00:00",
    )
    .unwrap()
}

/// Raster whose cell `(r, c)` holds `r * cols + c`.
pub fn ramp_raster(instrument: &str, day: &str, x: (f64, f64), y: (f64, f64), resolution: f64) -> Raster {
    let frame = frame(instrument, day, x, y, resolution);
    let (rows, cols) = frame.expected_shape();
    let grid = Array2::from_shape_fn((rows, cols), |(r, c)| (r * cols + c) as f64);
    Raster::new(grid, frame).unwrap()
}

/// Raster with every cell set to `value`.
pub fn filled_raster(
    instrument: &str,
    day: &str,
    x: (f64, f64),
    y: (f64, f64),
    resolution: f64,
    value: f64,
) -> Raster {
    let frame = frame(instrument, day, x, y, resolution);
    let grid = Array2::from_elem(frame.expected_shape(), value);
    Raster::new(grid, frame).unwrap()
}
