//! Pixel-grid ↔ real-world coordinate conversion.
//!
//! Pixel coordinates are ordered `(row, col)` while real-world coordinates
//! are ordered `(x, y)` (easting, northing). Rows grow southward from the
//! frame's `ymax`, columns grow eastward from its `xmin`.

use crate::error::{GeoRasterError, Result};
use crate::frame::GeoFrame;

/// Integer pixel index, row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    pub row: i64,
    pub col: i64,
}

impl PixelCoord {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl From<(i64, i64)> for PixelCoord {
    fn from((row, col): (i64, i64)) -> Self {
        Self { row, col }
    }
}

impl TryFrom<&[f64]> for PixelCoord {
    type Error = GeoRasterError;

    /// Accepts exactly two integral values, `[row, col]`.
    fn try_from(values: &[f64]) -> Result<Self> {
        let [row, col] = two_components(values, "pixel")?;
        for v in [row, col] {
            if !v.is_finite() || v.fract() != 0.0 {
                return Err(GeoRasterError::InvalidArgument(format!(
                    "pixel coordinates must be integers, got {v}"
                )));
            }
        }
        Ok(Self::new(row as i64, col as i64))
    }
}

/// Real-world coordinate, easting first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EarthCoord {
    pub x: f64,
    pub y: f64,
}

impl EarthCoord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for EarthCoord {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl TryFrom<&[f64]> for EarthCoord {
    type Error = GeoRasterError;

    /// Accepts exactly two finite values, `[x, y]`.
    fn try_from(values: &[f64]) -> Result<Self> {
        let [x, y] = two_components(values, "earth")?;
        if !x.is_finite() || !y.is_finite() {
            return Err(GeoRasterError::InvalidArgument(format!(
                "earth coordinates must be finite, got ({x}, {y})"
            )));
        }
        Ok(Self::new(x, y))
    }
}

fn two_components(values: &[f64], what: &str) -> Result<[f64; 2]> {
    <[f64; 2]>::try_from(values).map_err(|_| {
        GeoRasterError::InvalidArgument(format!(
            "{what} coordinates must have exactly 2 components, got {}",
            values.len()
        ))
    })
}

/// Real-world coordinate of the centre of pixel `(row, col)`.
pub fn pixel_to_earth(
    frame: &GeoFrame,
    shape: (usize, usize),
    pixel: PixelCoord,
) -> Result<EarthCoord> {
    frame.validate()?;
    let (rows, cols) = shape;
    check_index("row", pixel.row, rows)?;
    check_index("col", pixel.col, cols)?;

    let res = frame.resolution;
    let x = frame.bbox.xmin + pixel.col as f64 * res + 0.5 * res;
    let y = frame.bbox.ymax - pixel.row as f64 * res - 0.5 * res;

    Ok(EarthCoord::new(x, y))
}

/// Pixel containing the real-world coordinate `(x, y)`.
///
/// Points on a grid line belong to the pixel below/left of the line, except
/// on the frame's western and northern edges, which map to column 0 and
/// row 0. The southern and eastern edges therefore resolve to the last row
/// and column rather than one past them. Any point inside the bbox maps to a
/// pixel of the grid.
pub fn earth_to_pixel(
    frame: &GeoFrame,
    shape: (usize, usize),
    earth: EarthCoord,
) -> Result<PixelCoord> {
    frame.validate()?;
    let bbox = &frame.bbox;
    let EarthCoord { x, y } = earth;

    if x < bbox.xmin || x > bbox.xmax {
        return Err(GeoRasterError::OutOfRange {
            axis: "x",
            value: x,
            min: bbox.xmin,
            max: bbox.xmax,
        });
    }
    if y < bbox.ymin || y > bbox.ymax {
        return Err(GeoRasterError::OutOfRange {
            axis: "y",
            value: y,
            min: bbox.ymin,
            max: bbox.ymax,
        });
    }

    let res = frame.resolution;

    let (row_div, _) = floor_divmod(bbox.ymax - y, res);
    let row = if y == bbox.ymin { row_div - 1.0 } else { row_div };

    let (col_div, col_rem) = floor_divmod(x - bbox.xmin, res);
    let col = if x == bbox.xmax || col_rem == 0.0 {
        if x == bbox.xmin {
            col_div
        } else {
            col_div - 1.0
        }
    } else {
        col_div
    };

    // An extent that is not a whole number of pixels leaves a sliver past
    // the last row or column; it belongs to that row or column.
    let (rows, cols) = shape;
    Ok(PixelCoord::new(
        clamp_index("row", row as i64, rows)?,
        clamp_index("col", col as i64, cols)?,
    ))
}

fn clamp_index(axis: &'static str, index: i64, len: usize) -> Result<i64> {
    if len == 0 {
        return Err(GeoRasterError::OutOfRange {
            axis,
            value: index as f64,
            min: 0.0,
            max: -1.0,
        });
    }
    Ok(index.clamp(0, len as i64 - 1))
}

fn check_index(axis: &'static str, index: i64, len: usize) -> Result<()> {
    if index < 0 || index >= len as i64 {
        return Err(GeoRasterError::OutOfRange {
            axis,
            value: index as f64,
            min: 0.0,
            max: len as f64 - 1.0,
        });
    }
    Ok(())
}

/// Floored quotient and remainder, with the remainder taking the divisor's
/// sign and the quotient snapped to the nearest integer when `fmod` leaves
/// it a rounding error away from one.
pub(crate) fn floor_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut rem = a % b;
    let mut div = (a - rem) / b;

    if rem != 0.0 {
        if (b < 0.0) != (rem < 0.0) {
            rem += b;
            div -= 1.0;
        }
    } else {
        rem = 0.0_f64.copysign(b);
    }

    let floordiv = if div != 0.0 {
        let mut q = div.floor();
        if div - q > 0.5 {
            q += 1.0;
        }
        q
    } else {
        0.0_f64.copysign(a / b)
    };

    (floordiv, rem)
}
