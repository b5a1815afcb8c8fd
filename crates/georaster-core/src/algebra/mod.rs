//! Raster combinators.
//!
//! All three operators take two framed rasters and return a new one; neither
//! operand is modified.
//!
//! - [`combine_union`] ("add") places both rasters on their union extent.
//!   Overlapping cells take the second operand's value; nothing is summed.
//! - [`combine_difference`] ("subtract") crops both to their intersection and
//!   subtracts the second from the first.
//! - [`mosaic`] resamples both to a common resolution, places them on their
//!   union extent and optionally crops to the largest well-covered region.

pub mod difference;
pub mod mosaic;
pub mod placement;
pub mod union;

pub use difference::combine_difference;
pub use mosaic::{mosaic, mosaic_all};
pub use placement::{canvas_shape, PixelRange, Placement};
pub use union::combine_union;

use crate::consts::TIME_SEPARATOR;
use crate::error::{GeoRasterError, Result};
use crate::frame::GeoFrame;
use crate::raster::Raster;

/// Frames of both operands, or `IncompatibleOperands` if either is missing.
fn framed_pair<'a>(
    lhs: &'a Raster,
    rhs: &'a Raster,
    operation: &str,
) -> Result<(&'a GeoFrame, &'a GeoFrame)> {
    match (lhs.frame(), rhs.frame()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(GeoRasterError::IncompatibleOperands(format!(
            "{operation} requires both rasters to carry a geospatial frame"
        ))),
    }
}

fn require_same_instrument(a: &GeoFrame, b: &GeoFrame) -> Result<()> {
    if a.instrument != b.instrument {
        return Err(GeoRasterError::IncompatibleOperands(format!(
            "rasters come from different instruments: {} vs {}",
            a.instrument, b.instrument
        )));
    }
    Ok(())
}

fn require_same_date(a: &GeoFrame, b: &GeoFrame) -> Result<()> {
    if a.date != b.date {
        return Err(GeoRasterError::IncompatibleOperands(format!(
            "rasters were acquired on different days: {} vs {}",
            a.date, b.date
        )));
    }
    Ok(())
}

fn joined_time(a: &GeoFrame, b: &GeoFrame) -> String {
    format!("{}{}{}", a.time, TIME_SEPARATOR, b.time)
}
