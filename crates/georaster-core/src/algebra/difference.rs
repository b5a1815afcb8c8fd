use ndarray::s;
use tracing::{debug, info};

use super::placement::{crop, Placement};
use super::{framed_pair, joined_time, require_same_instrument};
use crate::error::{GeoRasterError, Result};
use crate::frame::{GeoFrame, Operation};
use crate::raster::Raster;

/// Subtract `rhs` from `lhs` over the region both cover.
///
/// The operands must come from the same instrument on different days. Both
/// are cropped to the intersection of their extents at `lhs`'s resolution
/// and subtracted cell by cell.
pub fn combine_difference(lhs: &Raster, rhs: &Raster) -> Result<Raster> {
    let (a, b) = framed_pair(lhs, rhs, "subtract")?;
    require_same_instrument(a, b)?;
    if a.date == b.date {
        return Err(GeoRasterError::IncompatibleOperands(format!(
            "subtraction needs rasters from different days, both are from {}",
            a.date
        )));
    }

    let bbox = a.bbox.intersection(&b.bbox).ok_or(GeoRasterError::NoOverlap)?;
    let resolution = a.resolution;

    let lhs_crop = crop(lhs.grid(), &Placement::of(&bbox, &a.bbox, resolution));
    let rhs_crop = crop(rhs.grid(), &Placement::of(&bbox, &b.bbox, resolution));

    let h = lhs_crop.nrows().min(rhs_crop.nrows());
    let w = lhs_crop.ncols().min(rhs_crop.ncols());
    if lhs_crop.dim() != rhs_crop.dim() {
        debug!(
            lhs = ?lhs_crop.dim(),
            rhs = ?rhs_crop.dim(),
            "Cropped operands differ in shape, subtracting common block"
        );
    }

    let grid = &lhs_crop.slice(s![..h, ..w]) - &rhs_crop.slice(s![..h, ..w]);

    let frame = GeoFrame {
        bbox,
        time: joined_time(a, b),
        operation: Some(Operation::Subtract),
        ..a.clone()
    };

    info!(
        operation = %Operation::Subtract,
        shape = ?grid.dim(),
        resolution,
        "Difference complete"
    );

    Ok(Raster::from_parts(grid, frame))
}
