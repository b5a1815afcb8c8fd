use ndarray::Array2;
use tracing::info;

use super::placement::{canvas_shape, paste, Placement};
use super::{framed_pair, joined_time, require_same_date, require_same_instrument};
use crate::error::Result;
use crate::frame::{GeoFrame, Operation};
use crate::raster::Raster;

/// Place two same-instrument, same-day rasters on their union extent.
///
/// Works at `lhs`'s resolution without resampling. `lhs` is written first,
/// then `rhs`, so `rhs` wins wherever the two overlap. Cells covered by
/// neither are zero.
pub fn combine_union(lhs: &Raster, rhs: &Raster) -> Result<Raster> {
    let (a, b) = framed_pair(lhs, rhs, "add")?;
    require_same_instrument(a, b)?;
    require_same_date(a, b)?;

    let resolution = a.resolution;
    let bbox = a.bbox.union(&b.bbox);

    let mut canvas = Array2::<f64>::zeros(canvas_shape(&bbox, resolution));
    paste(&mut canvas, lhs.grid(), &Placement::of(&a.bbox, &bbox, resolution));
    paste(&mut canvas, rhs.grid(), &Placement::of(&b.bbox, &bbox, resolution));

    let frame = GeoFrame {
        bbox,
        time: joined_time(a, b),
        operation: Some(Operation::Add),
        ..a.clone()
    };

    info!(
        operation = %Operation::Add,
        shape = ?canvas.dim(),
        resolution,
        "Union complete"
    );

    Ok(Raster::from_parts(canvas, frame))
}
