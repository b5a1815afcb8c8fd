use ndarray::Array2;
use tracing::{debug, info};

use super::placement::{canvas_shape, crop, paste, PixelRange, Placement};
use super::{framed_pair, require_same_date};
use crate::config::MosaicOptions;
use crate::error::{GeoRasterError, Result};
use crate::frame::{BoundingBox, GeoFrame, Operation};
use crate::raster::Raster;
use crate::resample::resample;

/// Region an unpadded mosaic is cropped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MosaicRegion {
    /// Rows of the overlap, across the full canvas width.
    OverlapRows,
    /// Columns of the overlap, across the full canvas height.
    OverlapColumns,
    /// The first operand's footprint.
    LhsFootprint,
    /// The second operand's footprint.
    RhsFootprint,
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    region: MosaicRegion,
    area: usize,
    placement: Placement,
    bbox: BoundingBox,
}

/// Combine two same-day rasters at a common resolution.
///
/// Both operands are resampled to `options.resolution`, or to the finer of
/// their two resolutions, and placed on their union extent with `rhs` drawn
/// over `lhs`. Instruments may differ.
///
/// With `padding` the whole union canvas is returned. Without it the canvas
/// is cropped to the largest of four regions, checked in this order: the
/// overlap's row band, the overlap's column band, `lhs`'s footprint, then
/// `rhs`'s footprint. A later region replaces the current pick when its area
/// is greater than or equal to it.
pub fn mosaic(lhs: &Raster, rhs: &Raster, options: &MosaicOptions) -> Result<Raster> {
    let (a, b) = framed_pair(lhs, rhs, "mosaic")?;
    if options.resolution == Some(0) {
        return Err(GeoRasterError::InvalidValue(
            "mosaic resolution must be a positive integer".into(),
        ));
    }
    require_same_date(a, b)?;

    let resolution = match options.resolution {
        Some(r) => f64::from(r),
        None => a.resolution.min(b.resolution),
    };

    for frame in [a, b] {
        if resolution >= frame.bbox.width() || resolution >= frame.bbox.height() {
            return Err(GeoRasterError::InvalidValue(format!(
                "resolution {resolution} does not fit inside the {} x {} extent of {}",
                frame.bbox.width(),
                frame.bbox.height(),
                frame.instrument
            )));
        }
    }

    let (lhs_resampled, rhs_resampled) =
        rayon::join(|| resample(lhs, resolution), || resample(rhs, resolution));
    let (lhs_resampled, rhs_resampled) = (lhs_resampled?, rhs_resampled?);
    debug!(
        lhs_effective = lhs_resampled.effective_resolution,
        rhs_effective = rhs_resampled.effective_resolution,
        resolution,
        "Operands resampled for mosaic"
    );
    let lhs_grid = lhs_resampled.raster.grid();
    let rhs_grid = rhs_resampled.raster.grid();

    let bbox = a.bbox.union(&b.bbox);
    let (rows, cols) = canvas_shape(&bbox, resolution);
    let lhs_place = Placement::of(&a.bbox, &bbox, resolution);
    let rhs_place = Placement::of(&b.bbox, &bbox, resolution);

    let mut canvas = Array2::<f64>::zeros((rows, cols));
    paste(&mut canvas, lhs_grid, &lhs_place);
    paste(&mut canvas, rhs_grid, &rhs_place);

    let mut frame = GeoFrame {
        bbox,
        resolution,
        observatory: a.observatory.clone(),
        instrument: a.instrument.clone(),
        date: a.date,
        time: a.time.clone(),
        operation: Some(Operation::Mosaic),
    };

    if options.padding {
        info!(
            operation = %Operation::Mosaic,
            shape = ?canvas.dim(),
            resolution,
            "Padded mosaic complete"
        );
        return Ok(Raster::from_parts(canvas, frame));
    }

    let lhs_footprint = Candidate {
        region: MosaicRegion::LhsFootprint,
        area: lhs_grid.len(),
        placement: lhs_place,
        bbox: a.bbox,
    };
    let rhs_footprint = Candidate {
        region: MosaicRegion::RhsFootprint,
        area: rhs_grid.len(),
        placement: rhs_place,
        bbox: b.bbox,
    };

    let best = match a.bbox.intersection(&b.bbox) {
        Some(overlap) => {
            let [row_band, col_band] = overlap_bands(&overlap, &bbox, resolution, (rows, cols));
            select_region(row_band, [col_band, lhs_footprint, rhs_footprint])
        }
        None => select_region(lhs_footprint, [rhs_footprint]),
    };
    debug!(region = ?best.region, area = best.area, "Mosaic crop region selected");

    let grid = crop(&canvas, &best.placement);
    frame.bbox = best.bbox;

    info!(
        operation = %Operation::Mosaic,
        shape = ?grid.dim(),
        resolution,
        "Cropped mosaic complete"
    );

    Ok(Raster::from_parts(grid, frame))
}

/// Fold [`mosaic`] left to right over `rasters` with the same options.
pub fn mosaic_all(rasters: &[Raster], options: &MosaicOptions) -> Result<Raster> {
    let (first, rest) = rasters.split_first().ok_or_else(|| {
        GeoRasterError::InvalidArgument("mosaic needs at least one raster".into())
    })?;

    rest.iter()
        .try_fold(first.clone(), |acc, next| mosaic(&acc, next, options))
}

/// Row and column bands through the overlap, each spanning the full canvas
/// on its other axis.
fn overlap_bands(
    overlap: &BoundingBox,
    canvas: &BoundingBox,
    resolution: f64,
    (rows, cols): (usize, usize),
) -> [Candidate; 2] {
    let place = Placement::of(overlap, canvas, resolution);
    let (overlap_rows, overlap_cols) = canvas_shape(overlap, resolution);

    [
        Candidate {
            region: MosaicRegion::OverlapRows,
            area: overlap_rows * cols,
            placement: Placement {
                rows: place.rows,
                cols: PixelRange::new(0, cols),
            },
            bbox: BoundingBox {
                xmin: canvas.xmin,
                xmax: canvas.xmax,
                ymin: overlap.ymin,
                ymax: overlap.ymax,
            },
        },
        Candidate {
            region: MosaicRegion::OverlapColumns,
            area: overlap_cols * rows,
            placement: Placement {
                rows: PixelRange::new(0, rows),
                cols: place.cols,
            },
            bbox: BoundingBox {
                xmin: overlap.xmin,
                xmax: overlap.xmax,
                ymin: canvas.ymin,
                ymax: canvas.ymax,
            },
        },
    ]
}

/// Largest candidate; on equal area the later one wins.
fn select_region(first: Candidate, rest: impl IntoIterator<Item = Candidate>) -> Candidate {
    rest.into_iter()
        .fold(first, |best, next| if next.area >= best.area { next } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(region: MosaicRegion, area: usize) -> Candidate {
        Candidate {
            region,
            area,
            placement: Placement {
                rows: PixelRange::new(0, 1),
                cols: PixelRange::new(0, area),
            },
            bbox: BoundingBox {
                xmin: 0.0,
                xmax: 1.0,
                ymin: 0.0,
                ymax: 1.0,
            },
        }
    }

    #[test]
    fn largest_region_wins() {
        let best = select_region(
            candidate(MosaicRegion::OverlapRows, 10),
            [
                candidate(MosaicRegion::OverlapColumns, 40),
                candidate(MosaicRegion::LhsFootprint, 20),
                candidate(MosaicRegion::RhsFootprint, 30),
            ],
        );
        assert_eq!(best.region, MosaicRegion::OverlapColumns);
    }

    #[test]
    fn later_region_wins_ties() {
        let best = select_region(
            candidate(MosaicRegion::OverlapRows, 30),
            [
                candidate(MosaicRegion::OverlapColumns, 30),
                candidate(MosaicRegion::LhsFootprint, 30),
                candidate(MosaicRegion::RhsFootprint, 30),
            ],
        );
        assert_eq!(best.region, MosaicRegion::RhsFootprint);
    }

    #[test]
    fn earlier_region_kept_over_smaller_later_one() {
        let best = select_region(
            candidate(MosaicRegion::LhsFootprint, 50),
            [candidate(MosaicRegion::RhsFootprint, 49)],
        );
        assert_eq!(best.region, MosaicRegion::LhsFootprint);
    }
}
