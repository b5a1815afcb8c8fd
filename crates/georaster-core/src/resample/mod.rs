pub mod block_mean;
pub mod cubic;

use tracing::{debug, warn};

use crate::error::{GeoRasterError, Result};
use crate::frame::validate_resolution;
use crate::raster::Raster;

pub use block_mean::downsample_block_mean;
pub use cubic::upsample_cubic;

/// Output of [`resample`].
#[derive(Clone, Debug)]
pub struct Resampled {
    /// Resampled raster. Its frame carries the requested resolution and the
    /// original bbox.
    pub raster: Raster,
    /// Real-world size of one output pixel. Differs from the requested
    /// resolution when downsampling rounds a non-integer ratio.
    pub effective_resolution: f64,
}

/// Change a raster's resolution to `target_resolution`.
///
/// Coarser rasters are upsampled with cubic convolution; finer rasters are
/// block-averaged by the nearest integer factor. The bbox is left untouched.
///
/// A target coarser than the raster's larger extent fails with
/// [`GeoRasterError::InvalidValue`].
pub fn resample(raster: &Raster, target_resolution: f64) -> Result<Resampled> {
    let frame = raster.meta()?;
    validate_resolution(target_resolution)?;

    let native = frame.resolution;
    if native == target_resolution {
        return Ok(Resampled {
            raster: raster.clone(),
            effective_resolution: native,
        });
    }

    let (grid, effective_resolution) = if native > target_resolution {
        let scale = native / target_resolution;
        let (rows, cols) = raster.shape();
        let pixels = (rows as f64 * scale).round() * (cols as f64 * scale).round();
        if pixels > isize::MAX as f64 {
            return Err(GeoRasterError::InvalidValue(format!(
                "upsampling by {scale} would produce {pixels} pixels"
            )));
        }
        debug!(native, target = target_resolution, scale, "Upsampling");
        (upsample_cubic(raster.grid(), scale), target_resolution)
    } else {
        let extent = frame.bbox.width().max(frame.bbox.height());
        if target_resolution > extent {
            return Err(GeoRasterError::InvalidValue(format!(
                "target resolution {target_resolution} exceeds the {extent} extent of the raster"
            )));
        }
        let ratio = target_resolution / native;
        let factor = (ratio.round_ties_even() as usize).max(1);
        let effective = native * factor as f64;
        if effective != target_resolution {
            warn!(
                native,
                target = target_resolution,
                effective,
                "Downsample ratio {ratio:.3} rounded to factor {factor}"
            );
        }
        debug!(native, target = target_resolution, factor, "Downsampling");
        (downsample_block_mean(raster.grid(), factor), effective)
    };

    let mut out_frame = frame.clone();
    out_frame.resolution = target_resolution;

    Ok(Resampled {
        raster: Raster::from_parts(grid, out_frame),
        effective_resolution,
    })
}
