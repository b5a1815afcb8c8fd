/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Added to the upper bound of a placement range before rounding.
///
/// Offsets are rounded half-to-even, so an upper bound sitting on (or a
/// rounding error below) a half pixel would otherwise drop the last row or
/// column of the placed raster.
pub const PLACEMENT_EPSILON: f64 = 0.001;

/// Joins the acquisition times of two combined rasters.
pub const TIME_SEPARATOR: &str = "_and_";

/// Keys cubic convolution parameter used for upsampling.
pub const CUBIC_KERNEL_A: f64 = -0.5;

/// Characters stripped from default renderer output names.
pub const OUTPUT_NAME_STRIPPED_CHARS: [char; 2] = ['-', ':'];
