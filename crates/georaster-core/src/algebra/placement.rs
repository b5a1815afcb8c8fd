use ndarray::{s, Array2};
use tracing::debug;

use crate::consts::PLACEMENT_EPSILON;
use crate::frame::BoundingBox;

/// Half-open index range `[start, end)` along one grid axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRange {
    pub start: usize,
    pub end: usize,
}

impl PixelRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lower bound rounds to nearest; upper bound is nudged by
    /// [`PLACEMENT_EPSILON`] first.
    fn from_offsets(lower: f64, upper: f64) -> Self {
        Self {
            start: to_index(lower),
            end: to_index(upper + PLACEMENT_EPSILON),
        }
    }
}

/// Row and column ranges that a sub-region occupies inside a larger grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub rows: PixelRange,
    pub cols: PixelRange,
}

impl Placement {
    /// Ranges covered by `inner` within a grid spanning `outer` at
    /// `resolution`. Rows are measured down from `outer.ymax`, columns right
    /// from `outer.xmin`.
    pub fn of(inner: &BoundingBox, outer: &BoundingBox, resolution: f64) -> Self {
        Self {
            cols: PixelRange::from_offsets(
                (inner.xmin - outer.xmin) / resolution,
                (inner.xmax - outer.xmin) / resolution,
            ),
            rows: PixelRange::from_offsets(
                (outer.ymax - inner.ymax) / resolution,
                (outer.ymax - inner.ymin) / resolution,
            ),
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    pub fn area(&self) -> usize {
        self.rows.len() * self.cols.len()
    }
}

/// Zero-filled grid shape for `bbox` at `resolution`.
pub fn canvas_shape(bbox: &BoundingBox, resolution: f64) -> (usize, usize) {
    (
        to_index(bbox.height() / resolution),
        to_index(bbox.width() / resolution),
    )
}

fn to_index(v: f64) -> usize {
    v.round_ties_even().max(0.0) as usize
}

/// Copy `data` into `canvas` at `placement`, overwriting what is there.
///
/// When the range and the data differ by a rounding pixel, the overlapping
/// top-left block is copied.
pub(crate) fn paste(canvas: &mut Array2<f64>, data: &Array2<f64>, placement: &Placement) {
    let (canvas_h, canvas_w) = canvas.dim();
    let r0 = placement.rows.start.min(canvas_h);
    let c0 = placement.cols.start.min(canvas_w);

    let h = placement.rows.len().min(data.nrows()).min(canvas_h - r0);
    let w = placement.cols.len().min(data.ncols()).min(canvas_w - c0);

    if (h, w) != placement.shape() || (h, w) != data.dim() {
        debug!(
            range = ?placement.shape(),
            data = ?data.dim(),
            copied = ?(h, w),
            "Placement range and data shape disagree"
        );
    }

    canvas
        .slice_mut(s![r0..r0 + h, c0..c0 + w])
        .assign(&data.slice(s![..h, ..w]));
}

/// Owned copy of the cells of `data` covered by `placement`, clipped to the
/// grid.
pub(crate) fn crop(data: &Array2<f64>, placement: &Placement) -> Array2<f64> {
    let (h, w) = data.dim();
    let r0 = placement.rows.start.min(h);
    let r1 = placement.rows.end.clamp(r0, h);
    let c0 = placement.cols.start.min(w);
    let c1 = placement.cols.end.clamp(c0, w);

    data.slice(s![r0..r1, c0..c1]).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(x: (f64, f64), y: (f64, f64)) -> BoundingBox {
        BoundingBox::new(x, y).unwrap()
    }

    #[test]
    fn placement_inside_canvas() {
        let canvas = bbox((0.0, 900.0), (0.0, 400.0));
        let inner = bbox((450.0, 900.0), (0.0, 150.0));
        let p = Placement::of(&inner, &canvas, 15.0);
        assert_eq!(p.cols, PixelRange::new(30, 60));
        // 250/15 = 16.67 -> 17, 400/15 = 26.67 -> 27
        assert_eq!(p.rows, PixelRange::new(17, 27));
    }

    #[test]
    fn upper_bound_half_pixel_rounds_up() {
        let canvas = bbox((0.0, 100.0), (0.0, 100.0));
        // 25 / 10 = 2.5 would round to 2 without the nudge
        let inner = bbox((0.0, 25.0), (0.0, 100.0));
        let p = Placement::of(&inner, &canvas, 10.0);
        assert_eq!(p.cols, PixelRange::new(0, 3));
    }

    #[test]
    fn ties_round_to_even() {
        let canvas = bbox((0.0, 100.0), (0.0, 100.0));
        // 25 / 10 = 2.5 -> 2
        let inner = bbox((25.0, 100.0), (0.0, 100.0));
        let p = Placement::of(&inner, &canvas, 10.0);
        assert_eq!(p.cols.start, 2);
    }

    #[test]
    fn paste_clips_to_smaller_side() {
        let mut canvas = Array2::<f64>::zeros((3, 3));
        let data = Array2::<f64>::ones((2, 4));
        let p = Placement {
            rows: PixelRange::new(1, 3),
            cols: PixelRange::new(1, 3),
        };
        paste(&mut canvas, &data, &p);
        assert_eq!(canvas.sum(), 4.0);
        assert_eq!(canvas[[0, 0]], 0.0);
        assert_eq!(canvas[[2, 2]], 1.0);
    }

    #[test]
    fn crop_clips_to_grid() {
        let data = Array2::from_shape_fn((4, 4), |(r, c)| (r * 4 + c) as f64);
        let p = Placement {
            rows: PixelRange::new(2, 6),
            cols: PixelRange::new(3, 5),
        };
        let out = crop(&data, &p);
        assert_eq!(out.dim(), (2, 1));
        assert_eq!(out[[0, 0]], 11.0);
        assert_eq!(out[[1, 0]], 15.0);
    }
}
