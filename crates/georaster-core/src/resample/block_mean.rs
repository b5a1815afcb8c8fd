use ndarray::{s, Array2, Zip};

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Downsample a grid by averaging non-overlapping `factor × factor` blocks.
///
/// The output shape is `ceil(shape / factor)`. Trailing blocks that run off
/// the grid are treated as zero-padded, so every block is divided by
/// `factor²`.
pub fn downsample_block_mean(data: &Array2<f64>, factor: usize) -> Array2<f64> {
    if factor <= 1 {
        return data.clone();
    }

    let (h, w) = data.dim();
    let out_h = h.div_ceil(factor);
    let out_w = w.div_ceil(factor);
    let block_size = (factor as f64).powi(2);

    let mut result = Array2::<f64>::zeros((out_h, out_w));
    let average = |(row, col): (usize, usize), out: &mut f64| {
        let r0 = row * factor;
        let c0 = col * factor;
        let block = data.slice(s![r0..(r0 + factor).min(h), c0..(c0 + factor).min(w)]);
        *out = block.sum() / block_size;
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        Zip::indexed(&mut result).par_for_each(average);
    } else {
        Zip::indexed(&mut result).for_each(average);
    }

    result
}
