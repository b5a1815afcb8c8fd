use ndarray::{Array2, Zip};

use crate::consts::{CUBIC_KERNEL_A, PARALLEL_PIXEL_THRESHOLD};

/// Four source indices and their weights for one output position.
#[derive(Clone, Copy, Debug)]
struct Taps {
    index: [usize; 4],
    weight: [f64; 4],
}

/// Upsample a grid by `scale` with Keys cubic convolution.
///
/// The output shape is `round(shape * scale)`. Output pixel centres are
/// mapped back to `(i + 0.5) * in / out - 0.5` in the source, and samples
/// beyond the border repeat the edge value.
pub fn upsample_cubic(data: &Array2<f64>, scale: f64) -> Array2<f64> {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return Array2::zeros((0, 0));
    }

    let out_h = ((h as f64 * scale).round_ties_even() as usize).max(1);
    let out_w = ((w as f64 * scale).round_ties_even() as usize).max(1);

    let row_taps = axis_taps(h, out_h);
    let col_taps = axis_taps(w, out_w);

    let mut result = Array2::<f64>::zeros((out_h, out_w));
    let sample = |(row, col): (usize, usize), out: &mut f64| {
        let rt = &row_taps[row];
        let ct = &col_taps[col];
        let mut sum = 0.0;
        for (&ri, &rw) in rt.index.iter().zip(rt.weight.iter()) {
            for (&ci, &cw) in ct.index.iter().zip(ct.weight.iter()) {
                sum += rw * cw * data[[ri, ci]];
            }
        }
        *out = sum;
    };

    if out_h * out_w >= PARALLEL_PIXEL_THRESHOLD {
        Zip::indexed(&mut result).par_for_each(sample);
    } else {
        Zip::indexed(&mut result).for_each(sample);
    }

    result
}

fn axis_taps(in_len: usize, out_len: usize) -> Vec<Taps> {
    let factor = in_len as f64 / out_len as f64;
    let last = in_len as i64 - 1;

    (0..out_len)
        .map(|i| {
            let src = (i as f64 + 0.5) * factor - 0.5;
            let base = src.floor();
            let t = src - base;
            let base = base as i64;

            let mut index = [0usize; 4];
            let mut weight = [0.0f64; 4];
            for k in 0..4 {
                let offset = k as i64 - 1;
                index[k] = (base + offset).clamp(0, last) as usize;
                weight[k] = keys_kernel(t - offset as f64);
            }
            Taps { index, weight }
        })
        .collect()
}

/// Keys cubic convolution kernel.
fn keys_kernel(x: f64) -> f64 {
    let a = CUBIC_KERNEL_A;
    let x = x.abs();
    if x <= 1.0 {
        ((a + 2.0) * x - (a + 3.0)) * x * x + 1.0
    } else if x < 2.0 {
        ((a * x - 5.0 * a) * x + 8.0 * a) * x - 4.0 * a
    } else {
        0.0
    }
}
