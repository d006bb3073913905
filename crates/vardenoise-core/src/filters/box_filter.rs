use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Build a normalized `(2*size+1) x (2*size+1)` averaging kernel.
///
/// Every coefficient is `1 / (2*size+1)^2`, so the kernel sums to one.
pub fn make_box_kernel(size: usize) -> Array2<f32> {
    let side = 2 * size + 1;
    let coeff = 1.0 / (side * side) as f32;
    Array2::from_elem((side, side), coeff)
}

/// 2D convolution with output the same size as the input.
///
/// Taps that fall outside the image read zero and the result is not
/// renormalized, so border pixels lose the energy of the missing taps.
/// The kernel is flipped (true convolution) and anchored at
/// `((kh - 1) / 2, (kw - 1) / 2)`.
pub fn convolve_same(data: &Array2<f32>, kernel: &Array2<f32>) -> Array2<f32> {
    let (h, w) = data.dim();
    let (kh, kw) = kernel.dim();
    if h == 0 || w == 0 || kh == 0 || kw == 0 {
        return Array2::zeros((h, w));
    }

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<f32>> = (0..h)
            .into_par_iter()
            .map(|row| {
                (0..w)
                    .map(|col| convolve_pixel(data, kernel, row, col))
                    .collect()
            })
            .collect();

        let mut result = Array2::<f32>::zeros((h, w));
        for (row, row_data) in rows.into_iter().enumerate() {
            for (col, val) in row_data.into_iter().enumerate() {
                result[[row, col]] = val;
            }
        }
        result
    } else {
        let mut result = Array2::<f32>::zeros((h, w));
        for row in 0..h {
            for col in 0..w {
                result[[row, col]] = convolve_pixel(data, kernel, row, col);
            }
        }
        result
    }
}

/// Box-filter an array with radius `size`.
///
/// Same result as `convolve_same(data, &make_box_kernel(size))`, computed as
/// two zero-padded 1D passes.
pub fn box_filter(data: &Array2<f32>, size: usize) -> Array2<f32> {
    let side = 2 * size + 1;
    let kernel = vec![1.0 / side as f32; side];
    let row_pass = convolve_rows_zero(data, &kernel);
    convolve_cols_zero(&row_pass, &kernel)
}

fn convolve_pixel(data: &Array2<f32>, kernel: &Array2<f32>, row: usize, col: usize) -> f32 {
    let (h, w) = data.dim();
    let (kh, kw) = kernel.dim();
    let anchor_r = (kh as isize - 1) / 2;
    let anchor_c = (kw as isize - 1) / 2;

    let mut sum = 0.0f32;
    for ki in 0..kh {
        let src_row = row as isize + anchor_r - ki as isize;
        if src_row < 0 || src_row >= h as isize {
            continue;
        }
        for kj in 0..kw {
            let src_col = col as isize + anchor_c - kj as isize;
            if src_col < 0 || src_col >= w as isize {
                continue;
            }
            sum += data[[src_row as usize, src_col as usize]] * kernel[[ki, kj]];
        }
    }
    sum
}

fn convolve_rows_zero(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    let row_fn = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let src_col = col as isize + ki as isize - radius as isize;
                    if src_col >= 0 && src_col < w as isize {
                        sum += data[[row, src_col as usize]] * kv;
                    }
                }
                sum
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(row_fn).collect()
    } else {
        (0..h).map(row_fn).collect()
    };
    collect_rows(rows, h, w)
}

fn convolve_cols_zero(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    let row_fn = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let src_row = row as isize + ki as isize - radius as isize;
                    if src_row >= 0 && src_row < h as isize {
                        sum += data[[src_row as usize, col]] * kv;
                    }
                }
                sum
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(row_fn).collect()
    } else {
        (0..h).map(row_fn).collect()
    };
    collect_rows(rows, h, w)
}

fn collect_rows(rows: Vec<Vec<f32>>, h: usize, w: usize) -> Array2<f32> {
    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}
