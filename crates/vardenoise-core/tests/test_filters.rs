use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};

use vardenoise_core::filters::box_filter::{box_filter, convolve_same, make_box_kernel};
use vardenoise_core::filters::shift::{shift_color, shift_frame, toroidal_shift};
use vardenoise_core::frame::Frame;

mod common;
use common::make_ramp_color;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_index_array(h: usize, w: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(r, c)| (r * w + c) as f32)
}

fn make_ramp_array(h: usize, w: usize) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(r, c)| (r * w + c) as f32 / (h * w) as f32)
}

// ---------------------------------------------------------------------------
// toroidal_shift
// ---------------------------------------------------------------------------

#[test]
fn test_shift_rows_down_wraps() {
    let data = make_index_array(3, 4);
    let shifted = toroidal_shift(&data, 1, 0);
    // Output row 0 comes from the last input row.
    for c in 0..4 {
        assert_eq!(shifted[[0, c]], data[[2, c]]);
        assert_eq!(shifted[[1, c]], data[[0, c]]);
        assert_eq!(shifted[[2, c]], data[[1, c]]);
    }
}

#[test]
fn test_shift_cols_left_wraps() {
    let data = make_index_array(3, 4);
    let shifted = toroidal_shift(&data, 0, -1);
    for r in 0..3 {
        for c in 0..4 {
            assert_eq!(shifted[[r, c]], data[[r, (c + 1) % 4]]);
        }
    }
}

#[test]
fn test_shift_zero_is_identity() {
    let data = make_ramp_array(5, 7);
    assert_eq!(toroidal_shift(&data, 0, 0), data);
}

#[test]
fn test_shift_by_full_period_is_identity() {
    let data = make_ramp_array(5, 7);
    assert_eq!(toroidal_shift(&data, 5, -7), data);
    assert_eq!(toroidal_shift(&data, -10, 14), data);
}

#[test]
fn test_shift_involution() {
    let data = make_ramp_array(4, 6);
    for dx in -5..=5 {
        for dy in -5..=5 {
            let there = toroidal_shift(&data, dx, dy);
            let back = toroidal_shift(&there, -dx, -dy);
            assert_eq!(back, data, "shift ({dx},{dy}) did not invert");
        }
    }
}

#[test]
fn test_shift_preserves_sum() {
    let data = make_ramp_array(6, 5);
    let shifted = toroidal_shift(&data, 2, 3);
    assert_abs_diff_eq!(shifted.sum(), data.sum(), epsilon = 1e-5);
}

#[test]
fn test_shift_does_not_mutate_input() {
    let data = make_index_array(3, 3);
    let copy = data.clone();
    let _ = toroidal_shift(&data, 1, 1);
    assert_eq!(data, copy);
}

#[test]
fn test_shift_frame_keeps_bit_depth() {
    let frame = Frame::new(make_ramp_array(4, 4), 8);
    let shifted = shift_frame(&frame, 1, 2);
    assert_eq!(shifted.original_bit_depth, 8);
    assert_eq!(shifted.data[[1, 2]], frame.data[[0, 0]]);
}

#[test]
fn test_shift_color_moves_all_channels() {
    let color = make_ramp_color(5, 6);
    let shifted = shift_color(&color, -2, 1);
    for (orig, moved) in color.channels().into_iter().zip(shifted.channels()) {
        assert_eq!(moved.data, toroidal_shift(&orig.data, -2, 1));
    }
}

// ---------------------------------------------------------------------------
// make_box_kernel
// ---------------------------------------------------------------------------

#[test]
fn test_box_kernel_sums_to_one() {
    for size in 0..8 {
        let kernel = make_box_kernel(size);
        let side = 2 * size + 1;
        assert_eq!(kernel.dim(), (side, side));
        assert_abs_diff_eq!(kernel.sum(), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn test_box_kernel_coefficients_uniform() {
    let kernel = make_box_kernel(2);
    for &v in kernel.iter() {
        assert_abs_diff_eq!(v, 1.0 / 25.0, epsilon = 1e-7);
    }
}

// ---------------------------------------------------------------------------
// convolve_same
// ---------------------------------------------------------------------------

#[test]
fn test_convolve_same_zero_padding_loses_border_energy() {
    let data = Array2::from_elem((5, 5), 1.0f32);
    let out = convolve_same(&data, &make_box_kernel(1));
    assert_eq!(out.dim(), (5, 5));
    assert_abs_diff_eq!(out[[2, 2]], 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(out[[0, 0]], 4.0 / 9.0, epsilon = 1e-6);
    assert_abs_diff_eq!(out[[0, 2]], 6.0 / 9.0, epsilon = 1e-6);
    assert_abs_diff_eq!(out[[4, 4]], 4.0 / 9.0, epsilon = 1e-6);
}

#[test]
fn test_convolve_same_size_zero_kernel_is_identity() {
    let data = make_ramp_array(6, 4);
    let out = convolve_same(&data, &make_box_kernel(0));
    for (a, b) in out.iter().zip(data.iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-7);
    }
}

#[test]
fn test_convolve_same_flips_kernel() {
    // [[0, 1]] convolved moves content one column right, zero-filling column 0.
    let data = make_index_array(2, 4);
    let kernel = array![[0.0f32, 1.0]];
    let out = convolve_same(&data, &kernel);
    for r in 0..2 {
        assert_eq!(out[[r, 0]], 0.0);
        for c in 1..4 {
            assert_eq!(out[[r, c]], data[[r, c - 1]]);
        }
    }
}

#[test]
fn test_convolve_same_kernel_larger_than_image() {
    let data = Array2::from_elem((2, 2), 1.0f32);
    let out = convolve_same(&data, &make_box_kernel(3));
    // Every output sees all 4 pixels through 49-tap kernel.
    for &v in out.iter() {
        assert_abs_diff_eq!(v, 4.0 / 49.0, epsilon = 1e-6);
    }
}

// ---------------------------------------------------------------------------
// box_filter (separable) vs convolve_same
// ---------------------------------------------------------------------------

#[test]
fn test_box_filter_matches_convolve_same() {
    let data = make_ramp_array(9, 13);
    for size in 0..4 {
        let separable = box_filter(&data, size);
        let direct = convolve_same(&data, &make_box_kernel(size));
        for (a, b) in separable.iter().zip(direct.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_box_filter_matches_convolve_same_parallel() {
    // 300x300 = 90000 > 65536, exercises the row-parallel paths
    let data = make_ramp_array(300, 300);
    let separable = box_filter(&data, 2);
    let direct = convolve_same(&data, &make_box_kernel(2));
    for r in [0, 1, 150, 298, 299] {
        for c in [0, 2, 150, 297, 299] {
            assert_abs_diff_eq!(separable[[r, c]], direct[[r, c]], epsilon = 1e-4);
        }
    }
}
