#![allow(dead_code)]

use ndarray::Array2;

use vardenoise_core::frame::{ColorFrame, Frame};

/// Deterministic pseudo-random value in [-1, 1] for a pixel/channel triple.
pub fn hash_noise(row: usize, col: usize, channel: usize) -> f32 {
    let mut x = (row as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add((col as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F))
        .wrapping_add((channel as u64).wrapping_mul(0x1656_67B1_9E37_79F9));
    x ^= x >> 33;
    x = x.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    x ^= x >> 33;
    (x % 20_001) as f32 / 10_000.0 - 1.0
}

pub fn make_color(h: usize, w: usize, rgb: [f32; 3]) -> ColorFrame {
    ColorFrame::filled(h, w, rgb, 16)
}

pub fn make_variance(h: usize, w: usize, fill: f32) -> Frame {
    Frame::new(Array2::from_elem((h, w), fill), 16)
}

/// Smooth gradient with a little per-channel offset.
pub fn make_ramp_color(h: usize, w: usize) -> ColorFrame {
    let plane = |bias: f32| {
        Frame::new(
            Array2::from_shape_fn((h, w), |(r, c)| {
                ((r * w + c) as f32 / (h * w) as f32 * 0.8 + bias).clamp(0.0, 1.0)
            }),
            16,
        )
    };
    ColorFrame {
        red: plane(0.0),
        green: plane(0.05),
        blue: plane(0.1),
    }
}

/// `base` plus uniform noise of half-width `amplitude` on every channel.
pub fn make_noisy_color(h: usize, w: usize, base: f32, amplitude: f32) -> ColorFrame {
    let plane = |channel: usize| {
        Frame::new(
            Array2::from_shape_fn((h, w), |(r, c)| base + amplitude * hash_noise(r, c, channel)),
            16,
        )
    };
    ColorFrame {
        red: plane(0),
        green: plane(1),
        blue: plane(2),
    }
}

/// Variance map with values spread over `[lo, hi]`.
pub fn make_patterned_variance(h: usize, w: usize, lo: f32, hi: f32) -> Frame {
    Frame::new(
        Array2::from_shape_fn((h, w), |(r, c)| {
            lo + (hi - lo) * (hash_noise(r, c, 7) + 1.0) * 0.5
        }),
        16,
    )
}

/// Mean squared error against a constant colour, over all channels.
pub fn mse_to_constant(color: &ColorFrame, value: f32) -> f64 {
    let mut sum = 0.0f64;
    let mut n = 0usize;
    for channel in color.channels() {
        for &v in channel.data.iter() {
            let d = (v - value) as f64;
            sum += d * d;
            n += 1;
        }
    }
    sum / n as f64
}

/// Largest absolute per-sample difference between two colour frames.
pub fn max_abs_diff(a: &ColorFrame, b: &ColorFrame) -> f32 {
    a.channels()
        .into_iter()
        .zip(b.channels())
        .flat_map(|(x, y)| {
            x.data
                .iter()
                .zip(y.data.iter())
                .map(|(p, q)| (p - q).abs())
                .collect::<Vec<_>>()
        })
        .fold(0.0f32, f32::max)
}
