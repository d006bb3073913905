use ndarray::Array2;

use vardenoise_core::color::process::{luminance, split_interleaved};
use vardenoise_core::frame::{ColorFrame, Frame};

#[test]
fn test_split_interleaved_layout() {
    // 2x2 image, pixel value encodes (row, col, channel).
    let mut samples = Vec::new();
    for row in 0..2 {
        for col in 0..2 {
            for ch in 0..3 {
                samples.push((row * 100 + col * 10 + ch) as f32);
            }
        }
    }
    let color = split_interleaved(&samples, 2, 2, 8);
    assert_eq!(color.dim(), (2, 2));
    assert_eq!(color.red.data[[1, 0]], 100.0);
    assert_eq!(color.green.data[[0, 1]], 11.0);
    assert_eq!(color.blue.data[[1, 1]], 112.0);
    assert_eq!(color.red.original_bit_depth, 8);
}

#[test]
fn test_luminance_of_gray_is_identity() {
    let color = ColorFrame::filled(3, 3, [0.4, 0.4, 0.4], 16);
    let lum = luminance(&color);
    for &v in lum.data.iter() {
        assert!((v - 0.4).abs() < 1e-6);
    }
}

#[test]
fn test_luminance_weights() {
    let color = ColorFrame::filled(1, 1, [1.0, 0.0, 0.0], 16);
    assert!((luminance(&color).data[[0, 0]] - 0.299).abs() < 1e-6);
    let color = ColorFrame::filled(1, 1, [0.0, 0.0, 1.0], 16);
    assert!((luminance(&color).data[[0, 0]] - 0.114).abs() < 1e-6);
}

#[test]
fn test_color_frame_new_checks_planes() {
    let ok = ColorFrame::new(
        Frame::new(Array2::zeros((2, 3)), 8),
        Frame::new(Array2::zeros((2, 3)), 8),
        Frame::new(Array2::zeros((2, 3)), 8),
    );
    assert!(ok.is_ok());

    let bad = ColorFrame::new(
        Frame::new(Array2::zeros((2, 3)), 8),
        Frame::new(Array2::zeros((3, 3)), 8),
        Frame::new(Array2::zeros((2, 3)), 8),
    );
    assert!(bad.is_err());
}

#[test]
fn test_map_channels_and_pixel() {
    let color = ColorFrame::filled(2, 2, [0.1, 0.2, 0.3], 8);
    let doubled = color.map_channels(|f| Frame::new(f.data.mapv(|v| v * 2.0), f.original_bit_depth));
    let [r, g, b] = doubled.pixel(1, 1);
    assert!((r - 0.2).abs() < 1e-6);
    assert!((g - 0.4).abs() < 1e-6);
    assert!((b - 0.6).abs() < 1e-6);
}
