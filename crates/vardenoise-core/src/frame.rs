use ndarray::Array2;

use crate::error::{DenoiseError, Result};

/// A single-channel image plane.
/// Pixel values are f32, nominally in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Bit depth of the source file (8, 16 or 32 for float formats)
    pub original_bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array2<f32>, bit_depth: u8) -> Self {
        Self {
            data,
            original_bit_depth: bit_depth,
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// Color image composed of separate channel frames.
#[derive(Clone, Debug)]
pub struct ColorFrame {
    pub red: Frame,
    pub green: Frame,
    pub blue: Frame,
}

impl ColorFrame {
    /// Build a color frame, checking that the three planes agree in shape.
    pub fn new(red: Frame, green: Frame, blue: Frame) -> Result<Self> {
        let dim = red.data.dim();
        for plane in [&green, &blue] {
            let (h, w) = plane.data.dim();
            if (h, w) != dim {
                return Err(DenoiseError::ChannelMismatch {
                    expected_height: dim.0,
                    expected_width: dim.1,
                    found_height: h,
                    found_width: w,
                });
            }
        }
        Ok(Self { red, green, blue })
    }

    /// A color frame with every pixel set to `[r, g, b]`.
    pub fn filled(height: usize, width: usize, rgb: [f32; 3], bit_depth: u8) -> Self {
        let plane = |v: f32| Frame::new(Array2::from_elem((height, width), v), bit_depth);
        Self {
            red: plane(rgb[0]),
            green: plane(rgb[1]),
            blue: plane(rgb[2]),
        }
    }

    /// (height, width) of the red plane.
    pub fn dim(&self) -> (usize, usize) {
        self.red.data.dim()
    }

    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }

    pub fn channels(&self) -> [&Frame; 3] {
        [&self.red, &self.green, &self.blue]
    }

    /// Read the `[r, g, b]` triple at (row, col).
    pub fn pixel(&self, row: usize, col: usize) -> [f32; 3] {
        [
            self.red.data[[row, col]],
            self.green.data[[row, col]],
            self.blue.data[[row, col]],
        ]
    }

    /// Apply a processing function to each channel independently.
    pub fn map_channels<F>(&self, mut process_fn: F) -> ColorFrame
    where
        F: FnMut(&Frame) -> Frame,
    {
        ColorFrame {
            red: process_fn(&self.red),
            green: process_fn(&self.green),
            blue: process_fn(&self.blue),
        }
    }
}
