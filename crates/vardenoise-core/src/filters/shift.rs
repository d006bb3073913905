use ndarray::Array2;

use crate::frame::{ColorFrame, Frame};

/// Circularly shift a 2D array by an integer offset.
///
/// Output cell `(row, col)` reads input cell `((row - dx) mod h, (col - dy) mod w)`,
/// so content moves `dx` rows down and `dy` columns right, wrapping around the
/// borders. Shifting by `(-dx, -dy)` undoes a shift by `(dx, dy)`.
pub fn toroidal_shift(data: &Array2<f32>, dx: i32, dy: i32) -> Array2<f32> {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return data.clone();
    }

    let sx = wrap_offset(dx, h);
    let sy = wrap_offset(dy, w);
    if sx == 0 && sy == 0 {
        return data.clone();
    }

    Array2::from_shape_fn((h, w), |(row, col)| {
        data[[(row + h - sx) % h, (col + w - sy) % w]]
    })
}

/// Circularly shift a frame. See [`toroidal_shift`].
pub fn shift_frame(frame: &Frame, dx: i32, dy: i32) -> Frame {
    Frame::new(
        toroidal_shift(&frame.data, dx, dy),
        frame.original_bit_depth,
    )
}

/// Circularly shift every channel of a color frame by the same offset.
pub fn shift_color(color: &ColorFrame, dx: i32, dy: i32) -> ColorFrame {
    color.map_channels(|channel| shift_frame(channel, dx, dy))
}

/// Reduce a signed offset to `[0, len)`.
fn wrap_offset(offset: i32, len: usize) -> usize {
    (offset as i64).rem_euclid(len as i64) as usize
}
