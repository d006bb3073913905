pub mod box_filter;
pub mod shift;

pub use box_filter::{box_filter, convolve_same, make_box_kernel};
pub use shift::{shift_color, shift_frame, toroidal_shift};
