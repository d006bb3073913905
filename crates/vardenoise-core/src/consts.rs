/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Minimum amount of work (pixels x offsets) before the search window is
/// spread across Rayon workers.
pub const PARALLEL_WORK_THRESHOLD: usize = 262_144;

/// Default search window radius `r`: offsets span `[-r, r]` on both axes.
pub const DEFAULT_SEARCH_RADIUS: i32 = 3;

/// Largest accepted search radius. The window already holds about four
/// million offsets at this size.
pub const MAX_SEARCH_RADIUS: i32 = 1024;

/// Default patch half-size `f`. The box filter used for patch smoothing has
/// radius `f - 1`.
pub const DEFAULT_PATCH_HALF_SIZE: i32 = 3;

/// Default denominator guard for the normalized patch distance.
pub const DEFAULT_DISTANCE_EPSILON: f32 = 1e-3;

/// Default variance sensitivity `k`. Smaller values discount colour
/// differences less, so noisy outliers receive lower weights.
pub const DEFAULT_VARIANCE_SENSITIVITY: f32 = 0.2;

/// Accumulated weight below which a pixel falls back to its input value.
pub const WEIGHT_SUM_EPSILON: f32 = 1e-10;

/// Number of channels in a color frame (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;
