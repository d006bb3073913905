use crate::consts::MAX_SEARCH_RADIUS;

/// Integer displacement of a neighbor relative to the pixel being filtered.
///
/// `dx` moves along rows (height axis), `dy` along columns (width axis).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NeighborOffset {
    pub dx: i32,
    pub dy: i32,
}

impl NeighborOffset {
    pub const CENTER: NeighborOffset = NeighborOffset { dx: 0, dy: 0 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Number of offsets in a window of the given radius, `(2r + 1)^2`,
/// saturating at `usize::MAX`. Negative radii give 0.
pub fn window_len(radius: i32) -> usize {
    if radius < 0 {
        return 0;
    }
    let side = 2 * radius as u64 + 1;
    usize::try_from(side.saturating_mul(side)).unwrap_or(usize::MAX)
}

/// All offsets of the `(2r+1) x (2r+1)` search window, row-major from `(-r, -r)`.
///
/// A negative radius yields an empty window.
pub fn search_window(radius: i32) -> Vec<NeighborOffset> {
    if radius < 0 {
        return Vec::new();
    }
    let mut offsets = Vec::with_capacity(window_len(radius.min(MAX_SEARCH_RADIUS)));
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            offsets.push(NeighborOffset::new(dx, dy));
        }
    }
    offsets
}
