use ndarray::{Array2, Zip};

use crate::frame::{ColorFrame, Frame};

/// Per-pixel squared color difference summed over R, G, B.
pub fn raw_color_distance(center: &ColorFrame, neighbor: &ColorFrame) -> Array2<f32> {
    let mut dist = Array2::<f32>::zeros(center.dim());
    for (c, n) in center.channels().into_iter().zip(neighbor.channels()) {
        Zip::from(&mut dist)
            .and(&c.data)
            .and(&n.data)
            .for_each(|d, &cv, &nv| {
                let diff = nv - cv;
                *d += diff * diff;
            });
    }
    dist
}

/// Variance-compensated squared distance between `center` and `neighbor`.
///
/// Per pixel, with `v` the center variance and `nv` the neighbor variance:
///
/// ```text
/// v1 = v + min(v, nv)
/// v2 = v + nv
/// d2 = (sum_c (n_c - c_c)^2 - v1) / (epsilon + k^2 * v2)
/// ```
///
/// Subtracting `v1` removes the squared difference expected from noise alone,
/// so pixels that differ only by noise score near zero or negative.
pub fn pixel_distance(
    center: &ColorFrame,
    neighbor: &ColorFrame,
    variance: &Frame,
    neighbor_variance: &Frame,
    epsilon: f32,
    k: f32,
) -> Array2<f32> {
    let mut dist = raw_color_distance(center, neighbor);
    let k2 = k * k;

    Zip::from(&mut dist)
        .and(&variance.data)
        .and(&neighbor_variance.data)
        .for_each(|d, &v, &nv| {
            let v1 = v + v.min(nv);
            let v2 = v + nv;
            *d = (*d - v1) / (epsilon + k2 * v2);
        });

    dist
}
