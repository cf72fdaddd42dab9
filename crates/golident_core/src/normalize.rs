//! Linear rescaling of intensity fields into [0, 255].

use crate::config::FrameNormalization;
use golident_data::{Field, Intensity};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Upper end of the output range.
pub const MAX_INTENSITY: f64 = 255.0;

/// `(min, max)` over finite values, or `None` when there are none.
pub fn value_range(cells: &[f64]) -> Option<(f64, f64)> {
    cells
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Maps `min -> 0` and `max -> 255` linearly, as `(v - min) * 255 / (max - min)`.
/// Multiplying before dividing keeps integer-valued fields inside [0, 255]
/// with the maximum landing on exactly 255.
///
/// A constant field comes back unchanged rather than scaled: there is no
/// range to divide by, and the caller sees the original value.
pub fn normalize(field: &Intensity) -> Intensity {
    match value_range(field.cells()) {
        Some((lo, hi)) if hi > lo => rescale(field, lo, hi - lo),
        _ => field.clone(),
    }
}

/// Normalizes animation frames either one by one or against the range of the
/// whole sequence. Same constant-range policy as [`normalize`].
pub fn normalize_frames(frames: &[Field], mode: FrameNormalization) -> Vec<Intensity> {
    let frames: Vec<Intensity> = frames.iter().map(Field::to_intensity).collect();
    match mode {
        FrameNormalization::PerFrame => frames.iter().map(normalize).collect(),
        FrameNormalization::Global => {
            let all: Vec<f64> = frames.iter().flat_map(|f| f.iter().copied()).collect();
            match value_range(&all) {
                Some((lo, hi)) if hi > lo => {
                    frames.iter().map(|f| rescale(f, lo, hi - lo)).collect()
                }
                _ => frames,
            }
        }
    }
}

fn rescale(field: &Intensity, lo: f64, span: f64) -> Intensity {
    let mut out = field.clone();
    let scale = move |v: &mut f64| *v = (*v - lo) * MAX_INTENSITY / span;

    #[cfg(feature = "parallel")]
    out.cells_mut().par_iter_mut().for_each(scale);
    #[cfg(not(feature = "parallel"))]
    out.cells_mut().iter_mut().for_each(scale);

    out
}
