//! Seed-derived color gradients and the colormap built from them.
//!
//! Gradients never feed back into the pixel values; they only decide how a
//! rendering collaborator colors the `[0, 255]` identicon array.

use crate::error::{IdenticonError, Result};
use crate::normalize::MAX_INTENSITY;
use golident_data::{ControlPoint, Grid, Intensity, Rgb};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default colormap resolution.
pub const DEFAULT_LUT_SIZE: usize = 256;

/// Piecewise-linear gradient over [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorGradient {
    points: Vec<ControlPoint>,
}

impl ColorGradient {
    /// Draws `num_colors` colors, three channels each in red, green, blue
    /// order, and spaces them evenly from 0 to 1.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, num_colors: usize) -> Result<Self> {
        if num_colors == 0 {
            return Err(IdenticonError::invalid_configuration(
                "a gradient needs at least one color",
            ));
        }

        let points = (0..num_colors)
            .map(|i| ControlPoint {
                position: linspace_at(i, num_colors),
                color: [rng.gen(), rng.gen(), rng.gen()],
            })
            .collect();
        Ok(Self { points })
    }

    /// Positions must be in [0, 1] and non-decreasing; channels in [0, 1].
    pub fn from_points(points: Vec<ControlPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(IdenticonError::invalid_configuration(
                "a gradient needs at least one color",
            ));
        }
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if points
            .iter()
            .any(|p| !in_unit(p.position) || !p.color.iter().all(|&c| in_unit(c)))
        {
            return Err(IdenticonError::invalid_configuration(
                "gradient positions and channels must lie in [0, 1]",
            ));
        }
        if points.windows(2).any(|w| w[1].position < w[0].position) {
            return Err(IdenticonError::invalid_configuration(
                "gradient positions must be non-decreasing",
            ));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Color at `x` (clamped to [0, 1]), interpolating each channel linearly
    /// between the surrounding control points.
    pub fn sample(&self, x: f64) -> [f64; 3] {
        let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return [0.0; 3],
        };
        if x <= first.position {
            return first.color;
        }
        if x >= last.position {
            return last.color;
        }

        // First point strictly past x; exists because x < last.position.
        let upper = self.points.partition_point(|p| p.position <= x);
        let (a, b) = (&self.points[upper - 1], &self.points[upper]);
        let span = b.position - a.position;
        if span <= 0.0 {
            return b.color;
        }
        let t = (x - a.position) / span;
        let mut out = [0.0; 3];
        for (ch, o) in out.iter_mut().enumerate() {
            *o = (a.color[ch] + t * (b.color[ch] - a.color[ch])).clamp(0.0, 1.0);
        }
        out
    }

    /// `n` samples evenly spaced over [0, 1], endpoints included.
    pub fn lookup_table(&self, n: usize) -> Vec<[f64; 3]> {
        (0..n).map(|i| self.sample(linspace_at(i, n))).collect()
    }
}

/// Position `i` of `n` evenly spaced points from 0 to 1. A single point sits at 0.
fn linspace_at(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}

/// Quantized lookup table mapping intensities onto colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Colormap {
    lut: Vec<Rgb>,
    vmin: f64,
    vmax: f64,
}

impl Colormap {
    /// Colormap over the identicon range `[0, 255]`.
    pub fn new(gradient: &ColorGradient, lut_size: usize) -> Result<Self> {
        Self::with_range(gradient, lut_size, 0.0, MAX_INTENSITY)
    }

    pub fn with_range(
        gradient: &ColorGradient,
        lut_size: usize,
        vmin: f64,
        vmax: f64,
    ) -> Result<Self> {
        if lut_size == 0 {
            return Err(IdenticonError::invalid_configuration(
                "colormap needs at least one entry",
            ));
        }
        if !(vmin.is_finite() && vmax.is_finite() && vmax > vmin) {
            return Err(IdenticonError::invalid_configuration(format!(
                "colormap range [{vmin}, {vmax}] is empty"
            )));
        }
        let lut = gradient
            .lookup_table(lut_size)
            .into_iter()
            .map(Rgb::from_unit)
            .collect();
        Ok(Self { lut, vmin, vmax })
    }

    pub fn lut(&self) -> &[Rgb] {
        &self.lut
    }

    /// Entry `floor((value - vmin) / (vmax - vmin) * n)`, clamped into the
    /// table. Non-finite values take the first entry.
    pub fn index_of(&self, value: f64) -> usize {
        if !value.is_finite() {
            return 0;
        }
        let n = self.lut.len();
        let x = (value - self.vmin) / (self.vmax - self.vmin);
        let idx = (x * n as f64).floor();
        if idx <= 0.0 {
            0
        } else {
            (idx as usize).min(n - 1)
        }
    }

    pub fn map(&self, value: f64) -> Rgb {
        self.lut[self.index_of(value)]
    }

    /// Colors every cell. The pixel buffer is what an encoder would write out.
    pub fn render(&self, array: &Intensity) -> Grid<Rgb> {
        array.map(|&v| self.map(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::derive;
    use rand::RngCore;

    fn two_stop() -> ColorGradient {
        ColorGradient::from_points(vec![
            ControlPoint {
                position: 0.0,
                color: [0.0, 0.0, 0.0],
            },
            ControlPoint {
                position: 1.0,
                color: [1.0, 0.5, 0.0],
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_random_positions_evenly_spaced() {
        let (_, mut rng) = derive("palette");
        let g = ColorGradient::random(&mut rng, 5).unwrap();
        let positions: Vec<f64> = g.points().iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        for p in g.points() {
            assert!(p.color.iter().all(|c| (0.0..1.0).contains(c)));
        }
    }

    #[test]
    fn test_random_consumes_three_words_per_color() {
        let (_, mut a) = derive("words");
        let (_, mut b) = derive("words");
        ColorGradient::random(&mut a, 4).unwrap();
        for _ in 0..12 {
            b.next_u64();
        }
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_channel_order() {
        let (_, mut a) = derive("order");
        let (_, mut b) = derive("order");
        let g = ColorGradient::random(&mut a, 1).unwrap();
        let r: f64 = b.gen();
        let gr: f64 = b.gen();
        let bl: f64 = b.gen();
        assert_eq!(g.points()[0].color, [r, gr, bl]);
    }

    #[test]
    fn test_zero_colors_rejected() {
        let (_, mut rng) = derive("none");
        assert!(ColorGradient::random(&mut rng, 0).is_err());
    }

    #[test]
    fn test_single_color_is_constant() {
        let (_, mut rng) = derive("solo");
        let g = ColorGradient::random(&mut rng, 1).unwrap();
        assert_eq!(g.points()[0].position, 0.0);
        let lut = g.lookup_table(4);
        assert!(lut.iter().all(|c| *c == g.points()[0].color));
    }

    #[test]
    fn test_sample_interpolates() {
        let g = two_stop();
        assert_eq!(g.sample(0.0), [0.0, 0.0, 0.0]);
        assert_eq!(g.sample(0.5), [0.5, 0.25, 0.0]);
        assert_eq!(g.sample(1.0), [1.0, 0.5, 0.0]);
        assert_eq!(g.sample(7.0), [1.0, 0.5, 0.0]);
        assert_eq!(g.sample(f64::NAN), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sample_hits_interior_stops() {
        let g = ColorGradient::from_points(vec![
            ControlPoint {
                position: 0.0,
                color: [0.0, 0.0, 0.0],
            },
            ControlPoint {
                position: 0.5,
                color: [1.0, 1.0, 1.0],
            },
            ControlPoint {
                position: 1.0,
                color: [0.0, 0.0, 0.0],
            },
        ])
        .unwrap();
        assert_eq!(g.sample(0.5), [1.0, 1.0, 1.0]);
        assert_eq!(g.sample(0.75), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_from_points_validation() {
        assert!(ColorGradient::from_points(vec![]).is_err());
        let unordered = vec![
            ControlPoint {
                position: 0.8,
                color: [0.0; 3],
            },
            ControlPoint {
                position: 0.2,
                color: [0.0; 3],
            },
        ];
        assert!(ColorGradient::from_points(unordered).is_err());
        let out_of_range = vec![ControlPoint {
            position: 0.0,
            color: [1.5, 0.0, 0.0],
        }];
        assert!(ColorGradient::from_points(out_of_range).is_err());
    }

    #[test]
    fn test_colormap_indices() {
        let cmap = Colormap::new(&two_stop(), 256).unwrap();
        assert_eq!(cmap.index_of(0.0), 0);
        assert_eq!(cmap.index_of(255.0), 255);
        assert_eq!(cmap.index_of(127.5), 128);
        assert_eq!(cmap.index_of(-10.0), 0);
        assert_eq!(cmap.index_of(1e9), 255);
        assert_eq!(cmap.index_of(f64::NAN), 0);
    }

    #[test]
    fn test_colormap_endpoints() {
        let cmap = Colormap::new(&two_stop(), 256).unwrap();
        assert_eq!(cmap.map(0.0), Rgb::new(0, 0, 0));
        assert_eq!(cmap.map(255.0), Rgb::new(255, 127, 0));
    }

    #[test]
    fn test_colormap_rejects_empty_range() {
        assert!(Colormap::with_range(&two_stop(), 16, 1.0, 1.0).is_err());
        assert!(Colormap::new(&two_stop(), 0).is_err());
    }

    #[test]
    fn test_render_shape() {
        let cmap = Colormap::new(&two_stop(), 16).unwrap();
        let array = Grid::from_fn(3, 2, |r, c| (r * 3 + c) as f64 * 50.0);
        let pixels = cmap.render(&array);
        assert_eq!(pixels.shape(), (2, 3));
        assert_eq!(pixels[(0, 0)], cmap.lut()[0]);
    }
}
