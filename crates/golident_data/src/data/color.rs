use serde::{Deserialize, Serialize};

/// 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantizes unit-range channels the way 8-bit colormap tables do:
    /// clamp to [0, 1], scale by 255, truncate.
    pub fn from_unit(color: [f64; 3]) -> Self {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
        Self::new(q(color[0]), q(color[1]), q(color[2]))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// One anchor of a color gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Position along the gradient, in [0, 1].
    pub position: f64,
    /// Red, green, blue in [0, 1].
    pub color: [f64; 3],
}
