//! The exported identicon document.
//!
//! A document carries everything needed to display an identicon without the
//! library (array rows and gradient control points) plus the parameters needed
//! to regenerate it. [`verify_document`] rebuilds from those parameters and
//! demands a bit-exact match.

use crate::error::{IoError, Result};
use crate::serialization::{read_json_file, write_json_file};
use golident_core::config::{AppConfig, RenderConfig};
use golident_core::{ColorGradient, FrameNormalization, Identicon, IdenticonConfig, Seed};
use golident_data::{ControlPoint, Grid, Intensity};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current document layout.
pub const FORMAT_VERSION: u32 = 1;

/// Per-step animation frames, already normalized and tiled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FrameSet {
    pub normalization: FrameNormalization,
    pub frames: Vec<Vec<Vec<f64>>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IdenticonDocument {
    pub version: u32,
    pub seed_string: String,
    pub seed_hash: String,
    pub size: usize,
    pub iterations: usize,
    pub num_colors: usize,
    pub lut_size: usize,
    pub fingerprint: String,
    pub gradient: Vec<ControlPoint>,
    pub identicon: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixels: Option<Vec<Vec<[u8; 3]>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<FrameSet>,
}

impl IdenticonDocument {
    /// Captures `ident`. Pixels and frames are attached according to
    /// `config.render`.
    pub fn from_identicon(ident: &Identicon, config: &AppConfig) -> Result<Self> {
        let render = &config.render;
        let pixels = if render.include_pixels {
            let grid = ident.render(render.lut_size)?;
            Some(grid.map(|px| px.to_array()).to_rows())
        } else {
            None
        };
        let frames = render.include_frames.then(|| FrameSet {
            normalization: render.frame_normalization,
            frames: ident
                .animation_frames(render.frame_normalization)
                .iter()
                .map(Grid::to_rows)
                .collect(),
        });

        let params = ident.config();
        Ok(Self {
            version: FORMAT_VERSION,
            seed_string: ident.seed_string().to_string(),
            seed_hash: ident.seed_hash(),
            size: params.size,
            iterations: params.iterations,
            num_colors: params.num_colors,
            lut_size: render.lut_size,
            fingerprint: fingerprint_for(params, render.lut_size),
            gradient: ident.gradient().points().to_vec(),
            identicon: ident.array().to_rows(),
            pixels,
            frames,
        })
    }

    pub fn identicon_config(&self) -> IdenticonConfig {
        IdenticonConfig::new(self.size, self.iterations, self.num_colors)
    }

    /// Structural checks that need no regeneration.
    pub fn validate(&self) -> Result<()> {
        if self.version != FORMAT_VERSION {
            return Err(IoError::validation(format!(
                "unsupported document version {} (expected {})",
                self.version, FORMAT_VERSION
            )));
        }
        self.identicon_config().validate()?;

        let side = self.size.checked_mul(2).ok_or_else(|| {
            IoError::validation(format!("size {} is out of range", self.size))
        })?;
        let array = self.array()?;
        if array.shape() != (side, side) {
            return Err(IoError::validation(format!(
                "identicon is {:?}, expected ({side}, {side})",
                array.shape()
            )));
        }
        if self.gradient.len() != self.num_colors {
            return Err(IoError::validation(format!(
                "gradient has {} colors, expected {}",
                self.gradient.len(),
                self.num_colors
            )));
        }
        self.gradient()?;
        Ok(())
    }

    /// The identicon rows as a grid.
    pub fn array(&self) -> Result<Intensity> {
        Grid::from_rows(self.identicon.clone())
            .ok_or_else(|| IoError::validation("identicon rows are empty or ragged"))
    }

    pub fn gradient(&self) -> Result<ColorGradient> {
        Ok(ColorGradient::from_points(self.gradient.clone())?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_json_file(self, path)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc: Self = read_json_file(path)?;
        doc.validate()?;
        Ok(doc)
    }
}

fn fingerprint_for(params: &IdenticonConfig, lut_size: usize) -> String {
    AppConfig {
        identicon: *params,
        render: RenderConfig {
            lut_size,
            ..RenderConfig::default()
        },
        ..AppConfig::default()
    }
    .fingerprint()
}

/// Rebuilds the identicon described by `doc` and compares every stored value
/// bit for bit. The first difference is returned as [`IoError::Mismatch`].
pub fn verify_document(doc: &IdenticonDocument) -> Result<()> {
    doc.validate()?;

    let expected_hash = Seed::derive(&doc.seed_string).hex();
    if doc.seed_hash != expected_hash {
        return Err(IoError::mismatch(format!(
            "seed hash {} does not match {:?} ({})",
            doc.seed_hash, doc.seed_string, expected_hash
        )));
    }
    let params = doc.identicon_config();
    if doc.fingerprint != fingerprint_for(&params, doc.lut_size) {
        return Err(IoError::mismatch("config fingerprint differs"));
    }

    let ident = Identicon::build(&doc.seed_string, &params)?;

    for (i, (stored, fresh)) in doc.gradient.iter().zip(ident.gradient().points()).enumerate() {
        let same = stored.position.to_bits() == fresh.position.to_bits()
            && stored
                .color
                .iter()
                .zip(fresh.color.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits());
        if !same {
            return Err(IoError::mismatch(format!("gradient control point {i}")));
        }
    }

    compare_rows("identicon", &doc.identicon, &ident.array().to_rows())?;

    if let Some(pixels) = &doc.pixels {
        let fresh = ident.render(doc.lut_size)?.map(|px| px.to_array()).to_rows();
        if let Some((r, c)) = first_difference(pixels, &fresh, |a, b| a == b) {
            return Err(IoError::mismatch(format!("pixel ({r}, {c})")));
        }
    }

    if let Some(set) = &doc.frames {
        let fresh = ident.animation_frames(set.normalization);
        if set.frames.len() != fresh.len() {
            return Err(IoError::mismatch(format!(
                "{} frames stored, {} regenerated",
                set.frames.len(),
                fresh.len()
            )));
        }
        for (t, (stored, grid)) in set.frames.iter().zip(&fresh).enumerate() {
            compare_rows(&format!("frame {t}"), stored, &grid.to_rows())?;
        }
    }

    tracing::info!(seed_hash = %doc.seed_hash, "Document verified");
    Ok(())
}

fn compare_rows(what: &str, stored: &[Vec<f64>], fresh: &[Vec<f64>]) -> Result<()> {
    match first_difference(stored, fresh, |a, b| a.to_bits() == b.to_bits()) {
        Some((r, c)) => Err(IoError::mismatch(format!("{what} cell ({r}, {c})"))),
        None => Ok(()),
    }
}

/// First `(row, col)` where the grids disagree, counting a length difference
/// as a disagreement at the first missing position.
fn first_difference<T, F>(a: &[Vec<T>], b: &[Vec<T>], eq: F) -> Option<(usize, usize)>
where
    F: Fn(&T, &T) -> bool,
{
    for (r, (row_a, row_b)) in a.iter().zip(b).enumerate() {
        if let Some(c) = row_a.iter().zip(row_b).position(|(x, y)| !eq(x, y)) {
            return Some((r, c));
        }
        if row_a.len() != row_b.len() {
            return Some((r, row_a.len().min(row_b.len())));
        }
    }
    (a.len() != b.len()).then(|| (a.len().min(b.len()), 0))
}
