use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::GridSize,
    error::{KinegramError, KinegramResult},
};

pub mod decode;

/// The concealed grayscale pattern, normalized to [0,1].
///
/// Intensity 1 marks pixels fully inside the concealed shape (temporally
/// static in the animation); intensity 0 is pure background (fresh noise
/// every frame). Immutable once loaded.
#[derive(Clone, Debug)]
pub struct Pattern {
    width: u32,
    height: u32,
    /// Row-major, tightly packed, `width * height` values.
    luma: Vec<f32>,
}

impl Pattern {
    /// Build a pattern from raw intensities. Rejects empty grids, length
    /// mismatches, and values outside [0,1].
    pub fn new(width: u32, height: u32, luma: Vec<f32>) -> KinegramResult<Self> {
        let size = GridSize::new(width, height)?;
        if luma.len() != size.area() {
            return Err(KinegramError::validation(format!(
                "pattern buffer length {} does not match {}x{}",
                luma.len(),
                width,
                height
            )));
        }
        if luma.iter().any(|v| !v.is_finite() || *v < 0.0 || *v > 1.0) {
            return Err(KinegramError::validation(
                "pattern intensities must be finite and within [0,1]",
            ));
        }
        Ok(Self { width, height, luma })
    }

    /// Read and decode a bitmap file. This is the only place the pipeline
    /// touches the filesystem on the input side.
    pub fn from_path(path: impl AsRef<Path>) -> KinegramResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read pattern bitmap '{}'", path.display()))?;
        decode::decode_pattern(&bytes)
    }

    pub fn size(&self) -> GridSize {
        GridSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Intensity at logical pixel (x, y).
    pub fn intensity(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        self.luma[y as usize * self.width as usize + x as usize]
    }
}
