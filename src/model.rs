use crate::foundation::{
    core::{Fps, GridSize},
    error::{KinegramError, KinegramResult},
};

/// All knobs of a generation run, fixed up front and passed explicitly into
/// the pipeline.
///
/// The defaults are the cover-art preset: 40 frames at 30 fps, each logical
/// pixel blown up to a 6x6 block, noise drawn from N(0, 0.07).
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CoverConfig {
    /// Number of animation frames.
    pub frames: u64,
    /// Rows the noise window slides down per frame.
    pub skip: u32,
    /// Output block size per logical pixel (nearest-neighbor upscale).
    pub scale: u32,
    pub fps: Fps,
    /// Noise generator seed; same seed + same pattern => identical frames.
    pub seed: u64,
    /// Standard deviation of the normal noise distribution.
    pub noise_sigma: f64,
    /// Exponent of the conceal-weight curve `(1 - intensity)^conceal_exponent`.
    pub conceal_exponent: f64,
    /// Exponent of the sign-preserving contrast curve applied per pixel.
    pub contrast_exponent: f64,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            frames: 40,
            skip: 1,
            scale: 6,
            fps: Fps { num: 30, den: 1 },
            seed: 1005,
            noise_sigma: 0.07,
            conceal_exponent: 0.5,
            contrast_exponent: 0.43,
        }
    }
}

impl CoverConfig {
    pub fn validate(&self) -> KinegramResult<()> {
        if self.frames == 0 {
            return Err(KinegramError::validation("frames must be > 0"));
        }
        if self.skip == 0 {
            return Err(KinegramError::validation("skip must be > 0"));
        }
        if self.scale == 0 {
            return Err(KinegramError::validation("scale must be > 0"));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(KinegramError::validation("fps must have num>0 and den>0"));
        }
        if !self.noise_sigma.is_finite() || self.noise_sigma <= 0.0 {
            return Err(KinegramError::validation("noise_sigma must be finite and > 0"));
        }
        if !self.conceal_exponent.is_finite() || self.conceal_exponent <= 0.0 {
            return Err(KinegramError::validation(
                "conceal_exponent must be finite and > 0",
            ));
        }
        if !self.contrast_exponent.is_finite() || self.contrast_exponent <= 0.0 {
            return Err(KinegramError::validation(
                "contrast_exponent must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Rows of noise needed to slide the window across all frames: `H + (F-1)*S`.
    pub fn noise_rows(&self, pattern: GridSize) -> u64 {
        u64::from(pattern.height) + (self.frames - 1) * u64::from(self.skip)
    }

    /// Output raster dimensions for a given pattern: `(H*scale, W*scale)`.
    pub fn output_size(&self, pattern: GridSize) -> GridSize {
        pattern.scaled(self.scale)
    }
}
