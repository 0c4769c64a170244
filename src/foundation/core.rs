use crate::foundation::error::{KinegramError, KinegramResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> KinegramResult<Self> {
        if den == 0 {
            return Err(KinegramError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(KinegramError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Per-frame delay in whole milliseconds, truncated (30 fps -> 33 ms).
    pub fn frame_delay_ms(self) -> u32 {
        ((1000u64 * u64::from(self.den)) / u64::from(self.num)) as u32
    }
}

/// Logical grid dimensions (pattern pixels, not output pixels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> KinegramResult<Self> {
        if width == 0 || height == 0 {
            return Err(KinegramError::validation("GridSize width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Output dimensions after the nearest-neighbor block upscale.
    pub fn scaled(self, scale: u32) -> Self {
        Self {
            width: self.width * scale,
            height: self.height * scale,
        }
    }

    pub(crate) fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}
