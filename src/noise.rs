use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution as _, Normal};

use crate::{
    foundation::{
        core::GridSize,
        error::{KinegramError, KinegramResult},
    },
    model::CoverConfig,
};

/// The correlated noise buffer all frames are sliced from.
///
/// Shape is `(H + (F-1)*skip) x W` so an H-row window can slide down one
/// `skip` per frame. After generation the tail window is overwritten with the
/// head window, which makes the last frame's slice identical to the first
/// frame's and closes the animation into a seamless loop. Immutable once
/// built.
#[derive(Clone, Debug)]
pub struct NoiseField {
    width: u32,
    rows: u32,
    /// Row-major, tightly packed, values in [-1,1].
    values: Vec<f32>,
}

impl NoiseField {
    /// Sample a fresh field for `pattern`-sized frames.
    ///
    /// Draws i.i.d. values from N(0, `noise_sigma`) using a ChaCha stream
    /// seeded with `config.seed`, clamps each draw to [-1,1], then closes the
    /// loop. Deterministic: the same config and pattern size always produce
    /// the same field.
    pub fn generate(config: &CoverConfig, pattern: GridSize) -> KinegramResult<Self> {
        config.validate()?;

        let rows = config.noise_rows(pattern);
        let rows = u32::try_from(rows)
            .map_err(|_| KinegramError::validation("noise field row count overflows u32"))?;
        let width = pattern.width;

        let normal = Normal::new(0.0, config.noise_sigma)
            .map_err(|e| KinegramError::validation(format!("invalid noise distribution: {e}")))?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let len = rows as usize * width as usize;
        let mut values = Vec::with_capacity(len);
        for _ in 0..len {
            let v = normal.sample(&mut rng) as f32;
            values.push(v.clamp(-1.0, 1.0));
        }

        close_loop(
            &mut values,
            width as usize,
            pattern.height as usize,
            (config.frames - 1) as usize * config.skip as usize,
        );

        Ok(Self { width, rows, values })
    }

    /// Wrap an existing buffer. The length must be a whole number of rows and
    /// every value must already be within [-1,1].
    pub fn from_values(width: u32, values: Vec<f32>) -> KinegramResult<Self> {
        if width == 0 {
            return Err(KinegramError::validation("noise field width must be > 0"));
        }
        if values.is_empty() || values.len() % width as usize != 0 {
            return Err(KinegramError::validation(
                "noise field buffer must be a non-empty whole number of rows",
            ));
        }
        if values.iter().any(|v| !v.is_finite() || v.abs() > 1.0) {
            return Err(KinegramError::validation(
                "noise field values must be finite and within [-1,1]",
            ));
        }
        let rows = (values.len() / width as usize) as u32;
        Ok(Self { width, rows, values })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Borrow the `height`-row window starting at `start_row`.
    pub fn window(&self, start_row: u32, height: u32) -> KinegramResult<&[f32]> {
        let end_row = start_row as usize + height as usize;
        if end_row > self.rows as usize {
            return Err(KinegramError::render(format!(
                "noise window rows {start_row}..{end_row} exceed field of {} rows",
                self.rows
            )));
        }
        let w = self.width as usize;
        Ok(&self.values[start_row as usize * w..end_row * w])
    }

}

/// Force the `head_rows`-row tail window (starting at `tail_start`) to equal
/// the head window. The regions may overlap when `head_rows > tail_start`, so
/// the head is snapshotted first.
fn close_loop(values: &mut [f32], width: usize, head_rows: usize, tail_start: usize) {
    if tail_start == 0 {
        return;
    }
    let head: Vec<f32> = values[..head_rows * width].to_vec();
    values[tail_start * width..(tail_start + head_rows) * width].copy_from_slice(&head);
}
