use anyhow::Context as _;

use crate::{KinegramResult, assets::Pattern};

/// Decode encoded image bytes into a normalized grayscale [`Pattern`].
///
/// Any format the `image` crate can sniff is accepted; color inputs are
/// converted to single-channel luma first, then divided by 255.
pub fn decode_pattern(bytes: &[u8]) -> KinegramResult<Pattern> {
    let dyn_img = image::load_from_memory(bytes).context("decode pattern image from memory")?;
    let luma = dyn_img.to_luma8();
    let (width, height) = luma.dimensions();

    let luma: Vec<f32> = luma.into_raw().into_iter().map(|v| f32::from(v) / 255.0).collect();
    Pattern::new(width, height, luma)
}
