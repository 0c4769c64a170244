//! Kinegram generates animated cover art that conceals a grayscale pattern
//! inside a field of red/green noise.
//!
//! Every pixel of every frame is noise, but pixels inside the concealed shape
//! are pinned to their first-frame value while background pixels draw fresh
//! noise each frame. When the animation plays, the temporally static region
//! stands out against the flickering background and the shape becomes
//! readable.
//!
//! # Pipeline overview
//!
//! 1. **Load**: bitmap file -> [`Pattern`] (grayscale intensities in [0,1])
//! 2. **Generate**: [`CoverConfig`] -> [`NoiseField`] (seeded, clamped normal noise)
//! 3. **Compose**: [`Pattern`] + [`NoiseField`] + [`FrameIndex`] -> [`FrameRGB`]
//! 4. **Encode**: stream frames into a looping GIF via [`GifSink`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a given seed and pattern always produce
//!   byte-identical frames.
//! - **No IO in the compositor**: external IO is front-loaded in [`Pattern`]
//!   and deferred to [`GifSink`]; everything in between is pure.
//!
//! For a standalone walkthrough of the concepts and architecture, see
//! [`crate::guide`].
#![forbid(unsafe_code)]

mod assets;
mod compose;
mod encode;
mod foundation;
mod model;
mod noise;
mod render;

pub mod guide;

pub use assets::Pattern;
pub use assets::decode::decode_pattern;
pub use compose::compose_frame;
pub use encode::gif::{EncodeConfig, GifSink, default_gif_config, ensure_parent_dir};
pub use foundation::core::{Fps, FrameIndex, GridSize};
pub use foundation::error::{KinegramError, KinegramResult};
pub use model::CoverConfig;
pub use noise::NoiseField;
pub use render::FrameRGB;
pub use render::pipeline::{
    RenderStats, RenderThreading, RenderToGifOpts, render_frame, render_frames, render_to_gif,
};
