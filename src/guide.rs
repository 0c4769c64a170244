//! # Kinegram guide
//!
//! This module is a standalone walkthrough of Kinegram's concepts and public
//! API. If you are looking for the one command that produces the cover, run
//! the `kinegram` binary; if you are extending the pipeline, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Pattern`](crate::Pattern): the concealed grayscale shape, intensities
//!   in [0,1] (1 = solid ink, 0 = background)
//! - [`CoverConfig`](crate::CoverConfig): every knob of a generation run,
//!   fixed up front (seed, frame count, skip, scale, fps, noise sigma, the
//!   two curve exponents)
//! - [`NoiseField`](crate::NoiseField): the tall noise buffer every frame
//!   windows into
//! - [`FrameIndex`](crate::FrameIndex): a 0-based frame index
//! - [`FrameRGB`](crate::FrameRGB): the output pixels (RGB8, tightly packed)
//! - [`GifSink`](crate::GifSink): the only place output IO happens
//!
//! The pipeline is explicitly staged:
//!
//! 1. Load the pattern: [`Pattern::from_path`](crate::Pattern::from_path)
//! 2. Generate the field: [`NoiseField::generate`](crate::NoiseField::generate)
//! 3. Compose frames: [`compose_frame`](crate::compose_frame)
//! 4. Encode: [`GifSink`](crate::GifSink)
//!
//! Convenience wrappers for the whole run live in
//! [`render_frames`](crate::render_frames) and
//! [`render_to_gif`](crate::render_to_gif).
//!
//! ---
//!
//! ## How the reveal works
//!
//! Each frame renders an H-row window of the noise field, sliding down `skip`
//! rows per frame. Before color mapping, every pixel is blended toward its
//! *first-window* value with weight `1 - (1 - intensity)^0.5`:
//!
//! - intensity 1 (solid ink) pins the pixel to its frame-0 noise value; it
//!   never changes across frames
//! - intensity 0 (background) leaves the raw window value; the pixel redraws
//!   every frame
//!
//! A single frame looks like pure noise. In motion, the eye groups the static
//! pixels together and the concealed shape pops out.
//!
//! The field is `H + (F-1)*skip` rows tall, and after sampling, the last
//! H-row window is overwritten with the first one, so the final frame's
//! window equals frame 0's and the animation loops without a seam.
//!
//! ---
//!
//! ## The red/green pixel contract
//!
//! After blending, values run through the sign-preserving contrast curve
//! `sign(v) * |v|^0.43` (clamped to [-1,1]) and map to color as:
//!
//! - `v < 0`: red cast — red stays 255, green and blue drop to `(1+v)*255`
//! - `v >= 0`: green cast — green stays 255, red and blue drop to `(1-v)*255`
//! - `v == 0`: white
//!
//! So exactly one of red/green is ever dimmed, and blue always equals the
//! dimmed channel. Quantization truncates rather than rounds.
//!
//! ---
//!
//! ## Determinism (and why)
//!
//! The reveal only works if the "static" pixels are *exactly* static, so the
//! whole pipeline is deterministic: a seeded ChaCha stream drives the noise,
//! composition is pure, and parallel rendering is required to be
//! byte-identical to sequential. Tests assert determinism end to end.
//!
//! IO happens in exactly two places — [`Pattern`](crate::Pattern) loading and
//! [`GifSink`](crate::GifSink) encoding. Everything between them is a pure
//! function of its arguments, which is what makes the compositor trivially
//! parallel and simple to test.
