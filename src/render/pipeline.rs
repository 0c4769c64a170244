use std::path::PathBuf;

use rayon::prelude::*;

use crate::{
    assets::Pattern,
    compose::compose_frame,
    encode::gif::{GifSink, default_gif_config},
    foundation::{
        core::FrameIndex,
        error::{KinegramError, KinegramResult},
    },
    model::CoverConfig,
    noise::NoiseField,
    render::FrameRGB,
};

/// Generate the noise field and render a single frame from scratch.
///
/// This is the "one-shot" API for producing pixels without managing a
/// [`NoiseField`] yourself; for whole animations prefer [`render_frames`] or
/// [`render_to_gif`], which generate the field once.
pub fn render_frame(
    config: &CoverConfig,
    pattern: &Pattern,
    frame: FrameIndex,
) -> KinegramResult<FrameRGB> {
    let field = NoiseField::generate(config, pattern.size())?;
    compose_frame(config, pattern, &field, frame)
}

#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Render frames on a rayon pool instead of sequentially. The per-frame
    /// transform is pure, so parallel output is byte-identical to sequential.
    pub parallel: bool,
    pub threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
}

/// Render every frame of the animation into memory, in order.
pub fn render_frames(
    config: &CoverConfig,
    pattern: &Pattern,
    field: &NoiseField,
    threading: &RenderThreading,
) -> KinegramResult<Vec<FrameRGB>> {
    config.validate()?;

    if !threading.parallel {
        let mut out = Vec::with_capacity(config.frames as usize);
        for f in 0..config.frames {
            out.push(compose_frame(config, pattern, field, FrameIndex(f))?);
        }
        return Ok(out);
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        (0..config.frames)
            .into_par_iter()
            .map(|f| compose_frame(config, pattern, field, FrameIndex(f)))
            .collect::<KinegramResult<Vec<_>>>()
    })
}

#[derive(Clone, Debug)]
pub struct RenderToGifOpts {
    /// Whether to overwrite the output file if it already exists.
    pub overwrite: bool,
    pub threading: RenderThreading,
}

impl Default for RenderToGifOpts {
    fn default() -> Self {
        Self {
            overwrite: true,
            threading: RenderThreading::default(),
        }
    }
}

/// Render the full animation and serialize it as a looping GIF.
///
/// The sequential path streams each frame straight into the encoder, so peak
/// memory stays at one output frame plus the noise field; the parallel path
/// renders everything first and then encodes in order.
pub fn render_to_gif(
    config: &CoverConfig,
    pattern: &Pattern,
    out_path: impl Into<PathBuf>,
    opts: RenderToGifOpts,
) -> KinegramResult<RenderStats> {
    config.validate()?;

    let size = pattern.size();
    let out = config.output_size(size);
    let field = NoiseField::generate(config, size)?;

    let mut gif_cfg = default_gif_config(out_path, out.width, out.height, config.fps);
    gif_cfg.overwrite = opts.overwrite;
    let mut sink = GifSink::new(gif_cfg)?;

    if opts.threading.parallel {
        let frames = render_frames(config, pattern, &field, &opts.threading)?;
        for frame in &frames {
            sink.encode_frame(frame)?;
        }
    } else {
        for f in 0..config.frames {
            let frame = compose_frame(config, pattern, &field, FrameIndex(f))?;
            sink.encode_frame(&frame)?;
        }
    }

    sink.finish()?;
    tracing::debug!(frames = config.frames, "animation rendered");
    Ok(RenderStats {
        frames_total: config.frames,
    })
}

fn build_thread_pool(threads: Option<usize>) -> KinegramResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(KinegramError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| KinegramError::render(format!("failed to build rayon thread pool: {e}")))
}
