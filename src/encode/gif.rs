use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};

use crate::{
    foundation::{
        core::Fps,
        error::{KinegramError, KinegramResult},
    },
    render::FrameRGB,
};

#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub width: u32,
    pub height: u32,
    /// Delay between frames in milliseconds.
    pub frame_delay_ms: u32,
    pub out_path: PathBuf,
    pub overwrite: bool,
}

impl EncodeConfig {
    pub fn validate(&self) -> KinegramResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(KinegramError::validation(
                "encode width/height must be non-zero",
            ));
        }
        if self.frame_delay_ms == 0 {
            return Err(KinegramError::validation("frame_delay_ms must be non-zero"));
        }
        Ok(())
    }
}

pub fn default_gif_config(
    out_path: impl Into<PathBuf>,
    width: u32,
    height: u32,
    fps: Fps,
) -> EncodeConfig {
    EncodeConfig {
        width,
        height,
        frame_delay_ms: fps.frame_delay_ms(),
        out_path: out_path.into(),
        overwrite: true,
    }
}

pub fn ensure_parent_dir(path: &Path) -> KinegramResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Streaming GIF writer: frames go in one at a time, the trailer is written on
/// [`GifSink::finish`]. The repeat flag is set to loop forever.
pub struct GifSink {
    cfg: EncodeConfig,
    encoder: Option<GifEncoder<BufWriter<File>>>,
    frames_written: u64,
}

impl GifSink {
    pub fn new(cfg: EncodeConfig) -> KinegramResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(KinegramError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }

        let file = File::create(&cfg.out_path)
            .with_context(|| format!("create output file '{}'", cfg.out_path.display()))?;
        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| KinegramError::encode(format!("set gif loop flag: {e}")))?;

        Ok(Self {
            cfg,
            encoder: Some(encoder),
            frames_written: 0,
        })
    }

    pub fn encode_frame(&mut self, frame: &FrameRGB) -> KinegramResult<()> {
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(KinegramError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }
        let expected = frame.width as usize * frame.height as usize * 3;
        if frame.data.len() != expected {
            return Err(KinegramError::validation(
                "frame.data size mismatch with width*height*3",
            ));
        }

        let Some(encoder) = self.encoder.as_mut() else {
            return Err(KinegramError::encode("gif sink is already finalized"));
        };

        // The gif codec consumes RGBA; expand with an opaque alpha channel.
        let mut rgba = Vec::with_capacity(frame.data.len() / 3 * 4);
        for px in frame.data.chunks_exact(3) {
            rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        let buffer = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
            .ok_or_else(|| KinegramError::encode("frame buffer does not match its dimensions"))?;

        let delay = image::Delay::from_numer_denom_ms(self.cfg.frame_delay_ms, 1);
        encoder
            .encode_frame(image::Frame::from_parts(buffer, 0, 0, delay))
            .map_err(|e| KinegramError::encode(format!("encode gif frame: {e}")))?;

        self.frames_written += 1;
        Ok(())
    }

    pub fn finish(mut self) -> KinegramResult<()> {
        if self.frames_written == 0 {
            return Err(KinegramError::encode(
                "gif sink finalized without any frames",
            ));
        }
        // Dropping the encoder writes the gif trailer and flushes the writer.
        drop(self.encoder.take());
        tracing::debug!(frames = self.frames_written, "gif encode finished");
        Ok(())
    }
}
