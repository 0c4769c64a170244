use crate::{
    assets::Pattern,
    foundation::{
        core::FrameIndex,
        error::{KinegramError, KinegramResult},
        math::{signed_pow, unit_to_u8},
    },
    model::CoverConfig,
    noise::NoiseField,
    render::FrameRGB,
};

/// Render one animation frame.
///
/// The frame's noise window is the H-row slice of `field` starting at
/// `frame * skip`. For every logical pixel the window value is blended toward
/// the *first* window's value by the conceal weight `(1 - intensity)^0.5`:
/// pixels inside the concealed shape (weight near 0) stay pinned to their
/// frame-0 noise and read as static when the animation plays, while background
/// pixels (weight near 1) draw fresh noise each frame. Frame 0 is the raw
/// window, unblended.
///
/// The blended value then runs through the sign-preserving contrast curve and
/// the red/green mapping: negative values dim green+blue (red cast), positive
/// values dim red+blue (green cast), zero is white. Each logical pixel fills a
/// `scale x scale` block of the output raster.
///
/// Pure: no IO, no state; the same inputs always produce the same bytes.
#[tracing::instrument(skip(config, pattern, field))]
pub fn compose_frame(
    config: &CoverConfig,
    pattern: &Pattern,
    field: &NoiseField,
    frame: FrameIndex,
) -> KinegramResult<FrameRGB> {
    config.validate()?;
    if frame.0 >= config.frames {
        return Err(KinegramError::render("frame is out of bounds"));
    }

    let size = pattern.size();
    if field.width() != size.width {
        return Err(KinegramError::render(format!(
            "noise field width {} does not match pattern width {}",
            field.width(),
            size.width
        )));
    }

    let start_row = u32::try_from(frame.0 * u64::from(config.skip))
        .map_err(|_| KinegramError::render("frame window offset overflows u32"))?;
    let window = field.window(start_row, size.height)?;
    let first = field.window(0, size.height)?;

    let w = size.width as usize;
    let scale = config.scale as usize;
    let out = config.output_size(size);
    let out_w = out.width as usize;
    let mut data = vec![255u8; out_w * out.height as usize * 3];

    let conceal_exp = config.conceal_exponent as f32;
    let contrast_exp = config.contrast_exponent as f32;

    for y in 0..size.height as usize {
        for x in 0..w {
            let mut v = window[y * w + x];
            // 0 = fully inside the concealed shape, 1 = pure background.
            let conceal = (1.0 - pattern.intensity(x as u32, y as u32)).powf(conceal_exp);
            if frame.0 > 0 {
                v = v * conceal + first[y * w + x] * (1.0 - conceal);
            }
            // Clamp before the 1±v mapping so float drift cannot push a
            // channel outside [0,1].
            let v = signed_pow(v, contrast_exp).clamp(-1.0, 1.0);

            let (r, g, b) = if v < 0.0 {
                let dim = unit_to_u8(1.0 + v);
                (255, dim, dim)
            } else {
                let dim = unit_to_u8(1.0 - v);
                (dim, 255, dim)
            };

            for by in 0..scale {
                let row = (y * scale + by) * out_w;
                for bx in 0..scale {
                    let i = (row + x * scale + bx) * 3;
                    data[i] = r;
                    data[i + 1] = g;
                    data[i + 2] = b;
                }
            }
        }
    }

    Ok(FrameRGB {
        width: out.width,
        height: out.height,
        data,
    })
}
