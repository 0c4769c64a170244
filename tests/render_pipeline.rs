use kinegram::{
    CoverConfig, Fps, FrameIndex, NoiseField, Pattern, RenderThreading, RenderToGifOpts,
    compose_frame, render_frame, render_frames, render_to_gif,
};

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn digest_u64(bytes: &[u8]) -> u64 {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for chunk in bytes.chunks(8) {
        let mut v = 0u64;
        for (i, &b) in chunk.iter().enumerate() {
            v |= (b as u64) << (i * 8);
        }
        state = mix64(state ^ v);
    }
    state
}

/// The 2x2 checker scenario: ink on the main diagonal, 3 frames, no upscale.
fn checker_config() -> CoverConfig {
    CoverConfig {
        frames: 3,
        skip: 1,
        scale: 1,
        fps: Fps { num: 30, den: 1 },
        seed: 42,
        ..CoverConfig::default()
    }
}

fn checker_pattern() -> Pattern {
    Pattern::new(2, 2, vec![1.0, 0.0, 0.0, 1.0]).unwrap()
}

#[test]
fn checker_end_to_end_static_and_dynamic_pixels() {
    let config = checker_config();
    let pattern = checker_pattern();
    let field = NoiseField::generate(&config, pattern.size()).unwrap();

    let frames = render_frames(&config, &pattern, &field, &RenderThreading::default()).unwrap();
    assert_eq!(frames.len(), 3);
    for frame in &frames {
        assert_eq!(frame.width, 2);
        assert_eq!(frame.height, 2);
        assert_eq!(frame.data.len(), 2 * 2 * 3);
    }

    // Solid-ink pixels are pinned to their frame-0 value on every frame.
    for frame in &frames[1..] {
        assert_eq!(frame.pixel(0, 0), frames[0].pixel(0, 0));
        assert_eq!(frame.pixel(1, 1), frames[0].pixel(1, 1));
    }
}

#[test]
fn rendering_twice_is_byte_identical() {
    let config = checker_config();
    let pattern = checker_pattern();

    let field_a = NoiseField::generate(&config, pattern.size()).unwrap();
    let field_b = NoiseField::generate(&config, pattern.size()).unwrap();
    let a = render_frames(&config, &pattern, &field_a, &RenderThreading::default()).unwrap();
    let b = render_frames(&config, &pattern, &field_b, &RenderThreading::default()).unwrap();

    assert_eq!(a.len(), b.len());
    for (fa, fb) in a.iter().zip(&b) {
        assert_eq!(digest_u64(&fa.data), digest_u64(&fb.data));
    }
}

#[test]
fn parallel_render_matches_sequential() {
    let config = CoverConfig {
        frames: 8,
        scale: 2,
        seed: 1005,
        ..CoverConfig::default()
    };
    let luma: Vec<f32> = (0..25).map(|i| i as f32 / 24.0).collect();
    let pattern = Pattern::new(5, 5, luma).unwrap();
    let field = NoiseField::generate(&config, pattern.size()).unwrap();

    let sequential =
        render_frames(&config, &pattern, &field, &RenderThreading::default()).unwrap();
    let parallel = render_frames(
        &config,
        &pattern,
        &field,
        &RenderThreading {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();

    assert_eq!(sequential.len(), parallel.len());
    for (s, p) in sequential.iter().zip(&parallel) {
        assert_eq!(s.data, p.data);
    }
}

#[test]
fn one_shot_render_frame_matches_explicit_field() {
    let config = checker_config();
    let pattern = checker_pattern();
    let field = NoiseField::generate(&config, pattern.size()).unwrap();

    let one_shot = render_frame(&config, &pattern, FrameIndex(2)).unwrap();
    let explicit = compose_frame(&config, &pattern, &field, FrameIndex(2)).unwrap();
    assert_eq!(one_shot.data, explicit.data);
}

#[test]
fn noise_window_loops_back_to_frame0() {
    let config = CoverConfig::default();
    let pattern_size = kinegram::GridSize::new(12, 30).unwrap();
    let field = NoiseField::generate(&config, pattern_size).unwrap();

    let last_start = (config.frames - 1) as u32 * config.skip;
    assert_eq!(
        field.window(0, pattern_size.height).unwrap(),
        field.window(last_start, pattern_size.height).unwrap(),
    );
}

#[test]
fn frame0_equals_noise_only_rendering() {
    let config = checker_config();
    let pattern = checker_pattern();
    let blank = Pattern::new(2, 2, vec![0.0; 4]).unwrap();
    let field = NoiseField::generate(&config, pattern.size()).unwrap();

    // With no blending on frame 0, the pattern cannot influence the pixels:
    // rendering with an all-background pattern gives the same bytes.
    let with_pattern = compose_frame(&config, &pattern, &field, FrameIndex(0)).unwrap();
    let noise_only = compose_frame(&config, &blank, &field, FrameIndex(0)).unwrap();
    assert_eq!(with_pattern.data, noise_only.data);
}

#[test]
fn gif_artifact_has_expected_frames_and_shape() {
    use image::AnimationDecoder as _;

    let out = std::env::temp_dir().join(format!(
        "kinegram_pipeline_{}_artifact.gif",
        std::process::id()
    ));

    let config = checker_config();
    let stats = render_to_gif(&config, &checker_pattern(), &out, RenderToGifOpts::default())
        .unwrap();
    assert_eq!(stats.frames_total, 3);

    let file = std::io::BufReader::new(std::fs::File::open(&out).unwrap());
    let decoder = image::codecs::gif::GifDecoder::new(file).unwrap();
    let frames = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(frames.len(), 3);
    for frame in &frames {
        assert_eq!(frame.buffer().dimensions(), (2, 2));
    }

    let _ = std::fs::remove_file(&out);
}
