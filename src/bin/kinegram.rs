use std::path::Path;

use anyhow::Context as _;

use kinegram::{CoverConfig, Pattern, RenderToGifOpts, render_to_gif};

// Companion assets live next to the crate; this tool is deliberately
// flag-less and fire-and-forget.
const PATTERN_FILE: &str = "assets/text.png";
const OUTPUT_FILE: &str = "assets/cover.gif";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let pattern_path = root.join(PATTERN_FILE);
    let out_path = root.join(OUTPUT_FILE);

    let pattern = Pattern::from_path(&pattern_path)
        .with_context(|| format!("load concealed pattern '{}'", pattern_path.display()))?;

    let config = CoverConfig::default();
    let out = config.output_size(pattern.size());
    println!("({}, {}, 3)", out.height, out.width);

    let stats = render_to_gif(&config, &pattern, &out_path, RenderToGifOpts::default())?;
    eprintln!("wrote {} ({} frames)", out_path.display(), stats.frames_total);
    Ok(())
}
