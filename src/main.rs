use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use tiny_skia::Pixmap;

use path_distort_renderer::{
    Canvas, PathRenderer, RendererConfig, Widget, RENDER_MODE_WITHOUT_BUFFER,
    RENDER_MODE_WITH_BUFFER,
};

/// Renders the same viewport with both strategies and reports whether the
/// outputs agree.
#[derive(Parser)]
#[command(about = "Compare direct vs. pre-rendered-buffer path rendering")]
struct Args {
    #[arg(long, default_value_t = 700)]
    width: u32,

    #[arg(long, default_value_t = 700)]
    height: u32,

    /// Directory the PNGs are written to.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
}

fn rasterize(render_mode: u32, width: u32, height: u32) -> anyhow::Result<Pixmap> {
    let mut target = Pixmap::new(width, height)
        .with_context(|| format!("viewport {width}x{height} has no drawable area"))?;
    let mut renderer = PathRenderer::new(RendererConfig { render_mode });
    renderer.on_size_resolved(width, height);
    renderer.render(&mut Canvas::new(&mut target))?;
    Ok(target)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let direct = rasterize(RENDER_MODE_WITHOUT_BUFFER, args.width, args.height)?;
    let buffered = rasterize(RENDER_MODE_WITH_BUFFER, args.width, args.height)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let direct_png = args.out_dir.join("direct.png");
    let buffered_png = args.out_dir.join("buffered.png");
    direct
        .save_png(&direct_png)
        .with_context(|| format!("writing {}", direct_png.display()))?;
    buffered
        .save_png(&buffered_png)
        .with_context(|| format!("writing {}", buffered_png.display()))?;
    info!(
        "wrote {} and {}",
        direct_png.display(),
        buffered_png.display()
    );

    if direct.data() == buffered.data() {
        println!("strategies agree: outputs are pixel-identical");
    } else {
        println!("strategies diverge: outputs differ, inspect the PNGs");
    }
    Ok(())
}
