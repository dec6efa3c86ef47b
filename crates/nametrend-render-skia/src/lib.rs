// File: crates/nametrend-render-skia/src/lib.rs
// Summary: Paints core draw-command scenes onto Skia CPU raster surfaces.

pub mod text;

use anyhow::Result;
use skia_safe as skia;

use nametrend_core::scene::DrawCmd;
use nametrend_core::types::{Rgba, HEIGHT, WIDTH};
pub use text::TextShaper;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    pub label_size: f32,
    /// Skip text commands; raster tests use this to avoid font variance.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: skia::Color::from_argb(255, 250, 250, 252), // near-white
            label_size: 12.0,
            draw_labels: true,
        }
    }
}

fn to_skia(color: Rgba) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}

/// Paint a scene onto an existing canvas, in emission order.
pub fn draw_scene(canvas: &skia::Canvas, scene: &[DrawCmd], opts: &RenderOptions, shaper: &TextShaper) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);

    for cmd in scene {
        match cmd {
            DrawCmd::Line { from, to, color } => {
                stroke.set_color(to_skia(*color));
                canvas.draw_line(
                    (from.x as f32, from.y as f32),
                    (to.x as f32, to.y as f32),
                    &stroke,
                );
            }
            DrawCmd::Text { text, anchor, color } => {
                if opts.draw_labels {
                    shaper.draw_left(
                        canvas,
                        text,
                        anchor.x as f32,
                        anchor.y as f32,
                        opts.label_size,
                        to_skia(*color),
                    );
                }
            }
        }
    }
}

fn raster_surface(opts: &RenderOptions) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))
}

/// Render a scene to PNG bytes using a CPU raster surface.
pub fn render_to_png_bytes(scene: &[DrawCmd], opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = raster_surface(opts)?;
    let canvas = surface.canvas();
    canvas.clear(opts.background);

    let shaper = TextShaper::new();
    draw_scene(canvas, scene, opts, &shaper);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render a scene to a PNG file at `output_png_path`.
pub fn render_to_png(
    scene: &[DrawCmd],
    opts: &RenderOptions,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<()> {
    let bytes = render_to_png_bytes(scene, opts)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

/// Render a scene to a raw RGBA8 buffer; returns (pixels, width, height, stride).
pub fn render_to_rgba8(scene: &[DrawCmd], opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = raster_surface(opts)?;
    let canvas = surface.canvas();
    canvas.clear(opts.background);

    let shaper = TextShaper::new();
    draw_scene(canvas, scene, opts, &shaper);

    let info = skia::ImageInfo::new(
        (opts.width, opts.height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Premul,
        None,
    );
    let stride = opts.width as usize * 4;
    let mut pixels = vec![0u8; stride * opts.height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("read_pixels failed");
    }
    Ok((pixels, opts.width, opts.height, stride))
}
