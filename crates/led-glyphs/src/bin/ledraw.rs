use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use led_glyphs::{ColorName, GlyphAlphabet, GlyphRenderer, RenderParams};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render LED-segment glyphs to PNG files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Alphabet to draw from: digits, faces or ideograms
    #[arg(long, short, default_value = "digits")]
    alphabet: GlyphAlphabet,

    /// Index of the glyph within the alphabet
    #[arg(long, short, required_unless_present = "all")]
    index: Option<usize>,

    /// Render every glyph of the alphabet into --out-dir
    #[arg(long, conflicts_with = "index")]
    all: bool,

    /// Output file for a single glyph
    #[arg(long, short, default_value = "glyph.png")]
    output: PathBuf,

    /// Output directory used with --all
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON file with render parameters; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Stroke width as a percentage of the canvas size
    #[arg(long)]
    line_width: Option<f32>,

    /// Glyph size as a proportion of the canvas
    #[arg(long)]
    size: Option<f32>,

    /// Stroke color (name or #hex)
    #[arg(long)]
    line_color: Option<String>,

    /// Background color (name or #hex)
    #[arg(long)]
    bg_color: Option<String>,
}

impl Args {
    fn params(&self) -> Result<RenderParams> {
        let mut params = match &self.config {
            Some(path) => RenderParams::from_json_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => RenderParams::default(),
        };

        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(line_width) = self.line_width {
            params.line_width = line_width;
        }
        if let Some(size) = self.size {
            params.size = size;
        }
        if let Some(color) = &self.line_color {
            params.line_color = ColorName::new(color.as_str());
        }
        if let Some(color) = &self.bg_color {
            params.bg_color = ColorName::new(color.as_str());
        }

        Ok(params)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    run(&Args::parse())
}

fn run(args: &Args) -> Result<()> {
    let mut renderer = GlyphRenderer::new(args.alphabet);
    renderer.configure(args.params()?);

    if args.all {
        fs::create_dir_all(&args.out_dir)
            .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

        for index in 0..renderer.glyph_count() {
            let path = args.out_dir.join(format!("{}-{index}.png", args.alphabet));
            render_to(&mut renderer, index, &path)?;
        }

        return Ok(());
    }

    let Some(index) = args.index else {
        bail!("either --index or --all is required");
    };

    if index >= renderer.glyph_count() {
        bail!(
            "glyph index {index} is out of range, {} has {} glyphs",
            args.alphabet,
            renderer.glyph_count()
        );
    }

    render_to(&mut renderer, index, &args.output)
}

fn render_to(renderer: &mut GlyphRenderer, index: usize, path: &Path) -> Result<()> {
    renderer
        .render(index)
        .with_context(|| format!("Failed to render glyph {index}"))?;
    renderer
        .save_png(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(alphabet = %renderer.alphabet(), index, path = %path.display(), "wrote glyph");
    Ok(())
}
