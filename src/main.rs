// What you SEE:
// • A 512x512 window with a dark-to-light vertical gradient.
// • An antialiased outline around the shape: a circle by default, or the
//   mask image given with --mask.
// • --style simple draws only the thin dark outer line. ESC quits.

mod display;

use std::path::PathBuf;

use clap::Parser;
use mask_outline::{
    config::{CANVAS_SIZE, DEFAULT_RADIUS},
    render_scene, Circle, Error, Execution, MaskSource, OutlineStyle, RenderConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mask-outline", about = "Draw an antialiased outline around a shape mask")]
struct Cli {
    /// Grayscale mask image (nonzero = inside). Omit to use an analytic circle.
    #[arg(short, long)]
    mask: Option<PathBuf>,

    /// Radius of the analytic circle (ignored with --mask)
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    radius: f64,

    /// Outline style
    #[arg(short, long, value_enum, default_value_t = OutlineStyle::BlackAndWhite)]
    style: OutlineStyle,

    /// Canvas width in pixels
    #[arg(long, default_value_t = CANVAS_SIZE)]
    width: usize,

    /// Canvas height in pixels
    #[arg(long, default_value_t = CANVAS_SIZE)]
    height: usize,

    /// Split the outline pass across threads by rows
    #[arg(long)]
    parallel: bool,

    /// Also write the result to this image file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not open a window
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = RenderConfig {
        width: cli.width,
        height: cli.height,
        mask: match cli.mask {
            Some(path) => MaskSource::Image(path),
            None => MaskSource::AnalyticCircle(Circle::centered(cli.width, cli.height, cli.radius)),
        },
        style: cli.style,
        execution: if cli.parallel { Execution::Parallel } else { Execution::Serial },
    };

    /* --- Render once, up front ---
       Visual: nothing on screen yet; the canvas is final after this. */
    let canvas = render_scene(&config)?;

    if let Some(path) = &cli.output {
        canvas.save_png(path)?;
    }

    if cli.headless {
        return Ok(());
    }

    let title = match config.style {
        OutlineStyle::BlackAndWhite => "Mask Outline — black & white",
        OutlineStyle::Simple => "Mask Outline — simple",
    };
    display::show(title, &canvas)
}
