use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "calheat", version)]
struct Cli {
    /// Log layout and render decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the computed geometry as JSON.
    Layout(CommonArgs),
    /// Write an SVG document.
    Svg(CommonArgs),
    /// Write a PNG image.
    Png(CommonArgs),
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// JSON object mapping `YYYY-MM-DD` to a number.
    #[arg(long)]
    values: PathBuf,

    /// Heat map config JSON; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Presentation style JSON (fills, strokes, font).
    #[arg(long)]
    style: Option<PathBuf>,

    /// First year drawn.
    #[arg(long)]
    start_year: Option<i32>,

    /// Year after the last one drawn.
    #[arg(long)]
    end_year: Option<i32>,

    /// Canvas width.
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height.
    #[arg(long)]
    height: Option<f64>,

    /// Pin "today" (YYYY-MM-DD) instead of reading the clock.
    #[arg(long)]
    today: Option<String>,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Png(args) => cmd_png(args),
    }
}

fn cmd_layout(args: CommonArgs) -> anyhow::Result<()> {
    let layout = build_layout(&args)?;
    let json = serde_json::to_string_pretty(&layout).context("serialize layout")?;
    write_text(&args.out, &json)
}

fn cmd_svg(args: CommonArgs) -> anyhow::Result<()> {
    let layout = build_layout(&args)?;
    let style = load_style(args.style.as_deref())?;
    write_text(&args.out, &calheat::render_svg(&layout, &style))
}

fn cmd_png(args: CommonArgs) -> anyhow::Result<()> {
    let layout = build_layout(&args)?;
    let style = load_style(args.style.as_deref())?;
    let img = calheat::rasterize(&layout, &style)?;
    calheat::write_png(&img, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn build_layout(args: &CommonArgs) -> anyhow::Result<calheat::HeatmapLayout> {
    let mut config = match &args.config {
        Some(p) => calheat::HeatmapConfig::from_path(p)?,
        None => calheat::HeatmapConfig::default(),
    };
    if let Some(v) = args.start_year {
        config.start_year = v;
    }
    if let Some(v) = args.end_year {
        config.end_year = v;
    }
    if let Some(v) = args.width {
        config.width = v;
    }
    if let Some(v) = args.height {
        config.height = v;
    }
    config.validate()?;

    let f = std::fs::File::open(&args.values)
        .with_context(|| format!("open values '{}'", args.values.display()))?;
    let values: calheat::DateValues = serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| format!("parse values '{}'", args.values.display()))?;

    let layout = match &args.today {
        Some(s) => calheat::layout(&config, &values, calheat::DateValues::parse_key(s)?),
        None => calheat::layout_now(&config, &values),
    };
    tracing::info!(
        bands = layout.years.len(),
        cells = layout.cell_count(),
        "layout ready"
    );
    Ok(layout)
}

fn load_style(path: Option<&Path>) -> anyhow::Result<calheat::SvgStyle> {
    let Some(path) = path else {
        return Ok(calheat::SvgStyle::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read style '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse style '{}'", path.display()))
}

fn write_text(out: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, text).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
