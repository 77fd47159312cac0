use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "fineblur", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the generated bands as JSON.
    Plan(PlanArgs),
    /// Print a stylesheet with one rule per band.
    Css(CssArgs),
    /// Render the bands over an image (or a test pattern) as a PNG.
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
struct FadeArgs {
    /// Settings JSON file.
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Start from a built-in preset.
    #[arg(long, value_enum)]
    preset: Option<PresetChoice>,

    /// Total blur radius in pixels.
    #[arg(long)]
    blur: Option<f64>,

    /// Fade height in pixels.
    #[arg(long)]
    height: Option<f64>,

    /// Edge color: #RRGGBB, #RRGGBBAA or rgba(r,g,b,a).
    #[arg(long)]
    color: Option<String>,

    /// Edge(s) to blur.
    #[arg(long, value_enum)]
    side: Option<SideChoice>,

    /// Radius of the corners on the anchored edge.
    #[arg(long)]
    corner_radius: Option<f64>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    #[command(flatten)]
    fade: FadeArgs,

    /// Single-line JSON instead of pretty-printed.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Parser, Debug)]
struct CssArgs {
    #[command(flatten)]
    fade: FadeArgs,

    /// Class name prefix.
    #[arg(long, default_value = "fineblur")]
    prefix: String,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    fade: FadeArgs,

    /// Backdrop image; a test pattern is used when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Test pattern width.
    #[arg(long, default_value_t = 480)]
    viewport_width: u32,

    /// Test pattern height.
    #[arg(long, default_value_t = 320)]
    viewport_height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    WhiteBoth,
    ClearTop,
    LightBottom,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SideChoice {
    Top,
    Bottom,
    Both,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Css(args) => cmd_css(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_settings(args: &FadeArgs) -> anyhow::Result<fineblur::BlurSettings> {
    let mut settings = match (&args.config, args.preset) {
        (Some(path), _) => read_settings(path)?,
        (None, Some(preset)) => fineblur::BlurSettings {
            fade: make_preset(preset).fade_config(),
            corner_radius: 0.0,
        },
        (None, None) => fineblur::BlurSettings::default(),
    };

    if let Some(blur) = args.blur {
        settings.fade.total_blur = blur;
    }
    if let Some(height) = args.height {
        settings.fade.fade_height = height;
    }
    if let Some(color) = &args.color {
        settings.fade.edge_color = fineblur::parse_color(color);
    }
    if let Some(side) = args.side {
        settings.fade.side = match side {
            SideChoice::Top => fineblur::Side::Top,
            SideChoice::Bottom => fineblur::Side::Bottom,
            SideChoice::Both => fineblur::Side::Both,
        };
    }
    if let Some(r) = args.corner_radius {
        settings.corner_radius = r;
    }

    let settings = settings.sanitized();
    tracing::debug!(?settings, "resolved settings");
    Ok(settings)
}

fn read_settings(path: &Path) -> anyhow::Result<fineblur::BlurSettings> {
    fineblur::BlurSettings::from_path(path)
        .with_context(|| format!("load settings '{}'", path.display()))
}

fn make_preset(choice: PresetChoice) -> fineblur::Preset {
    match choice {
        PresetChoice::WhiteBoth => fineblur::Preset::WhiteBoth,
        PresetChoice::ClearTop => fineblur::Preset::ClearTop,
        PresetChoice::LightBottom => fineblur::Preset::LightBottom,
    }
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let settings = resolve_settings(&args.fade)?;
    let blur = fineblur::generate(&settings.fade);
    let json = if args.compact {
        serde_json::to_string(&blur)
    } else {
        serde_json::to_string_pretty(&blur)
    }
    .context("serialize band plan")?;
    println!("{json}");
    Ok(())
}

fn cmd_css(args: CssArgs) -> anyhow::Result<()> {
    let settings = resolve_settings(&args.fade)?;
    let blur = fineblur::generate(&settings.fade);

    // CSS heights come straight from the bands; the viewport only bounds the fade region.
    let viewport = fineblur::Canvas::new(0, settings.fade.fade_height.ceil() as u32);
    let style = fineblur::RenderStyle::new(viewport, settings.corner_radius);
    let mut backend = fineblur::CssBackend::new(args.prefix);
    fineblur::paint_bands(&mut backend, &blur, &style)?;
    print!("{}", backend.finish());
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let settings = resolve_settings(&args.fade)?;
    let blur = fineblur::generate(&settings.fade);

    let backdrop = match &args.in_path {
        Some(path) => {
            let img = image::open(path)
                .with_context(|| format!("open backdrop '{}'", path.display()))?
                .to_rgba8();
            fineblur::FrameRGBA::from_image(&img)
        }
        None => fineblur::FrameRGBA::test_pattern(fineblur::Canvas::new(
            args.viewport_width,
            args.viewport_height,
        )),
    };

    let style = fineblur::RenderStyle::new(backdrop.canvas(), settings.corner_radius);
    let mut backend = fineblur::CpuBackend::new(backdrop);
    fineblur::paint_bands(&mut backend, &blur, &style)?;
    let frame = backend.into_frame();

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    frame
        .to_image()?
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    tracing::info!(path = %args.out.display(), "wrote preview");
    Ok(())
}
