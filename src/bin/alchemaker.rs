use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "alchemaker", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one circle as a PNG.
    Render(RenderArgs),
    /// List the preset themes.
    Themes(ThemesArgs),
    /// Report the WCAG contrast between two hex colors.
    Contrast(ContrastArgs),
    /// Manage a gallery file of saved circles.
    Gallery(GalleryArgs),
}

#[derive(Parser, Debug)]
struct CanvasArgs {
    /// Canvas width in pixels (defaults to the config size).
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels (defaults to the config size).
    #[arg(long)]
    height: Option<u32>,

    /// Font file used for ribbon text; repeat to register several.
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Circle config JSON; the default circle when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the config style.
    #[arg(long)]
    style: Option<String>,

    /// Override the config complexity.
    #[arg(long)]
    complexity: Option<u32>,

    /// Use a preset theme.
    #[arg(long)]
    theme: Option<String>,

    /// Print the draw-list fingerprint after rendering.
    #[arg(long)]
    fingerprint: bool,

    #[command(flatten)]
    canvas: CanvasArgs,
}

#[derive(Parser, Debug)]
struct ThemesArgs {
    /// Only list themes of this category id.
    #[arg(long)]
    category: Option<String>,
}

#[derive(Parser, Debug)]
struct ContrastArgs {
    foreground: String,
    background: String,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Gallery JSON file; created on first write.
    #[arg(long, default_value = "gallery.json")]
    file: PathBuf,

    #[command(subcommand)]
    cmd: GalleryCommand,
}

#[derive(Subcommand, Debug)]
enum GalleryCommand {
    /// Render a config and save it with its PNG.
    Add {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
    /// List saved circles, newest first.
    List,
    /// Delete one saved circle.
    Remove { id: u64 },
    /// Delete every saved circle.
    Clear,
    /// Re-render every saved circle into a directory.
    Export {
        #[arg(long)]
        out_dir: PathBuf,
        #[command(flatten)]
        canvas: CanvasArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Themes(args) => cmd_themes(args),
        Command::Contrast(args) => cmd_contrast(args),
        Command::Gallery(args) => cmd_gallery(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_config(path: Option<&Path>) -> anyhow::Result<alchemaker::CircleConfig> {
    let Some(path) = path else {
        return Ok(alchemaker::CircleConfig::default());
    };
    alchemaker::CircleConfig::from_path(path)
        .with_context(|| format!("load config '{}'", path.display()))
}

fn render_options(canvas: &CanvasArgs) -> anyhow::Result<alchemaker::RenderOptions> {
    let mut opts = alchemaker::RenderOptions::default();
    for path in &canvas.fonts {
        opts.fonts
            .add_font_file(path)
            .with_context(|| format!("load font '{}'", path.display()))?;
    }
    Ok(opts)
}

fn canvas_for(config: &alchemaker::CircleConfig, canvas: &CanvasArgs) -> alchemaker::Canvas {
    alchemaker::Canvas {
        width: canvas.width.unwrap_or(config.size),
        height: canvas.height.unwrap_or(config.size),
    }
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = read_config(args.config.as_deref())?;
    if let Some(style) = &args.style {
        config.style = alchemaker::Style::parse(style);
    }
    if let Some(c) = args.complexity {
        config.complexity = c;
    }
    if let Some(theme) = args.theme {
        config.theme_id = Some(theme);
    }
    config.validate()?;

    let opts = render_options(&args.canvas)?;
    let canvas = canvas_for(&config, &args.canvas);
    let list = alchemaker::record_circle(&config, canvas, &opts.themes);
    let mut backend = alchemaker::CpuBackend::new(&opts.fonts)?;
    tracing::debug!(fonts = ?backend.font_families(), "raster backend ready");
    let frame = backend.render(&list)?;

    ensure_parent(&args.out)?;
    frame
        .write_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    if args.fingerprint {
        println!("{}", alchemaker::fingerprint_ops(&list).to_hex());
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_themes(args: ThemesArgs) -> anyhow::Result<()> {
    let presets = alchemaker::PresetThemes::new();
    let themes: Vec<&alchemaker::CircleTheme> = match &args.category {
        Some(cat) => presets.by_category(cat),
        None => presets.all().iter().collect(),
    };
    for t in themes {
        println!(
            "{:<22} {:<11} primary {} background {} accent {}",
            t.id, t.category, t.primary_color, t.background_color, t.accent_color
        );
    }
    Ok(())
}

fn cmd_contrast(args: ContrastArgs) -> anyhow::Result<()> {
    let info = alchemaker::color_contrast_info(&args.foreground, &args.background)
        .with_context(|| {
            format!(
                "'{}' and '{}' must both be hex colors",
                args.foreground, args.background
            )
        })?;
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn cmd_gallery(args: GalleryArgs) -> anyhow::Result<()> {
    let mut gallery = alchemaker::MemGallery::load(&args.file)?;
    match args.cmd {
        GalleryCommand::Add {
            config,
            name,
            canvas,
        } => {
            let config = read_config(config.as_deref())?;
            config.validate()?;
            let opts = render_options(&canvas)?;
            let frame =
                alchemaker::render_circle(&config, canvas_for(&config, &canvas), &opts)?;
            let png = frame.encode_png()?;
            let id = gallery.save(name.as_deref(), config, png, now_ms())?.id;
            gallery.save_to(&args.file)?;
            println!("{id}");
        }
        GalleryCommand::List => {
            for r in gallery.all() {
                println!(
                    "{:>4}  {:<24} {:<9} complexity {} density {}",
                    r.id,
                    r.name,
                    r.config.style.as_str(),
                    r.config.complexity,
                    r.config.symbol_density
                );
            }
        }
        GalleryCommand::Remove { id } => {
            if !gallery.delete(id) {
                anyhow::bail!("no circle with id {id}");
            }
            gallery.save_to(&args.file)?;
        }
        GalleryCommand::Clear => {
            gallery.clear();
            gallery.save_to(&args.file)?;
        }
        GalleryCommand::Export { out_dir, canvas } => {
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("create output dir '{}'", out_dir.display()))?;
            let opts = render_options(&canvas)?;
            let records = gallery.all();
            records.par_iter().try_for_each_init(
                || alchemaker::CpuBackend::new(&opts.fonts),
                |backend, record| -> anyhow::Result<()> {
                    let backend = backend
                        .as_mut()
                        .map_err(|e| anyhow::anyhow!("create backend: {e}"))?;
                    let list = alchemaker::record_circle(
                        &record.config,
                        canvas_for(&record.config, &canvas),
                        &opts.themes,
                    );
                    let out = out_dir.join(format!("{}.png", record.id));
                    backend
                        .render(&list)?
                        .write_png(&out)
                        .with_context(|| format!("write png '{}'", out.display()))?;
                    tracing::debug!(id = record.id, path = %out.display(), "exported circle");
                    Ok(())
                },
            )?;
            eprintln!("exported {} circles to {}", records.len(), out_dir.display());
        }
    }
    Ok(())
}
