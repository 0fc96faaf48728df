use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use tarot_forge::encode::png::{write_png, write_png_bytes};
use tarot_forge::forge::summon::unix_ms;
use tarot_forge::{
    ArcanaChoice, CardView, CpuRasterizer, DECKS, FfmpegSink, FfmpegSinkOpts, FileOracle,
    FontBook, Forge, ForgeConfig, FrameSink, OverlayJob, PngSequenceSink, RenderSettings,
    SummonRequest, Suit, render_overlay_frames,
};

const FACE_IMAGE_WAIT: Duration = Duration::from_secs(10);

#[derive(Parser, Debug)]
#[command(name = "tarot-forge", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the deck catalog.
    Decks,
    /// Summon a card and write it as a PNG.
    Card(CardArgs),
    /// Render the particle overlay over a summoned card as PNG frames or an MP4.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct SummonArgs {
    /// Intention the sigil is derived from.
    #[arg(long)]
    intention: String,

    /// Draw a minor card of this suit instead of a major one.
    #[arg(long)]
    minor: Option<String>,

    /// Deck key.
    #[arg(long, default_value = "rider-waite")]
    deck: String,

    /// Render the card back.
    #[arg(long, default_value_t = false)]
    back: bool,

    /// Seed overriding the config.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct CardArgs {
    #[command(flatten)]
    summon: SummonArgs,

    /// Local image used as the face illustration.
    #[arg(long)]
    face_image: Option<PathBuf>,

    /// Output PNG path; defaults to the suggested file name.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    summon: SummonArgs,

    /// Number of frames.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Output directory for PNG frames, or a `.mp4` file.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let cfg = match &cli.config {
        Some(path) => ForgeConfig::load(path)?,
        None => ForgeConfig::from_env()?,
    };
    match cli.cmd {
        Command::Decks => cmd_decks(),
        Command::Card(args) => cmd_card(cfg, args),
        Command::Animate(args) => cmd_animate(cfg, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_decks() -> anyhow::Result<()> {
    for deck in &DECKS {
        println!(
            "{:<12} {:<20} {}  {:?} / {:?}",
            deck.key.as_str(),
            deck.name,
            deck.year,
            deck.back_pattern,
            deck.mystical_effect
        );
    }
    Ok(())
}

fn cmd_card(mut cfg: ForgeConfig, args: CardArgs) -> anyhow::Result<()> {
    cfg.seed = args.summon.seed.or(cfg.seed);
    let mut forge = Forge::new(&cfg);
    if let Some(path) = &args.face_image {
        forge = forge.with_oracle(FileOracle::new(path));
    }

    let mut view = summon_view(&mut forge, &cfg, &args.summon)?;
    view.render()?;
    view.wait_for_face_image(FACE_IMAGE_WAIT);
    if view.needs_redraw() {
        view.render()?;
    }

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(view.suggested_file_name(unix_ms())));
    match view.export_png()? {
        Some(bytes) => write_png_bytes(&out, &bytes)?,
        None => {
            let frame = view.last_frame().context("card was not rendered")?;
            write_png(&out, frame)?;
        }
    }

    eprintln!("wrote {} ({})", out.display(), view.card().name);
    Ok(())
}

fn cmd_animate(mut cfg: ForgeConfig, args: AnimateArgs) -> anyhow::Result<()> {
    cfg.seed = args.summon.seed.or(cfg.seed);
    let mut forge = Forge::new(&cfg);
    let mut view = summon_view(&mut forge, &cfg, &args.summon)?;
    let backdrop = view.render()?.clone();

    let job = OverlayJob {
        card: view.card().clone(),
        colors: view.colors(),
        flipped: view.is_flipped(),
        fps: cfg.fps,
        seed: cfg.seed.unwrap_or_else(unix_ms),
        backdrop: Some(backdrop),
    };
    // The overlay carries no text.
    let mut raster = CpuRasterizer::new(settings(&cfg), FontBook::empty());
    let mut sink = sink_for(&args.out);
    let frames = render_overlay_frames(&job, args.frames, &mut raster, sink.as_mut())?;

    eprintln!("wrote {} frames to {}", frames, args.out.display());
    Ok(())
}

fn summon_view(
    forge: &mut Forge,
    cfg: &ForgeConfig,
    args: &SummonArgs,
) -> anyhow::Result<CardView> {
    let arcana = match args.minor.as_deref() {
        None => ArcanaChoice::Major,
        Some(s) => ArcanaChoice::Minor(
            Suit::parse(s).with_context(|| format!("unknown suit '{s}'"))?,
        ),
    };
    let summoned = forge.summon(&SummonRequest {
        intention: args.intention.clone(),
        arcana,
        deck: args.deck.clone(),
    })?;
    let mut view = CardView::new(summoned, forge.designer(), rasterizer(cfg)?);
    if args.back {
        view.toggle_flip();
    }
    Ok(view)
}

fn rasterizer(cfg: &ForgeConfig) -> anyhow::Result<CpuRasterizer> {
    let fonts = FontBook::load(&cfg.fonts)?;
    Ok(CpuRasterizer::new(settings(cfg), fonts))
}

fn settings(cfg: &ForgeConfig) -> RenderSettings {
    RenderSettings {
        device_pixel_ratio: cfg.device_pixel_ratio,
    }
}

fn sink_for(out: &Path) -> Box<dyn FrameSink> {
    let is_mp4 = out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mp4"));
    if is_mp4 {
        Box::new(FfmpegSink::new(FfmpegSinkOpts::new(out)))
    } else {
        Box::new(PngSequenceSink::new(out, "frame"))
    }
}
