use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use framefx::{
    AspectRatio, ChainConfig, EffectChain, EffectKind, FfmpegSink, FfmpegSinkOpts, Format, Fps,
    FrameSink, FrameSource, GenerativeSource, OutputSize, PRESETS, PngSequenceSink, Resolution,
    Session, SessionOpts, StaticImageSource,
};

/// Global intensity for preset chains when `--intensity` is not given.
const PRESET_INTENSITY: f32 = 0.7;

#[derive(Parser, Debug)]
#[command(name = "framefx", version, about = "Stateful per-frame visual effect chains")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a clip to MP4 (requires `ffmpeg` on PATH) or to a PNG sequence directory.
    Render(RenderArgs),
    /// Render the frame at one tick as a PNG.
    Frame(FrameArgs),
    /// Print the assembled chain as JSON configuration.
    Config(ChainArgs),
    /// List effect kinds.
    ListEffects,
    /// List built-in presets.
    ListPresets,
    /// List output formats and their pixel sizes.
    ListFormats,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Base image; a seeded generative image is used when absent.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Seed for the generative base image.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Aspect ratio (1:1, 3:4, 4:3, 9:16, 16:9).
    #[arg(long, default_value_t = AspectRatio::default())]
    aspect: AspectRatio,

    /// Resolution class (720, 1080, 2k, 4k).
    #[arg(long, default_value_t = Resolution::default())]
    resolution: Resolution,

    /// Exact output width; overrides aspect and resolution. Requires --height.
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Exact output height; overrides aspect and resolution. Requires --width.
    #[arg(long, requires = "width")]
    height: Option<u32>,
}

#[derive(Args, Debug)]
struct ChainArgs {
    /// Start from a built-in preset.
    #[arg(long, conflicts_with = "config")]
    preset: Option<String>,

    /// Start from a JSON chain configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append an effect, as `kind` or `kind=intensity`. Repeatable.
    #[arg(long = "effect", value_name = "KIND[=INTENSITY]")]
    effects: Vec<String>,

    /// Global intensity in [0, 1]. Presets default to 0.7, everything else to 1.0.
    #[arg(long)]
    intensity: Option<f32>,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    chain: ChainArgs,

    /// Clip length in seconds.
    #[arg(long, default_value_t = 5.0)]
    duration: f64,

    /// Worker threads for the per-pixel kernels.
    #[arg(long)]
    threads: Option<usize>,

    /// Output `.mp4` file, or a directory for a PNG sequence.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of overwriting an existing MP4.
    #[arg(long, default_value_t = false)]
    no_overwrite: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    chain: ChainArgs,

    /// Tick to capture (0-based); earlier ticks run first so temporal effects are warmed up.
    #[arg(long, default_value_t = 0)]
    tick: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Config(args) => cmd_config(args),
        Command::ListEffects => {
            for kind in EffectKind::ALL {
                let tag = if kind.is_temporal() { "temporal" } else { "spatial" };
                println!("{:<14} {:<9} {}", kind.name(), tag, kind.description());
            }
            Ok(())
        }
        Command::ListPresets => {
            for p in PRESETS {
                let kinds: Vec<&str> = p.effects.iter().map(|k| k.name()).collect();
                println!("{:<15} {} [{}]", p.name, p.description, kinds.join(", "));
            }
            Ok(())
        }
        Command::ListFormats => cmd_list_formats(),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "framefx=debug",
        _ => "framefx=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_list_formats() -> anyhow::Result<()> {
    for aspect in AspectRatio::ALL {
        for resolution in Resolution::ALL {
            let format = Format::new(aspect, resolution);
            let canvas = format.canvas()?;
            println!("{:<12} {}x{}", format.to_string(), canvas.width, canvas.height);
        }
    }
    Ok(())
}

fn make_source(args: &SourceArgs) -> anyhow::Result<Box<dyn FrameSource>> {
    let size = OutputSize::resolve(
        Format::new(args.aspect, args.resolution),
        args.width,
        args.height,
    )?;
    let canvas = size.canvas()?;
    tracing::debug!(%size, "output size");
    let source: Box<dyn FrameSource> = match &args.image {
        Some(path) => Box::new(StaticImageSource::open(path, canvas)?),
        None => Box::new(GenerativeSource::new(canvas, args.seed)?),
    };
    Ok(source)
}

fn make_chain(args: &ChainArgs) -> anyhow::Result<EffectChain> {
    let fps = Fps::new(args.fps, 1)?;
    let (mut chain, global) = match (&args.preset, &args.config) {
        (Some(name), _) => (
            EffectChain::from_preset(name, 1.0, fps)?,
            Some(args.intensity.unwrap_or(PRESET_INTENSITY)),
        ),
        (None, Some(path)) => (
            EffectChain::from_config(&ChainConfig::from_path(path)?, fps)?,
            args.intensity,
        ),
        (None, None) => (EffectChain::new(fps), args.intensity),
    };
    for arg in &args.effects {
        let (kind, intensity) = parse_effect_arg(arg)?;
        chain.add_effect_named(kind, intensity, &serde_json::Value::Null)?;
    }
    if let Some(v) = global {
        chain.set_global_intensity(v)?;
    }
    Ok(chain)
}

fn parse_effect_arg(arg: &str) -> anyhow::Result<(&str, f32)> {
    match arg.split_once('=') {
        Some((kind, v)) => {
            let intensity: f32 = v
                .trim()
                .parse()
                .with_context(|| format!("invalid intensity in --effect '{arg}'"))?;
            Ok((kind.trim(), intensity))
        }
        None => Ok((arg.trim(), 1.0)),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let source = make_source(&args.source)?;
    let chain = make_chain(&args.chain)?;
    let mut opts = SessionOpts::duration(args.duration, chain.fps())?;
    opts.threads = args.threads;

    let is_mp4 = args
        .out
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("mp4"));
    let mut sink: Box<dyn FrameSink> = if is_mp4 {
        let mut sink_opts = FfmpegSinkOpts::new(&args.out);
        sink_opts.overwrite = !args.no_overwrite;
        Box::new(FfmpegSink::new(sink_opts))
    } else {
        Box::new(PngSequenceSink::new(&args.out))
    };

    let mut session = Session::new(source, chain, opts);
    let stats = session.run(sink.as_mut(), None)?;
    eprintln!(
        "wrote {} ({} frames in {:.2}s)",
        args.out.display(),
        stats.frames_rendered,
        stats.elapsed.as_secs_f64()
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut source = make_source(&args.source)?;
    let mut chain = make_chain(&args.chain)?;

    let mut last = None;
    for _ in 0..=args.tick {
        let base = source.next_frame()?;
        last = Some(chain.process_frame(&base)?);
    }
    let frame = last.context("no frame rendered")?;
    framefx::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_config(args: ChainArgs) -> anyhow::Result<()> {
    let chain = make_chain(&args)?;
    println!("{}", chain.to_config().to_json_pretty()?);
    Ok(())
}
