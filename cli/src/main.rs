mod script;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use canvas::config::CanvasConfig;
use canvas::dither::DitherField;
use canvas::doc::ItemStore;
use canvas::engine::{Action, EngineCore};
use canvas::error::{CanvasError, ConfigError};
use canvas::render;
use canvas::thought::{self, ThoughtSequence};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::script::ApplyError;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("line {line}: invalid event: {source}")]
    Script { line: usize, source: serde_json::Error },
    #[error("line {line}: {source}")]
    Apply { line: usize, source: ApplyError },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "canvas-cli", about = "Headless driver for the context canvas engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON-lines event script and print the resulting items.
    Replay(ReplayArgs),
    /// Render one frame of the dithered background as text.
    Dither(DitherArgs),
    /// Print the thinking status sequence.
    Thoughts(ThoughtArgs),
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(default_value = "-", help = "Script path, or - for stdin")]
    script: String,

    #[arg(long, help = "JSON array of items to load before replaying")]
    snapshot: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Print each emitted action")]
    actions: bool,

    #[arg(long, default_value_t = false, help = "Print camera, tool, and overlay state after the items")]
    summary: bool,
}

#[derive(Args, Debug)]
struct DitherArgs {
    #[arg(long, default_value_t = 160, help = "Viewport width in CSS pixels")]
    width: usize,

    #[arg(long, default_value_t = 96, help = "Viewport height in CSS pixels")]
    height: usize,

    #[arg(long, env = "CANVAS_DITHER_SEED", default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 0.0, help = "Animation time in milliseconds")]
    time_ms: f64,
}

#[derive(Args, Debug)]
struct ThoughtArgs {
    #[arg(long, default_value_t = 800)]
    interval_ms: u64,

    #[arg(long, default_value_t = false, help = "Reveal steps in real time")]
    live: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Replay(args) => run_replay(args),
        Command::Dither(args) => {
            run_dither(&args);
            Ok(())
        }
        Command::Thoughts(args) => {
            run_thoughts(&args);
            Ok(())
        }
    }
}

fn run_replay(args: ReplayArgs) -> Result<(), CliError> {
    let config = CanvasConfig::from_env()?;
    let mut core = EngineCore::with_config(config);

    if let Some(path) = &args.snapshot {
        let json = std::fs::read_to_string(path).map_err(|source| CliError::Open { path: path.clone(), source })?;
        let store = ItemStore::from_json(&json).map_err(CanvasError::from)?;
        core.load_snapshot(store.as_slice().to_vec());
    }

    let reader: Box<dyn BufRead> = if args.script == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let path = PathBuf::from(&args.script);
        let file = File::open(&path).map_err(|source| CliError::Open { path, source })?;
        Box::new(BufReader::new(file))
    };

    let mut applied = 0_usize;
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(CliError::Read)?;
        let Some(event) = script::parse_line(&line).map_err(|source| CliError::Script { line: line_no, source })?
        else {
            continue;
        };
        debug!(line = line_no, ?event, "applying event");
        let actions = script::apply(&mut core, event).map_err(|source| CliError::Apply { line: line_no, source })?;
        if args.actions {
            for action in &actions {
                print_action(line_no, action);
            }
        }
        applied += 1;
    }
    info!(events = applied, items = core.items().len(), "replay complete");

    println!("{}", core.doc.to_json()?);
    if args.summary {
        print_summary(&core);
    }
    Ok(())
}

fn print_action(line: usize, action: &Action) {
    match action {
        Action::ItemAdded(item) => println!("{line}: added {} {} at ({}, {})", item.kind.as_str(), item.id, item.x, item.y),
        Action::ItemRemoved { id } => println!("{line}: removed {id}"),
        Action::ItemMoved { id, x, y } => println!("{line}: moved {id} to ({x}, {y})"),
        Action::SelectionChanged(Some(id)) => println!("{line}: selected {id}"),
        Action::SelectionChanged(None) => println!("{line}: selection cleared"),
        Action::ToolChanged(tool) => println!("{line}: tool {tool:?}"),
        Action::SetCursor(cursor) => println!("{line}: cursor {}", cursor.as_css()),
        Action::RenderNeeded => {}
    }
}

fn print_summary(core: &EngineCore) {
    let scene = render::build_scene(core);
    let camera = scene.camera;
    println!("tool: {:?}", core.tool());
    println!("pan: ({}, {})", camera.pan_x, camera.pan_y);
    println!("zoom: {}", scene.overlay.zoom_label);
    println!("selected: {}", core.selection().map_or_else(|| "none".to_owned(), |id| id.to_string()));
    println!("undo: {} redo: {}", scene.overlay.can_undo, scene.overlay.can_redo);
}

fn run_dither(args: &DitherArgs) {
    let field = DitherField::for_viewport(args.width, args.height, args.seed);
    let frame = field.frame(args.time_ms);
    debug!(width = frame.width, height = frame.height, lit = frame.lit(), "rendered dither frame");
    for row in frame.rows() {
        let line: String = row.iter().map(|&p| if p == 255 { '#' } else { ' ' }).collect();
        println!("{}", line.trim_end());
    }
}

fn run_thoughts(args: &ThoughtArgs) {
    let steps = thought::DEFAULT_STEPS.iter().map(|s| (*s).to_owned()).collect();
    let sequence = ThoughtSequence::new(steps, Duration::from_millis(args.interval_ms));
    let total = sequence.total_duration();

    println!("{}", thought::header_label(true, Duration::ZERO));
    let mut shown = Duration::ZERO;
    for step in sequence {
        if args.live {
            std::thread::sleep(step.reveal_at.saturating_sub(shown));
            shown = step.reveal_at;
        }
        println!("  [{:>5} ms] {}", step.reveal_at.as_millis(), step.text);
    }
    println!("{}", thought::header_label(false, total));
}
