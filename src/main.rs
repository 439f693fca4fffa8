use anyhow::{Context, Result, anyhow, bail};
use clap::{ArgAction, Parser};
use deckscriber::draw::{Brush, Point, Sketchpad};
use deckscriber::input::{Key, KeyEvent, LogicalMode};
use deckscriber::sync::{PageId, SyncState};
use deckscriber::{Config, DrawingModeController, UiFlags};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deckscriber")]
#[command(version, about = "Drawing mode controller for presentation whiteboards")]
#[command(after_help = "STEPS:\n  \
    KeyL, Digit3, Ctrl+KeyZ, Escape ...   key chords, dispatched as key-down events\n  \
    stroke:0,0;40,0;40,30                 pointer down, moves, up\n  \
    page:<id>                             switch to another page\n  \
    role:presenter | role:viewer          change the local role")]
struct Cli {
    /// Config file (defaults to ~/.config/deckscriber/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start as a viewer (receive drawings) instead of the presenter
    #[arg(long, action = ArgAction::SetTrue)]
    viewer: bool,

    /// Initial page identifier
    #[arg(long, short = 'p', default_value = "1")]
    page: String,

    /// Start with drawing disabled (shortcuts stay inert)
    #[arg(long, action = ArgAction::SetTrue)]
    disabled: bool,

    /// Session steps, replayed in order
    #[arg(value_name = "STEP")]
    steps: Vec<String>,
}

/// Outcome of a single replayed step.
#[derive(Serialize)]
struct StepOutcome {
    step: String,
    handled: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    logical_mode: LogicalMode,
    brush: &'a Brush,
    flags: UiFlags,
    current_page: &'a PageId,
    elements: usize,
    steps: Vec<StepOutcome>,
    sync: SyncState,
}

fn parse_point(raw: &str) -> Result<Point> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| anyhow!("point '{raw}' must look like x,y"))?;
    let x = x.trim().parse().with_context(|| format!("bad x in '{raw}'"))?;
    let y = y.trim().parse().with_context(|| format!("bad y in '{raw}'"))?;
    Ok((x, y))
}

fn parse_stroke(raw: &str) -> Result<Vec<Point>> {
    let points = raw
        .split(';')
        .filter(|part| !part.trim().is_empty())
        .map(parse_point)
        .collect::<Result<Vec<_>>>()?;
    if points.is_empty() {
        bail!("stroke '{raw}' has no points");
    }
    Ok(points)
}

fn run_step(controller: &mut DrawingModeController<Sketchpad>, step: &str) -> Result<bool> {
    if let Some(path) = step.strip_prefix("stroke:") {
        let points = parse_stroke(path)?;
        let was_drawing_enabled = controller.is_enabled();
        controller.pointer_down(points[0]);
        for point in &points[1..] {
            controller.pointer_move(*point);
        }
        controller.pointer_up();
        return Ok(was_drawing_enabled);
    }

    if let Some(page) = step.strip_prefix("page:") {
        controller.set_current_page(PageId::from(page));
        return Ok(true);
    }

    if let Some(role) = step.strip_prefix("role:") {
        match role {
            "presenter" => controller.set_presenter(true),
            "viewer" => controller.set_presenter(false),
            other => bail!("unknown role '{other}' (expected presenter or viewer)"),
        }
        return Ok(true);
    }

    let event = KeyEvent::parse_chord(step);
    if event.key == Key::Unknown {
        log::warn!("Step '{step}' does not name a known key");
    }
    Ok(controller.handle_key_down(&event))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let sync = SyncState::shared();
    let mut controller = DrawingModeController::from_config(
        Sketchpad::new(),
        &config,
        sync.clone(),
        PageId::from(cli.page.as_str()),
        !cli.viewer,
    )
    .context("Invalid keybindings in config")?;
    controller.set_enabled(!cli.disabled);

    let mut steps = Vec::with_capacity(cli.steps.len());
    for step in &cli.steps {
        let handled = run_step(&mut controller, step)?;
        log::debug!("Step '{step}' handled: {handled}");
        steps.push(StepOutcome {
            step: step.clone(),
            handled,
        });
    }

    let sync_snapshot = sync.borrow().clone();
    let report = Report {
        logical_mode: controller.logical_mode(),
        brush: controller.brush(),
        flags: controller.flags(),
        current_page: controller.current_page(),
        elements: controller.engine().shapes().len(),
        steps,
        sync: sync_snapshot,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
