//! Headless preview: lays out a strip, clicks a tab, runs the transition
//! and prints the resulting geometry as JSON.
//!
//! ```text
//! tabstrip-preview [--config PATH] [--font PATH [--medium-font PATH]] [--width PX] LABEL...
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;

use tabstrip::config::{StripConfig, load_config, read_config};
use tabstrip::controller::{
    Frame, PointerButton, TabIntent, TabSelectorController, VecTabCollection,
};
use tabstrip::core::{Point, Size, TabRect};
use tabstrip::layout::{CellMeasure, FontdueMeasure, TabDescriptor, TextMeasure};

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    font: Option<PathBuf>,
    medium_font: Option<PathBuf>,
    width: Option<i32>,
    labels: Vec<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => args.config = Some(it.next().context("--config needs a path")?.into()),
            "--font" => args.font = Some(it.next().context("--font needs a path")?.into()),
            "--medium-font" => {
                args.medium_font = Some(it.next().context("--medium-font needs a path")?.into())
            }
            "--width" => {
                let raw = it.next().context("--width needs a value")?;
                args.width = Some(raw.parse().with_context(|| format!("bad width {raw:?}"))?);
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            label => args.labels.push(label.to_string()),
        }
    }
    if args.medium_font.is_some() && args.font.is_none() {
        bail!("--medium-font needs --font");
    }
    if args.labels.is_empty() {
        args.labels = ["Home", "Recent", "Settings"].map(String::from).to_vec();
    }
    Ok(args)
}

/// `#name` marks a label as named (and lockable) by its own text.
fn descriptor(label: &str) -> TabDescriptor {
    match label.strip_prefix('#') {
        Some(name) => TabDescriptor::new(name).named(name),
        None => TabDescriptor::new(label),
    }
}

#[derive(Serialize)]
struct Snapshot {
    control: Size,
    required_width: i32,
    layout: Vec<TabRect>,
    clicked: Point,
    intents: Vec<String>,
    ticks: u32,
    first_frame: Frame,
    last_frame: Frame,
}

fn run<M: TextMeasure>(measure: M, config: StripConfig, args: &Args) -> Result<Snapshot> {
    let mut controller = TabSelectorController::with_config(measure, config);
    if let Some(width) = args.width {
        let height = controller.control_size().height;
        controller.set_control_size(Size::new(width, height));
    }

    let tabs = args.labels.iter().map(|l| descriptor(l));
    controller.attach(Box::new(VecTabCollection::from_tabs(tabs)));

    let target = controller
        .current_layout()
        .last()
        .copied()
        .context("no tabs to click")?;
    let clicked = Point::new(target.x + target.width / 2, target.y + target.height / 2);
    let intents = controller.handle_pointer_up(clicked, PointerButton::Primary);
    log::info!("clicked {clicked:?}: {intents:?}");

    let first_frame = controller.frame();
    let mut ticks = 0;
    while controller.tick() {
        ticks += 1;
    }
    let last_frame = controller.frame();

    Ok(Snapshot {
        control: controller.control_size(),
        required_width: controller.required_width(),
        layout: controller.current_layout().to_vec(),
        clicked,
        intents: intents.iter().map(describe_intent).collect(),
        ticks,
        first_frame,
        last_frame,
    })
}

fn describe_intent(intent: &TabIntent) -> String {
    match intent {
        TabIntent::Select(i) => format!("select {i}"),
        TabIntent::Remove(i) => format!("remove {i}"),
    }
}

fn load_font(path: &Path) -> Result<fontdue::Font> {
    let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("parsing font {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => read_config(path).with_context(|| format!("loading {}", path.display()))?,
        None => load_config(),
    };

    let snapshot = match &args.font {
        Some(path) => {
            let mut measure = FontdueMeasure::new(load_font(path)?);
            if let Some(medium) = &args.medium_font {
                measure = measure.with_medium(load_font(medium)?);
            }
            run(measure, config, &args)?
        }
        None => {
            let measure = CellMeasure {
                cell_width: 8,
                cell_height: 16,
            };
            run(measure, config, &args)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
