use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use drift_core::{AvailableWidth, Bounds, LayoutDocument, SizedItem};
use drift_layout::{FlowEngine, FlowLayout, FlowSpacing, LineWrapEngine, TaffyFlowEngine};

mod preview;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Engine {
    /// Built-in line-wrapping packer
    LineWrap,
    /// Flex-wrap row solved by Taffy
    Taffy,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
    Preview,
}

#[derive(Parser)]
#[command(name = "drift-flow")]
#[command(about = "Lay out chips and tags in wrapping rows")]
struct Args {
    /// Path to a JSON layout document. Reads stdin when omitted or "-".
    document: Option<PathBuf>,

    /// Available width ("320", "320px", "unbounded"). Overrides the document.
    #[arg(long)]
    width: Option<String>,

    /// Horizontal and vertical spacing. Overrides the document.
    #[arg(long)]
    spacing: Option<f32>,

    /// Horizontal spacing only
    #[arg(long)]
    h_spacing: Option<f32>,

    /// Vertical spacing only
    #[arg(long)]
    v_spacing: Option<f32>,

    #[arg(long, value_enum, default_value = "line-wrap")]
    engine: Engine,

    #[arg(long, value_enum, default_value = "table")]
    format: Format,

    /// Preview columns per point
    #[arg(long, default_value_t = 0.25)]
    scale: f32,

    /// Save output to file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Serialize)]
struct JsonPlacement<'a> {
    id: &'a str,
    index: usize,
    row: usize,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

#[derive(Serialize)]
struct JsonLayout<'a> {
    engine: &'static str,
    width: f32,
    height: f32,
    rows: usize,
    placements: Vec<JsonPlacement<'a>>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays parseable.
    let default_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let source = read_source(args.document.as_ref())?;
    let document = LayoutDocument::from_json(&source).context("Failed to parse layout document")?;

    let available_width = match &args.width {
        Some(text) => AvailableWidth::from_string(text).context("Invalid --width")?,
        None => document.available_width().context("Invalid document width")?,
    };
    let spacing = resolve_spacing(&args, &document);
    let bounds = Bounds::from_origin_width(document.origin(), available_width.limit());
    let items = document.resolve_items().context("Failed to resolve items")?;

    info!(
        "Laying out {} items, width {}, spacing {}x{}",
        items.len(),
        available_width,
        spacing.horizontal,
        spacing.vertical
    );

    let (engine_name, layout) = match args.engine {
        Engine::LineWrap => run(&LineWrapEngine::new().with_debug(args.debug), &items, bounds, spacing)?,
        Engine::Taffy => run(&TaffyFlowEngine::new(), &items, bounds, spacing)?,
    };
    debug!("{} engine produced {} rows", engine_name, layout.rows);

    let output_text = match args.format {
        Format::Table => table_output(&layout),
        Format::Json => json_output(engine_name, &layout)?,
        Format::Preview => preview::render(&layout, &bounds, args.scale)?,
    };

    if let Some(output_file) = &args.output {
        fs::write(output_file, output_text)
            .with_context(|| format!("Failed to write to file: {}", output_file.display()))?;
        info!("Output written to: {}", output_file.display());
    } else {
        print!("{}", output_text);
    }

    Ok(())
}

fn read_source(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout document: {}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read layout document from stdin")?;
            Ok(source)
        }
    }
}

fn resolve_spacing(args: &Args, document: &LayoutDocument) -> FlowSpacing {
    let base = args.spacing;
    FlowSpacing::new(
        args.h_spacing.or(base).unwrap_or(document.horizontal_spacing),
        args.v_spacing.or(base).unwrap_or(document.vertical_spacing),
    )
}

fn run<E: FlowEngine>(
    engine: &E,
    items: &[SizedItem],
    bounds: Bounds,
    spacing: FlowSpacing,
) -> Result<(&'static str, FlowLayout<String>)> {
    let layout = engine
        .layout(items, bounds, spacing)
        .with_context(|| format!("{} layout failed", engine.name()))?;
    Ok((engine.name(), layout))
}

fn table_output(layout: &FlowLayout<String>) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:<20} {:>8} {:>8} {:>8} {:>8}\n",
        "index", "id", "x", "y", "w", "h"
    ));
    for p in &layout.placements {
        output.push_str(&format!(
            "{:>5}  {:<20} {:>8.1} {:>8.1} {:>8.1} {:>8.1}\n",
            p.index, p.id, p.origin.x, p.origin.y, p.size.x, p.size.y
        ));
    }
    output.push_str(&format!(
        "size: {:.1} x {:.1} ({} rows)\n",
        layout.size.x, layout.size.y, layout.rows
    ));
    output
}

fn json_output(engine: &'static str, layout: &FlowLayout<String>) -> Result<String> {
    let json = JsonLayout {
        engine,
        width: layout.size.x,
        height: layout.size.y,
        rows: layout.rows,
        placements: layout
            .placements
            .iter()
            .map(|p| JsonPlacement {
                id: &p.id,
                index: p.index,
                row: p.row,
                x: p.origin.x,
                y: p.origin.y,
                width: p.size.x,
                height: p.size.y,
            })
            .collect(),
    };
    let mut text = serde_json::to_string_pretty(&json).context("Failed to serialize layout")?;
    text.push('\n');
    Ok(text)
}
