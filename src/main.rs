use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use barscape::{compile_scene, csv_reader, Dataset, SceneOptions};

#[derive(Parser, Debug)]
#[command(name = "barscape")]
#[command(about = "Compile tabular data into a 3-D bar chart scene", long_about = None)]
struct Args {
    /// Input file (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Treat input as a JSON array of objects instead of CSV
    #[arg(long)]
    json: bool,

    /// Use the embedded demo dataset instead of reading input
    #[cfg(feature = "builtin-data")]
    #[arg(long)]
    demo: bool,

    /// Theme palette name (Playful, Ocean, Nature, Sunset, Berry, Mono)
    #[arg(long, default_value = "Playful")]
    theme: String,

    /// Use the light-mode palette variants
    #[arg(long)]
    light: bool,

    /// Spacing between ordinal slots along the X axis
    #[arg(long, default_value_t = 2.0)]
    ordinal_spacing: f64,

    /// Spacing between category slots along the Z axis
    #[arg(long, default_value_t = 2.0)]
    category_spacing: f64,

    /// Bar thickness, passed through to the renderer
    #[arg(long, default_value_t = 0.6)]
    bar_thickness: f64,

    /// Multiplier applied to every normalized bar height
    #[arg(long, default_value_t = 1.0)]
    height_scale: f64,

    /// Number of tick intervals on the value axis
    #[arg(long, default_value_t = 5)]
    ticks: usize,

    /// Skip grid ring geometry
    #[arg(long)]
    no_grid: bool,

    /// Scene title
    #[arg(long)]
    title: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Write the scene to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let dataset = load_dataset(&args)?;
    let options = scene_options(&args);

    let scene = compile_scene(&dataset, &options).context("Failed to compile scene")?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&scene)
    } else {
        serde_json::to_string(&scene)
    }
    .context("Failed to serialize scene")?;

    match &args.output {
        Some(path) => fs::write(path, json.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(json.as_bytes())
                .and_then(|_| handle.write_all(b"\n"))
                .context("Failed to write scene to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

fn load_dataset(args: &Args) -> Result<Dataset> {
    #[cfg(feature = "builtin-data")]
    if args.demo {
        let data = csv_reader::parse_csv(barscape::DEMO_CSV.as_bytes())
            .context("Failed to parse the embedded demo dataset")?;
        return Ok(data);
    }

    if args.json {
        let raw = read_raw(args.file.as_deref())?;
        let value: serde_json::Value =
            serde_json::from_str(&raw).context("Input is not valid JSON")?;
        let data = Dataset::from_json(&value)?;
        return Ok(data);
    }

    let data = match &args.file {
        Some(path) => csv_reader::read_from_path(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => csv_reader::read_from_stdin().context("Failed to read CSV from stdin")?,
    };
    Ok(data)
}

fn read_raw(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn scene_options(args: &Args) -> SceneOptions {
    SceneOptions {
        ordinal_spacing: args.ordinal_spacing,
        category_spacing: args.category_spacing,
        bar_thickness: args.bar_thickness,
        height_scale: args.height_scale,
        theme: args.theme.clone(),
        dark_mode: !args.light,
        tick_count: args.ticks,
        show_grid: !args.no_grid,
        title: args.title.clone(),
    }
}
