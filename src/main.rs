use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

mod config;
mod domain;
mod error;
mod geometry;
mod mesh;
mod pipeline;

use config::{ExportOptions, FileConfig};
use domain::Route;
use mesh::{stl::estimate_stl_size, write_stl};
use pipeline::{generate_coin_mesh, output_filename};

/// Generate 3D-printable STL climbing coins from GPS routes
///
/// Examples:
///   # Default coin: 80mm base, 20mm relief
///   route2coin alpe_dhuez.json
///
///   # Taller relief on a bigger disc
///   route2coin alpe_dhuez.json --target-height 30 --base-diameter 100
///
///   # No base, fit to the print bed, fixed 15x exaggeration
///   route2coin tour.json --base 0 --target-height 0 --vertical 15
///
///   # Use a config file
///   route2coin tour.json --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "route2coin")]
#[command(version, about, long_about = None)]
struct Args {
    /// Route JSON file produced by the upstream route pipeline
    input: PathBuf,

    /// Path to config file (optional, auto-searches route2coin.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output STL file path (defaults to a name derived from the route)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Route shape (only "track" is implemented)
    #[arg(long)]
    shape: Option<String>,

    /// Projection type: mercator or utm
    #[arg(short = 'p', long)]
    projection: Option<String>,

    /// Ribbon width in mm
    #[arg(long)]
    buffer: Option<f64>,

    /// Total relief height in mm (0 disables and uses --vertical instead)
    #[arg(short = 't', long)]
    target_height: Option<f64>,

    /// Vertical exaggeration multiplier, used when --target-height is 0
    #[arg(long)]
    vertical: Option<f64>,

    /// Base plate height in mm (0 = no base)
    #[arg(short = 'b', long)]
    base: Option<f64>,

    /// Base plate diameter in mm
    #[arg(long)]
    base_diameter: Option<f64>,

    /// Minimum ribbon height above the base in mm
    #[arg(long)]
    min_path_height: Option<f64>,

    /// Measure heights relative to the route's lowest point (true) or the
    /// absolute zero baseline (false)
    #[arg(long)]
    zcut: Option<bool>,

    /// Print bed width in mm, used when --base is 0
    #[arg(long)]
    bed_x: Option<f64>,

    /// Print bed depth in mm, used when --base is 0
    #[arg(long)]
    bed_y: Option<f64>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let mut options = ExportOptions::default();
    if let Some(ref config) = file_config {
        config.apply(&mut options);
    }
    apply_cli_overrides(&args, &mut options);

    println!("route2coin - Climbing Coin STL Generator");
    println!("========================================");
    println!();

    if args.verbose {
        println!("Configuration:");
        println!("  Input: {}", args.input.display());
        println!("  Shape: {}", options.shape);
        println!("  Projection: {}", options.projection);
        println!("  Ribbon width: {}mm", options.buffer);
        if options.target_height > 0.0 {
            println!("  Target relief: {}mm", options.target_height);
        } else {
            println!("  Vertical exaggeration: {}x", options.vertical);
        }
        if options.base > 0.0 {
            println!(
                "  Base: {}mm tall, {}mm diameter",
                options.base, options.base_diameter
            );
        } else {
            println!("  Base: none (bed {}x{}mm)", options.bed_x, options.bed_y);
        }
        println!("  Min path height: {}mm", options.min_path_height);
        println!("  Relative baseline (zcut): {}", options.zcut);
        println!();
    }

    let spinner = create_spinner("Reading route...");
    let start = Instant::now();
    let contents = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read route file: {}", args.input.display()))?;
    let route: Route =
        serde_json::from_str(&contents).context("Failed to parse route JSON")?;
    spinner.finish_with_message(format!(
        "Read {} waypoints [{:.1}s]",
        route.points.len(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Generating coin mesh...");
    let start = Instant::now();
    let coin = generate_coin_mesh(&route, &options).context("Failed to build coin geometry")?;
    spinner.finish_with_message(format!(
        "Generated {} triangles [{:.1}s]",
        coin.triangle_count(),
        start.elapsed().as_secs_f32()
    ));

    for warning in &coin.report.warnings {
        eprintln!("Warning: {}", warning);
    }
    if args.verbose {
        println!("  {}", coin.report.summary());
        let (min, max) = coin.mesh.extent();
        println!(
            "  Model size: {:.1} x {:.1} x {:.1}mm",
            max[0] - min[0],
            max[1] - min[1],
            max[2] - min[2]
        );
    }

    let output_path = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()))
        .unwrap_or_else(|| PathBuf::from(format!("{}.stl", output_filename(&route, &options))));

    let spinner = create_spinner("Writing STL file...");
    let start = Instant::now();
    write_stl(&output_path, &coin.mesh).context("Failed to write STL file")?;
    spinner.finish_with_message(format!(
        "Wrote {} triangles ({:.1} KB) [{:.1}s]",
        coin.triangle_count(),
        estimate_stl_size(coin.triangle_count()) as f64 / 1024.0,
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", output_path.display());

    Ok(())
}

fn apply_cli_overrides(args: &Args, options: &mut ExportOptions) {
    if let Some(ref v) = args.shape {
        options.shape = v.clone();
    }
    if let Some(ref v) = args.projection {
        options.projection = v.clone();
    }
    if let Some(v) = args.buffer {
        options.buffer = v;
    }
    if let Some(v) = args.target_height {
        options.target_height = v;
    }
    if let Some(v) = args.vertical {
        options.vertical = v;
    }
    if let Some(v) = args.base {
        options.base = v;
    }
    if let Some(v) = args.base_diameter {
        options.base_diameter = v;
    }
    if let Some(v) = args.min_path_height {
        options.min_path_height = v;
    }
    if let Some(v) = args.zcut {
        options.zcut = v;
    }
    if let Some(v) = args.bed_x {
        options.bed_x = v;
    }
    if let Some(v) = args.bed_y {
        options.bed_y = v;
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
