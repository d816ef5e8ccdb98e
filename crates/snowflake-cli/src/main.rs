//! snowflake CLI - parametric snowflake generator
//!
//! Builds a snowflake outline and writes it as G-code, SVG or a JSON point
//! list.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use snowflake::export::{to_svg, SvgSettings};
use snowflake::{Snowflake, SnowflakeBuilder, SnowflakeOptions};
use snowflake_gcode::{generate_gcode, GcodeFlavor, GcodeSettings};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "snowflake")]
#[command(about = "Parametric snowflake generator for plotters and printers", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a snowflake and write it out
    Generate {
        #[command(flatten)]
        geometry: GeometryArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Gcode)]
        format: Format,

        /// G-code flavor for `--format program`
        #[arg(long, value_enum, default_value_t = Flavor::Marlin)]
        flavor: Flavor,

        /// Drawing feed rate in mm/min for `--format program`
        #[arg(long, default_value_t = 1500.0)]
        feed_rate: f64,

        /// Offset added to every point, as X,Y (e.g. the bed center)
        #[arg(long, value_parser = parse_origin, default_value = "0,0")]
        origin: (f64, f64),

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a summary of the snowflake that would be generated
    Info {
        #[command(flatten)]
        geometry: GeometryArgs,
    },
}

/// Shape options shared by every subcommand.
#[derive(Args)]
struct GeometryArgs {
    /// Options file (.toml or .json) with numArms, armLength, ... keys
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of arms
    #[arg(long)]
    arms: Option<u32>,

    /// Arm length
    #[arg(long)]
    arm_length: Option<f64>,

    /// Arm thickness near the center
    #[arg(long)]
    arm_thickness: Option<f64>,

    /// Spikes per half-arm (random 2..=5 when unset)
    #[arg(long)]
    spikes: Option<u32>,

    /// Offset between spike segments
    #[arg(long)]
    spacer: Option<f64>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Bare `G1 X.. Y..` lines, one per point
    Gcode,
    /// Complete G-code program with start/end sequences
    Program,
    /// Standalone SVG document
    Svg,
    /// JSON array of points
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Flavor {
    Marlin,
    Klipper,
    Grbl,
}

impl From<Flavor> for GcodeFlavor {
    fn from(flavor: Flavor) -> Self {
        match flavor {
            Flavor::Marlin => GcodeFlavor::Marlin,
            Flavor::Klipper => GcodeFlavor::Klipper,
            Flavor::Grbl => GcodeFlavor::Grbl,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            geometry,
            format,
            flavor,
            feed_rate,
            origin,
            output,
        } => {
            let flake = build_snowflake(&geometry)?;
            let text = match format {
                Format::Gcode => flake.to_gcode(),
                Format::Program => {
                    let settings = GcodeSettings {
                        flavor: flavor.into(),
                        feed_rate,
                        origin,
                        ..Default::default()
                    };
                    generate_gcode(flake.path(), &settings)?
                }
                Format::Svg => to_svg(flake.path(), &SvgSettings::default()),
                Format::Json => serde_json::to_string_pretty(flake.path())? + "\n",
            };
            write_output(output.as_deref(), &text)?;
        }
        Commands::Info { geometry } => {
            let flake = build_snowflake(&geometry)?;
            print_info(&flake);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_options(path: &Path) -> Result<SnowflakeOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let options = match ext.to_lowercase().as_str() {
        "toml" => SnowflakeOptions::from_toml_str(&text)?,
        "json" => SnowflakeOptions::from_json_str(&text)?,
        _ => anyhow::bail!("Unknown config format: {}", path.display()),
    };
    info!(path = %path.display(), "loaded options");
    Ok(options)
}

fn build_snowflake(args: &GeometryArgs) -> Result<Snowflake> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => SnowflakeOptions::default(),
    };

    if let Some(arms) = args.arms {
        options.num_arms = arms;
    }
    if let Some(length) = args.arm_length {
        options.arm_length = length;
    }
    if let Some(thickness) = args.arm_thickness {
        options.arm_thickness = thickness;
    }
    if let Some(spikes) = args.spikes {
        options.num_spikes = Some(spikes);
    }
    if let Some(spacer) = args.spacer {
        options.spacer = spacer;
    }

    let builder = SnowflakeBuilder::from_options(options);
    let flake = match args.seed {
        Some(seed) => builder.build_seeded(seed),
        None => builder.build(),
    }
    .context("building snowflake")?;

    info!(
        arms = flake.num_arms(),
        spikes = flake.num_spikes(),
        points = flake.path().len(),
        "snowflake ready"
    );
    Ok(flake)
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}

fn print_info(flake: &Snowflake) {
    let options = flake.options();
    println!("Arms:           {}", flake.num_arms());
    println!("Arm length:     {}", options.arm_length);
    println!("Arm thickness:  {}", options.arm_thickness);
    println!("Spikes per arm: {}", flake.num_spikes());
    println!("Spacer:         {}", options.spacer);
    println!("Gap size:       {:.3}", flake.gap_size());
    println!("Points per arm: {}", flake.points_per_arm());
    println!("Total points:   {}", flake.path().len());
    if let Some((min, max)) = flake.path().bounds() {
        println!(
            "Bounds:         ({:.2}, {:.2}) .. ({:.2}, {:.2})",
            min.x, min.y, max.x, max.y
        );
    }
    for key in options.extra.keys() {
        println!("Ignored option: {}", key);
    }
}

fn parse_origin(s: &str) -> std::result::Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}
