//! # adapter
//!
//! Generates vacuum-cleaner style tube adapters as STL files.
//!
//! # Commands
//!
//! - `adapter body <D1> <D2>` - adapter joining tubes of outer diameter D1 and D2
//! - `adapter collars <D1> <D2>` - the two insert collars for the same tubes
//!
//! Logging follows `RUST_LOG`; `-v` raises the default level to debug.

mod generate;

use std::path::PathBuf;

use adapter_mesh::StlFormat;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use config::settings::TextMode;
use tracing_subscriber::EnvFilter;

/// Tube adapter generator
#[derive(Parser)]
#[command(name = "adapter")]
#[command(about = "Parametric tube adapters for 3D printing", long_about = None)]
#[command(version)]
struct Cli {
    /// More log output (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the adapter body
    Body {
        #[command(flatten)]
        common: CommonArgs,

        /// Length of each straight tube
        #[arg(short, long, default_value_t = 30.0)]
        length: f64,

        /// Also write an SVG of the axial cross-section to this path
        #[arg(long, value_name = "SVG")]
        section: Option<PathBuf>,
    },

    /// Build the two insert collars
    Collars {
        #[command(flatten)]
        common: CommonArgs,

        /// Collar length
        #[arg(short, long, default_value_t = 10.0)]
        length: f64,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Outer diameter of the first tube
    #[arg(name = "D1")]
    base_diameter: f64,

    /// Outer diameter of the second tube
    #[arg(name = "D2")]
    top_diameter: f64,

    /// Wall thickness
    #[arg(short, long, default_value_t = 2.0)]
    thickness: f64,

    /// Points per ring
    #[arg(short, long)]
    segments: Option<u32>,

    /// Radial depth of the lettering
    #[arg(long)]
    relief_depth: Option<f64>,

    /// Lettering: none, emboss or engrave
    #[arg(long)]
    text: Option<TextMode>,

    /// TrueType font for the lettering; block glyphs without it
    #[arg(long, value_name = "TTF")]
    font: Option<PathBuf>,

    /// STL flavour: ascii or binary
    #[arg(long, default_value_t = StlFormat::Binary)]
    format: StlFormat,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Body {
            common,
            length,
            section,
        } => generate::body(&common, length, section.as_deref()),
        Commands::Collars { common, length } => generate::collars(&common, length),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
