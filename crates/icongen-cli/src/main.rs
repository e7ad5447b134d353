use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use icongen::{AttributeCasing, Config};

#[derive(Debug, Parser)]
#[command(
    name = "icongen",
    version,
    about = "Generate React icon components from paired SVG sources"
)]
struct Args {
    /// Icon source root holding Outline/ and Filled/ subdirectories
    #[arg(short, long, value_name = "DIR")]
    icons: PathBuf,
    /// Output directory for generated modules and the manifest
    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,
    /// Skip pruning of redundant nodes
    #[arg(long)]
    no_optimize: bool,
    /// Attribute key casing in generated source
    #[arg(long, value_enum, default_value = "camel")]
    casing: CasingArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CasingArg {
    Camel,
    Kebab,
}

impl From<CasingArg> for AttributeCasing {
    fn from(value: CasingArg) -> Self {
        match value {
            CasingArg::Camel => Self::Camel,
            CasingArg::Kebab => Self::Kebab,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    match run() {
        Ok(failed) if failed == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run the batch and return the number of failed icons
fn run() -> Result<usize> {
    let args = Args::parse();
    let config = Config {
        apply_optimization: !args.no_optimize,
        attribute_casing: args.casing.into(),
    };

    info!(
        icons = %args.icons.display(),
        output = %args.output.display(),
        "generating icon components"
    );

    let summary = icongen::generate_icons(&args.icons, &args.output, &config)
        .context("icon generation failed")?;

    info!(
        generated = summary.generated.len(),
        failed = summary.failed.len(),
        "done"
    );
    for (base_name, err) in &summary.failed {
        warn!(icon = %base_name, "failed: {err}");
    }

    Ok(summary.failed.len())
}
