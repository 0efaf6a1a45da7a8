mod assemble;
mod config;
mod input;
mod logging;
mod model;
mod pipeline;
mod render;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{DEFAULT_CONFIG_PATH, PlateMapConfig};
use crate::pipeline::{PipelineError, RunOptions};
use crate::render::ColorMode;

/// Render probe-order plate maps, flagging wells whose locus is filtered out.
#[derive(Debug, Parser)]
#[command(name = "kira-platemap", version, about)]
struct Cli {
    /// Probe order file with plate and well locations (tab-delimited).
    probe_file: PathBuf,
    /// File listing the loci to remove from the blend (first column).
    filter_file: PathBuf,
    /// Output directory [default: <probe file without extension>/].
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Draw the removed loci dark instead of the kept ones.
    #[arg(short, long)]
    keep: bool,
    /// Also write a debug trace to a log file.
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_missing_value = logging::DEFAULT_DEBUG_LOG
    )]
    debug: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = logging::init(cli.debug.as_deref()) {
        eprintln!("cannot open debug log: {err}");
        std::process::exit(1);
    }
    if let Err(err) = run(&cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), PipelineError> {
    tracing::info!("reading configuration file: {}", cli.config.display());
    let config = PlateMapConfig::load(&cli.config)?;

    let options = RunOptions {
        probe_file: cli.probe_file.clone(),
        filter_file: cli.filter_file.clone(),
        out_dir: resolve_output_dir(cli.output.as_deref(), &cli.probe_file),
        config,
        color_mode: ColorMode::from_keep_flag(cli.keep),
        system_fonts: true,
    };
    let summary = pipeline::run(&options)?;
    for (plate, removed) in &summary.removed_loci {
        tracing::debug!(plate = %plate, removed, "loci removed");
    }
    Ok(())
}

/// Explicit `--output`, otherwise the probe file path without its extension.
fn resolve_output_dir(output: Option<&Path>, probe_file: &Path) -> PathBuf {
    match output {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => probe_file.with_file_name(pipeline::probe_file_stem(probe_file)),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
