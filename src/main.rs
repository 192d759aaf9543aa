use std::{
    fs::{read_to_string, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use pmr_transformer::TransformOption;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Shortens yosys `$paramod` module names in a netlist JSON file.
#[derive(Parser, Debug)]
#[command(name = "paramod-rename", version, about, long_about = None)]
struct Args {
    /// Input netlist JSON file
    #[arg(short, long)]
    input: PathBuf,
    /// Output netlist JSON file
    #[arg(short, long)]
    output: PathBuf,
    /// JSON file holding rename options
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Top-level key of the module collection
    #[arg(long)]
    module_key: Option<String>,
    /// Prefix of the names to shorten
    #[arg(long)]
    prefix: Option<String>,
    /// Longest name segment kept, in characters
    #[arg(long)]
    max_segment_length: Option<usize>,
}

impl Args {
    fn options(&self) -> Result<TransformOption> {
        let file = match &self.config {
            Some(path) => read_options(path)?,
            None => TransformOption::default(),
        };

        Ok(file.merge(TransformOption {
            module_key: self.module_key.clone(),
            prefix: self.prefix.clone(),
            max_segment_length: self.max_segment_length,
        }))
    }
}

fn read_options(path: &Path) -> Result<TransformOption> {
    let content = read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

fn init_log() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("LOG"))
        .init();
}

fn main() -> Result<()> {
    init_log();

    let args = Args::parse();
    let options = args.options()?;

    println!(
        "[paramod-rename] input_file={}, output_file={}",
        args.input.display(),
        args.output.display()
    );
    debug!(?options, "rename options");

    let content = read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let output = pmr_transformer::transform(content, options)?;

    for rename in &output.renames {
        println!("{rename}");
    }

    write(&args.output, output.content)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("renaming completed successfully.");

    Ok(())
}
