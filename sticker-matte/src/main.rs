mod error;
mod matte;
mod sink;
mod source;

use anyhow::{Context, Result};
use clap::Parser;
use matte::{DarkBackgroundMatte, MatteStats};
use sink::PngFileSink;
use source::FileSource;
use std::ffi::OsString;
use std::path::PathBuf;

const DEFAULT_STICKER: &str = "client/public/compass_sticker.png";

#[derive(Parser, Debug)]
#[command(author, version, about = "Make the dark navy background of a sticker transparent", long_about = None)]
struct Args {
    /// Sticker image to read
    #[arg(default_value = DEFAULT_STICKER)]
    input: PathBuf,

    /// Where to write the PNG result
    /// If not provided, the input file is overwritten in place
    output: Option<PathBuf>,

    /// Anything past the first two paths is ignored, flag-like or not
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    extra: Vec<OsString>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| self.input.clone())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(&args)?;
    Ok(())
}

fn run(args: &Args) -> Result<MatteStats> {
    let output = args.output_path();

    tracing::info!("Sticker matte starting");
    tracing::info!("Input: {}", args.input.display());
    tracing::info!("Output: {}", output.display());
    if !args.extra.is_empty() {
        tracing::debug!("Ignoring {} extra argument(s)", args.extra.len());
    }

    let mut source = FileSource::new(&args.input);
    let mut sink = PngFileSink::new(&output);

    matte::remove_dark_background(&mut source, &DarkBackgroundMatte::new(), &mut sink)
        .context("Background removal failed")
}
