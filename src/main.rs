use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use unlzw::{Framing, decompress_file};

#[derive(Parser)]
#[command(name = "unlzw", version)]
#[command(about = "Decompress a 12-bit LZW code stream", long_about = None)]
struct Cli {
    /// Compressed input file
    input: PathBuf,

    /// Decompressed output file (created or truncated)
    output: PathBuf,

    /// How the input stream ends
    #[arg(long, value_enum, default_value_t = FramingArg::Raw)]
    framing: FramingArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum FramingArg {
    /// Bare packed codes
    Raw,
    /// Packed codes followed by a single line feed
    LineTerminated,
}

impl From<FramingArg> for Framing {
    fn from(arg: FramingArg) -> Self {
        match arg {
            FramingArg::Raw => Framing::Raw,
            FramingArg::LineTerminated => Framing::LineTerminated,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let written = decompress_file(&cli.input, &cli.output, cli.framing.into()).with_context(|| {
        format!(
            "Failed to decompress {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    tracing::info!(bytes = written, output = %cli.output.display(), "decompressed");
    Ok(())
}
