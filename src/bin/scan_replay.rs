use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use code_scanner::backend::OpenCvDecoder;
use code_scanner::{HeadlessDisplay, ImageSequence, PipelineDriver, ScannerConfig};

#[derive(Parser)]
#[command(
    name = "scan_replay",
    version,
    about = "Replay a directory of images through the scanning pipeline"
)]
struct Cli {
    /// Directory of frames (png, jpg, jpeg, gif, bmp), played in path order
    #[arg(long)]
    dir: PathBuf,
    /// Write annotated frames here
    #[arg(long)]
    out: Option<PathBuf>,
    /// Stop after this many frames
    #[arg(long)]
    limit: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let source = ImageSequence::open(&cli.dir, cli.limit)
        .with_context(|| format!("cannot replay {}", cli.dir.display()))?;
    let decoder = OpenCvDecoder::new().context("failed to create decoders")?;
    let display = match &cli.out {
        Some(dir) => HeadlessDisplay::writing_to(dir)
            .with_context(|| format!("cannot write frames to {}", dir.display()))?,
        None => HeadlessDisplay::new(),
    };

    let summary = PipelineDriver::new(source, decoder, display, ScannerConfig::default())
        .run(&mut io::stdout().lock())?;
    log::info!("replayed {} frames", summary.frames);
    Ok(())
}
