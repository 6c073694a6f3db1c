use std::io::{self, Write};

use anyhow::Context;
use code_scanner::backend::{OpenCvCamera, OpenCvDecoder, OpenCvWindow};
use code_scanner::{PipelineDriver, ScannerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ScannerConfig::default();
    let camera = OpenCvCamera::open(config.device_index, config.frame_width, config.frame_height)
        .context("cannot start scanner")?;
    let decoder = OpenCvDecoder::new().context("failed to create decoders")?;
    let quit_key = config.quit_key;
    let window = OpenCvWindow::new(quit_key);

    let driver = PipelineDriver::new(camera, decoder, window, config);

    let mut out = io::stdout().lock();
    writeln!(
        out,
        "QR / Barcode Reader started. Press '{}' to quit.",
        quit_key
    )?;
    writeln!(out, "Decoding {} symbol types.\n", driver.active_symbols().len())?;

    driver.run(&mut out)?;
    Ok(())
}
