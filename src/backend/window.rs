use std::time::Duration;

use opencv::highgui;

use super::frame_to_mat;
use crate::Frame;
use crate::display::RenderTarget;
use crate::error::{Result, ScanError};

/// HighGUI window; the quit key is read while the window has focus
pub struct OpenCvWindow {
    quit_key: char,
}

impl OpenCvWindow {
    /// Create a window target that quits on `quit_key`
    pub fn new(quit_key: char) -> Self {
        Self { quit_key }
    }
}

impl RenderTarget for OpenCvWindow {
    fn show(&mut self, title: &str, frame: &Frame) -> Result<()> {
        let mat = frame_to_mat(frame)?;
        highgui::imshow(title, &mat).map_err(|err| ScanError::Render(err.to_string()))
    }

    fn poll_quit(&mut self, timeout: Duration) -> bool {
        // wait_key(0) blocks indefinitely, so always wait at least 1 ms
        let delay = timeout.as_millis().clamp(1, i32::MAX as u128) as i32;
        match highgui::wait_key(delay) {
            Ok(key) if key >= 0 => char::from((key & 0xFF) as u8) == self.quit_key,
            Ok(_) => false,
            Err(err) => {
                log::warn!("wait_key failed: {err}");
                false
            }
        }
    }

    fn close(&mut self) {
        if let Err(err) = highgui::destroy_all_windows() {
            log::warn!("failed to close windows: {err}");
        }
    }
}
