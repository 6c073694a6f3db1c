//! Session configuration
//!
//! Everything is fixed at compile time; there are no flags, files or
//! environment overrides for the live scanner.

use std::time::Duration;

use crate::decoder::{SymbolSet, enabled_symbols};

/// Camera device opened by the live scanner
pub const DEFAULT_DEVICE_INDEX: i32 = 0;
/// Requested capture width
pub const DEFAULT_FRAME_WIDTH: u32 = 1280;
/// Requested capture height
pub const DEFAULT_FRAME_HEIGHT: u32 = 720;
/// Display window title
pub const DEFAULT_WINDOW_TITLE: &str = "QR / Barcode Reader  [q = quit]";
/// Key that ends the session while the window has focus
pub const DEFAULT_QUIT_KEY: char = 'q';
/// Bounded wait for the quit key on every frame
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_millis(1);

/// Settings for one scanning session
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Camera device index
    pub device_index: i32,
    /// Capture width hint
    pub frame_width: u32,
    /// Capture height hint
    pub frame_height: u32,
    /// Title of the display window
    pub window_title: String,
    /// Quit key
    pub quit_key: char,
    /// Per-frame quit poll timeout
    pub poll_timeout: Duration,
    /// Symbol families passed to the decoder
    pub enabled: SymbolSet,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            device_index: DEFAULT_DEVICE_INDEX,
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            quit_key: DEFAULT_QUIT_KEY,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            enabled: enabled_symbols(),
        }
    }
}
