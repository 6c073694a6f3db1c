//! Heads-up status bar: frame rate and unique scan count

use std::time::Duration;

use image::Rgb;

use crate::Frame;
use crate::render::{blend_rect, draw_text, text_size};

/// Height of the status bar in pixels
pub const BAR_HEIGHT: u32 = 40;
/// Status bar colour
pub const BAR_COLOR: Rgb<u8> = Rgb([20, 20, 20]);
/// Weight of the bar colour when blended over the frame
pub const BAR_OPACITY: f32 = 0.55;
/// Frame-rate label colour
pub const FPS_COLOR: Rgb<u8> = Rgb([180, 255, 0]);
/// Scan-count label colour
pub const COUNT_COLOR: Rgb<u8> = Rgb([255, 220, 0]);
/// Text scale for both labels
pub const HUD_TEXT_SCALE: u32 = 2;
/// Shortest elapsed time used for the frame rate
pub const MIN_ELAPSED_SECS: f64 = 1e-6;

const MARGIN_X: i32 = 10;
const BASELINE_Y: i32 = 27;

/// Frame rate from the time between two frames
///
/// Elapsed times below [`MIN_ELAPSED_SECS`] (including zero) are raised to
/// it, so the result is always finite and at most `1 / MIN_ELAPSED_SECS`.
pub fn instantaneous_fps(elapsed: Duration) -> f64 {
    1.0 / elapsed.as_secs_f64().max(MIN_ELAPSED_SECS)
}

/// Frame-rate label as drawn on the bar
pub fn fps_label(fps: f64) -> String {
    format!("FPS: {fps:5.1}")
}

/// Scan-count label as drawn on the bar
pub fn count_label(scan_count: usize) -> String {
    format!("Scanned: {scan_count}")
}

/// Draws the status bar
#[derive(Debug, Clone, Copy, Default)]
pub struct HudOverlay;

impl HudOverlay {
    /// Create an overlay
    pub fn new() -> Self {
        Self
    }

    /// Blend the bar across the top of the frame and draw both labels
    pub fn render(&self, frame: &mut Frame, fps: f64, scan_count: usize) {
        let width = frame.width() as i32;
        blend_rect(
            frame,
            0,
            0,
            width - 1,
            BAR_HEIGHT as i32 - 1,
            BAR_COLOR,
            BAR_OPACITY,
        );

        draw_text(
            frame,
            MARGIN_X,
            BASELINE_Y,
            &fps_label(fps),
            FPS_COLOR,
            HUD_TEXT_SCALE,
        );

        let count = count_label(scan_count);
        let (tw, _) = text_size(&count, HUD_TEXT_SCALE);
        draw_text(
            frame,
            width - tw as i32 - MARGIN_X,
            BASELINE_Y,
            &count,
            COUNT_COLOR,
            HUD_TEXT_SCALE,
        );
    }
}
