//! Per-code annotation: outline, label background and label text

use image::Rgb;

use crate::Frame;
use crate::models::DecodedCode;
use crate::render::{draw_polygon, draw_text, fill_rect, text_size};
use crate::style::StyleTable;

/// Outline stroke width in pixels
pub const STROKE_WIDTH: u32 = 3;
/// Label text scale (font pixels per frame pixel)
pub const LABEL_SCALE: u32 = 2;
/// Maximum payload characters shown in a label
pub const LABEL_MAX_CHARS: usize = 40;
/// Label text colour, drawn over the family colour
pub const LABEL_TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Extra background width around the label text
const LABEL_PAD_X: i32 = 6;
/// Extra background height around the label text
const LABEL_PAD_Y: i32 = 10;
/// Text inset from the left of the background
const TEXT_INSET_X: i32 = 3;
/// Text baseline offset above the code's bounding box
const TEXT_RAISE: i32 = 5;

/// Label text for a code: `"{type}: {payload}"`, payload cut to 40 characters
pub fn label_for(code: &DecodedCode) -> String {
    let text: String = code.text().chars().take(LABEL_MAX_CHARS).collect();
    format!("{}: {}", code.symbol, text)
}

/// Draws decoded codes onto a frame
#[derive(Debug, Clone, Default)]
pub struct FrameAnnotator {
    style: StyleTable,
}

impl FrameAnnotator {
    /// Create an annotator using the given colours
    pub fn new(style: StyleTable) -> Self {
        Self { style }
    }

    /// Colour table in use
    pub fn style(&self) -> &StyleTable {
        &self.style
    }

    /// Annotate every code in decoder order; later codes draw on top.
    pub fn annotate(&self, frame: &mut Frame, codes: &[DecodedCode]) {
        for code in codes {
            self.annotate_one(frame, code);
        }
    }

    fn annotate_one(&self, frame: &mut Frame, code: &DecodedCode) {
        let color = self.style.color_for(&code.symbol);
        draw_polygon(frame, &code.polygon, color, STROKE_WIDTH);

        // The label sits directly above the bounding box. Near the top edge it
        // is clipped at the frame boundary rather than moved.
        let label = label_for(code);
        let (tw, th) = text_size(&label, LABEL_SCALE);
        let (rx, ry) = (code.rect.x, code.rect.y);
        fill_rect(
            frame,
            rx,
            ry.saturating_sub(th as i32).saturating_sub(LABEL_PAD_Y),
            rx.saturating_add(tw as i32).saturating_add(LABEL_PAD_X),
            ry,
            color,
        );
        draw_text(
            frame,
            rx.saturating_add(TEXT_INSET_X),
            ry.saturating_sub(TEXT_RAISE),
            &label,
            LABEL_TEXT_COLOR,
            LABEL_SCALE,
        );
    }
}
