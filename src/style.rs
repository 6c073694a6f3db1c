//! Per-family display colours

use image::Rgb;

use crate::models::SymbolType;

/// Colour used for any family without its own entry
pub const DEFAULT_COLOR: Rgb<u8> = Rgb([255, 200, 0]);

/// Immutable family -> colour table, fixed at startup
#[derive(Debug, Clone)]
pub struct StyleTable {
    colors: Vec<(SymbolType, Rgb<u8>)>,
    fallback: Rgb<u8>,
}

impl StyleTable {
    /// Built-in palette, one colour per common family
    pub fn new() -> Self {
        Self::with_colors(
            vec![
                (SymbolType::QrCode, Rgb([0, 255, 0])),
                (SymbolType::Ean13, Rgb([0, 100, 255])),
                (SymbolType::Ean8, Rgb([0, 180, 255])),
                (SymbolType::UpcA, Rgb([255, 180, 0])),
                (SymbolType::UpcE, Rgb([255, 120, 0])),
                (SymbolType::Code128, Rgb([255, 0, 200])),
                (SymbolType::Code39, Rgb([200, 0, 255])),
                (SymbolType::Code93, Rgb([100, 0, 255])),
                (SymbolType::I25, Rgb([200, 255, 0])),
                (SymbolType::DataBar, Rgb([0, 220, 255])),
                (SymbolType::Pdf417, Rgb([255, 100, 100])),
                (SymbolType::Aztec, Rgb([100, 200, 0])),
                (SymbolType::Codabar, Rgb([0, 255, 180])),
            ],
            DEFAULT_COLOR,
        )
    }

    /// Custom table
    pub fn with_colors(colors: Vec<(SymbolType, Rgb<u8>)>, fallback: Rgb<u8>) -> Self {
        Self { colors, fallback }
    }

    /// Colour for a family, or the fallback for families without an entry
    pub fn color_for(&self, symbol: &SymbolType) -> Rgb<u8> {
        self.colors
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, c)| *c)
            .unwrap_or(self.fallback)
    }

    /// Colour for a raw engine tag
    pub fn color_for_tag(&self, tag: &str) -> Rgb<u8> {
        self.color_for(&SymbolType::from_tag(tag))
    }

    /// Fallback colour
    pub fn fallback(&self) -> Rgb<u8> {
        self.fallback
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}
