use std::fmt;

/// Optical code family reported by the decoding engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolType {
    /// EAN-2 add-on
    Ean2,
    /// EAN-5 add-on
    Ean5,
    /// EAN-8
    Ean8,
    /// UPC-E
    UpcE,
    /// ISBN-10 (from EAN-13)
    Isbn10,
    /// UPC-A
    UpcA,
    /// EAN-13
    Ean13,
    /// ISBN-13 (from EAN-13)
    Isbn13,
    /// Composite of linear and stacked components
    Composite,
    /// Interleaved 2 of 5
    I25,
    /// GS1 DataBar
    DataBar,
    /// GS1 DataBar Expanded
    DataBarExp,
    /// Codabar
    Codabar,
    /// Code 39
    Code39,
    /// PDF417 stacked code
    Pdf417,
    /// QR code
    QrCode,
    /// SQ code
    SqCode,
    /// Code 93
    Code93,
    /// Code 128
    Code128,
    /// Aztec code
    Aztec,
    /// Any tag the engine reports that is not listed above
    Unknown(String),
}

impl SymbolType {
    /// Every known family, in engine order
    pub const ALL: [SymbolType; 20] = [
        SymbolType::Ean2,
        SymbolType::Ean5,
        SymbolType::Ean8,
        SymbolType::UpcE,
        SymbolType::Isbn10,
        SymbolType::UpcA,
        SymbolType::Ean13,
        SymbolType::Isbn13,
        SymbolType::Composite,
        SymbolType::I25,
        SymbolType::DataBar,
        SymbolType::DataBarExp,
        SymbolType::Codabar,
        SymbolType::Code39,
        SymbolType::Pdf417,
        SymbolType::QrCode,
        SymbolType::SqCode,
        SymbolType::Code93,
        SymbolType::Code128,
        SymbolType::Aztec,
    ];

    /// Parse an engine tag. Never fails: unrecognised tags become `Unknown`.
    ///
    /// Matching ignores case and the separators `_`, `-` and space, so
    /// `EAN_13`, `ean-13` and `EAN13` are all [`SymbolType::Ean13`].
    pub fn from_tag(tag: &str) -> Self {
        let normalized: String = tag
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match normalized.as_str() {
            "EAN2" => SymbolType::Ean2,
            "EAN5" => SymbolType::Ean5,
            "EAN8" => SymbolType::Ean8,
            "UPCE" => SymbolType::UpcE,
            "ISBN10" => SymbolType::Isbn10,
            "UPCA" => SymbolType::UpcA,
            "EAN13" => SymbolType::Ean13,
            "ISBN13" => SymbolType::Isbn13,
            "COMPOSITE" => SymbolType::Composite,
            "I25" => SymbolType::I25,
            "DATABAR" => SymbolType::DataBar,
            "DATABAREXP" => SymbolType::DataBarExp,
            "CODABAR" => SymbolType::Codabar,
            "CODE39" => SymbolType::Code39,
            "PDF417" => SymbolType::Pdf417,
            "QRCODE" | "QR" => SymbolType::QrCode,
            "SQCODE" => SymbolType::SqCode,
            "CODE93" => SymbolType::Code93,
            "CODE128" => SymbolType::Code128,
            "AZTEC" => SymbolType::Aztec,
            _ => SymbolType::Unknown(tag.trim().to_string()),
        }
    }

    /// Canonical tag as printed in scan lines and labels
    pub fn tag(&self) -> &str {
        match self {
            SymbolType::Ean2 => "EAN2",
            SymbolType::Ean5 => "EAN5",
            SymbolType::Ean8 => "EAN8",
            SymbolType::UpcE => "UPCE",
            SymbolType::Isbn10 => "ISBN10",
            SymbolType::UpcA => "UPCA",
            SymbolType::Ean13 => "EAN13",
            SymbolType::Isbn13 => "ISBN13",
            SymbolType::Composite => "COMPOSITE",
            SymbolType::I25 => "I25",
            SymbolType::DataBar => "DATABAR",
            SymbolType::DataBarExp => "DATABAR_EXP",
            SymbolType::Codabar => "CODABAR",
            SymbolType::Code39 => "CODE39",
            SymbolType::Pdf417 => "PDF417",
            SymbolType::QrCode => "QRCODE",
            SymbolType::SqCode => "SQCODE",
            SymbolType::Code93 => "CODE93",
            SymbolType::Code128 => "CODE128",
            SymbolType::Aztec => "AZTEC",
            SymbolType::Unknown(tag) => tag,
        }
    }

    /// Check if this is a tag outside the known families
    pub fn is_unknown(&self) -> bool {
        matches!(self, SymbolType::Unknown(_))
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
