use super::{PointI, Rect, SymbolType};

/// One code found in one frame
///
/// Produced fresh by the decoder for every frame; only its [`SeenKey`]
/// outlives the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCode {
    /// Raw decoded bytes
    pub payload: Vec<u8>,
    /// Code family
    pub symbol: SymbolType,
    /// Closed outline in frame coordinates, in engine order
    pub polygon: Vec<PointI>,
    /// Axis-aligned bounding box
    pub rect: Rect,
}

impl DecodedCode {
    /// Create a decoded code, deriving the bounding box from the polygon
    pub fn new(symbol: SymbolType, payload: impl Into<Vec<u8>>, polygon: Vec<PointI>) -> Self {
        let rect = Rect::from_points(&polygon);
        Self {
            payload: payload.into(),
            symbol,
            polygon,
            rect,
        }
    }

    /// Payload as text; each invalid UTF-8 sequence becomes U+FFFD
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }

    /// Deduplication identity of this code
    pub fn key(&self) -> SeenKey {
        SeenKey {
            symbol: self.symbol.clone(),
            payload: self.payload.clone(),
        }
    }
}

/// (type, payload) pair identifying one logical code within a session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeenKey {
    /// Code family
    pub symbol: SymbolType,
    /// Raw payload bytes
    pub payload: Vec<u8>,
}

impl SeenKey {
    /// Create a new key
    pub fn new(symbol: SymbolType, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            symbol,
            payload: payload.into(),
        }
    }
}
