use opencv::core::{Point2f, Vector};
use opencv::objdetect::{BarcodeDetector, QRCodeDetector};
use opencv::prelude::*;

use super::frame_to_mat;
use crate::Frame;
use crate::decoder::{SymbolDecoder, SymbolSet};
use crate::error::Result;
use crate::models::{DecodedCode, PointI, SymbolType};

/// Linear families the barcode detector can report
const LINEAR: [SymbolType; 4] = [
    SymbolType::Ean8,
    SymbolType::Ean13,
    SymbolType::UpcA,
    SymbolType::UpcE,
];

/// QR and 1D barcode detection through OpenCV's objdetect module
pub struct OpenCvDecoder {
    qr: QRCodeDetector,
    barcode: BarcodeDetector,
}

impl OpenCvDecoder {
    /// Create both detectors
    pub fn new() -> Result<Self> {
        Ok(Self {
            qr: QRCodeDetector::default()?,
            barcode: BarcodeDetector::default()?,
        })
    }

    fn decode_qr(&self, mat: &Mat, out: &mut Vec<DecodedCode>) -> opencv::Result<()> {
        let mut decoded = Vector::<String>::new();
        let mut corners = Vector::<Point2f>::new();
        let mut straight = Vector::<Mat>::new();
        if !self
            .qr
            .detect_and_decode_multi(mat, &mut decoded, &mut corners, &mut straight)?
        {
            return Ok(());
        }
        for (i, payload) in decoded.iter().enumerate() {
            push_code(out, SymbolType::QrCode, payload, &corners, i);
        }
        Ok(())
    }

    fn decode_barcodes(&self, mat: &Mat, out: &mut Vec<DecodedCode>) -> opencv::Result<()> {
        let mut decoded = Vector::<String>::new();
        let mut types = Vector::<String>::new();
        let mut corners = Vector::<Point2f>::new();
        if !self
            .barcode
            .detect_and_decode_with_type(mat, &mut decoded, &mut types, &mut corners)?
        {
            return Ok(());
        }
        for (i, (payload, tag)) in decoded.iter().zip(types.iter()).enumerate() {
            push_code(out, SymbolType::from_tag(&tag), payload, &corners, i);
        }
        Ok(())
    }
}

/// Append the `index`th detection; detections without a payload were found
/// but not decoded and are skipped.
fn push_code(
    out: &mut Vec<DecodedCode>,
    symbol: SymbolType,
    payload: String,
    corners: &Vector<Point2f>,
    index: usize,
) {
    if payload.is_empty() {
        return;
    }
    let polygon: Vec<PointI> = (index * 4..index * 4 + 4)
        .filter_map(|i| corners.get(i).ok())
        .map(|p| PointI::new(p.x.round() as i32, p.y.round() as i32))
        .collect();
    out.push(DecodedCode::new(symbol, payload.into_bytes(), polygon));
}

impl SymbolDecoder for OpenCvDecoder {
    fn decode(&mut self, frame: &Frame, enabled: &SymbolSet) -> Vec<DecodedCode> {
        let mut codes = Vec::new();
        let mat = match frame_to_mat(frame) {
            Ok(mat) => mat,
            Err(err) => {
                log::warn!("frame conversion failed: {err}");
                return codes;
            }
        };

        if enabled.contains(&SymbolType::QrCode) {
            if let Err(err) = self.decode_qr(&mat, &mut codes) {
                log::warn!("QR detection failed: {err}");
            }
        }
        if LINEAR.iter().any(|s| enabled.contains(s)) {
            if let Err(err) = self.decode_barcodes(&mat, &mut codes) {
                log::warn!("barcode detection failed: {err}");
            }
        }
        codes
    }

    fn supported(&self) -> SymbolSet {
        std::iter::once(SymbolType::QrCode)
            .chain(LINEAR.iter().cloned())
            .collect()
    }
}
