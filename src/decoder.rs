//! Boundary to the multi-symbol decoding engine

use std::collections::BTreeSet;

use crate::Frame;
use crate::models::{DecodedCode, SymbolType};

/// Families never passed to the engine
///
/// Composite symbols overlap the linear codes they are built from, and the
/// stacked PDF417 reader reports partial reads of the same physical code.
pub const DISABLED_SYMBOLS: [SymbolType; 2] = [SymbolType::Composite, SymbolType::Pdf417];

/// Ordered set of symbol families
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolSet(BTreeSet<SymbolType>);

impl SymbolSet {
    /// Every known family
    pub fn all() -> Self {
        Self(SymbolType::ALL.iter().cloned().collect())
    }

    /// Copy of this set without the given families
    pub fn without(&self, excluded: &[SymbolType]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|s| !excluded.contains(s))
                .cloned()
                .collect(),
        )
    }

    /// Families present in both sets
    pub fn intersection(&self, other: &SymbolSet) -> Self {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Check membership
    pub fn contains(&self, symbol: &SymbolType) -> bool {
        self.0.contains(symbol)
    }

    /// Check if a decoded family may be reported
    ///
    /// Engine tags outside the known families cannot be disabled by name and
    /// are always permitted.
    pub fn permits(&self, symbol: &SymbolType) -> bool {
        symbol.is_unknown() || self.contains(symbol)
    }

    /// Number of families
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Families in engine order
    pub fn iter(&self) -> impl Iterator<Item = &SymbolType> {
        self.0.iter()
    }
}

impl FromIterator<SymbolType> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = SymbolType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// All known families except [`DISABLED_SYMBOLS`]
pub fn enabled_symbols() -> SymbolSet {
    SymbolSet::all().without(&DISABLED_SYMBOLS)
}

/// Drop results whose family is not enabled, keeping engine order
pub fn retain_enabled(codes: Vec<DecodedCode>, enabled: &SymbolSet) -> Vec<DecodedCode> {
    codes
        .into_iter()
        .filter(|code| {
            let keep = enabled.permits(&code.symbol);
            if !keep {
                log::trace!("dropping {} result: family not enabled", code.symbol);
            }
            keep
        })
        .collect()
}

/// Multi-symbol decoding engine
///
/// Decoding never fails; a frame without codes yields an empty vector.
pub trait SymbolDecoder {
    /// Find and decode every visible code of an enabled family, in engine order
    fn decode(&mut self, frame: &Frame, enabled: &SymbolSet) -> Vec<DecodedCode>;

    /// Families this engine can decode
    fn supported(&self) -> SymbolSet {
        SymbolSet::all()
    }
}

impl<T: SymbolDecoder + ?Sized> SymbolDecoder for Box<T> {
    fn decode(&mut self, frame: &Frame, enabled: &SymbolSet) -> Vec<DecodedCode> {
        (**self).decode(frame, enabled)
    }

    fn supported(&self) -> SymbolSet {
        (**self).supported()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PointI;

    #[test]
    fn test_enabled_excludes_disabled_families() {
        let enabled = enabled_symbols();
        assert_eq!(enabled.len(), SymbolType::ALL.len() - DISABLED_SYMBOLS.len());
        assert!(!enabled.contains(&SymbolType::Composite));
        assert!(!enabled.contains(&SymbolType::Pdf417));
        assert!(enabled.contains(&SymbolType::QrCode));
        assert!(enabled.contains(&SymbolType::Code128));
    }

    #[test]
    fn test_intersection_with_engine_support() {
        let supported: SymbolSet = [SymbolType::QrCode, SymbolType::Pdf417, SymbolType::Ean13]
            .into_iter()
            .collect();
        let active = enabled_symbols().intersection(&supported);
        assert_eq!(active.len(), 2);
        assert!(active.contains(&SymbolType::QrCode));
        assert!(active.contains(&SymbolType::Ean13));
        assert!(!active.contains(&SymbolType::Pdf417));
    }

    #[test]
    fn test_iteration_follows_engine_order() {
        let order: Vec<_> = enabled_symbols().iter().take(3).cloned().collect();
        assert_eq!(order, vec![SymbolType::Ean2, SymbolType::Ean5, SymbolType::Ean8]);
    }

    #[test]
    fn test_retain_enabled_keeps_order_and_unknown_tags() {
        let codes = vec![
            DecodedCode::new(SymbolType::Code128, "1", vec![PointI::new(0, 0)]),
            DecodedCode::new(SymbolType::Pdf417, "2", vec![PointI::new(0, 0)]),
            DecodedCode::new(SymbolType::from_tag("UPC_EAN_EXTENSION"), "3", Vec::new()),
            DecodedCode::new(SymbolType::QrCode, "4", vec![PointI::new(0, 0)]),
        ];
        let kept: Vec<_> = retain_enabled(codes, &enabled_symbols())
            .into_iter()
            .map(|c| c.text())
            .collect();
        assert_eq!(kept, vec!["1", "3", "4"]);
    }
}
