/// Decoded codes and their dedup identity
pub mod decoded;
/// Integer points and bounding boxes
pub mod point;
/// Symbol family tags
pub mod symbol;

pub use decoded::{DecodedCode, SeenKey};
pub use point::{PointI, Rect};
pub use symbol::SymbolType;
