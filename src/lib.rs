//! code_scanner - live QR and barcode scanning pipeline
//!
//! Pulls frames from a [`FrameSource`], hands them to a [`SymbolDecoder`],
//! keeps a session-wide registry of distinct codes, and presents each frame
//! annotated with per-code outlines and labels plus a status bar showing the
//! frame rate and the number of unique codes scanned.
//!
//! The camera, the decoding engine and the window are collaborators behind
//! traits. With the `opencv` feature enabled, [`backend`] provides all three.
//!
//! # Example
//! ```
//! use code_scanner::{
//!     DecodedCode, Frame, HeadlessDisplay, PipelineDriver, ScannerConfig, SymbolDecoder,
//!     SymbolSet, FrameSource,
//! };
//!
//! struct Blank(usize);
//! impl FrameSource for Blank {
//!     fn read(&mut self) -> Option<Frame> {
//!         self.0 = self.0.checked_sub(1)?;
//!         Some(Frame::new(320, 240))
//!     }
//! }
//!
//! struct Nothing;
//! impl SymbolDecoder for Nothing {
//!     fn decode(&mut self, _: &Frame, _: &SymbolSet) -> Vec<DecodedCode> {
//!         Vec::new()
//!     }
//! }
//!
//! let driver = PipelineDriver::new(Blank(3), Nothing, HeadlessDisplay::new(), ScannerConfig::default());
//! let mut out = Vec::new();
//! let summary = driver.run(&mut out).unwrap();
//! assert_eq!(summary.frames, 3);
//! assert_eq!(summary.scan_count, 0);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Per-code outlines and labels
pub mod annotate;
/// OpenCV camera, decoder and window
#[cfg(feature = "opencv")]
pub mod backend;
/// Session settings
pub mod config;
/// Decoding engine boundary and symbol sets
pub mod decoder;
/// Session-wide duplicate suppression
pub mod dedup;
/// Presentation boundary
pub mod display;
/// Error type
pub mod error;
/// Status bar and frame rate
pub mod hud;
/// Core data structures (DecodedCode, SymbolType, PointI, etc.)
pub mod models;
/// Per-frame loop and session state
pub mod pipeline;
/// Drawing primitives and bitmap font
pub mod render;
/// Frame source boundary and directory replay
pub mod source;
/// Family colours
pub mod style;

/// A frame as produced by the source and drawn on by the pipeline
pub type Frame = image::RgbImage;

pub use annotate::{FrameAnnotator, label_for};
pub use config::ScannerConfig;
pub use decoder::{DISABLED_SYMBOLS, SymbolDecoder, SymbolSet, enabled_symbols};
pub use dedup::{DedupRegistry, Registration};
pub use display::{HeadlessDisplay, RenderTarget};
pub use error::{Result, ScanError};
pub use hud::{HudOverlay, instantaneous_fps};
pub use models::{DecodedCode, PointI, Rect, SeenKey, SymbolType};
pub use pipeline::{PipelineDriver, PipelineState, SessionStats, SessionSummary, StopReason};
pub use source::{FrameSource, ImageSequence};
pub use style::StyleTable;
