//! Per-frame scanning loop
//!
//! One iteration: read a frame, measure the frame rate, decode, register new
//! codes, annotate, draw the HUD, present, and poll for quit. Everything runs
//! on the calling thread; the quit poll is the only wait besides the frame
//! read itself.

use std::io::Write;
use std::time::Instant;

use crate::annotate::FrameAnnotator;
use crate::config::ScannerConfig;
use crate::decoder::{SymbolDecoder, SymbolSet, retain_enabled};
use crate::dedup::DedupRegistry;
use crate::display::RenderTarget;
use crate::error::Result;
use crate::hud::{HudOverlay, instantaneous_fps};
use crate::source::FrameSource;
use crate::style::StyleTable;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The source has no more frames (end of stream or device failure)
    EndOfStream,
    /// The quit key was pressed
    QuitRequested,
    /// The render target rejected a frame
    DisplayFailed,
}

/// Driver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Processing frames
    Running,
    /// Terminal
    Stopped(StopReason),
}

/// Counters owned by the driver
#[derive(Debug, Clone, Copy)]
pub struct SessionStats {
    /// Distinct codes seen this session
    pub scan_count: usize,
    /// Frames processed
    pub frames: u64,
    /// When the previous frame was taken
    pub last_frame_timestamp: Instant,
}

/// Final report of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Distinct codes seen
    pub scan_count: usize,
    /// Frames processed
    pub frames: u64,
    /// Why the session ended
    pub reason: StopReason,
}

/// Owns the collaborators and all per-session state
pub struct PipelineDriver<S, D, R> {
    source: S,
    decoder: D,
    display: R,
    config: ScannerConfig,
    active: SymbolSet,
    registry: DedupRegistry,
    annotator: FrameAnnotator,
    hud: HudOverlay,
    stats: SessionStats,
    state: PipelineState,
}

impl<S, D, R> PipelineDriver<S, D, R>
where
    S: FrameSource,
    D: SymbolDecoder,
    R: RenderTarget,
{
    /// Start a session over an already opened source
    ///
    /// Only families that are both enabled and supported by `decoder` are
    /// decoded.
    pub fn new(source: S, decoder: D, display: R, config: ScannerConfig) -> Self {
        let active = config.enabled.intersection(&decoder.supported());
        if active.len() < config.enabled.len() {
            log::debug!(
                "engine decodes {} of {} enabled families",
                active.len(),
                config.enabled.len()
            );
        }
        Self {
            source,
            decoder,
            display,
            config,
            active,
            registry: DedupRegistry::new(),
            annotator: FrameAnnotator::new(StyleTable::new()),
            hud: HudOverlay::new(),
            stats: SessionStats {
                scan_count: 0,
                frames: 0,
                last_frame_timestamp: Instant::now(),
            },
            state: PipelineState::Running,
        }
    }

    /// Replace the colour table
    pub fn with_style(mut self, style: StyleTable) -> Self {
        self.annotator = FrameAnnotator::new(style);
        self
    }

    /// Families passed to the decoder each frame
    pub fn active_symbols(&self) -> &SymbolSet {
        &self.active
    }

    /// Current state
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Session counters
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Codes seen so far
    pub fn registry(&self) -> &DedupRegistry {
        &self.registry
    }

    /// Run one iteration, writing a scan line to `out` for each new code
    ///
    /// Does nothing once the driver has stopped.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<PipelineState> {
        if let PipelineState::Stopped(_) = self.state {
            return Ok(self.state);
        }

        let Some(mut frame) = self.source.read() else {
            return Ok(self.stop(StopReason::EndOfStream));
        };

        let now = Instant::now();
        let fps = instantaneous_fps(now.saturating_duration_since(self.stats.last_frame_timestamp));
        self.stats.last_frame_timestamp = now;
        self.stats.frames += 1;

        let codes = retain_enabled(self.decoder.decode(&frame, &self.active), &self.active);
        log::trace!(
            "frame {}: {}x{}, {} codes, {:.1} fps",
            self.stats.frames,
            frame.width(),
            frame.height(),
            codes.len(),
            fps
        );

        for code in &codes {
            let registration = self.registry.register(&code.symbol, &code.payload);
            if registration.is_new {
                self.stats.scan_count += 1;
                writeln!(
                    out,
                    "[{:03}] [{}] {}",
                    registration.ordinal,
                    code.symbol,
                    code.text()
                )?;
            }
        }

        self.annotator.annotate(&mut frame, &codes);
        self.hud.render(&mut frame, fps, self.stats.scan_count);

        if let Err(err) = self.display.show(&self.config.window_title, &frame) {
            log::error!("{err}");
            return Ok(self.stop(StopReason::DisplayFailed));
        }
        if self.display.poll_quit(self.config.poll_timeout) {
            return Ok(self.stop(StopReason::QuitRequested));
        }
        Ok(self.state)
    }

    /// Loop until stopped, release the collaborators and write the summary
    pub fn run<W: Write>(mut self, out: &mut W) -> Result<SessionSummary> {
        let outcome = loop {
            match self.step(out) {
                Ok(PipelineState::Running) => continue,
                Ok(PipelineState::Stopped(reason)) => break Ok(reason),
                Err(err) => break Err(err),
            }
        };

        self.source.close();
        self.display.close();
        let reason = outcome?;

        writeln!(out)?;
        writeln!(
            out,
            "Session ended. Total unique codes scanned: {}",
            self.stats.scan_count
        )?;
        log::info!(
            "session ended after {} frames ({reason:?})",
            self.stats.frames
        );

        Ok(SessionSummary {
            scan_count: self.stats.scan_count,
            frames: self.stats.frames,
            reason,
        })
    }

    fn stop(&mut self, reason: StopReason) -> PipelineState {
        log::debug!("pipeline stopping: {reason:?}");
        self.state = PipelineState::Stopped(reason);
        self.state
    }
}
