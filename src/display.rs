//! Boundary to the window or other presentation surface

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::Frame;
use crate::error::Result;

/// Presentation surface for annotated frames
pub trait RenderTarget {
    /// Present a frame under the given window title
    fn show(&mut self, title: &str, frame: &Frame) -> Result<()>;

    /// Wait at most `timeout` for the quit signal
    fn poll_quit(&mut self, timeout: Duration) -> bool;

    /// Release the window
    fn close(&mut self) {}
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn show(&mut self, title: &str, frame: &Frame) -> Result<()> {
        (**self).show(title, frame)
    }

    fn poll_quit(&mut self, timeout: Duration) -> bool {
        (**self).poll_quit(timeout)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Windowless target: counts frames and optionally writes them as PNG files
#[derive(Debug, Default)]
pub struct HeadlessDisplay {
    out_dir: Option<PathBuf>,
    frames: u64,
}

impl HeadlessDisplay {
    /// Discard presented frames
    pub fn new() -> Self {
        Self::default()
    }

    /// Write every presented frame to `out_dir` as `frame_NNNNNN.png`
    pub fn writing_to(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        fs::create_dir_all(&out_dir)?;
        Ok(Self {
            out_dir: Some(out_dir),
            frames: 0,
        })
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderTarget for HeadlessDisplay {
    fn show(&mut self, _title: &str, frame: &Frame) -> Result<()> {
        if let Some(dir) = &self.out_dir {
            frame.save(dir.join(format!("frame_{:06}.png", self.frames)))?;
        }
        self.frames += 1;
        Ok(())
    }

    fn poll_quit(&mut self, _timeout: Duration) -> bool {
        false
    }
}
