//! Boundary to the frame producer

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Frame;
use crate::error::{Result, ScanError};

/// Producer of successive frames
pub trait FrameSource {
    /// Next frame, or `None` once the stream has ended or the device failed
    fn read(&mut self) -> Option<Frame>;

    /// Release the underlying device
    fn close(&mut self) {}
}

impl<T: FrameSource + ?Sized> FrameSource for Box<T> {
    fn read(&mut self) -> Option<Frame> {
        (**self).read()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Replays a directory tree of still images as a frame stream
///
/// Images are played in sorted path order. The first image that fails to
/// load ends the stream.
#[derive(Debug)]
pub struct ImageSequence {
    root: PathBuf,
    pending: VecDeque<PathBuf>,
}

impl ImageSequence {
    /// Collect images under `root`, keeping at most `limit` of them
    pub fn open<P: AsRef<Path>>(root: P, limit: Option<usize>) -> Result<Self> {
        let root = root.as_ref();
        let mut images = collect_images(root);
        images.sort();
        if let Some(limit) = limit {
            images.truncate(limit);
        }
        if images.is_empty() {
            return Err(ScanError::DeviceUnavailable {
                source_desc: root.display().to_string(),
            });
        }
        log::info!("replaying {} images from {}", images.len(), root.display());
        Ok(Self {
            root: root.to_path_buf(),
            pending: images.into(),
        })
    }

    /// Number of frames not yet read
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl FrameSource for ImageSequence {
    fn read(&mut self) -> Option<Frame> {
        let path = self.pending.pop_front()?;
        match image::open(&path) {
            Ok(img) => Some(img.to_rgb8()),
            Err(err) => {
                log::warn!("failed to load {}: {err}; ending stream", path.display());
                self.pending.clear();
                None
            }
        }
    }

    fn close(&mut self) {
        log::debug!("closing image sequence {}", self.root.display());
        self.pending.clear();
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "bmp"))
}

fn collect_images(root: &Path) -> Vec<PathBuf> {
    let mut stack = vec![root.to_path_buf()];
    let mut images = Vec::new();

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if is_image(&path) {
                images.push(path);
            }
        }
    }

    images
}
