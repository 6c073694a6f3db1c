use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use super::mat_to_frame;
use crate::Frame;
use crate::error::{Result, ScanError};
use crate::source::FrameSource;

/// Live camera opened by device index
pub struct OpenCvCamera {
    cap: VideoCapture,
    index: i32,
    scratch: Mat,
}

impl OpenCvCamera {
    /// Open a camera and request a capture size
    ///
    /// The size is a hint; the device may deliver something else.
    pub fn open(index: i32, width_hint: u32, height_hint: u32) -> Result<Self> {
        let unavailable = || ScanError::DeviceUnavailable {
            source_desc: format!("camera {index}"),
        };

        let mut cap = VideoCapture::new(index, videoio::CAP_ANY).map_err(|err| {
            log::warn!("VideoCapture::new({index}) failed: {err}");
            unavailable()
        })?;
        if !cap.is_opened().unwrap_or(false) {
            return Err(unavailable());
        }

        for (prop, value) in [
            (videoio::CAP_PROP_FRAME_WIDTH, width_hint),
            (videoio::CAP_PROP_FRAME_HEIGHT, height_hint),
        ] {
            if let Err(err) = cap.set(prop, f64::from(value)) {
                log::debug!("camera {index} ignored capture hint {prop}={value}: {err}");
            }
        }
        log::info!("opened camera {index}");

        Ok(Self {
            cap,
            index,
            scratch: Mat::default(),
        })
    }
}

impl FrameSource for OpenCvCamera {
    fn read(&mut self) -> Option<Frame> {
        match self.cap.read(&mut self.scratch) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(err) => {
                log::warn!("camera {} read failed: {err}", self.index);
                return None;
            }
        }
        match mat_to_frame(&self.scratch) {
            Ok(frame) => frame,
            Err(err) => {
                log::warn!("camera {} delivered an unreadable frame: {err}", self.index);
                None
            }
        }
    }

    fn close(&mut self) {
        if let Err(err) = self.cap.release() {
            log::warn!("camera {} release failed: {err}", self.index);
        }
        log::info!("released camera {}", self.index);
    }
}
