//! OpenCV-backed collaborators
//!
//! - [`OpenCvCamera`]: `VideoCapture` on a device index
//! - [`OpenCvDecoder`]: QR and 1D barcode detectors
//! - [`OpenCvWindow`]: `imshow` window polled with `wait_key`
//!
//! OpenCV works in BGR; frames cross this boundary as RGB.

mod camera;
mod decoder;
mod window;

pub use camera::OpenCvCamera;
pub use decoder::OpenCvDecoder;
pub use window::OpenCvWindow;

use opencv::core::{self, Mat, Scalar};
use opencv::prelude::*;

use crate::Frame;

/// Copy an 8-bit BGR `Mat` into an RGB frame
pub(crate) fn mat_to_frame(mat: &Mat) -> opencv::Result<Option<Frame>> {
    if mat.typ() != core::CV_8UC3 {
        log::warn!("unsupported frame type {}; expected 8-bit BGR", mat.typ());
        return Ok(None);
    }
    let size = mat.size()?;
    if size.width <= 0 || size.height <= 0 {
        return Ok(None);
    }
    let bgr = mat.data_bytes()?;
    let mut rgb = Vec::with_capacity(bgr.len());
    for px in bgr.chunks_exact(3) {
        rgb.extend_from_slice(&[px[2], px[1], px[0]]);
    }
    Ok(Frame::from_raw(size.width as u32, size.height as u32, rgb))
}

/// Copy an RGB frame into a new 8-bit BGR `Mat`
pub(crate) fn frame_to_mat(frame: &Frame) -> opencv::Result<Mat> {
    let mut mat = Mat::new_rows_cols_with_default(
        frame.height() as i32,
        frame.width() as i32,
        core::CV_8UC3,
        Scalar::all(0.0),
    )?;
    let dst = mat.data_bytes_mut()?;
    for (d, s) in dst.chunks_exact_mut(3).zip(frame.as_raw().chunks_exact(3)) {
        d[0] = s[2];
        d[1] = s[1];
        d[2] = s[0];
    }
    Ok(mat)
}
