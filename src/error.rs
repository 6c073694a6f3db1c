use thiserror::Error;

/// Errors surfaced by the scanning pipeline and its collaborators
///
/// End of stream is not an error: sources report it by returning `None`.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The frame source could not be opened; nothing was processed
    #[error("frame source unavailable: {source_desc}")]
    DeviceUnavailable {
        /// Device index, path or URI that failed to open
        source_desc: String,
    },
    /// The render target rejected a frame
    #[error("render target failed: {0}")]
    Render(String),
    /// Console or file output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A frame could not be encoded or decoded
    #[error(transparent)]
    Image(#[from] image::ImageError),
    /// The OpenCV backend reported a failure
    #[cfg(feature = "opencv")]
    #[error(transparent)]
    OpenCv(#[from] opencv::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ScanError>;
