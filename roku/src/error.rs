use thiserror::Error;

/// Error type covering every failure the crate surfaces.
///
/// A `Discovery` failure aborts a whole scan; the two query variants are
/// per-device and never affect other handles.
#[derive(Debug, Clone, Error)]
pub enum RokuError {
  /// The network scan for devices could not be completed.
  #[error("device discovery failed: {0}")]
  Discovery(String),

  /// An HTTP request to a device could not be completed.
  #[error("transport error for {url}: {reason}")]
  Transport { url: String, reason: String },

  /// A response was received but did not decode into the expected document.
  #[error("decode error for {url}: {reason}")]
  Decode { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RokuError>;
