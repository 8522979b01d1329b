//! Platform video encoder discovery.
//!
//! This crate answers one question for a capture/streaming pipeline: which
//! encoder does this device offer for a given MIME type? It abstracts over the
//! platform codec registry:
//! - **Android**: `android.media.MediaCodecList` through JNI
//! - **Other targets**: an empty registry
//!
//! The registry is an injected [`CodecRegistry`], so the lookup in [`lookup`]
//! runs the same against the device, an offline snapshot ([`StaticRegistry`])
//! or a fake in tests.
//!
//! ```
//! use streamkit_codec::{CodecInfo, StaticRegistry, select_first_encoder, DEFAULT_MIME_TYPE};
//!
//! let registry = StaticRegistry::new(vec![
//!     CodecInfo::decoder("c2.android.avc.decoder", ["video/avc"]),
//!     CodecInfo::encoder("c2.android.avc.encoder", ["video/avc"]),
//! ]);
//!
//! let encoder = select_first_encoder(&registry, DEFAULT_MIME_TYPE).unwrap();
//! assert_eq!(encoder.name, "c2.android.avc.encoder");
//! ```

#![warn(missing_docs)]

/// Platform-specific implementations.
pub mod sys;

pub mod lookup;
pub mod registry;

pub use lookup::{list_encoders, select_first_encoder, select_first_encoder_for, supports_mime_type};
pub use registry::{CodecDescriptor, CodecInfo, CodecRegistry, StaticRegistry};

use thiserror::Error;

/// MIME type the capture pipeline encodes to unless told otherwise (H.264).
pub const DEFAULT_MIME_TYPE: &str = "video/avc";

/// Common error type for codec discovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The platform reports no codecs at all.
    #[error("no available codecs")]
    NoCodecsAvailable,
    /// Codecs exist, but none is an encoder for the requested MIME type.
    #[error("no encoder available for {mime_type:?}")]
    NoMatchingCodec {
        /// The MIME type that was requested.
        mime_type: String,
    },
    /// The registry was asked for an index it does not have.
    #[error("codec index {index} out of range (count {count})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of codecs in the registry.
        count: usize,
    },
    /// The platform backend was used before it was initialized.
    #[error("codec registry not initialized")]
    NotInitialized,
    /// The underlying platform call failed.
    #[error("platform error: {0}")]
    Platform(String),
    /// A registry snapshot could not be parsed.
    #[error("invalid registry snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Supported codec types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecType {
    /// H.264 (AVC)
    H264,
    /// H.265 (HEVC)
    H265,
    /// VP8
    Vp8,
    /// VP9
    Vp9,
    /// AV1
    Av1,
}

impl CodecType {
    /// All known codec types.
    pub const ALL: [Self; 5] = [Self::H264, Self::H265, Self::Vp8, Self::Vp9, Self::Av1];

    /// MIME type the platform registry reports for this codec.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::H264 => "video/avc",
            Self::H265 => "video/hevc",
            Self::Vp8 => "video/x-vnd.on2.vp8",
            Self::Vp9 => "video/x-vnd.on2.vp9",
            Self::Av1 => "video/av01",
        }
    }

    /// Map a MIME type back to a codec type, ignoring ASCII case.
    #[must_use]
    pub fn from_mime_type(mime_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|codec| codec.mime_type().eq_ignore_ascii_case(mime_type))
    }
}

impl std::fmt::Display for CodecType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

/// List the platform encoders supporting `mime_type`.
///
/// # Errors
///
/// See [`list_encoders`].
pub fn list_platform_encoders(mime_type: &str) -> Result<Vec<CodecInfo>, CodecError> {
    let registry = sys::platform_registry()?;
    list_encoders(registry, mime_type)
}

/// Select the first platform encoder supporting `mime_type`.
///
/// # Errors
///
/// See [`select_first_encoder`].
pub fn select_platform_encoder(mime_type: &str) -> Result<CodecInfo, CodecError> {
    let registry = sys::platform_registry()?;
    select_first_encoder(registry, mime_type)
}
