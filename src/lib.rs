//! # Streamkit
//!
//! Building blocks for Android video capture and streaming pipelines.
//!
//! Streamkit is modular. Enable only the features you need to keep your
//! dependencies minimal.
//!
//! ## Features
//!
//! - `codec`: Discovery of platform video encoders by MIME type.
//!
//! Use the `full` feature to enable everything.
//!
//! ## Example
//!
//! ```toml
//! [dependencies]
//! streamkit = { version = "0.1", features = ["codec"] }
//! ```
//!
//! ```rust,ignore
//! use streamkit::codec::{self, DEFAULT_MIME_TYPE};
//!
//! fn pick_encoder() -> Result<String, codec::CodecError> {
//!     let encoder = codec::select_platform_encoder(DEFAULT_MIME_TYPE)?;
//!     Ok(encoder.name)
//! }
//! ```

#[cfg(feature = "codec")]
pub use streamkit_codec as codec;
