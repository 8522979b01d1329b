//! Android JNI test harness for streamkit crates.
//!
//! The JNI entry points are only compiled for Android targets; argument
//! handling is shared and unit tested on the host.
//! To build: cargo ndk -t arm64-v8a build -p streamkit-test-android
//!
//! Add new crate tests by:
//! 1. Adding dependency in Cargo.toml
//! 2. Adding JNI function in `android.rs`
//! 3. Adding matching native declaration in MainActivity.kt

#![allow(non_snake_case)]

use std::fmt::Display;

use streamkit_codec::{CodecError, DEFAULT_MIME_TYPE};

#[cfg(target_os = "android")]
mod android;

/// Resolve the MIME type passed from Java.
///
/// `None` stands for a `null` argument and selects the default. A failed
/// string read is reported, never replaced by the default.
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
fn requested_mime_type<E: Display>(arg: Option<Result<String, E>>) -> Result<String, CodecError> {
    match arg {
        None => Ok(DEFAULT_MIME_TYPE.to_owned()),
        Some(Ok(mime_type)) => Ok(mime_type),
        Some(Err(e)) => Err(CodecError::Platform(format!("reading MIME type argument: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_argument_selects_default() {
        assert_eq!(
            requested_mime_type::<String>(None),
            Ok(DEFAULT_MIME_TYPE.to_owned())
        );
    }

    #[test]
    fn argument_is_passed_through() {
        assert_eq!(
            requested_mime_type::<String>(Some(Ok("video/hevc".into()))),
            Ok("video/hevc".to_owned())
        );
    }

    #[test]
    fn unreadable_argument_is_an_error() {
        assert_eq!(
            requested_mime_type(Some(Err::<String, _>("Java exception was thrown"))),
            Err(CodecError::Platform(
                "reading MIME type argument: Java exception was thrown".into()
            ))
        );
    }
}

