//! Encoder lookup over a [`CodecRegistry`].
//!
//! "First" always means first in registry enumeration order. No ranking by
//! hardware acceleration or quality is attempted, and nothing is cached: every
//! call walks the registry again.

use crate::{CodecDescriptor, CodecError, CodecRegistry, CodecType};

/// Whether `descriptor` lists `mime_type` among its supported types, ignoring
/// ASCII case.
pub fn supports_mime_type<D: CodecDescriptor + ?Sized>(descriptor: &D, mime_type: &str) -> bool {
    descriptor
        .supported_types()
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(mime_type))
}

/// List every encoder in `registry` that supports `mime_type`, in enumeration
/// order.
///
/// An empty `mime_type` is not rejected; it simply matches nothing.
///
/// # Errors
///
/// Returns `CodecError::NoCodecsAvailable` if the registry reports zero
/// codecs, checked before any filtering. Registry failures are propagated.
pub fn list_encoders<R>(registry: &R, mime_type: &str) -> Result<Vec<R::Descriptor>, CodecError>
where
    R: CodecRegistry + ?Sized,
{
    log::debug!("querying codec registry for {mime_type} encoders");
    let count = registry.codec_count()?;
    if count == 0 {
        log::debug!("codec registry is empty");
        return Err(CodecError::NoCodecsAvailable);
    }

    let mut encoders = Vec::with_capacity(1);
    for index in 0..count {
        let info = registry.codec_info_at(index)?;
        if !info.is_encoder() {
            continue;
        }
        if supports_mime_type(&info, mime_type) {
            encoders.push(info);
        }
    }

    log::debug!(
        "found {} {mime_type} encoder(s) among {count} codecs",
        encoders.len()
    );
    Ok(encoders)
}

/// Select the first encoder in `registry` that supports `mime_type`.
///
/// # Errors
///
/// Returns `CodecError::NoCodecsAvailable` if the registry is empty, and
/// `CodecError::NoMatchingCodec` if no encoder supports `mime_type`.
pub fn select_first_encoder<R>(registry: &R, mime_type: &str) -> Result<R::Descriptor, CodecError>
where
    R: CodecRegistry + ?Sized,
{
    let encoder = list_encoders(registry, mime_type)?.into_iter().next();
    encoder.map_or_else(
        || {
            log::warn!("no encoder available for {mime_type}");
            Err(CodecError::NoMatchingCodec {
                mime_type: mime_type.to_owned(),
            })
        },
        |encoder| {
            log::info!("selected encoder {} for {mime_type}", encoder.name());
            Ok(encoder)
        },
    )
}

/// Select the first encoder for `codec_type`.
///
/// # Errors
///
/// See [`select_first_encoder`].
pub fn select_first_encoder_for<R>(
    registry: &R,
    codec_type: CodecType,
) -> Result<R::Descriptor, CodecError>
where
    R: CodecRegistry + ?Sized,
{
    select_first_encoder(registry, codec_type.mime_type())
}
