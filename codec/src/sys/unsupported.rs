//! Stub registry for platforms without a codec backend (desktop for now).

use crate::{CodecError, CodecInfo, CodecRegistry};

/// Registry that reports no codecs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedRegistry;

impl CodecRegistry for UnsupportedRegistry {
    type Descriptor = CodecInfo;

    fn codec_count(&self) -> Result<usize, CodecError> {
        Ok(0)
    }

    fn codec_info_at(&self, index: usize) -> Result<CodecInfo, CodecError> {
        Err(CodecError::IndexOutOfRange { index, count: 0 })
    }
}
