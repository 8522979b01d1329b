//! Read-only view of the platform codec registry.

use crate::CodecError;

/// Metadata about one platform coder/decoder.
pub trait CodecDescriptor {
    /// Platform codec name, e.g. `c2.android.avc.encoder`.
    fn name(&self) -> &str;

    /// Whether this codec compresses raw media (as opposed to decoding it).
    fn is_encoder(&self) -> bool;

    /// MIME types the codec handles, in platform order.
    fn supported_types(&self) -> &[String];
}

/// An enumerable, read-only codec registry.
///
/// Indices run from `0` to `codec_count() - 1` in platform enumeration order.
pub trait CodecRegistry {
    /// Descriptor type yielded by this registry.
    type Descriptor: CodecDescriptor;

    /// Total number of codecs, encoders and decoders alike.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Platform` if the platform query fails.
    fn codec_count(&self) -> Result<usize, CodecError>;

    /// Descriptor of the codec at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::IndexOutOfRange` for a missing index, or
    /// `CodecError::Platform` if the platform query fails.
    fn codec_info_at(&self, index: usize) -> Result<Self::Descriptor, CodecError>;
}

impl<R: CodecRegistry + ?Sized> CodecRegistry for &R {
    type Descriptor = R::Descriptor;

    fn codec_count(&self) -> Result<usize, CodecError> {
        (**self).codec_count()
    }

    fn codec_info_at(&self, index: usize) -> Result<Self::Descriptor, CodecError> {
        (**self).codec_info_at(index)
    }
}

/// Owned snapshot of a codec descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecInfo {
    /// Platform codec name.
    pub name: String,
    /// Whether the codec is an encoder.
    pub is_encoder: bool,
    /// Supported MIME types, in platform order.
    pub supported_types: Vec<String>,
}

impl CodecInfo {
    /// Describe an encoder.
    #[must_use]
    pub fn encoder<I, S>(name: impl Into<String>, supported_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            is_encoder: true,
            supported_types: supported_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Describe a decoder.
    #[must_use]
    pub fn decoder<I, S>(name: impl Into<String>, supported_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            is_encoder: false,
            ..Self::encoder(name, supported_types)
        }
    }
}

impl CodecDescriptor for CodecInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_encoder(&self) -> bool {
        self.is_encoder
    }

    fn supported_types(&self) -> &[String] {
        &self.supported_types
    }
}

/// In-memory registry.
///
/// Used for offline snapshots of a device's codec list and as a stand-in for
/// the platform in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRegistry {
    codecs: Vec<CodecInfo>,
}

impl StaticRegistry {
    /// Create a registry enumerating `codecs` in the given order.
    #[must_use]
    pub const fn new(codecs: Vec<CodecInfo>) -> Self {
        Self { codecs }
    }

    /// Codecs in enumeration order.
    #[must_use]
    pub fn codecs(&self) -> &[CodecInfo] {
        &self.codecs
    }

    /// Parse a snapshot: a JSON array of `{ name, is_encoder, supported_types }`.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidSnapshot` if the JSON does not match.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|e| CodecError::InvalidSnapshot(e.to_string()))
    }

    /// Serialize the registry as a snapshot readable by [`Self::from_json`].
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidSnapshot` if serialization fails.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, CodecError> {
        serde_json::to_string_pretty(&self.codecs)
            .map_err(|e| CodecError::InvalidSnapshot(e.to_string()))
    }
}

impl FromIterator<CodecInfo> for StaticRegistry {
    fn from_iter<T: IntoIterator<Item = CodecInfo>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl CodecRegistry for StaticRegistry {
    type Descriptor = CodecInfo;

    fn codec_count(&self) -> Result<usize, CodecError> {
        Ok(self.codecs.len())
    }

    fn codec_info_at(&self, index: usize) -> Result<CodecInfo, CodecError> {
        self.codecs
            .get(index)
            .cloned()
            .ok_or(CodecError::IndexOutOfRange {
                index,
                count: self.codecs.len(),
            })
    }
}
