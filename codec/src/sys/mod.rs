//! Platform codec registry backends.

use crate::CodecError;

cfg_if::cfg_if! {
    if #[cfg(target_os = "android")] {
        /// Android backend over `android.media.MediaCodecList`.
        pub mod android;
        pub use android::{AndroidCodecRegistry, init};

        /// Registry backing the platform lookups on this target.
        pub type PlatformRegistry = AndroidCodecRegistry;

        /// The registry for the current target.
        ///
        /// # Errors
        ///
        /// Returns `CodecError::NotInitialized` until [`init`] has run.
        pub fn platform_registry() -> Result<&'static PlatformRegistry, CodecError> {
            AndroidCodecRegistry::global()
        }
    } else {
        /// Fallback for targets without a codec registry backend.
        pub mod unsupported;
        pub use unsupported::UnsupportedRegistry;

        /// Registry backing the platform lookups on this target.
        pub type PlatformRegistry = UnsupportedRegistry;

        /// The registry for the current target.
        ///
        /// # Errors
        ///
        /// Never fails on this target.
        pub fn platform_registry() -> Result<&'static PlatformRegistry, CodecError> {
            Ok(&UnsupportedRegistry)
        }
    }
}
