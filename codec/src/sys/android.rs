//! Android `MediaCodecList` implementation.

use std::fmt;
use std::sync::OnceLock;

use jni::objects::{JClass, JObject, JObjectArray, JString, JValue};
use jni::{JNIEnv, JavaVM};

use crate::{CodecError, CodecInfo, CodecRegistry};

const MEDIA_CODEC_LIST: &str = "android/media/MediaCodecList";

/// Local references created while reading one `MediaCodecInfo`.
const LOCAL_FRAME_CAPACITY: i32 = 16;

/// Registry registered through [`init`].
static REGISTRY: OnceLock<AndroidCodecRegistry> = OnceLock::new();

/// Register the process Java VM so [`AndroidCodecRegistry::global`] works.
///
/// Calling this more than once is harmless; the first VM wins.
///
/// # Errors
///
/// Returns `CodecError::Platform` if the VM cannot be obtained.
pub fn init(env: &JNIEnv<'_>) -> Result<(), CodecError> {
    if REGISTRY.get().is_some() {
        return Ok(());
    }
    let registry = AndroidCodecRegistry::new(env)?;
    let _ = REGISTRY.set(registry);
    Ok(())
}

/// Codec registry backed by `android.media.MediaCodecList` via JNI.
///
/// Each call attaches the current thread to the VM (a no-op when it already
/// is) and queries the platform afresh.
pub struct AndroidCodecRegistry {
    vm: JavaVM,
}

impl fmt::Debug for AndroidCodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndroidCodecRegistry").finish_non_exhaustive()
    }
}

impl AndroidCodecRegistry {
    /// Create a registry using the VM that owns `env`.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Platform` if the VM cannot be obtained.
    pub fn new(env: &JNIEnv<'_>) -> Result<Self, CodecError> {
        let vm = env.get_java_vm().map_err(map_jni_error)?;
        Ok(Self { vm })
    }

    /// Create a registry from an existing VM handle.
    #[must_use]
    pub const fn from_vm(vm: JavaVM) -> Self {
        Self { vm }
    }

    /// The registry registered through [`init`].
    ///
    /// # Errors
    ///
    /// Returns `CodecError::NotInitialized` if [`init`] has not been called.
    pub fn global() -> Result<&'static Self, CodecError> {
        REGISTRY.get().ok_or(CodecError::NotInitialized)
    }

    fn with_env<T, F>(&self, action: F) -> Result<T, CodecError>
    where
        F: FnOnce(&mut JNIEnv<'_>) -> jni::errors::Result<T>,
    {
        let mut env = self.vm.attach_current_thread().map_err(map_jni_error)?;
        let result = action(&mut *env);
        if matches!(result, Err(jni::errors::Error::JavaException)) {
            // Leave the thread usable for the next call.
            let _ = env.exception_describe();
            let _ = env.exception_clear();
        }
        result.map_err(map_jni_error)
    }
}

impl CodecRegistry for AndroidCodecRegistry {
    type Descriptor = CodecInfo;

    fn codec_count(&self) -> Result<usize, CodecError> {
        let count = self.with_env(|env| {
            env.call_static_method(MEDIA_CODEC_LIST, "getCodecCount", "()I", &[])?
                .i()
        })?;
        log::debug!("MediaCodecList reports {count} codecs");
        // A negative count from the platform is treated as an empty registry.
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn codec_info_at(&self, index: usize) -> Result<CodecInfo, CodecError> {
        let jindex = i32::try_from(index)
            .map_err(|_| CodecError::Platform(format!("codec index {index} exceeds jint range")))?;

        self.with_env(|env| {
            env.with_local_frame(LOCAL_FRAME_CAPACITY, |env| {
                let info = env
                    .call_static_method(
                        MEDIA_CODEC_LIST,
                        "getCodecInfoAt",
                        "(I)Landroid/media/MediaCodecInfo;",
                        &[JValue::Int(jindex)],
                    )?
                    .l()?;
                read_codec_info(env, &info)
            })
        })
    }
}

/// Copy the fields of a `MediaCodecInfo` into an owned [`CodecInfo`].
fn read_codec_info(env: &mut JNIEnv<'_>, info: &JObject<'_>) -> jni::errors::Result<CodecInfo> {
    let name = env
        .call_method(info, "getName", "()Ljava/lang/String;", &[])?
        .l()?;
    let name = read_string(env, &JString::from(name))?;

    let is_encoder = env.call_method(info, "isEncoder", "()Z", &[])?.z()?;

    let types = env
        .call_method(info, "getSupportedTypes", "()[Ljava/lang/String;", &[])?
        .l()?;
    let types = JObjectArray::from(types);
    let len = env.get_array_length(&types)?;

    let mut supported_types = Vec::with_capacity(usize::try_from(len).unwrap_or(0));
    for i in 0..len {
        let element = JString::from(env.get_object_array_element(&types, i)?);
        supported_types.push(read_string(env, &element)?);
        env.delete_local_ref(element)?;
    }

    Ok(CodecInfo {
        name,
        is_encoder,
        supported_types,
    })
}

fn read_string(env: &mut JNIEnv<'_>, value: &JString<'_>) -> jni::errors::Result<String> {
    Ok(env.get_string(value)?.into())
}

fn map_jni_error(error: jni::errors::Error) -> CodecError {
    log::error!("MediaCodecList query failed: {error}");
    CodecError::Platform(error.to_string())
}

// JNI export for initialization from Java/Kotlin
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_streamkit_codec_CodecBridge_nativeInit<'local>(
    env: JNIEnv<'local>,
    _class: JClass<'local>,
) {
    if let Err(e) = init(&env) {
        log::error!("failed to initialize codec registry: {e}");
    }
}
