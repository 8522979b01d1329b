//! JNI entry points called from the test app's `MainActivity`.

use jni::JNIEnv;
use jni::objects::{JClass, JObject, JString};
use jni::sys::{jobjectArray, jstring};
use streamkit_codec::{CodecError, CodecInfo};

use crate::requested_mime_type;

fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag("streamkit-test"),
    );
}

/// Read the requested MIME type, using the default for `null`.
fn mime_type_arg(env: &mut JNIEnv, mime_type: &JString) -> Result<String, CodecError> {
    let arg = (!mime_type.is_null()).then(|| env.get_string(mime_type).map(String::from));
    if matches!(arg, Some(Err(jni::errors::Error::JavaException))) {
        let _ = env.exception_clear();
    }
    requested_mime_type(arg)
}

fn lookup<T>(
    env: &mut JNIEnv,
    mime_type: &JString,
    f: impl FnOnce(&str) -> Result<T, CodecError>,
) -> Result<T, CodecError> {
    init_logging();
    streamkit_codec::sys::init(env)?;
    let mime_type = mime_type_arg(env, mime_type)?;
    f(&mime_type)
}

// ============================================================================
// Codec Crate Tests
// ============================================================================

/// Test selecting the first encoder for a MIME type.
/// Returns the encoder name, or null when the lookup fails.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_streamkit_test_MainActivity_testSelectFirstEncoder(
    mut env: JNIEnv,
    _class: JClass,
    mime_type: JString,
) -> jstring {
    match lookup(&mut env, &mime_type, streamkit_codec::select_platform_encoder) {
        Ok(encoder) => {
            log::info!("selected {} ({:?})", encoder.name, encoder.supported_types);
            env.new_string(encoder.name)
                .map_or(std::ptr::null_mut(), JString::into_raw)
        }
        Err(e) => {
            log::error!("testSelectFirstEncoder failed: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Test listing every encoder for a MIME type.
/// Returns the encoder names in platform order, or null when the lookup fails.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_streamkit_test_MainActivity_testListEncoders(
    mut env: JNIEnv,
    _class: JClass,
    mime_type: JString,
) -> jobjectArray {
    let encoders = match lookup(&mut env, &mime_type, streamkit_codec::list_platform_encoders) {
        Ok(encoders) => encoders,
        Err(e) => {
            log::error!("testListEncoders failed: {e}");
            return std::ptr::null_mut();
        }
    };

    names_to_array(&mut env, &encoders).unwrap_or_else(|e| {
        log::error!("testListEncoders result conversion failed: {e}");
        std::ptr::null_mut()
    })
}

fn names_to_array(env: &mut JNIEnv, encoders: &[CodecInfo]) -> jni::errors::Result<jobjectArray> {
    let len = i32::try_from(encoders.len()).unwrap_or(i32::MAX);
    let array = env.new_object_array(len, "java/lang/String", JObject::null())?;
    for (i, encoder) in (0..len).zip(encoders) {
        let name = env.new_string(&encoder.name)?;
        env.set_object_array_element(&array, i, &name)?;
        env.delete_local_ref(name)?;
    }
    Ok(array.into_raw())
}
