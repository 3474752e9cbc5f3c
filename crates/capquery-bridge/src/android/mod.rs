// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android host via JNI.
//
// Requires the Android NDK and targets `aarch64-linux-android` or
// `armv7-linux-androideabi`. Each trait method calls the corresponding
// Android SDK API on the hosting Activity through the ART runtime.
//
// ## Threading
//
// `isInMultiWindowMode` and `startActivity` touch Activity state and must be
// called from the UI thread. The bridge does not hop threads; callers are
// expected to already be there.
//
// ## Local references
//
// Every call runs inside its own JNI local reference frame, popped before the
// call returns.

#![cfg(target_os = "android")]

use std::path::PathBuf;

use jni::objects::{JObject, JObjectArray, JString, JValue};
use jni::{JNIEnv, JavaVM};

use capquery_core::error::{CapQueryError, Result};
use capquery_core::types::{
    NavigationRequest, PackageId, PermissionName, PermissionStatus, PlatformVersion,
};

use crate::traits::*;

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

const ACTIVITY_NOT_FOUND: &str = "android/content/ActivityNotFoundException";

/// Obtain the current Android `Activity` as a [`JObject`].
///
/// The pointer comes from `ndk_context::android_context().context()` which
/// is the `jobject` for whichever `Activity` hosts the native code.
fn activity() -> Result<JObject<'static>> {
    let ctx = ndk_context::android_context();
    let ptr = ctx.context();
    if ptr.is_null() {
        return Err(CapQueryError::Bridge(
            "Android context is null, native activity not initialised".into(),
        ));
    }
    // SAFETY: the NDK guarantees this pointer is a valid global jobject for
    // the hosting Activity.
    Ok(unsafe { JObject::from_raw(ptr.cast()) })
}

/// Convenience: map any `jni::errors::Error` into `CapQueryError::Bridge`.
fn jni_err(context: &str, e: jni::errors::Error) -> CapQueryError {
    CapQueryError::Bridge(format!("{context}: {e}"))
}

/// Like [`jni_err`], but first clears a pending Java exception so the next
/// JNI call on this thread is legal.
fn java_err(env: &mut JNIEnv<'_>, context: &str, e: jni::errors::Error) -> CapQueryError {
    if matches!(e, jni::errors::Error::JavaException) {
        if let Err(clear) = env.exception_clear() {
            tracing::error!(error = %clear, "failed to clear pending Java exception");
        }
    }
    jni_err(context, e)
}

/// Carries a `CapQueryError` out of `JNIEnv::with_local_frame`, which needs
/// an error type convertible from `jni::errors::Error`.
struct FrameError(CapQueryError);

impl From<jni::errors::Error> for FrameError {
    fn from(e: jni::errors::Error) -> Self {
        Self(jni_err("local frame", e))
    }
}

// ---------------------------------------------------------------------------
// Host struct
// ---------------------------------------------------------------------------

/// Android implementation of the capability host.
///
/// Holds the process `JavaVM`; the Activity itself is looked up on every
/// call, so the host stays valid across Activity re-creation.
pub struct AndroidHost {
    vm: JavaVM,
    local_frame_capacity: i32,
}

impl AndroidHost {
    /// Create a host from the NDK-provided context.
    ///
    /// `local_frame_capacity` bounds the local references one call may hold.
    pub fn new(local_frame_capacity: i32) -> Result<Self> {
        let ctx = ndk_context::android_context();
        // SAFETY: `ctx.vm()` returns the `JavaVM*` set by the NDK glue code.
        // The pointer is guaranteed valid for the lifetime of the process.
        let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
            .map_err(|e| jni_err("failed to obtain JavaVM", e))?;
        Ok(Self {
            vm,
            local_frame_capacity,
        })
    }

    /// Run `f` against the Activity inside a fresh local reference frame.
    fn with_activity<T>(
        &self,
        f: impl FnOnce(&mut JNIEnv<'_>, &JObject<'_>) -> Result<T>,
    ) -> Result<T> {
        let mut env = self
            .vm
            .attach_current_thread_permanently()
            .map_err(|e| jni_err("failed to attach JNI thread", e))?;
        let activity = activity()?;
        env.with_local_frame(self.local_frame_capacity, |env| {
            f(env, &activity).map_err(FrameError)
        })
        .map_err(|FrameError(e)| e)
    }

    /// The hosting application's package name (`Context.getPackageName()`).
    pub fn package_id(&self) -> Result<PackageId> {
        let name = self.with_activity(|env, activity| {
            let j_pkg: JObject = env
                .call_method(activity, "getPackageName", "()Ljava/lang/String;", &[])
                .map_err(|e| java_err(env, "getPackageName", e))?
                .l()
                .map_err(|e| jni_err("getPackageName->l", e))?;

            let pkg: String = env
                .get_string(&JString::from(j_pkg))
                .map_err(|e| jni_err("get_string(packageName)", e))?
                .into();
            Ok(pkg)
        })?;
        PackageId::new(name)
    }
}

impl HostPlatform for AndroidHost {
    fn platform_name(&self) -> &str {
        "Android"
    }
}

// ---------------------------------------------------------------------------
// PlatformInfo — android.os.Build.VERSION.SDK_INT
// ---------------------------------------------------------------------------

impl PlatformInfo for AndroidHost {
    fn platform_version(&self) -> Result<PlatformVersion> {
        let sdk = self.with_activity(|env, _activity| {
            env.get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
                .map_err(|e| java_err(env, "Build.VERSION.SDK_INT", e))?
                .i()
                .map_err(|e| jni_err("SDK_INT->i", e))
        })?;

        let level = u32::try_from(sdk)
            .map_err(|_| CapQueryError::Bridge(format!("negative SDK_INT {sdk}")))?;
        Ok(PlatformVersion::new(level))
    }
}

// ---------------------------------------------------------------------------
// PermissionAuthority — Context.checkSelfPermission
// ---------------------------------------------------------------------------

impl PermissionAuthority for AndroidHost {
    /// `activity.checkSelfPermission(name) == PackageManager.PERMISSION_GRANTED`.
    ///
    /// The method exists from API 23 only; the service never calls this on
    /// older versions.
    fn check_self_permission(&self, name: &PermissionName) -> Result<PermissionStatus> {
        let code = self.with_activity(|env, activity| {
            let j_name: JString = env
                .new_string(name.as_str())
                .map_err(|e| jni_err("new_string(permission)", e))?;

            env.call_method(
                activity,
                "checkSelfPermission",
                "(Ljava/lang/String;)I",
                &[JValue::Object(&j_name)],
            )
            .map_err(|e| java_err(env, "checkSelfPermission", e))?
            .i()
            .map_err(|e| jni_err("checkSelfPermission->i", e))
        })?;

        tracing::debug!(permission = %name, code, "Android: checkSelfPermission");
        Ok(PermissionStatus::from_android_code(code))
    }
}

// ---------------------------------------------------------------------------
// WindowState — Activity.isInMultiWindowMode
// ---------------------------------------------------------------------------

impl WindowState for AndroidHost {
    fn is_in_multi_window_mode(&self) -> Result<bool> {
        self.with_activity(|env, activity| {
            env.call_method(activity, "isInMultiWindowMode", "()Z", &[])
                .map_err(|e| java_err(env, "isInMultiWindowMode", e))?
                .z()
                .map_err(|e| jni_err("isInMultiWindowMode->z", e))
        })
    }
}

// ---------------------------------------------------------------------------
// SettingsNavigator — Intent(action, Uri.parse("package:…"))
// ---------------------------------------------------------------------------

impl SettingsNavigator for AndroidHost {
    /// Launch the settings intent with `startActivity` and return without
    /// waiting for the screen.
    ///
    /// An `ActivityNotFoundException` becomes `NoSettingsHandler`.
    fn dispatch(&self, request: &NavigationRequest) -> Result<()> {
        self.with_activity(|env, activity| {
            let j_uri_str: JString = env
                .new_string(request.data_uri())
                .map_err(|e| jni_err("new_string(uri)", e))?;

            let uri: JObject = env
                .call_static_method(
                    "android/net/Uri",
                    "parse",
                    "(Ljava/lang/String;)Landroid/net/Uri;",
                    &[JValue::Object(&j_uri_str)],
                )
                .map_err(|e| java_err(env, "Uri.parse", e))?
                .l()
                .map_err(|e| jni_err("Uri.parse->l", e))?;

            let j_action: JString = env
                .new_string(request.action())
                .map_err(|e| jni_err("new_string(action)", e))?;

            let intent: JObject = env
                .new_object(
                    "android/content/Intent",
                    "(Ljava/lang/String;Landroid/net/Uri;)V",
                    &[JValue::Object(&j_action), JValue::Object(&uri)],
                )
                .map_err(|e| java_err(env, "new Intent(settings)", e))?;

            let launched = env.call_method(
                activity,
                "startActivity",
                "(Landroid/content/Intent;)V",
                &[JValue::Object(&intent)],
            );

            match launched {
                Ok(_) => Ok(()),
                Err(jni::errors::Error::JavaException) => {
                    let throwable = env
                        .exception_occurred()
                        .map_err(|e| jni_err("exception_occurred", e))?;
                    env.exception_clear()
                        .map_err(|e| jni_err("exception_clear", e))?;

                    let not_found = env
                        .is_instance_of(&throwable, ACTIVITY_NOT_FOUND)
                        .map_err(|e| jni_err("is_instance_of(ActivityNotFoundException)", e))?;
                    if not_found {
                        return Err(CapQueryError::NoSettingsHandler {
                            action: request.action().to_string(),
                        });
                    }
                    Err(CapQueryError::Bridge(
                        "startActivity(settings) threw a Java exception".into(),
                    ))
                }
                Err(e) => Err(jni_err("startActivity(settings)", e)),
            }
        })?;

        tracing::info!(
            action = request.action(),
            package = %request.package(),
            "Android: settings intent dispatched"
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ExternalStorage — Context.getExternalFilesDirs(null)
// ---------------------------------------------------------------------------

impl ExternalStorage for AndroidHost {
    /// Absolute paths of `getExternalFilesDirs(null)`, index for index.
    /// Entries for unmounted volumes come back as `null` and map to `None`.
    fn external_files_dirs(&self) -> Result<Vec<Option<PathBuf>>> {
        self.with_activity(|env, activity| {
            let dirs: JObject = env
                .call_method(
                    activity,
                    "getExternalFilesDirs",
                    "(Ljava/lang/String;)[Ljava/io/File;",
                    &[JValue::Object(&JObject::null())],
                )
                .map_err(|e| java_err(env, "getExternalFilesDirs", e))?
                .l()
                .map_err(|e| jni_err("getExternalFilesDirs->l", e))?;

            if dirs.is_null() {
                return Ok(Vec::new());
            }
            let dirs = JObjectArray::from(dirs);

            let len = env
                .get_array_length(&dirs)
                .map_err(|e| jni_err("get_array_length(dirs)", e))?;

            let mut paths = Vec::new();
            for i in 0..len {
                let file: JObject = env
                    .get_object_array_element(&dirs, i)
                    .map_err(|e| jni_err("get_object_array_element(dirs)", e))?;
                if file.is_null() {
                    paths.push(None);
                    continue;
                }

                let j_path: JObject = env
                    .call_method(&file, "getAbsolutePath", "()Ljava/lang/String;", &[])
                    .map_err(|e| java_err(env, "File.getAbsolutePath", e))?
                    .l()
                    .map_err(|e| jni_err("getAbsolutePath->l", e))?;

                let path: String = env
                    .get_string(&JString::from(j_path))
                    .map_err(|e| jni_err("get_string(path)", e))?
                    .into();
                paths.push(Some(PathBuf::from(path)));

                env.delete_local_ref(file)
                    .map_err(|e| jni_err("delete_local_ref(file)", e))?;
            }

            tracing::debug!(volumes = paths.len(), "Android: external files dirs");
            Ok(paths)
        })
    }
}
