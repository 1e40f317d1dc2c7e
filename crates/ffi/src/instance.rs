use cfd_profiles_core::{FireCurveModel, ProfileRegistry, SimulationConfig, WindProfileModel};
use std::ptr;
use tracing::debug;

use crate::config::ProfileConfig;
use crate::error::{DefaultProfileError, ProfileErrorCode};
use crate::helpers::{clear_last_error, track_error, track_result};

/// Wind profile and fire curve bound to one CFD case.
///
/// # Thread Safety
/// The instance is immutable after `cfd_profiles_new` returns. Every query takes
/// a `*const ProfileInstance` and may be called from any number of solver
/// threads at once without locking; there is no per-call state.
///
/// # Usage from a CFD host
/// ```cpp
/// static ProfileInstance* g_profiles = nullptr;
///
/// DEFINE_ON_DEMAND(setup_profiles) {
///     ProfileConfig config = cfd_profiles_default_config();
///     config.z0 = 0.05;
///     config.z_min = 2.0;
///     if (cfd_profiles_new(&config, &g_profiles) != ProfileErrorCode::Ok) {
///         Message("%s\n", cfd_profiles_get_last_error());
///     }
/// }
///
/// DEFINE_PROFILE(k_profile, thread, position) {
///     face_t f;
///     real x[ND_ND];
///     begin_f_loop(f, thread) {
///         F_CENTROID(x, f, thread);
///         double k = 0.0;
///         cfd_profiles_evaluate_named_profile(g_profiles, "k_profile", x[0], x[1], x[2], &k);
///         F_PROFILE(f, thread, position) = k;
///     }
///     end_f_loop(f, thread)
/// }
/// ```
pub struct ProfileInstance {
    pub(crate) config: SimulationConfig,
    pub(crate) wind: WindProfileModel,
    pub(crate) fire: FireCurveModel,
    /// Callback-name lookup for the standard boundary profiles and sources.
    pub(crate) registry: ProfileRegistry,
}

impl ProfileInstance {
    /// Validate `config` and build the models.
    ///
    /// # Errors
    ///
    /// Returns `ProfileErrorCode::InvalidConfig` if any parameter fails validation.
    /// Returns `ProfileErrorCode::InvalidParameter` if the vertical axis code is unknown.
    pub(crate) fn new(config: &ProfileConfig) -> Result<Box<Self>, DefaultProfileError> {
        let config = config.to_simulation_config()?;
        let wind = config.wind_model();
        let fire = config.fire_model();
        let registry = ProfileRegistry::standard(&config);

        debug!(
            kr = wind.roughness_factor(),
            saturation_time = fire.saturation_time(),
            "profile instance created"
        );

        Ok(Box::new(Self {
            config,
            wind,
            fire,
            registry,
        }))
    }
}

/// Create a new profile instance and return it via out-parameter.
///
/// This function follows standard C error handling conventions:
/// - Returns `ProfileErrorCode::Ok` (0) on success with valid instance in `out_instance`
/// - Returns non-zero error code on failure with `out_instance` set to null
///
/// Parameters
/// - `config`: Pointer to the case configuration. Read once; the caller keeps ownership.
/// - `out_instance`: Pointer to receive the created instance. Must be non-null.
///
/// Returns
/// - `ProfileErrorCode::Ok` (0) — success, `out_instance` contains valid pointer
/// - `ProfileErrorCode::NullPointer` — `config` or `out_instance` is null
/// - `ProfileErrorCode::InvalidConfig` — a parameter failed validation
/// - `ProfileErrorCode::InvalidParameter` — `vertical_axis` is not 0, 1 or 2
///
/// # Safety
/// - `config` must be null or point to a valid `ProfileConfig`.
/// - `out_instance` must be null or valid for writes.
///
/// Example:
/// ```cpp
/// ProfileConfig config = cfd_profiles_default_config();
/// ProfileInstance* profiles = nullptr;
/// if (cfd_profiles_new(&config, &profiles) != ProfileErrorCode::Ok) {
///     fprintf(stderr, "Failed to create profiles: %s\n", cfd_profiles_get_last_error());
///     return;
/// }
/// // ... use profiles ...
/// cfd_profiles_destroy(profiles);
/// ```
#[no_mangle]
pub unsafe extern "C" fn cfd_profiles_new(
    config: *const ProfileConfig,
    out_instance: *mut *mut ProfileInstance,
) -> ProfileErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultProfileError::null_pointer("out_instance"));
    }

    // SAFETY: caller guarantees `config` is null or valid.
    let Some(config) = (unsafe { config.as_ref() }) else {
        unsafe {
            *out_instance = ptr::null_mut();
        }
        return track_error(&DefaultProfileError::null_pointer("config"));
    };

    match track_result(ProfileInstance::new(config)) {
        Ok(instance) => {
            unsafe {
                *out_instance = Box::into_raw(instance);
            }
            clear_last_error();
            ProfileErrorCode::Ok
        }
        Err(code) => {
            unsafe {
                // Set to null on error (per documentation contract)
                *out_instance = ptr::null_mut();
            }
            code
        }
    }
}

/// Destroys a profile instance previously created by `cfd_profiles_new`.
///
/// Behavior:
/// - If `ptr` is null, this function is a no-op.
/// - Otherwise the instance is dropped and its allocation freed.
///
/// # Safety
/// - The pointer MUST have been created by `cfd_profiles_new`.
/// - The pointer MUST NOT have been freed already.
/// - No other thread may be evaluating through the pointer during or after this call.
#[no_mangle]
pub unsafe extern "C" fn cfd_profiles_destroy(ptr: *mut ProfileInstance) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: `ptr` came from `Box::into_raw` in `cfd_profiles_new` and is not
    // used again by the caller.
    unsafe {
        drop(Box::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cfd_profiles_default_config;
    use crate::error::cfd_profiles_get_last_error_code;

    #[test]
    fn test_create_and_destroy() {
        let config = cfd_profiles_default_config();
        let mut instance: *mut ProfileInstance = ptr::null_mut();
        let code = unsafe { cfd_profiles_new(&config, &mut instance) };
        assert_eq!(code, ProfileErrorCode::Ok);
        assert!(!instance.is_null());

        let registry = unsafe { &(*instance).registry };
        assert_eq!(registry.profile_names().len(), 5);

        unsafe { cfd_profiles_destroy(instance) };
    }

    #[test]
    fn test_invalid_config_nulls_output() {
        let config = ProfileConfig {
            z0: 0.0,
            ..cfd_profiles_default_config()
        };
        let mut instance: *mut ProfileInstance = ptr::NonNull::dangling().as_ptr();
        let code = unsafe { cfd_profiles_new(&config, &mut instance) };
        assert_eq!(code, ProfileErrorCode::InvalidConfig);
        assert!(instance.is_null());
        assert_eq!(cfd_profiles_get_last_error_code(), ProfileErrorCode::InvalidConfig);
    }

    #[test]
    fn test_null_arguments() {
        let config = cfd_profiles_default_config();
        let code = unsafe { cfd_profiles_new(&config, ptr::null_mut()) };
        assert_eq!(code, ProfileErrorCode::NullPointer);

        let mut instance: *mut ProfileInstance = ptr::null_mut();
        let code = unsafe { cfd_profiles_new(ptr::null(), &mut instance) };
        assert_eq!(code, ProfileErrorCode::NullPointer);
        assert!(instance.is_null());

        // Destroying null is a no-op
        unsafe { cfd_profiles_destroy(ptr::null_mut()) };
    }
}
