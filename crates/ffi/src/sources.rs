use cfd_profiles_core::{FireSource, FireSourceKind, SourceTerm, VolumetricSource};
use std::os::raw::c_char;

use crate::error::{DefaultProfileError, ProfileErrorCode};
use crate::helpers::{handle_ffi_result_error, instance_from_ptr, track_error, write_optional};
use crate::instance::ProfileInstance;
use crate::queries::name_from_ptr;

fn source_kind_from_code(code: u8) -> Result<FireSourceKind, DefaultProfileError> {
    match code {
        0 => Ok(FireSourceKind::HeatRelease),
        1 => Ok(FireSourceKind::Soot),
        _ => Err(DefaultProfileError::invalid_parameter(
            "kind",
            &format!("must be 0 (heat) or 1 (soot), got {code}"),
        )),
    }
}

/// # Safety
/// `out_value` must be valid for writes; `out_linearization` null or valid.
unsafe fn write_term(term: SourceTerm, out_value: *mut f64, out_linearization: *mut f64) {
    unsafe {
        *out_value = term.value;
        write_optional(out_linearization, term.linearization);
    }
}

#[no_mangle]
/// Evaluate a fire source term at simulation time `time` (s).
///
/// The source is uniform over the source volume, so no cell is needed.
///
/// - `kind`: 0 = heat release (W/m³), 1 = soot (kg/(s·m³)).
/// - `out_value` receives the source strength.
/// - `out_linearization` (optional) receives the linearization term stored
///   alongside the source. If null, ignored.
///
/// Returns
/// - `ProfileErrorCode::Ok` (0) on success
/// - `ProfileErrorCode::NullPointer` if `ptr` or `out_value` is null
/// - `ProfileErrorCode::InvalidParameter` if `kind` is unknown
///
/// # Safety
///
/// - `ptr` must be a valid pointer returned by `cfd_profiles_new` or null.
/// - `out_value` must be null or valid for writes.
/// - `out_linearization` must be null or valid for writes.
///
/// # Example Usage (C++)
/// ```cpp
/// DEFINE_SOURCE(heat_release, cell, thread, dS, eqn) {
///     double source = 0.0, ds = 0.0;
///     cfd_profiles_source_at(g_profiles, 0, CURRENT_TIME, &source, &ds);
///     dS[eqn] = ds;
///     return source;
/// }
/// ```
pub unsafe extern "C" fn cfd_profiles_source_at(
    ptr: *const ProfileInstance,
    kind: u8,
    time: f64,
    out_value: *mut f64,
    out_linearization: *mut f64,
) -> ProfileErrorCode {
    if out_value.is_null() {
        return track_error(&DefaultProfileError::null_pointer("out_value"));
    }

    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let kind = source_kind_from_code(kind)?;
        let term = FireSource::new(kind, instance.fire).evaluate_at(0, time);
        unsafe { write_term(term, out_value, out_linearization) };
        Ok::<(), DefaultProfileError>(())
    })
}

#[no_mangle]
/// Evaluate a volumetric source by its callback name.
///
/// The standard names are `heat_release` and `soot_release`.
///
/// Returns
/// - `ProfileErrorCode::Ok` (0) on success
/// - `ProfileErrorCode::NullPointer` if `ptr`, `name` or `out_value` is null
/// - `ProfileErrorCode::InvalidParameter` if `name` is not valid UTF-8
/// - `ProfileErrorCode::UnknownName` if no source is registered under `name`
///
/// # Safety
///
/// - `ptr` must be a valid pointer returned by `cfd_profiles_new` or null.
/// - `name` must be null or a valid null-terminated string.
/// - `out_value` must be null or valid for writes.
/// - `out_linearization` must be null or valid for writes.
pub unsafe extern "C" fn cfd_profiles_evaluate_named_source(
    ptr: *const ProfileInstance,
    name: *const c_char,
    time: f64,
    out_value: *mut f64,
    out_linearization: *mut f64,
) -> ProfileErrorCode {
    if out_value.is_null() {
        return track_error(&DefaultProfileError::null_pointer("out_value"));
    }

    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let name = unsafe { name_from_ptr(name) }?;
        let term = instance
            .registry
            .evaluate_source(name, 0, time)
            .ok_or_else(|| DefaultProfileError::unknown_name(name))?;
        unsafe { write_term(term, out_value, out_linearization) };
        Ok::<(), DefaultProfileError>(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cfd_profiles_default_config;
    use crate::instance::{cfd_profiles_destroy, cfd_profiles_new};
    use approx::assert_relative_eq;
    use cfd_profiles_core::FireCurveModel;
    use std::ptr;

    fn create() -> *mut ProfileInstance {
        let config = cfd_profiles_default_config();
        let mut instance = ptr::null_mut();
        let code = unsafe { cfd_profiles_new(&config, &mut instance) };
        assert_eq!(code, ProfileErrorCode::Ok);
        instance
    }

    #[test]
    fn test_heat_release_term() {
        let instance = create();
        let mut value = 0.0;
        let mut ds = 0.0;
        let code = unsafe { cfd_profiles_source_at(instance, 0, 100.0, &mut value, &mut ds) };
        assert_eq!(code, ProfileErrorCode::Ok);
        assert_relative_eq!(value, 42_857.142_857, epsilon = 1e-5);
        assert_relative_eq!(ds, 2000.0 * 0.045 * 100.0 / 10.5, epsilon = 1e-9);
        unsafe { cfd_profiles_destroy(instance) };
    }

    #[test]
    fn test_linearization_is_optional() {
        let instance = create();
        let curve = FireCurveModel::default();
        let mut value = 0.0;
        let code =
            unsafe { cfd_profiles_source_at(instance, 1, 300.0, &mut value, ptr::null_mut()) };
        assert_eq!(code, ProfileErrorCode::Ok);
        assert_eq!(value, curve.smoke_mass_flow(300.0));
        unsafe { cfd_profiles_destroy(instance) };
    }

    #[test]
    fn test_unknown_kind() {
        let instance = create();
        let mut value = 0.0;
        let code =
            unsafe { cfd_profiles_source_at(instance, 2, 10.0, &mut value, ptr::null_mut()) };
        assert_eq!(code, ProfileErrorCode::InvalidParameter);
        unsafe { cfd_profiles_destroy(instance) };
    }

    #[test]
    fn test_named_source() {
        let instance = create();
        let curve = FireCurveModel::default();
        let mut value = 0.0;
        let mut ds = 0.0;

        let code = unsafe {
            cfd_profiles_evaluate_named_source(
                instance,
                c"soot_release".as_ptr(),
                150.0,
                &mut value,
                &mut ds,
            )
        };
        assert_eq!(code, ProfileErrorCode::Ok);
        assert_eq!(value, curve.smoke_mass_flow(150.0));
        assert_eq!(ds, curve.smoke_mass_flow_time_derivative_term(150.0));

        let code = unsafe {
            cfd_profiles_evaluate_named_source(
                instance,
                ptr::null(),
                150.0,
                &mut value,
                &mut ds,
            )
        };
        assert_eq!(code, ProfileErrorCode::NullPointer);

        let code = unsafe {
            cfd_profiles_evaluate_named_source(
                instance,
                c"co_release".as_ptr(),
                150.0,
                &mut value,
                &mut ds,
            )
        };
        assert_eq!(code, ProfileErrorCode::UnknownName);

        unsafe { cfd_profiles_destroy(instance) };
    }
}
