use cfd_profiles_core::{BoundaryProfile, Position, WindBoundary, WindQuantity};
use std::ffi::CStr;
use std::os::raw::c_char;

use crate::error::{DefaultProfileError, ProfileErrorCode};
use crate::helpers::{handle_ffi_result_error, instance_from_ptr, track_error};
use crate::instance::ProfileInstance;

/// Map a C quantity code onto a wind quantity.
///
/// 0 = x velocity, 1 = y velocity, 2 = k, 3 = ε, 4 = ω.
pub(crate) fn wind_quantity_from_code(code: u8) -> Result<WindQuantity, DefaultProfileError> {
    WindQuantity::ALL
        .get(usize::from(code))
        .copied()
        .ok_or_else(|| {
            DefaultProfileError::invalid_parameter(
                "quantity",
                &format!("must be 0..=4, got {code}"),
            )
        })
}

/// Read a callback name passed as a C string.
///
/// # Safety
/// `name` must be null or a valid null-terminated string.
pub(crate) unsafe fn name_from_ptr<'a>(name: *const c_char) -> Result<&'a str, DefaultProfileError> {
    if name.is_null() {
        return Err(DefaultProfileError::null_pointer("name"));
    }
    // SAFETY: non-null checked above; termination guaranteed by the caller.
    unsafe { CStr::from_ptr(name) }
        .to_str()
        .map_err(|_| DefaultProfileError::invalid_parameter("name", "must be valid UTF-8"))
}

fn boundary(instance: &ProfileInstance, quantity: WindQuantity) -> WindBoundary {
    WindBoundary::new(quantity, instance.wind, instance.config.datum)
}

#[no_mangle]
/// Evaluate one wind profile quantity at a face centroid.
///
/// - `quantity`: 0 = x velocity (m/s), 1 = y velocity (m/s), 2 = k (m²/s²),
///   3 = ε (m²/s³), 4 = ω (1/s).
/// - `x`, `y`, `z`: face centroid in mesh coordinates. Height is measured along
///   the configured vertical axis from `ground_z`.
///
/// Returns
/// - `ProfileErrorCode::Ok` (0) on success with the value in `out_value`
/// - `ProfileErrorCode::NullPointer` if `ptr` or `out_value` is null
/// - `ProfileErrorCode::InvalidParameter` if `quantity` is unknown
///
/// # Safety
///
/// - `ptr` must be a valid pointer returned by `cfd_profiles_new` or null.
/// - `out_value` must be null or valid for writes.
pub unsafe extern "C" fn cfd_profiles_wind_at(
    ptr: *const ProfileInstance,
    quantity: u8,
    x: f64,
    y: f64,
    z: f64,
    out_value: *mut f64,
) -> ProfileErrorCode {
    if out_value.is_null() {
        return track_error(&DefaultProfileError::null_pointer("out_value"));
    }

    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let quantity = wind_quantity_from_code(quantity)?;
        let value = boundary(instance, quantity).evaluate_at(&Position::new(x, y, z));
        unsafe {
            *out_value = value;
        }
        Ok::<(), DefaultProfileError>(())
    })
}

#[no_mangle]
/// Evaluate one wind profile quantity over a batch of face centroids.
///
/// Faces are evaluated in parallel. `centroids` holds `len` packed `[x, y, z]`
/// triples (`3 * len` doubles) and `out_values` receives `len` results in the
/// same order.
///
/// Returns
/// - `ProfileErrorCode::Ok` (0) on success
/// - `ProfileErrorCode::NullPointer` if `ptr`, `centroids` or `out_values` is null
/// - `ProfileErrorCode::InvalidParameter` if `quantity` is unknown or `3 * len` overflows
///
/// # Safety
///
/// - `ptr` must be a valid pointer returned by `cfd_profiles_new` or null.
/// - `centroids` must point to at least `3 * len` readable doubles.
/// - `out_values` must point to at least `len` writable doubles that do not
///   overlap `centroids`.
///
/// # Example Usage (C++)
/// ```cpp
/// std::vector<double> xyz = {0.0, 0.0, 10.0, 0.0, 0.0, 20.0};
/// std::vector<double> k(2);
/// cfd_profiles_wind_faces(profiles, 2, xyz.data(), 2, k.data());
/// ```
pub unsafe extern "C" fn cfd_profiles_wind_faces(
    ptr: *const ProfileInstance,
    quantity: u8,
    centroids: *const f64,
    len: usize,
    out_values: *mut f64,
) -> ProfileErrorCode {
    if centroids.is_null() {
        return track_error(&DefaultProfileError::null_pointer("centroids"));
    }
    if out_values.is_null() {
        return track_error(&DefaultProfileError::null_pointer("out_values"));
    }

    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let quantity = wind_quantity_from_code(quantity)?;
        let coords_len = len.checked_mul(3).ok_or_else(|| {
            DefaultProfileError::invalid_parameter("len", &format!("too large, got {len}"))
        })?;

        // SAFETY: lengths and non-overlap guaranteed by the caller.
        let coords = unsafe { std::slice::from_raw_parts(centroids, coords_len) };
        let out = unsafe { std::slice::from_raw_parts_mut(out_values, len) };

        let positions: Vec<Position> = coords
            .chunks_exact(3)
            .map(|c| Position::new(c[0], c[1], c[2]))
            .collect();
        boundary(instance, quantity).evaluate_faces_into(&positions, out);
        Ok::<(), DefaultProfileError>(())
    })
}

#[no_mangle]
/// Evaluate a boundary profile by its callback name.
///
/// The standard names are `x_vel_profile`, `y_vel_profile`, `k_profile`,
/// `e_profile` and `sdr_profile`.
///
/// Returns
/// - `ProfileErrorCode::Ok` (0) on success with the value in `out_value`
/// - `ProfileErrorCode::NullPointer` if `ptr`, `name` or `out_value` is null
/// - `ProfileErrorCode::InvalidParameter` if `name` is not valid UTF-8
/// - `ProfileErrorCode::UnknownName` if no profile is registered under `name`
///
/// # Safety
///
/// - `ptr` must be a valid pointer returned by `cfd_profiles_new` or null.
/// - `name` must be null or a valid null-terminated string.
/// - `out_value` must be null or valid for writes.
pub unsafe extern "C" fn cfd_profiles_evaluate_named_profile(
    ptr: *const ProfileInstance,
    name: *const c_char,
    x: f64,
    y: f64,
    z: f64,
    out_value: *mut f64,
) -> ProfileErrorCode {
    if out_value.is_null() {
        return track_error(&DefaultProfileError::null_pointer("out_value"));
    }

    handle_ffi_result_error(|| {
        let instance = unsafe { instance_from_ptr(ptr) }?;
        let name = unsafe { name_from_ptr(name) }?;
        let value = instance
            .registry
            .evaluate_profile(name, &Position::new(x, y, z))
            .ok_or_else(|| DefaultProfileError::unknown_name(name))?;
        unsafe {
            *out_value = value;
        }
        Ok::<(), DefaultProfileError>(())
    })
}
