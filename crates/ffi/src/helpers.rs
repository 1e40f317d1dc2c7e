use crate::error::{with_last_error_mut, DefaultProfileError, ProfileError, ProfileErrorCode};
use crate::instance::ProfileInstance;
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `ProfileError` trait.
pub(crate) fn set_last_error(error: &impl ProfileError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl ProfileError) -> ProfileErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the error of a failed result, passing successes through untouched.
pub(crate) fn track_result<T, E: ProfileError>(result: Result<T, E>) -> Result<T, ProfileErrorCode> {
    result.map_err(|error| track_error(&error))
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = ProfileErrorCode::Ok;
    });
}

/// Run an FFI body and turn its result into an error code.
///
/// `Ok` clears the thread-local error; `Err` records it.
pub(crate) fn handle_ffi_result_error<F, E>(body: F) -> ProfileErrorCode
where
    F: FnOnce() -> Result<(), E>,
    E: ProfileError,
{
    match body() {
        Ok(()) => {
            clear_last_error();
            ProfileErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Borrow the instance behind a pointer handed out by `cfd_profiles_new`.
///
/// # Safety
/// `ptr` must be null or a live pointer returned by `cfd_profiles_new`.
pub(crate) unsafe fn instance_from_ptr<'a>(
    ptr: *const ProfileInstance,
) -> Result<&'a ProfileInstance, DefaultProfileError> {
    // SAFETY: caller guarantees `ptr` is null or valid; null is rejected here.
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultProfileError::null_pointer("ptr"))
}

/// Write `value` through an out-parameter that may be null.
///
/// # Safety
/// `out` must be null or valid for writes.
#[inline]
pub(crate) unsafe fn write_optional<T>(out: *mut T, value: T) {
    if !out.is_null() {
        // SAFETY: non-null checked above; validity guaranteed by the caller.
        unsafe { out.write(value) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{cfd_profiles_get_last_error, cfd_profiles_get_last_error_code};
    use std::ffi::CStr;
    use std::ptr;

    #[test]
    fn test_track_error_sets_message() {
        let code = track_error(&DefaultProfileError::null_pointer("out_value"));
        assert_eq!(code, ProfileErrorCode::NullPointer);
        assert_eq!(cfd_profiles_get_last_error_code(), ProfileErrorCode::NullPointer);

        let msg = unsafe { CStr::from_ptr(cfd_profiles_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "Parameter 'out_value' cannot be null");
    }

    #[test]
    fn test_success_clears_error() {
        track_error(&DefaultProfileError::unknown_name("w_profile"));
        let code = handle_ffi_result_error(|| Ok::<(), DefaultProfileError>(()));
        assert_eq!(code, ProfileErrorCode::Ok);
        assert_eq!(cfd_profiles_get_last_error_code(), ProfileErrorCode::Ok);
        assert!(cfd_profiles_get_last_error().is_null());
    }

    #[test]
    fn test_track_result_passes_values() {
        assert_eq!(track_result(Ok::<u8, DefaultProfileError>(3)), Ok(3));
        let err = track_result(Err::<u8, _>(DefaultProfileError::invalid_parameter(
            "kind", "unknown",
        )));
        assert_eq!(err, Err(ProfileErrorCode::InvalidParameter));
    }

    #[test]
    fn test_null_instance() {
        let result = unsafe { instance_from_ptr(ptr::null()) };
        assert_eq!(
            result.err().map(|e| e.code()),
            Some(ProfileErrorCode::NullPointer)
        );
    }
}
