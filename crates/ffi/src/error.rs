use cfd_profiles_core::ConfigError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// This trait provides a unified way to handle errors across the FFI boundary,
/// allowing both simple error codes and custom error messages.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait ProfileError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> ProfileErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `ProfileError` for common FFI error scenarios.
///
/// This struct wraps a `ProfileErrorCode` and provides convenient constructors
/// for each error type (except Ok, which represents success).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultProfileError {
    code: ProfileErrorCode,
    msg: String,
}

impl DefaultProfileError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_instance"`, `"ptr"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: ProfileErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a configuration rejected by validation.
    pub fn invalid_config(error: &ConfigError) -> Self {
        Self {
            code: ProfileErrorCode::InvalidConfig,
            msg: format!("Invalid configuration: {error}"),
        }
    }

    /// Create error for an out-of-range argument.
    ///
    /// # Arguments
    /// * `param_name` - The name of the invalid parameter (e.g., `"quantity"`, `"len"`)
    /// * `message` - A description of the validation error
    pub fn invalid_parameter(param_name: &str, message: &str) -> Self {
        Self {
            code: ProfileErrorCode::InvalidParameter,
            msg: format!("Parameter {param_name}: {message}"),
        }
    }

    /// Create error for a callback name with no registered profile or source.
    pub fn unknown_name(name: &str) -> Self {
        Self {
            code: ProfileErrorCode::UnknownName,
            msg: format!("No profile or source registered under '{name}'"),
        }
    }
}

impl ProfileError for DefaultProfileError {
    fn code(&self) -> ProfileErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

impl From<ConfigError> for DefaultProfileError {
    fn from(error: ConfigError) -> Self {
        Self::invalid_config(&error)
    }
}

/// FFI error codes returned by profile functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Configuration failed validation (non-positive roughness, source volume, ...).
    InvalidConfig = 2,

    /// Invalid parameter passed to function (unknown quantity code, bad name encoding, ...).
    InvalidParameter = 3,

    /// No profile or source is registered under the given callback name.
    UnknownName = 4,
}

impl From<DefaultProfileError> for ProfileErrorCode {
    fn from(error: DefaultProfileError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, ProfileErrorCode)> = const { RefCell::new((None, ProfileErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, ProfileErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, ProfileErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or the message cannot be converted to a C string.
///
/// # Thread Safety
/// Error messages are stored per-thread (thread-local storage), so this is thread-safe.
/// Each thread has its own independent error state.
///
/// # Lifetime
/// The returned pointer is valid until:
/// - The next FFI call on this thread that sets or clears the error
/// - The thread terminates
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// ProfileInstance* profiles = nullptr;
/// ProfileConfig config = cfd_profiles_default_config();
/// config.src_vol = 0.0;
/// if (cfd_profiles_new(&config, &profiles) != ProfileErrorCode::Ok) {
///     const char* error = cfd_profiles_get_last_error();
///     if (error) {
///         Message("Profile setup failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn cfd_profiles_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns:
/// - `ProfileErrorCode::Ok` (0) if the last call on this thread succeeded
/// - The specific error code from the last failed operation
///
/// # Thread Safety
/// Error codes are stored per-thread (thread-local storage), so this is thread-safe.
#[no_mangle]
pub extern "C" fn cfd_profiles_get_last_error_code() -> ProfileErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
