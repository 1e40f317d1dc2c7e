//! Configuration errors.
//!
//! The model functions themselves never fail; they are total over the reals and
//! may return `NaN` or `Inf` for degenerate input. Rejecting such input is the
//! job of whoever builds the configuration, and this is the error type they use.

use std::fmt;

/// Error raised while loading or validating a profile configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A parameter that must be strictly positive was zero or negative.
    NonPositive {
        /// Configuration field name (e.g. `"z0"`, `"src_vol"`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A parameter that must be non-negative was negative.
    Negative {
        /// Configuration field name (e.g. `"vb0"`, `"k_i"`)
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// A parameter was NaN or infinite.
    NonFinite {
        /// Configuration field name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// The configuration file could not be read.
    Io(std::io::Error),

    /// The configuration file is not valid JSON for the expected schema.
    Parse(serde_json::Error),
}

impl ConfigError {
    /// Configuration field name the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NonPositive { name, .. }
            | Self::Negative { name, .. }
            | Self::NonFinite { name, .. } => Some(name),
            Self::Io(_) | Self::Parse(_) => None,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { name, value } => {
                write!(f, "parameter '{name}' must be positive, got {value}")
            }
            Self::Negative { name, value } => {
                write!(f, "parameter '{name}' must not be negative, got {value}")
            }
            Self::NonFinite { name, value } => {
                write!(f, "parameter '{name}' must be finite, got {value}")
            }
            Self::Io(err) => write!(f, "failed to read configuration: {err}"),
            Self::Parse(err) => write!(f, "failed to parse configuration: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

/// Require `value > 0` (and finite).
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

/// Require `value >= 0` (and finite).
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_check() {
        assert!(ensure_positive("z0", 0.003).is_ok());

        let err = ensure_positive("z0", 0.0).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { name: "z0", .. }));
        assert_eq!(err.to_string(), "parameter 'z0' must be positive, got 0");
    }

    #[test]
    fn test_non_negative_check() {
        assert!(ensure_non_negative("vb0", 0.0).is_ok());
        let err = ensure_non_negative("vb0", -1.0).unwrap_err();
        assert_eq!(err.field(), Some("vb0"));
    }

    #[test]
    fn test_non_finite_rejected_before_sign() {
        let err = ensure_positive("zone_h", f64::NAN).unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { .. }));

        let err = ensure_non_negative("c0z", f64::INFINITY).unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { .. }));
    }
}
