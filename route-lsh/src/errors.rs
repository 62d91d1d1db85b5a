//! Error definitions.
use std::error::Error;
use std::{fmt, result};

/// A specialized Result type for this library.
pub type Result<T, E = RouteLshError> = result::Result<T, E>;

/// Errors in this library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteLshError {
    /// Contains [`InputError`].
    Input(InputError),
    /// Contains [`ConfigMismatchError`].
    ConfigMismatch(ConfigMismatchError),
    /// Contains [`InvalidStateError`].
    InvalidState(InvalidStateError),
}

impl fmt::Display for RouteLshError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Input(e) => e.fmt(f),
            Self::ConfigMismatch(e) => e.fmt(f),
            Self::InvalidState(e) => e.fmt(f),
        }
    }
}

impl Error for RouteLshError {}

impl RouteLshError {
    pub(crate) fn input<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::Input(InputError { msg: msg.into() })
    }

    pub(crate) const fn config_mismatch(expected: usize, actual: usize) -> Self {
        Self::ConfigMismatch(ConfigMismatchError { expected, actual })
    }

    pub(crate) const fn invalid_state(msg: &'static str) -> Self {
        Self::InvalidState(InvalidStateError { msg })
    }
}

/// Error used when the input argument is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputError {
    msg: String,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InputError: {}", self.msg)
    }
}

/// Error used when the number of hash coefficients differs from the signature size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigMismatchError {
    /// Signature size implied by the band count.
    pub expected: usize,
    /// Number of coefficients supplied.
    pub actual: usize,
}

impl fmt::Display for ConfigMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ConfigMismatchError: coefficients size {} is different from signature size {}",
            self.actual, self.expected
        )
    }
}

/// Error used when a calculator is used before (or initialized after) its one-time setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStateError {
    msg: &'static str,
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidStateError: {}", self.msg)
    }
}
