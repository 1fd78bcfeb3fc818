use core::fmt;

/// Validation errors raised when constructing a kernel or binding a buffer
/// adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required input or configuration field is empty.
    EmptyInput {
        /// Name of the empty argument.
        arg: &'static str,
    },
    /// A configuration argument holds an unusable value.
    InvalidArgument {
        /// Name of the argument.
        arg: &'static str,
        /// Why the value is unusable.
        reason: &'static str,
    },
    /// A contiguous 1-D view of the argument could not be obtained.
    NonContiguous {
        /// Name of the non-contiguous argument.
        arg: &'static str,
    },
    /// An argument's length did not match the required shape.
    LengthMismatch {
        /// Name of the argument.
        arg: &'static str,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyInput { arg } => write!(f, "input `{arg}` is empty"),
            ConfigError::InvalidArgument { arg, reason } => {
                write!(f, "invalid argument `{arg}`: {reason}")
            }
            ConfigError::NonContiguous { arg } => {
                write!(f, "argument `{arg}` is not contiguous in memory")
            }
            ConfigError::LengthMismatch { arg, expected, got } => {
                write!(f, "length mismatch on `{arg}`: expected {expected}, got {got}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Runtime invariant violations raised by checked kernel entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecInvariantViolation {
    /// An execution precondition was violated.
    InvalidState {
        /// Why execution could not proceed.
        reason: &'static str,
    },
    /// An output buffer's length did not match the runtime shape.
    LengthMismatch {
        /// Name of the argument.
        arg: &'static str,
        /// Required length.
        expected: usize,
        /// Received length.
        got: usize,
    },
    /// The input contained a NaN or infinite sample.
    ///
    /// Checked entry points reject non-finite input outright; the free
    /// functions instead let NaN propagate through the transform.
    NonFiniteSample {
        /// Name of the offending argument.
        arg: &'static str,
    },
    /// Adapter binding or configuration failure.
    Config(ConfigError),
}

impl From<ConfigError> for ExecInvariantViolation {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl fmt::Display for ExecInvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecInvariantViolation::InvalidState { reason } => {
                write!(f, "execution invariant violation: {reason}")
            }
            ExecInvariantViolation::LengthMismatch { arg, expected, got } => {
                write!(
                    f,
                    "execution length mismatch on `{arg}`: expected {expected}, got {got}"
                )
            }
            ExecInvariantViolation::NonFiniteSample { arg } => {
                write!(f, "input `{arg}` contains a NaN or infinite sample")
            }
            ExecInvariantViolation::Config(err) => write!(f, "{err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExecInvariantViolation {}
