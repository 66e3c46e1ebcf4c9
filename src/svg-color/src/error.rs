//! Error types for colour conversion.

use thiserror::Error;

/// Error returned when an attribute value is not a valid colour.
///
/// Both variants mean "this string is not a colour" to a caller; they differ
/// in how far the input got before being rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input started like `rgb(...)`, `hsl(...)` or `#...` but broke that
    /// notation's grammar.
    #[error("colour is in an invalid format: '{input}'")]
    InvalidFormat {
        /// The trimmed input.
        input: String,
        /// What was wrong with it.
        #[source]
        fault: FormatFault,
    },

    /// Nothing recognised the input, the named-colour fallback included.
    #[error("unrecognized colour: '{0}'")]
    Unrecognized(String),
}

impl ColorParseError {
    pub(crate) fn invalid_format(input: &str, fault: FormatFault) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            fault,
        }
    }

    /// Returns true for grammar violations inside a recognised notation.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// The input text the error refers to.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input, .. } => input,
            Self::Unrecognized(input) => input,
        }
    }
}

/// The specific grammar violation behind [`ColorParseError::InvalidFormat`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatFault {
    /// No `(` ... `)` argument list.
    #[error("missing parentheses")]
    MissingParentheses,

    /// Wrong number of arguments.
    #[error("expected {expected} arguments, found {found}")]
    ArgumentCount {
        /// Accepted count(s), e.g. "3 or 4".
        expected: &'static str,
        /// Number of arguments present.
        found: usize,
    },

    /// A channel disagreed with the red channel about carrying `%`.
    #[error("channels mix percentages and integers")]
    MixedChannelUnits,

    /// An argument that must be a percentage was not.
    #[error("expected a percentage, found '{0}'")]
    ExpectedPercentage(String),

    /// An argument that must be a plain number carried `%`.
    #[error("unexpected percentage '{0}'")]
    UnexpectedPercentage(String),

    /// An argument was not a number.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A hex colour contained a non-hex character.
    #[error("invalid hex digit")]
    InvalidHexDigit,

    /// A hex colour had the wrong number of digits.
    #[error("invalid hex length: {0} (expected 3 or 6)")]
    HexLength(usize),
}

/// Result type alias for colour parsing.
pub type Result<T> = std::result::Result<T, ColorParseError>;

/// Error type for loading converter configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// An override named a keyword that is not a system colour.
    #[error("unknown system colour: {0}")]
    UnknownSystemColor(String),

    /// An override value did not parse to a concrete colour.
    #[error("invalid colour for '{keyword}': '{value}'")]
    InvalidColor {
        /// The system keyword being overridden.
        keyword: String,
        /// The rejected value.
        value: String,
    },
}
