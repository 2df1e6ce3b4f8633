/// An error from parsing an increment-format string, such as `*.*.+.*`.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The format string does not match the four-field grammar.
    #[error(
        "invalid increment format `{format_string}`: expected four dot-separated fields, \
         each `*`, `+`, or a decimal number"
    )]
    Syntax {
        /// The offending format string.
        format_string: String,
    },
}

/// An error from parsing an increment-type name.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SchemeError {
    /// The name does not match any known increment type.
    #[error("unknown increment type `{name}`: expected one of simple, bymonths, byyears, bydate")]
    UnknownIncrementType {
        /// The offending name.
        name: String,
    },
}

/// An error from decoding a stored build number back into a calendar date.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// The build number's digits do not form a valid date under the scheme.
    #[error("build number `{build}` does not encode a valid date under scheme `{scheme}`")]
    InvalidBuildEncoding {
        /// The undecodable build number.
        build: u32,
        /// Canonical name of the scheme the decode was attempted under.
        scheme: &'static str,
    },
}

/// An error from constructing a [`Date`](crate::Date).
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DateError {
    /// The explicit year, month, and day do not form a real date.
    #[error("explicit year ({year}), month ({month}), and day ({day}) do not form a valid date")]
    InvalidDateArguments {
        /// The year argument.
        year: i32,
        /// The month argument.
        month: u32,
        /// The day argument.
        day: u32,
    },

    /// The date string could not be parsed as `YYYY-MM-DD`.
    #[error("date should be in the format YYYY-MM-DD: {0}")]
    UnparseableDate(#[from] chrono::ParseError),
}

/// An error from parsing a version string, such as `1.2.3.4`.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    /// The version string is not four dot-separated unsigned numbers.
    #[error("invalid version `{version_string}`: expected `major.minor.build.patch`")]
    Syntax {
        /// The offending version string.
        version_string: String,
    },
}

/// An umbrella over all errors this crate can produce, for callers that don't
/// want to match on the individual enums.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CompositeError {
    /// See [`FormatError`].
    #[error(transparent)]
    Format(#[from] FormatError),

    /// See [`SchemeError`].
    #[error(transparent)]
    Scheme(#[from] SchemeError),

    /// See [`CodecError`].
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// See [`DateError`].
    #[error(transparent)]
    Date(#[from] DateError),

    /// See [`VersionError`].
    #[error(transparent)]
    Version(#[from] VersionError),
}
