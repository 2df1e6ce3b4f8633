//! # buildver
//!
//! A library for stamping date-encoded build numbers into four-part version
//! numbers (`major.minor.build.patch`) and advancing them on each build.
//!
//! The interesting machinery is the build-number codec: the build field can be
//! a plain counter, or it can encode a calendar date against a per-project
//! *base year* under one of four schemes. A compact per-field format string
//! (the *increment mode*) tells the engine, independently for each field,
//! whether to hold it, increment it, or pin it to a literal constant.
//!
//! ## Examples
//!
//! Bump just the build field, date-encoded against a base year:
//!
//! ```
//! use buildver::prelude::*;
//!
//! let mut version: VersionInfo = "1.2.0.0".parse().unwrap();
//! version.set_base_year(2013);
//! version.set_scheme(IncrementType::ByYears);
//!
//! let format: Format = "*.*.+.*".parse().unwrap();
//! let today = Date::explicit(2017, 11, 22).unwrap();
//! version.apply(&format, &today);
//!
//! assert_eq!("1.2.41122.0", version.to_string());
//! ```
//!
//! And recover the date it was stamped with:
//!
//! ```
//! # use buildver::prelude::*;
//! # let mut version: VersionInfo = "1.2.41122.0".parse().unwrap();
//! # version.set_base_year(2013);
//! # version.set_scheme(IncrementType::ByYears);
//! # let today = Date::explicit(2017, 11, 22).unwrap();
//! let stamped = version.to_date(&today).unwrap().unwrap();
//! assert_eq!("2017-11-22", stamped.to_string());
//! ```
//!
//! ## Schemes
//!
//! With a date of 2017-11-22 and a base year of 2013:
//!
//! | Scheme | Example | Encoding |
//! |---|---|---|
//! | `simple` | `41` → `42` | A plain saturating counter; ignores the date and base year. |
//! | `bymonths` | `5922` | Months since January of the base year times 100, plus the day of month. |
//! | `byyears` | `41122` | Years since the base year, zero-padded month, and day, concatenated as decimal digits. |
//! | `bydate` | `20171122` | Full year, zero-padded month, and day, concatenated as decimal digits. |
//!
//! Note the legacy quirk in the last two: the day is *not* zero-padded when
//! concatenating, so a single-digit day produces a shorter (and ambiguous)
//! digit string. Persisted build numbers depend on these exact byte
//! sequences, so the quirk is reproduced rather than fixed.
//!
//! ## Increment modes
//!
//! A format string has four dot-separated fields for (major, minor, build,
//! patch). Each field is `*` to hold, `+` to increment, or a decimal literal
//! to pin the field to a constant. The default is `*.*.+.*`: increment the
//! build only.
//!
//! ## Determinism
//!
//! "Today" is always an explicit [`Date`] argument, never an ambient clock
//! read, so every operation is a deterministic function of its inputs. Use
//! [`Date::local_now`] or [`Date::utc_now`] at the edge when you do want the
//! wall clock.
#![warn(missing_docs)]

mod codec;
mod error;
mod format;
mod scheme;
mod version;

pub use crate::codec::{decode, encode, Date};
pub use crate::error::{
    CodecError, CompositeError, DateError, FormatError, SchemeError, VersionError,
};
pub use crate::format::{FieldLiterals, Format, IncrementMode};
pub use crate::scheme::IncrementType;
pub use crate::version::VersionInfo;

/// A convenience module appropriate for glob imports (`use buildver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::CodecError;
    #[doc(no_inline)]
    pub use crate::CompositeError;
    #[doc(no_inline)]
    pub use crate::Date;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::FieldLiterals;
    #[doc(no_inline)]
    pub use crate::Format;
    #[doc(no_inline)]
    pub use crate::FormatError;
    #[doc(no_inline)]
    pub use crate::IncrementMode;
    #[doc(no_inline)]
    pub use crate::IncrementType;
    #[doc(no_inline)]
    pub use crate::SchemeError;
    #[doc(no_inline)]
    pub use crate::VersionError;
    #[doc(no_inline)]
    pub use crate::VersionInfo;
}
