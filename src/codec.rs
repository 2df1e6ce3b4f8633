//! The build-number codec: deterministic, stateless transformation between a
//! calendar date and an encoded build number, per [`IncrementType`].
//!
//! The encoded forms are the exact byte sequences that end up embedded in
//! generated headers, so the [`ByYears`](IncrementType::ByYears) and
//! [`ByDate`](IncrementType::ByDate) concatenations reproduce the legacy
//! formatting bit-for-bit: the month is zero-padded to two digits, the day is
//! appended with no enforced width. Do not "fix" the day padding; persisted
//! build numbers depend on it.

use crate::error::{CodecError, DateError};
use crate::scheme::IncrementType;
use chrono::{Datelike, Local, Months, NaiveDate, Utc};
use core::{
    fmt::{self, Display},
    ops::Deref,
    str::FromStr,
};
use tracing::{debug, trace};

/// A calendar date, injected into the codec instead of read from the system
/// clock, so callers and tests can pin "today" deterministically.
///
/// ```
/// use buildver::Date;
///
/// let explicit = Date::explicit(2021, 2, 3).unwrap();
/// let parsed: Date = "2021-02-03".parse().unwrap();
/// assert_eq!(explicit, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(NaiveDate);

impl Date {
    /// Returns a new [`Date`] representing the current date in UTC at the time
    /// of this call.
    pub fn utc_now() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Returns a new [`Date`] representing the current date in the system's
    /// local timezone at the time of this call.
    pub fn local_now() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns a new [`Date`] representing the given date, or
    /// [`DateError::InvalidDateArguments`].
    pub fn explicit(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::InvalidDateArguments { year, month, day })
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a `YYYY-MM-DD` date string into a [`Date`].
    ///
    /// See [`NaiveDate::from_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(NaiveDate::from_str(s)?))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Deref for Date {
    type Target = NaiveDate;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Clamps a signed intermediate into `u32` range. Arithmetic on version fields
/// never wraps: it saturates at zero and `u32::MAX`.
fn clamp_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// Concatenates `(leading, month, day)` into decimal digits and parses the
/// result back as a number.
///
/// The month is zero-padded to two digits; the day is not. A single-digit day
/// therefore yields an ambiguous digit string, which the decode heuristics
/// inherit. Digits that overflow `u32`, or a negative leading component,
/// degrade to `0` rather than erroring.
fn legacy_concat(leading: i64, month: u32, day: u32) -> u32 {
    let digits = format!("{}{:02}{}", leading, month, day);
    trace!(%digits, "concatenated build digits");
    digits.parse().unwrap_or(0)
}

/// Encodes `today` into a build number under `scheme`.
///
/// `build` is the current build value; it feeds into the result only under
/// [`Simple`](IncrementType::Simple) (a saturating `+ 1`) and under
/// [`ByMonths`](IncrementType::ByMonths) with no base year configured, where
/// the value is left untouched.
pub fn encode(scheme: IncrementType, base_year: u32, build: u32, today: &Date) -> u32 {
    let encoded = match scheme {
        IncrementType::Simple => build.saturating_add(1),

        IncrementType::ByMonths => {
            if base_year == 0 {
                return build;
            }
            let years = i64::from(today.year()) - i64::from(base_year);
            let month_offset = clamp_u32(years * 12 + i64::from(today.month()));
            month_offset
                .saturating_mul(100)
                .saturating_add(today.day())
        }

        IncrementType::ByYears => {
            let offset = i64::from(today.year()) - i64::from(base_year);
            legacy_concat(offset, today.month(), today.day())
        }

        IncrementType::ByDate => {
            legacy_concat(i64::from(today.year()), today.month(), today.day())
        }
    };

    debug!(scheme = %scheme, base_year, encoded, "encoded build number");
    encoded
}

/// Decodes a stored build number back into the calendar date it encodes.
///
/// A `build` of zero, or an unconfigured (zero) `base_year`, yields `Ok(None)`
/// rather than an error: there is simply no date to recover. Under
/// [`Simple`](IncrementType::Simple) there is no date encoded at all, and the
/// decode passes `today` through. This pass-through is deliberate and must be
/// preserved.
///
/// # Errors
///
/// Returns [`CodecError::InvalidBuildEncoding`] when the digit groups of
/// `build` do not form a valid date. This is recoverable; the caller decides
/// whether to treat it as "no date" or abort.
pub fn decode(
    scheme: IncrementType,
    base_year: u32,
    build: u32,
    today: &Date,
) -> Result<Option<NaiveDate>, CodecError> {
    if build == 0 || base_year == 0 {
        return Ok(None);
    }

    let invalid = || CodecError::InvalidBuildEncoding {
        build,
        scheme: scheme.name(),
    };

    let date = match scheme {
        IncrementType::Simple => **today,

        IncrementType::ByDate => {
            // treat the decimal digits as YYYYMMDD: day and month take the
            // trailing two digits each, the year takes whatever remains.
            let digits = build.to_string();
            if digits.len() < 5 {
                return Err(invalid());
            }
            let (rest, dd) = digits.split_at(digits.len() - 2);
            let (year, mm) = rest.split_at(rest.len() - 2);
            build_date(year.parse().ok(), mm, dd).ok_or_else(invalid)?
        }

        IncrementType::ByYears => {
            // length heuristic: with four or more digits the trailing four are
            // (month, day) and the rest is a year offset; with fewer, there is
            // no offset group and the leading one or two digits are the month.
            let digits = build.to_string();
            let (offset, mm, dd) = if digits.len() >= 4 {
                let (rest, dd) = digits.split_at(digits.len() - 2);
                let (offset, mm) = rest.split_at(rest.len() - 2);
                let offset = if offset.is_empty() {
                    0
                } else {
                    offset.parse::<u32>().map_err(|_| invalid())?
                };
                (offset, mm, dd)
            } else if digits.len() == 3 {
                let (mm, dd) = digits.split_at(1);
                (0, mm, dd)
            } else {
                return Err(invalid());
            };
            let year = i64::from(base_year) + i64::from(offset);
            build_date(i32::try_from(year).ok(), mm, dd).ok_or_else(invalid)?
        }

        IncrementType::ByMonths => {
            let start = i32::try_from(base_year)
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
                .ok_or_else(invalid)?;
            let month_offset = i64::from(build / 100) - 1;
            let shifted = if month_offset >= 0 {
                start.checked_add_months(Months::new(month_offset as u32))
            } else {
                start.checked_sub_months(Months::new(1))
            };
            shifted
                .and_then(|date| date.with_day(build % 100))
                .ok_or_else(invalid)?
        }
    };

    debug!(scheme = %scheme, base_year, build, date = %date, "decoded build number");
    Ok(Some(date))
}

/// Builds a date from an already-split year and the month/day digit groups.
fn build_date(year: Option<i32>, month: &str, day: &str) -> Option<NaiveDate> {
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year?, month, day)
}
