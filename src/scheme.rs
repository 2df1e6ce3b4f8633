use crate::error::SchemeError;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// The four build-number encoding schemes.
///
/// The scheme selects how [`VersionInfo`](crate::VersionInfo)'s build field is
/// computed when incrementing and how it is interpreted when decoding back to
/// a calendar date. See the [crate docs](crate#schemes) for the encoding rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncrementType {
    /// A plain monotonically increasing counter.
    #[default]
    Simple,

    /// Months since January of the base year in the upper digits, day of month
    /// in the low two digits.
    ByMonths,

    /// Years since the base year, then zero-padded month, then day,
    /// concatenated as decimal digits.
    ByYears,

    /// The full date concatenated as decimal digits, `YYYY` then zero-padded
    /// month, then day.
    ByDate,
}

impl IncrementType {
    /// The canonical lowercase identifier for this scheme, as accepted by
    /// [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            IncrementType::Simple => "simple",
            IncrementType::ByMonths => "bymonths",
            IncrementType::ByYears => "byyears",
            IncrementType::ByDate => "bydate",
        }
    }

    /// All schemes, in declaration order.
    pub fn all() -> &'static [IncrementType] {
        &[
            IncrementType::Simple,
            IncrementType::ByMonths,
            IncrementType::ByYears,
            IncrementType::ByDate,
        ]
    }
}

impl FromStr for IncrementType {
    type Err = SchemeError;

    /// Parses a scheme from its identifier, case-insensitively. No partial
    /// matches and no defaulting: anything but the four identifiers is a
    /// [`SchemeError::UnknownIncrementType`].
    ///
    /// # Examples
    ///
    /// ```
    /// use buildver::IncrementType;
    ///
    /// let scheme: IncrementType = "BYDATE".parse().unwrap();
    /// assert_eq!(scheme, IncrementType::ByDate);
    /// assert!("unknown".parse::<IncrementType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        IncrementType::all()
            .iter()
            .find(|scheme| scheme.name() == lowered)
            .copied()
            .ok_or(SchemeError::UnknownIncrementType { name: s.to_owned() })
    }
}

impl Display for IncrementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
