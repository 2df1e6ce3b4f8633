use crate::{
    codec::{self, Date},
    error::{CodecError, VersionError},
    format::{Format, IncrementMode},
    scheme::IncrementType,
};
use chrono::NaiveDate;
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use tracing::debug;

/// A four-part version number plus the settings that govern how its build
/// field is encoded.
///
/// The build field is *not* a plain counter except under
/// [`IncrementType::Simple`]; under the other schemes it holds an encoded
/// date-derived value and should only be mutated through
/// [`increment`](VersionInfo::increment). All four numeric fields saturate:
/// arithmetic never wraps past `u32::MAX` and there is no negative
/// representation.
///
/// Changing the scheme does not re-encode an existing build value; it only
/// changes how future increments and decodes interpret it.
///
/// # Examples
///
/// ```
/// use buildver::{Date, Format, IncrementType, VersionInfo};
///
/// let mut version: VersionInfo = "1.2.0.4".parse().unwrap();
/// version.set_base_year(2013);
/// version.set_scheme(IncrementType::ByYears);
///
/// let format: Format = "*.*.+.*".parse().unwrap();
/// let today = Date::explicit(2017, 11, 22).unwrap();
/// version.apply(&format, &today);
/// assert_eq!("1.2.41122.4", version.to_string());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionInfo {
    major: u32,
    minor: u32,
    build: u32,
    patch: u32,
    base_year: u32,
    scheme: IncrementType,
}

impl VersionInfo {
    /// Creates a version with all fields given explicitly.
    pub fn new(
        major: u32,
        minor: u32,
        build: u32,
        patch: u32,
        base_year: u32,
        scheme: IncrementType,
    ) -> Self {
        Self {
            major,
            minor,
            build,
            patch,
            base_year,
            scheme,
        }
    }

    /// The major field.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// The minor field.
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// The build field.
    pub fn build(&self) -> u32 {
        self.build
    }

    /// The patch field.
    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// The epoch year against which `ByMonths`/`ByYears` offsets are computed.
    /// Zero means no base year is configured.
    pub fn base_year(&self) -> u32 {
        self.base_year
    }

    /// The encoding scheme the build field currently obeys.
    pub fn scheme(&self) -> IncrementType {
        self.scheme
    }

    /// Sets the major field.
    pub fn set_major(&mut self, major: u32) {
        debug!(major, "setting major");
        self.major = major;
    }

    /// Sets the minor field.
    pub fn set_minor(&mut self, minor: u32) {
        debug!(minor, "setting minor");
        self.minor = minor;
    }

    /// Sets the build field.
    pub fn set_build(&mut self, build: u32) {
        debug!(build, "setting build");
        self.build = build;
    }

    /// Sets the patch field.
    pub fn set_patch(&mut self, patch: u32) {
        debug!(patch, "setting patch");
        self.patch = patch;
    }

    /// Sets the base year.
    pub fn set_base_year(&mut self, base_year: u32) {
        debug!(base_year, "setting base year");
        self.base_year = base_year;
    }

    /// Sets the encoding scheme. The current build value is left as-is.
    pub fn set_scheme(&mut self, scheme: IncrementType) {
        debug!(scheme = %scheme, "setting scheme");
        self.scheme = scheme;
    }

    /// Advances the fields selected in `mode`.
    ///
    /// Major, minor, and patch take a saturating `+ 1`. The build field is
    /// re-encoded from `today` under the configured scheme, which *replaces*
    /// the stored value (except under [`IncrementType::Simple`], where it is
    /// an arithmetic increment). Fields not selected are left untouched.
    pub fn increment(&mut self, mode: IncrementMode, today: &Date) {
        debug!(mode = %mode, "incrementing");

        if mode.contains(IncrementMode::MAJOR) {
            self.major = self.major.saturating_add(1);
        }
        if mode.contains(IncrementMode::MINOR) {
            self.minor = self.minor.saturating_add(1);
        }
        if mode.contains(IncrementMode::BUILD) {
            self.build = codec::encode(self.scheme, self.base_year, self.build, today);
        }
        if mode.contains(IncrementMode::PATCH) {
            self.patch = self.patch.saturating_add(1);
        }
    }

    /// Applies a parsed [`Format`] in full: pins any literal fields to their
    /// constants, then increments per the format's mode.
    ///
    /// The parser guarantees a field is never both pinned and selected, so the
    /// two steps cannot fight over a field.
    pub fn apply(&mut self, format: &Format, today: &Date) {
        let literals = format.literals();
        if let Some(major) = literals.major {
            self.set_major(major);
        }
        if let Some(minor) = literals.minor {
            self.set_minor(minor);
        }
        if let Some(build) = literals.build {
            self.set_build(build);
        }
        if let Some(patch) = literals.patch {
            self.set_patch(patch);
        }
        self.increment(format.mode(), today);
    }

    /// Decodes the build field back into the calendar date it encodes, per
    /// the configured scheme. See [`decode`](crate::decode) for the rules.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidBuildEncoding`] if the stored build value
    /// does not decode to a valid date. This is recoverable; treat it as "no
    /// date" or abort as suits the caller.
    pub fn to_date(&self, today: &Date) -> Result<Option<NaiveDate>, CodecError> {
        codec::decode(self.scheme, self.base_year, self.build, today)
    }
}

impl PartialEq for VersionInfo {
    /// Equality is over the four numeric fields only; the base year and
    /// scheme are stamping settings, not part of the version's identity.
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.build == other.build
            && self.patch == other.patch
    }
}

impl Eq for VersionInfo {}

impl Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.patch
        )
    }
}

impl FromStr for VersionInfo {
    type Err = VersionError;

    /// Parses a `major.minor.build.patch` string. The base year and scheme
    /// are not part of the textual form and default to zero/`Simple`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || VersionError::Syntax {
            version_string: s.to_owned(),
        };

        let fields: Vec<&str> = s.split('.').collect();
        let [major, minor, build, patch]: [&str; 4] =
            fields.try_into().map_err(|_| syntax())?;

        Ok(VersionInfo {
            major: major.parse().map_err(|_| syntax())?,
            minor: minor.parse().map_err(|_| syntax())?,
            build: build.parse().map_err(|_| syntax())?,
            patch: patch.parse().map_err(|_| syntax())?,
            ..VersionInfo::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn today() -> Date {
        Date::explicit(2017, 11, 22).unwrap()
    }

    #[test]
    fn test_increment_none_is_identity() {
        let mut version = VersionInfo::new(1, 2, 3, 4, 2013, IncrementType::ByYears);
        let before = version;
        version.increment(IncrementMode::empty(), &today());
        assert_eq!(before, version);
    }

    #[test]
    fn test_increment_simple_build() {
        let mut version = VersionInfo::new(0, 0, 7, 0, 0, IncrementType::Simple);
        version.increment(IncrementMode::BUILD, &today());
        assert_eq!(8, version.build());
    }

    #[test]
    fn test_increment_simple_build_saturates() {
        let mut version = VersionInfo::new(0, 0, u32::MAX, 0, 0, IncrementType::Simple);
        version.increment(IncrementMode::BUILD, &today());
        assert_eq!(u32::MAX, version.build());
    }

    #[test]
    fn test_increment_build_replaces_under_date_schemes() {
        let mut version = VersionInfo::new(1, 2, 999, 4, 2013, IncrementType::ByYears);
        version.increment(IncrementMode::BUILD, &today());
        assert_eq!(41122, version.build());

        version.set_scheme(IncrementType::ByDate);
        version.increment(IncrementMode::BUILD, &today());
        assert_eq!(20171122, version.build());
    }

    /// Every subset of fields touches exactly the fields it names.
    #[test]
    fn test_increment_touches_only_selected_fields() {
        let flags = [
            IncrementMode::MAJOR,
            IncrementMode::MINOR,
            IncrementMode::BUILD,
            IncrementMode::PATCH,
        ];

        for subset in flags.iter().powerset() {
            let mode = subset
                .into_iter()
                .fold(IncrementMode::empty(), |acc, flag| acc | *flag);

            let mut version = VersionInfo::new(1, 2, 3, 4, 0, IncrementType::Simple);
            version.increment(mode, &today());

            let expect = |flag: IncrementMode, base: u32| {
                if mode.contains(flag) {
                    base + 1
                } else {
                    base
                }
            };
            assert_eq!(expect(IncrementMode::MAJOR, 1), version.major());
            assert_eq!(expect(IncrementMode::MINOR, 2), version.minor());
            assert_eq!(expect(IncrementMode::BUILD, 3), version.build());
            assert_eq!(expect(IncrementMode::PATCH, 4), version.patch());
        }
    }

    #[test]
    fn test_saturation_on_major_minor_patch() {
        let mut version =
            VersionInfo::new(u32::MAX, u32::MAX, 0, u32::MAX, 0, IncrementType::Simple);
        version.increment(
            IncrementMode::MAJOR | IncrementMode::MINOR | IncrementMode::PATCH,
            &today(),
        );
        assert_eq!(u32::MAX, version.major());
        assert_eq!(u32::MAX, version.minor());
        assert_eq!(u32::MAX, version.patch());
    }

    #[test]
    fn test_apply_pins_literals_then_increments() {
        let mut version = VersionInfo::new(1, 2, 3, 4, 0, IncrementType::Simple);
        let format: Format = "10.*.+.*".parse().unwrap();
        version.apply(&format, &today());
        assert_eq!(10, version.major());
        assert_eq!(2, version.minor());
        assert_eq!(4, version.build());
        assert_eq!(4, version.patch());
    }

    #[test]
    fn test_to_date_by_years() {
        let version = VersionInfo::new(0, 0, 41122, 0, 2013, IncrementType::ByYears);
        assert_eq!(
            Ok(NaiveDate::from_ymd_opt(2017, 11, 22)),
            version.to_date(&today())
        );
    }

    #[test]
    fn test_to_date_by_date_ignores_base_year_value() {
        for base_year in [1970, 2013] {
            let version = VersionInfo::new(0, 0, 20171122, 0, base_year, IncrementType::ByDate);
            assert_eq!(
                Ok(NaiveDate::from_ymd_opt(2017, 11, 22)),
                version.to_date(&today())
            );
        }
    }

    #[test]
    fn test_to_date_by_months() {
        let version = VersionInfo::new(0, 0, 1121, 0, 2017, IncrementType::ByMonths);
        assert_eq!(
            Ok(NaiveDate::from_ymd_opt(2017, 11, 21)),
            version.to_date(&today())
        );
    }

    #[test]
    fn test_to_date_unset_base_year_is_empty() {
        let version = VersionInfo::new(0, 0, 20171122, 0, 0, IncrementType::ByDate);
        assert_eq!(Ok(None), version.to_date(&today()));
    }

    #[test]
    fn test_display_and_from_str() {
        let version = VersionInfo::new(1, 2, 3, 4, 2017, IncrementType::Simple);
        assert_eq!("1.2.3.4", version.to_string());

        let parsed: VersionInfo = "1.2.3.4".parse().unwrap();
        assert_eq!(version, parsed);
        assert_eq!(0, parsed.base_year());
        assert_eq!(IncrementType::Simple, parsed.scheme());
    }

    #[test]
    fn test_from_str_rejects_bad_shapes() {
        for input in ["", "1.2.3", "1.2.3.4.5", "1.2.x.4", "1.2..4", "-1.2.3.4"] {
            assert_eq!(
                Err(VersionError::Syntax {
                    version_string: input.to_owned()
                }),
                input.parse::<VersionInfo>()
            );
        }
    }

    #[test]
    fn test_eq_ignores_stamping_settings() {
        let a = VersionInfo::new(1, 2, 3, 4, 2013, IncrementType::ByYears);
        let b = VersionInfo::new(1, 2, 3, 4, 0, IncrementType::Simple);
        assert_eq!(a, b);
        let c = VersionInfo::new(1, 2, 3, 5, 2013, IncrementType::ByYears);
        assert_ne!(a, c);
    }
}
