//! The increment-mode language: a compact per-field format string such as
//! `*.*.+.*` that tells the engine, for each of the four version fields,
//! whether to hold it, increment it, or pin it to a literal value.

use crate::error::FormatError;
use bitflags::bitflags;
use core::{
    fmt::{self, Display},
    str::FromStr,
};

bitflags! {
    /// The set of version fields selected for incrementing.
    ///
    /// This is an independent flag set: union, intersection, and difference
    /// are pointwise, with [`IncrementMode::empty`] as the identity and
    /// [`IncrementMode::all`] absorbing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct IncrementMode: u8 {
        /// The major field.
        const MAJOR = 1 << 0;
        /// The minor field.
        const MINOR = 1 << 1;
        /// The build field.
        const BUILD = 1 << 2;
        /// The patch field.
        const PATCH = 1 << 3;
    }
}

impl Display for IncrementMode {
    /// Lists the selected field names, e.g. `minor, build, patch`. The empty
    /// set displays as `none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names = [
            (IncrementMode::MAJOR, "major"),
            (IncrementMode::MINOR, "minor"),
            (IncrementMode::BUILD, "build"),
            (IncrementMode::PATCH, "patch"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(", ");
        f.write_str(&names)
    }
}

/// The literal pins produced by parsing a [`Format`]: for each version field,
/// an optional constant it should be set to instead of held or incremented.
///
/// The parser guarantees that a field with a literal never also has its
/// [`IncrementMode`] bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldLiterals {
    /// Literal for the major field.
    pub major: Option<u32>,
    /// Literal for the minor field.
    pub minor: Option<u32>,
    /// Literal for the build field.
    pub build: Option<u32>,
    /// Literal for the patch field.
    pub patch: Option<u32>,
}

/// A parsed increment-format string.
///
/// The grammar is four dot-separated fields, mapping to (major, minor, build,
/// patch) in that order, where each field is one of:
///
/// - `*` — hold the field;
/// - `+` — increment the field;
/// - decimal digits — pin the field to that literal value.
///
/// A literal always wins over incrementing, and a literal that does not fit in
/// a `u32` silently degrades to a hold for that field. Anything else is a
/// [`FormatError::Syntax`].
///
/// # Examples
///
/// ```
/// use buildver::{Format, IncrementMode};
///
/// let format: Format = "*.*.+.*".parse().unwrap();
/// assert_eq!(format.mode(), IncrementMode::BUILD);
/// assert_eq!(format.to_string(), "*.*.+.*");
///
/// let pinned: Format = "10.*.+.*".parse().unwrap();
/// assert_eq!(pinned.literals().major, Some(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Format {
    mode: IncrementMode,
    literals: FieldLiterals,
}

impl Format {
    /// The field-selector bitmask.
    pub fn mode(&self) -> IncrementMode {
        self.mode
    }

    /// The per-field literal pins.
    pub fn literals(&self) -> &FieldLiterals {
        &self.literals
    }
}

/// Resolves one field token, setting `flag` in `mode` for `+` and returning
/// the literal for a digit token. `None` with the bit clear means hold.
fn resolve_field(
    token: &str,
    flag: IncrementMode,
    mode: &mut IncrementMode,
) -> Result<Option<u32>, ()> {
    match token {
        "*" => Ok(None),
        "+" => {
            mode.insert(flag);
            Ok(None)
        }
        digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            // a literal keeps the mode bit clear; an overflowing literal
            // degrades to a plain hold rather than erroring
            Ok(digits.parse().ok())
        }
        _ => Err(()),
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || FormatError::Syntax {
            format_string: s.to_owned(),
        };

        let fields: Vec<&str> = s.split('.').collect();
        let [major, minor, build, patch]: [&str; 4] =
            fields.try_into().map_err(|_| syntax())?;

        let mut mode = IncrementMode::empty();
        let literals = FieldLiterals {
            major: resolve_field(major, IncrementMode::MAJOR, &mut mode).map_err(|_| syntax())?,
            minor: resolve_field(minor, IncrementMode::MINOR, &mut mode).map_err(|_| syntax())?,
            build: resolve_field(build, IncrementMode::BUILD, &mut mode).map_err(|_| syntax())?,
            patch: resolve_field(patch, IncrementMode::PATCH, &mut mode).map_err(|_| syntax())?,
        };

        Ok(Format { mode, literals })
    }
}

impl Display for Format {
    /// Canonicalizes back to the format-string shape: literals print as their
    /// decimal value, then `+` for selected fields, `*` otherwise.
    ///
    /// Round-tripping through [`FromStr`] is guaranteed at the semantic level
    /// only; unusual inputs like zero-padded literals re-print without the
    /// padding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            (self.literals.major, IncrementMode::MAJOR),
            (self.literals.minor, IncrementMode::MINOR),
            (self.literals.build, IncrementMode::BUILD),
            (self.literals.patch, IncrementMode::PATCH),
        ];
        for (i, (literal, flag)) in fields.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match literal {
                Some(value) => write!(f, "{}", value)?,
                None if self.mode.contains(*flag) => f.write_str("+")?,
                None => f.write_str("*")?,
            }
        }
        Ok(())
    }
}
