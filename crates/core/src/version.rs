//! Version string tokenizing
//!
//! Parses free-form version strings (`1.2.3`, `1.2.3-23.heger`, `5.7-SNAPSHOT`,
//! `release-candidate`) into a [`VersionRecord`]. Parsing is total: malformed
//! input degrades to "the whole input is the qualifier" instead of failing.
//!
//! The input goes through three passes:
//!
//! 1. split into a numeric prefix (`major[.minor[.patch]]`) and a remainder
//! 2. extract major, minor and patch from the numeric prefix
//! 3. classify the remainder into a build number and a qualifier

use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

/// Structured form of a version string
///
/// Numeric fields default to zero when the corresponding group is missing from
/// the input. The qualifier is `None` both when the input has none and when it
/// would be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct VersionRecord {
    major: u32,
    minor: u32,
    patch: u32,
    build_number: u64,
    qualifier: Option<String>,
}

impl VersionRecord {
    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn build_number(&self) -> u64 {
        self.build_number
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Record holding only a qualifier, used when the input has no usable numeric prefix
    fn qualifier_only(input: &str) -> Self {
        Self {
            qualifier: normalize_qualifier(input),
            ..Self::default()
        }
    }
}

/// Writes a form that [`parse`] reads back into an equal record
///
/// The separator before the qualifier is picked so the remainder lands in the
/// same branch again: a build number of zero is written out when the qualifier
/// itself starts with `-` or `.`, and a qualifier starting with a digit follows
/// a `.`. Records without a numeric prefix print their qualifier alone.
impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeric = (self.major, self.minor, self.patch, self.build_number);
        if let Some(q) = self.qualifier.as_deref() {
            if numeric == (0, 0, 0, 0) && split_version(q).is_none() {
                return write!(f, "{q}");
            }
        }

        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        match self.qualifier.as_deref() {
            None if self.build_number > 0 => write!(f, "-{}", self.build_number),
            None => Ok(()),
            Some(q) if self.build_number > 0 || q.starts_with(['-', '.']) => {
                write!(f, "-{}{q}", self.build_number)
            }
            Some(q) if q.starts_with(|c: char| c.is_ascii_digit()) => write!(f, ".{q}"),
            Some(q) => write!(f, "-{q}"),
        }
    }
}

impl From<&str> for VersionRecord {
    fn from(version: &str) -> Self {
        parse(version)
    }
}

impl FromStr for VersionRecord {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse(s))
    }
}

/// How the text after the numeric prefix was classified
///
/// Variants are listed in matching precedence: a remainder that fits more than
/// one shape is always classified by the earliest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remainder<'a> {
    /// `-<digits><rest>`, e.g. `-23.heger`
    Numbered { build: &'a str, rest: &'a str },
    /// `.<rest>`, e.g. `.Final`
    Dotted(&'a str),
    /// `-<rest>` where rest does not start with a digit, e.g. `-SNAPSHOT`
    Dashed(&'a str),
    /// Anything else, including the empty string
    Bare(&'a str),
}

impl<'a> Remainder<'a> {
    /// Classify a remainder using the first matcher that accepts it
    pub fn classify(remainder: &'a str) -> Self {
        const MATCHERS: [fn(&str) -> Option<Remainder<'_>>; 4] =
            [match_numbered, match_dotted, match_dashed, match_bare];

        MATCHERS
            .iter()
            .find_map(|matcher| matcher(remainder))
            .unwrap_or(Remainder::Bare(remainder))
    }

    /// Build number digits, if this shape carries one
    pub fn build(&self) -> Option<&'a str> {
        match *self {
            Remainder::Numbered { build, .. } => Some(build),
            _ => None,
        }
    }

    /// Candidate qualifier text, before normalization
    pub fn qualifier(&self) -> &'a str {
        match *self {
            Remainder::Numbered { rest, .. } => rest,
            Remainder::Dotted(rest) | Remainder::Dashed(rest) | Remainder::Bare(rest) => rest,
        }
    }
}

fn match_numbered(remainder: &str) -> Option<Remainder<'_>> {
    static NUMBERED: OnceLock<Regex> = OnceLock::new();
    let re = NUMBERED.get_or_init(|| Regex::new(r"^-([0-9]+)(.*)$").unwrap());

    let caps = re.captures(remainder)?;
    Some(Remainder::Numbered {
        build: caps.get(1)?.as_str(),
        rest: caps.get(2).map_or("", |m| m.as_str()),
    })
}

fn match_dotted(remainder: &str) -> Option<Remainder<'_>> {
    static DOTTED: OnceLock<Regex> = OnceLock::new();
    let re = DOTTED.get_or_init(|| Regex::new(r"^\.(.*)$").unwrap());

    re.captures(remainder)
        .and_then(|caps| caps.get(1))
        .map(|m| Remainder::Dotted(m.as_str()))
}

fn match_dashed(remainder: &str) -> Option<Remainder<'_>> {
    static DASHED: OnceLock<Regex> = OnceLock::new();
    let re = DASHED.get_or_init(|| Regex::new(r"^-(.*)$").unwrap());

    re.captures(remainder)
        .and_then(|caps| caps.get(1))
        .map(|m| Remainder::Dashed(m.as_str()))
}

fn match_bare(remainder: &str) -> Option<Remainder<'_>> {
    static BARE: OnceLock<Regex> = OnceLock::new();
    let re = BARE.get_or_init(|| Regex::new(r"^(.*)$").unwrap());

    re.captures(remainder)
        .and_then(|caps| caps.get(1))
        .map(|m| Remainder::Bare(m.as_str()))
}

/// Split a version string into its numeric prefix and the remainder
///
/// Returns `None` when the input does not start with a digit, or when the
/// remainder spans a line break.
pub fn split_version(version: &str) -> Option<(&str, &str)> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let re = DIGITS.get_or_init(|| {
        Regex::new(r"^(([0-9]+)(\.([0-9]+)(\.([0-9]+))?)?)(.*)$").unwrap()
    });

    let caps = re.captures(version)?;
    let prefix = caps.get(1)?.as_str();
    let remainder = caps.get(7).map_or("", |m| m.as_str());
    Some((prefix, remainder))
}

/// Numeric core extracted from a `major[.minor[.patch]]` prefix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericPrefix {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Overflowing digit run in a numeric group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overflow(pub String);

/// Extract major, minor and patch from a numeric prefix
///
/// Groups missing from the prefix stay at zero. A prefix that is not of the
/// `major[.minor[.patch]]` shape sets nothing.
pub fn parse_numeric_prefix(prefix: &str) -> Result<NumericPrefix, Overflow> {
    static MAJOR_MINOR_PATCH: OnceLock<Regex> = OnceLock::new();
    let re = MAJOR_MINOR_PATCH
        .get_or_init(|| Regex::new(r"^(([0-9]+)(\.([0-9]+)(\.([0-9]+))?)?)$").unwrap());

    let mut numeric = NumericPrefix::default();
    let Some(caps) = re.captures(prefix) else {
        log::trace!("numeric prefix {prefix:?} did not match, leaving defaults");
        return Ok(numeric);
    };

    if let Some(major) = caps.get(2) {
        numeric.major = parse_group(major.as_str())?;
    }
    if let Some(minor) = caps.get(4) {
        numeric.minor = parse_group(minor.as_str())?;
    }
    if let Some(patch) = caps.get(6) {
        numeric.patch = parse_group(patch.as_str())?;
    }

    Ok(numeric)
}

fn parse_group<T: FromStr>(digits: &str) -> Result<T, Overflow> {
    digits.parse().map_err(|_| Overflow(digits.to_string()))
}

/// Blank candidates are not meaningful qualifiers
fn normalize_qualifier(candidate: &str) -> Option<String> {
    if candidate.trim().is_empty() {
        None
    } else {
        Some(candidate.to_string())
    }
}

/// Parse a free-form version string
///
/// Never fails. Input that does not start with a numeric prefix, or whose
/// numeric groups overflow, comes back as a record whose qualifier is the
/// whole input and whose numeric fields are zero.
///
/// ```
/// use verinfo_core::version::parse;
///
/// let version = parse("1.2.3-23.heger");
/// assert_eq!(version.major(), 1);
/// assert_eq!(version.build_number(), 23);
/// assert_eq!(version.qualifier(), Some(".heger"));
/// ```
pub fn parse(version: &str) -> VersionRecord {
    let Some((prefix, remainder)) = split_version(version) else {
        log::debug!("{version:?} has no numeric prefix, using it as qualifier");
        return VersionRecord::qualifier_only(version);
    };

    let numeric = match parse_numeric_prefix(prefix) {
        Ok(numeric) => numeric,
        Err(Overflow(digits)) => {
            log::debug!("{version:?} has overflowing group {digits:?}, using it as qualifier");
            return VersionRecord::qualifier_only(version);
        }
    };

    let shape = Remainder::classify(remainder);
    log::trace!("{version:?} remainder {remainder:?} classified as {shape:?}");

    let build_number = match shape.build().map(parse_group::<u64>).transpose() {
        Ok(build) => build.unwrap_or(0),
        Err(Overflow(digits)) => {
            log::debug!("{version:?} has overflowing build number {digits:?}, using it as qualifier");
            return VersionRecord::qualifier_only(version);
        }
    };

    VersionRecord {
        major: numeric.major,
        minor: numeric.minor,
        patch: numeric.patch,
        build_number,
        qualifier: normalize_qualifier(shape.qualifier()),
    }
}
