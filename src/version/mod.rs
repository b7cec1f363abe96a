use crate::error::{Result, VersionError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub mod number;
pub mod parser;

pub use number::VersionNumber;
pub use parser::{VersionParser, parse_version};

/// A release identifier of the form `YYYY.M.RELEASE [LTS] BUILD N`.
///
/// Values are immutable once built. Ordering compares year, month and
/// release, then puts LTS above non-LTS, and only then compares builds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    year: VersionNumber,
    month: VersionNumber,
    release_id: VersionNumber,
    lts: bool,
    build_id: VersionNumber,
}

/// The (year, month, release) triple that names a release independent of
/// its LTS status and build number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleasePoint {
    pub year: VersionNumber,
    pub month: VersionNumber,
    pub release_id: VersionNumber,
}

impl Version {
    pub fn new(
        year: impl Into<VersionNumber>,
        month: impl Into<VersionNumber>,
        release_id: impl Into<VersionNumber>,
        lts: bool,
        build_id: impl Into<VersionNumber>,
    ) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            release_id: release_id.into(),
            lts,
            build_id: build_id.into(),
        }
    }

    pub fn builder() -> VersionBuilder {
        VersionBuilder::default()
    }

    pub fn year(&self) -> &VersionNumber {
        &self.year
    }

    pub fn month(&self) -> &VersionNumber {
        &self.month
    }

    pub fn release_id(&self) -> &VersionNumber {
        &self.release_id
    }

    pub fn is_lts(&self) -> bool {
        self.lts
    }

    pub fn build_id(&self) -> &VersionNumber {
        &self.build_id
    }

    pub fn release_point(&self) -> ReleasePoint {
        ReleasePoint {
            year: self.year.clone(),
            month: self.month.clone(),
            release_id: self.release_id.clone(),
        }
    }

    /// Renders the release without its build number, e.g. `2023.01.5 LTS`.
    pub fn to_release_string(&self) -> String {
        let marker = if self.lts { " LTS" } else { "" };
        format!(
            "{:0>4}.{:0>2}.{}{marker}",
            self.year, self.month, self.release_id
        )
    }

    pub fn is_above(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    pub fn is_below(&self, other: &Version) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Same year, month, release and LTS flag. The build number is ignored.
    pub fn is_identical_release(&self, other: &Version) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.release_id == other.release_id
            && self.lts == other.lts
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }

        // At the same release point an LTS build always ranks above a
        // non-LTS build, whatever the build numbers are.
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.cmp(&other.month))
            .then_with(|| self.release_id.cmp(&other.release_id))
            .then_with(|| self.lts.cmp(&other.lts))
            .then_with(|| self.build_id.cmp(&other.build_id))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        parse_version(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.lts { " LTS " } else { " " };
        write!(
            f,
            "{:0>4}.{:0>2}.{}{marker}BUILD {}",
            self.year, self.month, self.release_id, self.build_id
        )
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_version(&s).map_err(serde::de::Error::custom)
    }
}

/// Field-by-field construction for callers that already hold the components.
/// Unset numbers default to zero and `lts` to false.
#[derive(Debug, Clone, Default)]
pub struct VersionBuilder {
    year: VersionNumber,
    month: VersionNumber,
    release_id: VersionNumber,
    lts: bool,
    build_id: VersionNumber,
}

impl VersionBuilder {
    pub fn year(mut self, year: impl Into<VersionNumber>) -> Self {
        self.year = year.into();
        self
    }

    pub fn month(mut self, month: impl Into<VersionNumber>) -> Self {
        self.month = month.into();
        self
    }

    pub fn release_id(mut self, release_id: impl Into<VersionNumber>) -> Self {
        self.release_id = release_id.into();
        self
    }

    pub fn lts(mut self, lts: bool) -> Self {
        self.lts = lts;
        self
    }

    pub fn build_id(mut self, build_id: impl Into<VersionNumber>) -> Self {
        self.build_id = build_id.into();
        self
    }

    pub fn build(self) -> Version {
        Version {
            year: self.year,
            month: self.month,
            release_id: self.release_id,
            lts: self.lts,
            build_id: self.build_id,
        }
    }
}
