// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::{MatchMode, ParserConfig};
use crate::error::{Result, VersionError};
use crate::version::{Version, VersionNumber};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// `<year>.<month>.<release> [LTS ]*BUILD <build>`
///
/// The separator after `LTS` is ASCII whitespace only.
const VERSION_PATTERN: &str = concat!(
    r"(?P<year>[0-9]+)\.(?P<month>[0-9]{1,2})\.(?P<release>[0-9]+) ",
    r"(?P<lts>(?:LTS[ \t\n\x0B\x0C\r])*)",
    r"BUILD (?P<build>[0-9]+)",
);

static FIND_REGEX: OnceLock<Regex> = OnceLock::new();
static FULL_REGEX: OnceLock<Regex> = OnceLock::new();

fn find_regex() -> &'static Regex {
    FIND_REGEX.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

fn full_regex() -> &'static Regex {
    FULL_REGEX.get_or_init(|| {
        Regex::new(&format!("^(?:{VERSION_PATTERN})$")).expect("version pattern is valid")
    })
}

pub struct VersionParser<'a> {
    config: &'a ParserConfig,
}

impl<'a> VersionParser<'a> {
    pub fn new(config: &'a ParserConfig) -> Self {
        Self { config }
    }

    /// Parses the first `YYYY.M.RELEASE [LTS] BUILD N` sequence in `input`.
    ///
    /// In [`MatchMode::Find`] text around the version is ignored, so
    /// `"Server 2023.1.5 BUILD 10 (git abc)"` parses. In [`MatchMode::Full`]
    /// the whole input must be the version.
    pub fn parse(&self, input: &str) -> Result<Version> {
        log::trace!(
            "Parsing version {input:?} in {:?} mode",
            self.config.match_mode
        );

        let regex = match self.config.match_mode {
            MatchMode::Find => find_regex(),
            MatchMode::Full => full_regex(),
        };

        let Some(captures) = regex.captures(input) else {
            log::debug!("No version found in {input:?}");
            return Err(VersionError::InvalidVersionFormat(input.to_string()));
        };

        let version = Version::new(
            capture_number(&captures, "year", input)?,
            capture_number(&captures, "month", input)?,
            capture_number(&captures, "release", input)?,
            captures.name("lts").is_some_and(|m| !m.as_str().is_empty()),
            capture_number(&captures, "build", input)?,
        );

        log::trace!("Parsed {input:?} as {version}");
        Ok(version)
    }
}

/// Parses `input` with the default configuration (find mode).
pub fn parse_version(input: &str) -> Result<Version> {
    let config = ParserConfig::default();
    VersionParser::new(&config).parse(input)
}

fn capture_number(captures: &Captures<'_>, group: &str, input: &str) -> Result<VersionNumber> {
    captures
        .name(group)
        .and_then(|m| VersionNumber::from_digits(m.as_str()))
        .ok_or_else(|| VersionError::InvalidVersionFormat(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_mode() -> ParserConfig {
        ParserConfig {
            match_mode: MatchMode::Full,
        }
    }

    #[test]
    fn test_parse_plain_version() {
        let version = parse_version("2023.1.5 BUILD 10").unwrap();
        assert_eq!(version.year(), &VersionNumber::from(2023u32));
        assert_eq!(version.month(), &VersionNumber::from(1u32));
        assert_eq!(version.release_id(), &VersionNumber::from(5u32));
        assert!(!version.is_lts());
        assert_eq!(version.build_id(), &VersionNumber::from(10u32));
    }

    #[test]
    fn test_parse_lts_version() {
        let version = parse_version("2023.01.5 LTS BUILD 10").unwrap();
        assert!(version.is_lts());
        assert_eq!(version.month(), &VersionNumber::from(1u32));
        assert_eq!(version.to_release_string(), "2023.01.5 LTS");
    }

    #[test]
    fn test_parse_repeated_lts_tokens() {
        let version = parse_version("2023.1.5 LTS LTS BUILD 10").unwrap();
        assert!(version.is_lts());
        assert_eq!(version, parse_version("2023.1.5 LTS BUILD 10").unwrap());
    }

    #[test]
    fn test_lts_token_accepts_ascii_whitespace() {
        for input in [
            "2023.1.5 LTS\tBUILD 10",
            "2023.1.5 LTS\nBUILD 10",
            "2023.1.5 LTS\x0BBUILD 10",
            "2023.1.5 LTS\x0CBUILD 10",
            "2023.1.5 LTS\rBUILD 10",
        ] {
            assert!(parse_version(input).unwrap().is_lts(), "{input:?}");
        }
    }

    #[test]
    fn test_lts_token_rejects_unicode_whitespace() {
        for input in [
            "2023.1.5 LTS\u{00A0}BUILD 10",
            "2023.1.5 LTS\u{2003}BUILD 10",
            "2023.1.5 LTS\u{3000}BUILD 10",
        ] {
            match parse_version(input) {
                Err(VersionError::InvalidVersionFormat(carried)) => assert_eq!(carried, input),
                other => panic!("expected InvalidVersionFormat for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_invalid_input() {
        for input in [
            "not a version",
            "",
            "2023.1.5",
            "2023.1.5 BUILD",
            "2023.1.5 BUILD x",
            "2023.1.5  BUILD 10",
            "2023.1.5 build 10",
            "2023.1.5 lts BUILD 10",
            "2023.123.5 BUILD 1",
            "2023..5 BUILD 1",
            "2023.1.5 LTSBUILD 10",
        ] {
            match parse_version(input) {
                Err(VersionError::InvalidVersionFormat(carried)) => assert_eq!(carried, input),
                other => panic!("expected InvalidVersionFormat for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_find_mode_ignores_surrounding_text() {
        let version = parse_version("Server 2023.1.5 LTS BUILD 10 (git 1a2b3c)").unwrap();
        assert_eq!(version.to_string(), "2023.01.5 LTS BUILD 10");

        let version = parse_version("2023.1.5 BUILD 10-SNAPSHOT").unwrap();
        assert_eq!(version.build_id(), &VersionNumber::from(10u32));
    }

    #[test]
    fn test_full_mode_rejects_surrounding_text() {
        let config = full_mode();
        let parser = VersionParser::new(&config);

        assert!(parser.parse("2023.1.5 LTS BUILD 10").is_ok());
        assert!(parser.parse("Server 2023.1.5 BUILD 10").is_err());
        assert!(parser.parse("2023.1.5 BUILD 10 ").is_err());
        assert!(parser.parse("2023.1.5 BUILD 10\n").is_err());
    }

    #[test]
    fn test_short_year_and_unchecked_month() {
        let version = parse_version("23.13.0 BUILD 0").unwrap();
        assert_eq!(version.year(), &VersionNumber::from(23u32));
        assert_eq!(version.month(), &VersionNumber::from(13u32));
        assert_eq!(version.to_string(), "0023.13.0 BUILD 0");
    }

    #[test]
    fn test_leading_zeros_are_normalized() {
        // month allows at most two digits
        let err = parse_version("02023.001.0005 BUILD 0010").unwrap_err();
        assert!(matches!(err, VersionError::InvalidVersionFormat(_)));

        let version = parse_version("02023.01.0005 BUILD 0010").unwrap();
        assert_eq!(version.to_string(), "2023.01.5 BUILD 10");
    }

    #[test]
    fn test_huge_build_number() {
        let version = parse_version("2023.1.5 BUILD 99999999999999999999999999").unwrap();
        assert_eq!(version.build_id().as_u64(), None);
        assert_eq!(version.build_id().as_str(), "99999999999999999999999999");
        let max_u64 = parse_version("2023.1.5 BUILD 18446744073709551615").unwrap();
        assert!(version.is_above(&max_u64));
    }
}
