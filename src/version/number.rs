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

//! Arbitrary-size non-negative integers for version components.
//!
//! Components are kept as their canonical decimal digits, so a digit run of
//! any length parses without overflow and compares numerically.

use crate::error::{Result, VersionError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionNumber {
    // Canonical form: ASCII digits, no leading zeros, "0" for zero
    digits: String,
}

impl VersionNumber {
    pub fn zero() -> Self {
        Self {
            digits: "0".to_string(),
        }
    }

    /// Builds a number from a run of ASCII digits, dropping leading zeros.
    /// Returns `None` if the run is empty or contains anything but `0-9`.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self {
            digits: digits.to_string(),
        })
    }

    /// Returns the value as `u64` if it fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.digits.parse::<u64>().ok()
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl Default for VersionNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for VersionNumber {
    fn from(value: u64) -> Self {
        Self {
            digits: value.to_string(),
        }
    }
}

impl From<u32> for VersionNumber {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl FromStr for VersionNumber {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_digits(s).ok_or_else(|| VersionError::InvalidVersionFormat(s.to_string()))
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        // Without leading zeros, a longer digit string is a larger number
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Honors width, fill and alignment, so `{:0>4}` zero-pads.
impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.digits)
    }
}

impl Serialize for VersionNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.digits)
    }
}

impl<'de> Deserialize<'de> for VersionNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_digits(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid version number: {s}")))
    }
}
