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

use crate::error::VersionError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a VersionError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a VersionError) -> Self {
        let (suggestion, details) = match error {
            VersionError::InvalidVersionFormat(input) => {
                let suggestion = Some(
                    "Version format should be: 'YYYY.M.RELEASE [LTS] BUILD N' (e.g., \
                     '2023.1.5 BUILD 10' or '2023.01.5 LTS BUILD 10')."
                        .to_string(),
                );
                (suggestion, Some(diagnose_format(input)))
            }
            VersionError::ConfigError(msg) => {
                let suggestion =
                    Some("Valid settings: [parser] match_mode = \"find\" | \"full\".".to_string());
                (suggestion, Some(msg.clone()))
            }
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }
}

/// Points at the most likely mistake in an input the grammar rejected.
fn diagnose_format(input: &str) -> String {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return "The version string is empty.".to_string();
    }

    let has_build = trimmed.contains("BUILD");
    let upper = trimmed.to_ascii_uppercase();
    let lowercase_build = !has_build && upper.contains("BUILD");
    let lowercase_lts = !trimmed.contains("LTS") && upper.contains("LTS");
    if lowercase_build || lowercase_lts {
        return format!("Keywords are case-sensitive: use 'LTS' and 'BUILD' in '{input}'.");
    }

    if !has_build {
        return format!("Missing 'BUILD <number>' after the release in '{input}'.");
    }

    if trimmed.matches('.').count() < 2 {
        return format!("Expected '<year>.<month>.<release>' before 'BUILD' in '{input}'.");
    }

    format!("No version found in: '{input}'")
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
