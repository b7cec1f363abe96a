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

mod context;

pub use context::ErrorContext;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionError {
    /// The input contained no `YYYY.M.RELEASE [LTS] BUILD N` sequence.
    /// Carries the original input.
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, VersionError>;
