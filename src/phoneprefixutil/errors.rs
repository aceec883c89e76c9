// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use thiserror::Error;

use super::enums::ErrorKind;
use crate::string_util::join_alternatives;

/// Total digit counts a number may have for one candidate, i.e. the digits
/// already consumed by the prefix plus each permitted subscriber length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExpectedLengths(Vec<usize>);

impl ExpectedLengths {
    pub(crate) fn new(prefix_len: usize, local_lengths: &[usize]) -> Self {
        Self(local_lengths.iter().map(|len| prefix_len + len).collect())
    }

    pub fn min(&self) -> Option<usize> {
        self.0.first().copied()
    }

    pub fn max(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl fmt::Display for ExpectedLengths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_alternatives(&self.0))
    }
}

/// Reasons a number fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No phone number given")]
    InvalidInput,

    #[error("Unknown country calling code")]
    UnknownPrefix,

    #[error("+{prefix} ({name}) is a reserved calling code and has no dialable numbers")]
    ReservedUnsupported { prefix: String, name: String },

    #[error("The number is too short for {name}: it must have {expected} digits")]
    TooShort { name: String, expected: ExpectedLengths },

    #[error("The number is too long for {name}: it must have {expected} digits")]
    TooLong { name: String, expected: ExpectedLengths },

    #[error("The number has a wrong length for {name}: it must have {expected} digits")]
    WrongLength { name: String, expected: ExpectedLengths },

    #[error("The number does not belong to a country")]
    NotACountryCode,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidInput => ErrorKind::InvalidInput,
            ValidationError::UnknownPrefix => ErrorKind::UnknownPrefix,
            ValidationError::ReservedUnsupported { .. } => ErrorKind::ReservedUnsupported,
            ValidationError::TooShort { .. } => ErrorKind::TooShort,
            ValidationError::TooLong { .. } => ErrorKind::TooLong,
            ValidationError::WrongLength { .. } => ErrorKind::WrongLength,
            ValidationError::NotACountryCode => ErrorKind::NotACountryCode,
        }
    }

    /// Permitted total digit counts, for length failures.
    pub fn expected_lengths(&self) -> Option<&ExpectedLengths> {
        match self {
            ValidationError::TooShort { expected, .. }
            | ValidationError::TooLong { expected, .. }
            | ValidationError::WrongLength { expected, .. } => Some(expected),
            _ => None,
        }
    }
}
