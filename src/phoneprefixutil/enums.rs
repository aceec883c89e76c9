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

use strum::{EnumIter, IntoStaticStr};

/// Stable, machine readable category of a [`ValidationError`].
///
/// UI layers can use [`ErrorKind::code`] to get a snake_case code, e.g. to
/// pick a localized message instead of the English `Display` text.
///
/// [`ValidationError`]: super::errors::ValidationError
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// **No input.**
    /// The number was absent or blank.
    InvalidInput,
    /// **Unknown calling code.**
    /// No catalog entry's digit path is a prefix of the number.
    UnknownPrefix,
    /// **Reserved calling code.**
    /// The prefix is allocated but has no dialable numbers.
    ReservedUnsupported,
    /// **Too few digits.**
    /// Fewer subscriber digits than the shortest permitted length.
    TooShort,
    /// **Too many digits.**
    /// More subscriber digits than the longest permitted length.
    TooLong,
    /// **Length not permitted.**
    /// Between the shortest and longest permitted lengths, but not one of them.
    WrongLength,
    /// **Not a country.**
    /// Every valid candidate is a non-national allocation.
    NotACountryCode,
}

/// Outcome of testing the subscriber digit count of a single candidate.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The candidate has no permitted lengths at all.
    ReservedUnsupported,
    TooShort,
    TooLong,
    /// Inside the permitted range but not an exact permitted length.
    WrongLength,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        self.into()
    }
}

impl From<RejectionReason> for ErrorKind {
    fn from(value: RejectionReason) -> Self {
        match value {
            RejectionReason::ReservedUnsupported => ErrorKind::ReservedUnsupported,
            RejectionReason::TooShort => ErrorKind::TooShort,
            RejectionReason::TooLong => ErrorKind::TooLong,
            RejectionReason::WrongLength => ErrorKind::WrongLength,
        }
    }
}
