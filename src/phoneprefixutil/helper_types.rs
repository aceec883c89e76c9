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

use crate::catalog::{PrefixRecord, RecordId};

use super::helper_constants::PLUS_SIGN;

/// Matcher output before ids are resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IdMatch {
    pub next_index: usize,
    pub candidates: Vec<RecordId>,
}

/// Result of [`identify`](super::phoneprefixutil::PhonePrefixUtil::identify).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    /// Byte offset in the input just past the last digit of the reported
    /// prefix, so `&input[next_index..]` is what follows the prefix.
    pub next_index: usize,
    /// Candidate records, highest rank first. May be empty in exact mode.
    pub candidates: Vec<&'a PrefixRecord>,
}

/// A number that passed structural validation for at least one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedNumber<'a> {
    /// Digits of the matched calling code and region prefix.
    pub prefix_digits: String,
    /// Subscriber digits after the prefix.
    pub local_digits: String,
    /// Prefix for display, e.g. `+46` or `+1 876`.
    pub display_prefix: String,
    /// Every accepted candidate, highest rank first. Never empty.
    pub candidates: Vec<&'a PrefixRecord>,
}

impl<'a> ValidatedNumber<'a> {
    /// The most probable candidate.
    pub fn best(&self) -> Option<&'a PrefixRecord> {
        self.candidates.first().copied()
    }

    /// The number in E.164 form: `+` followed by all digits.
    pub fn e164(&self) -> String {
        fast_cat::concat_str!(PLUS_SIGN, &self.prefix_digits, &self.local_digits)
    }
}
