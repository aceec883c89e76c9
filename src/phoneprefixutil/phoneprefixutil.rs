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

use log::trace;

use super::{
    errors::ValidationError,
    helper_functions::{display_prefix, normalize_digits, rejection_error, test_local_length},
    helper_types::{PrefixMatch, ValidatedNumber},
    prefix_regexps::PrefixRegExps,
    prefix_trie::PrefixTrie,
};
use crate::{
    catalog::{Catalog, PrefixRecord},
    interfaces::MatcherApi,
    string_util::ascii_digits,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ValidationError>;

pub struct PhonePrefixUtil {
    /// Prefix matching over the trie built from `catalog`.
    matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions.
    reg_exps: PrefixRegExps,

    /// Records every candidate id returned by `matcher_api` refers to.
    catalog: Catalog,
}

impl PhonePrefixUtil {
    /// Engine over the built-in reference catalog.
    pub fn new() -> Self {
        Self::new_for_catalog(Catalog::load())
    }

    pub fn new_for_catalog(catalog: Catalog) -> Self {
        Self {
            matcher_api: Box::new(PrefixTrie::build(&catalog)),
            reg_exps: PrefixRegExps::new(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Convenience method to get a sorted list of the calling codes the
    /// catalog knows about.
    pub fn get_supported_calling_codes(&self) -> Vec<&str> {
        self.catalog.supported_calling_codes()
    }

    /// Sorted list of ISO 3166-1 alpha-2 codes present in the catalog.
    pub fn get_supported_countries(&self) -> Vec<&str> {
        self.catalog.supported_countries()
    }

    /// Returns the records the input could belong to, highest rank first, or
    /// `None` if the input contains no digits. Unicode decimal digits are not
    /// normalized here so that `next_index` stays a valid offset into `input`.
    ///
    /// With `exact_only` the result holds only records whose whole prefix was
    /// found in the input and may be empty.
    pub fn identify<'a>(&'a self, input: &str, exact_only: bool) -> Option<PrefixMatch<'a>> {
        let found = self.matcher_api.match_prefix(input, exact_only)?;
        Some(PrefixMatch {
            next_index: found.next_index,
            candidates: found
                .candidates
                .into_iter()
                .map(|id| self.catalog.record(id))
                .collect(),
        })
    }

    /// Checks whether a string could be a phone number at all: an optional
    /// plus sign followed by digits and phone punctuation only.
    pub fn is_viable_phone_number(&self, input: &str) -> bool {
        self.reg_exps.viable_phone_number_pattern.is_match(input)
    }

    /// Like [`validate`](Self::validate), with `None` reported as
    /// [`ValidationError::InvalidInput`].
    pub fn validate_optional<'a>(&'a self, input: Option<&str>) -> Result<ValidatedNumber<'a>> {
        match input {
            Some(input) => self.validate(input),
            None => Err(ValidationError::InvalidInput),
        }
    }

    /// Splits a number into its prefix and subscriber digits and checks the
    /// subscriber length against every candidate for the prefix.
    ///
    /// All accepted candidates are returned, highest rank first. When none
    /// is accepted the rejection of the last candidate checked is returned.
    pub fn validate<'a>(&'a self, input: &str) -> Result<ValidatedNumber<'a>> {
        let normalized = normalize_digits(input);
        if normalized.trim().is_empty() {
            return Err(ValidationError::InvalidInput);
        }
        let found = self
            .matcher_api
            .match_prefix(&normalized, true)
            .ok_or(ValidationError::UnknownPrefix)?;
        if found.candidates.is_empty() {
            trace!("No calling code matches '{}'", input);
            return Err(ValidationError::UnknownPrefix);
        }

        let prefix_digits = ascii_digits(&normalized[..found.next_index]);
        let local_digits = ascii_digits(&normalized[found.next_index..]);

        let mut accepted = Vec::with_capacity(found.candidates.len());
        let mut last_rejection = None;
        for id in found.candidates {
            let record = self.catalog.record(id);
            match test_local_length(local_digits.len(), record) {
                Ok(()) => accepted.push(record),
                Err(reason) => {
                    trace!(
                        "Rejected {} for '{}': {:?}",
                        record.name(),
                        input,
                        reason
                    );
                    last_rejection = Some(rejection_error(reason, record, &prefix_digits));
                }
            }
        }

        if accepted.is_empty() {
            return Err(last_rejection.unwrap_or(ValidationError::UnknownPrefix));
        }
        Ok(Self::validated(prefix_digits, local_digits, accepted))
    }

    /// Validates the number and keeps only candidates that are countries,
    /// dropping international services and other non-national allocations.
    pub fn validate_country_number<'a>(&'a self, input: &str) -> Result<ValidatedNumber<'a>> {
        let validated = self.validate(input)?;
        let countries: Vec<&PrefixRecord> = validated
            .candidates
            .into_iter()
            .filter(|record| record.is_country())
            .collect();
        if countries.is_empty() {
            return Err(ValidationError::NotACountryCode);
        }
        Ok(Self::validated(
            validated.prefix_digits,
            validated.local_digits,
            countries,
        ))
    }

    fn validated<'a>(
        prefix_digits: String,
        local_digits: String,
        candidates: Vec<&'a PrefixRecord>,
    ) -> ValidatedNumber<'a> {
        let display_prefix = match candidates.first() {
            Some(best) => display_prefix(&prefix_digits, best.country_code()),
            None => display_prefix(&prefix_digits, &prefix_digits),
        };
        ValidatedNumber {
            prefix_digits,
            local_digits,
            display_prefix,
            candidates,
        }
    }
}

impl Default for PhonePrefixUtil {
    fn default() -> Self {
        Self::new()
    }
}
