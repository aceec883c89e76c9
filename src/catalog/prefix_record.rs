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

/// Stable identifier of a record inside the [`Catalog`](super::Catalog) it
/// was loaded into. It is the record's index in catalog order, so two records
/// with identical contents still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RecordId(pub(crate) usize);

impl RecordId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single calling-code allocation.
///
/// A record is reachable through one digit path per region prefix
/// alternative: `country_code + region_prefix`. Several records may share a
/// country code (the North American Numbering Plan shares `1` between
/// dozens of territories), in which case the region prefixes tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRecord {
    pub(crate) id: RecordId,
    country_code: String,
    region_prefixes: Vec<String>,
    name: String,
    iso_country: Option<String>,
    international_access_prefix: Option<String>,
    national_trunk_prefix: Option<String>,
    local_lengths: Vec<usize>,
    rank: u32,
}

impl PrefixRecord {
    /// Creates a record with no region prefix, no permitted local lengths
    /// (reserved) and rank 0. Use the `with_*` methods to fill in the rest.
    pub fn new(country_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: RecordId::default(),
            country_code: country_code.into(),
            region_prefixes: Vec::new(),
            name: name.into(),
            iso_country: None,
            international_access_prefix: None,
            national_trunk_prefix: None,
            local_lengths: Vec::new(),
            rank: 0,
        }
    }

    pub fn with_region_prefixes<I, S>(mut self, region_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.region_prefixes = region_prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_iso_country(mut self, iso_country: impl Into<String>) -> Self {
        self.iso_country = Some(iso_country.into());
        self
    }

    /// Sets the administrative dialing prefixes. They are carried for display
    /// only and never take part in matching.
    pub fn with_dialing_prefixes(
        mut self,
        international_access_prefix: Option<&str>,
        national_trunk_prefix: Option<&str>,
    ) -> Self {
        self.international_access_prefix = international_access_prefix.map(str::to_owned);
        self.national_trunk_prefix = national_trunk_prefix.map(str::to_owned);
        self
    }

    /// Sets the permitted subscriber number lengths. The list is sorted and
    /// deduplicated.
    pub fn with_local_lengths(mut self, local_lengths: impl IntoIterator<Item = usize>) -> Self {
        let mut lengths: Vec<usize> = local_lengths.into_iter().collect();
        lengths.sort_unstable();
        lengths.dedup();
        self.local_lengths = lengths;
        self
    }

    pub fn with_rank(mut self, rank: u32) -> Self {
        self.rank = rank;
        self
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Region prefix alternatives. Empty when the country code alone
    /// identifies the record.
    pub fn region_prefixes(&self) -> &[String] {
        &self.region_prefixes
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Two-letter country identifier, `None` for non-national allocations
    /// such as international freephone or satellite services.
    pub fn iso_country(&self) -> Option<&str> {
        self.iso_country.as_deref()
    }

    pub fn international_access_prefix(&self) -> Option<&str> {
        self.international_access_prefix.as_deref()
    }

    pub fn national_trunk_prefix(&self) -> Option<&str> {
        self.national_trunk_prefix.as_deref()
    }

    /// Ascending, deduplicated list of permitted subscriber number lengths.
    pub fn local_lengths(&self) -> &[usize] {
        &self.local_lengths
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    /// Returns true when the code is allocated but can never validate.
    pub fn is_reserved(&self) -> bool {
        self.local_lengths.is_empty()
    }

    pub fn is_country(&self) -> bool {
        self.iso_country.is_some()
    }

    /// Every full digit path under which this record is reachable, in
    /// region prefix order.
    pub fn digit_paths(&self) -> impl Iterator<Item = String> + '_ {
        let alternatives: &[String] = if self.region_prefixes.is_empty() {
            std::slice::from_ref(&EMPTY_REGION_PREFIX)
        } else {
            &self.region_prefixes
        };
        alternatives
            .iter()
            .map(|region_prefix| fast_cat::concat_str!(&self.country_code, region_prefix))
    }
}

static EMPTY_REGION_PREFIX: String = String::new();
