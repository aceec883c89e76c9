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

use std::collections::BTreeSet;

use log::warn;

use super::{
    errors::InvalidRecordError,
    prefix_record::{PrefixRecord, RecordId},
    reference_data::REFERENCE_RECORDS,
};

/// Immutable list of prefix records. Every record carries a [`RecordId`]
/// equal to its position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<PrefixRecord>,
}

impl Catalog {
    /// Loads the compiled-in reference table.
    pub fn load() -> Self {
        let records = REFERENCE_RECORDS.iter().map(|raw| raw.to_record()).collect();
        match Self::from_records(records) {
            Ok(catalog) => catalog,
            Err(err) => {
                let err_message = format!("Compiled-in prefix table is broken: {}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    /// Builds a catalog from caller-supplied records. Ids are reassigned in
    /// list order.
    pub fn from_records(records: Vec<PrefixRecord>) -> Result<Self, InvalidRecordError> {
        for record in &records {
            check_record(record)?;
        }
        Ok(Self::from_checked_records(records))
    }

    pub(super) fn from_checked_records(mut records: Vec<PrefixRecord>) -> Self {
        for (index, record) in records.iter_mut().enumerate() {
            record.id = RecordId(index);
        }
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PrefixRecord] {
        &self.records
    }

    pub fn get(&self, id: RecordId) -> Option<&PrefixRecord> {
        self.records.get(id.index())
    }

    /// Ids are handed out by this catalog, so indexing can not go out of
    /// bounds for ids stored in its own trie.
    pub(crate) fn record(&self, id: RecordId) -> &PrefixRecord {
        &self.records[id.index()]
    }

    /// All records allocated to the given ISO country, in catalog order.
    pub fn records_for_country<'a>(&'a self, iso_country: &str) -> Vec<&'a PrefixRecord> {
        let found: Vec<_> = self
            .records
            .iter()
            .filter(|record| {
                record
                    .iso_country()
                    .is_some_and(|iso| iso.eq_ignore_ascii_case(iso_country))
            })
            .collect();
        if found.is_empty() {
            warn!("Invalid or unknown country code provided: {}", iso_country);
        }
        found
    }

    /// Sorted, deduplicated calling codes present in the catalog.
    pub fn supported_calling_codes(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(PrefixRecord::country_code)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted, deduplicated ISO country codes present in the catalog.
    pub fn supported_countries(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(PrefixRecord::iso_country)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

pub(super) fn check_record(record: &PrefixRecord) -> Result<(), InvalidRecordError> {
    if record.country_code().is_empty() {
        return Err(InvalidRecordError::EmptyCountryCode {
            name: record.name().to_owned(),
        });
    }
    let prefixes = std::iter::once(record.country_code())
        .chain(record.region_prefixes().iter().map(String::as_str));
    for prefix in prefixes {
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidRecordError::NonDigitPrefix {
                name: record.name().to_owned(),
                prefix: prefix.to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::catalog::{InvalidRecordError, PrefixRecord, RecordId};

    #[test]
    fn ids_follow_list_order() {
        let catalog = Catalog::from_records(vec![
            PrefixRecord::new("46", "Sweden"),
            PrefixRecord::new("47", "Norway"),
        ])
        .unwrap();
        assert_eq!(catalog.records()[1].id(), RecordId(1));
        assert_eq!(catalog.get(RecordId(0)).map(PrefixRecord::name), Some("Sweden"));
        assert!(catalog.get(RecordId(2)).is_none());
    }

    #[test]
    fn rejects_non_digit_prefixes() {
        let err = Catalog::from_records(vec![
            PrefixRecord::new("4a", "Broken"),
        ])
        .unwrap_err();
        assert!(matches!(err, InvalidRecordError::NonDigitPrefix { .. }));

        let err = Catalog::from_records(vec![PrefixRecord::new("", "Empty")]).unwrap_err();
        assert!(matches!(err, InvalidRecordError::EmptyCountryCode { .. }));

        let err = Catalog::from_records(vec![
            PrefixRecord::new("1", "Jamaica").with_region_prefixes(["87-6"]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            InvalidRecordError::NonDigitPrefix {
                name: "Jamaica".to_owned(),
                prefix: "87-6".to_owned()
            }
        );
    }

    #[test]
    fn builtin_table_loads() {
        let catalog = Catalog::load();
        assert!(!catalog.is_empty());
        assert!(catalog.supported_calling_codes().contains(&"46"));
        assert!(catalog.supported_countries().contains(&"SE"));
        assert_eq!(catalog.records_for_country("se").len(), 1);
        assert!(catalog.records_for_country("XX").is_empty());
    }

    #[test]
    fn builtin_local_lengths_are_ascending() {
        for record in Catalog::load().records() {
            assert!(
                record.local_lengths().windows(2).all(|w| w[0] < w[1]),
                "{} has unsorted lengths",
                record.name()
            );
        }
    }
}
