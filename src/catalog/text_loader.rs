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

use std::str::FromStr;

use super::{
    catalog::{check_record, Catalog},
    errors::CatalogParseError,
    prefix_record::PrefixRecord,
};

const FIELD_SEPARATOR: char = '|';
const LIST_SEPARATOR: char = ',';
const FIELD_COUNT: usize = 8;

impl Catalog {
    /// Parses a text catalog, one record per line:
    ///
    /// ```text
    /// # code|region prefixes|name|iso|international access|trunk|local lengths|rank
    /// 46||Sweden|SE|00|0|7,8,9,10,12,13|10400
    /// 1|876,658|Jamaica|JM|011|1|7|2830
    /// 881||Global Mobile Satellite System|||||0
    /// ```
    ///
    /// Blank lines and lines starting with `#` are skipped. Empty optional
    /// fields mean "absent".
    pub fn parse(text: &str) -> Result<Self, CatalogParseError> {
        let mut records = Vec::new();
        for (index, raw_line) in text.lines().enumerate() {
            let line_num = index + 1;
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let record = parse_line(line, line_num)?;
            check_record(&record)
                .map_err(|source| CatalogParseError::InvalidRecord { line_num, source })?;
            records.push(record);
        }
        Ok(Catalog::from_checked_records(records))
    }
}

fn parse_line(line: &str, line_num: usize) -> Result<PrefixRecord, CatalogParseError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [code, regions, name, iso, idd, trunk, lengths, rank] = fields[..] else {
        return Err(CatalogParseError::FieldCount {
            line_num,
            found: fields.len(),
            expected: FIELD_COUNT,
        });
    };

    let local_lengths = split_list(lengths)
        .map(|value| parse_number::<usize>(value, line_num))
        .collect::<Result<Vec<_>, _>>()?;
    let rank = if rank.is_empty() {
        0
    } else {
        parse_number::<u32>(rank, line_num)?
    };

    let record = PrefixRecord::new(code, name)
        .with_region_prefixes(split_list(regions))
        .with_dialing_prefixes(non_empty(idd), non_empty(trunk))
        .with_local_lengths(local_lengths)
        .with_rank(rank);
    Ok(match non_empty(iso) {
        Some(iso) => record.with_iso_country(iso),
        None => record,
    })
}

fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

fn non_empty(field: &str) -> Option<&str> {
    (!field.is_empty()).then_some(field)
}

fn parse_number<T>(value: &str, line_num: usize) -> Result<T, CatalogParseError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|source| CatalogParseError::InvalidNumber {
        line_num,
        value: value.to_owned(),
        source,
    })
}
