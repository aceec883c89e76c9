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

use std::num::ParseIntError;

use thiserror::Error;

/// A record that can not be placed into the prefix trie.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRecordError {
    #[error("Record '{name}' has an empty country code")]
    EmptyCountryCode { name: String },

    #[error("Record '{name}' has a non-digit prefix '{prefix}'")]
    NonDigitPrefix { name: String, prefix: String },
}

#[derive(Debug, PartialEq, Error)]
pub enum CatalogParseError {
    #[error("Line {line_num} has {found} fields, expected {expected}")]
    FieldCount {
        line_num: usize,
        found: usize,
        expected: usize,
    },

    #[error("Line {line_num}: failed to parse number '{value}': {source}")]
    InvalidNumber {
        line_num: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Line {line_num}: {source}")]
    InvalidRecord {
        line_num: usize,
        #[source]
        source: InvalidRecordError,
    },
}
