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

use regex::Regex;

use super::helper_constants::{DIGITS, PLUS_CHARS, VALID_PUNCTUATION};

pub(super) struct PrefixRegExps {
    /// Optional plus signs, then digits mixed with phone punctuation only.
    /// At least one digit is required. Letters other than the carrier
    /// placeholder 'x' make a number non-viable.
    pub viable_phone_number_pattern: Regex,
}

impl PrefixRegExps {
    pub fn new() -> Self {
        // it'll be initialized only once, so we can use slow format!
        let viable_phone_number = format!(
            "^[{}]*(?:[{}]*{})+[{}]*$",
            PLUS_CHARS, VALID_PUNCTUATION, DIGITS, VALID_PUNCTUATION,
        );
        Self {
            viable_phone_number_pattern: Regex::new(&viable_phone_number)
                .expect("Invalid constant pattern!"),
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn check_regexps_are_compiling() {
        super::PrefixRegExps::new();
    }

    #[test]
    fn viable_numbers() {
        let pattern = super::PrefixRegExps::new().viable_phone_number_pattern;
        assert!(pattern.is_match("+46 70-123 45 67"));
        assert!(pattern.is_match("(650) 253.0000"));
        assert!(pattern.is_match("\u{FF0B}\u{FF14}\u{FF16}"));
        assert!(pattern.is_match("+44\u{2013}2087654321"));
        assert!(!pattern.is_match("+"));
        assert!(!pattern.is_match("1-800-FLOWERS"));
        assert!(!pattern.is_match("+44\u{fffe}2087654321"));
    }
}
