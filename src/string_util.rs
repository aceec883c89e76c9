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

use crate::phoneprefixutil::helper_constants::{LAST_LIST_SEPARATOR, LIST_SEPARATOR};

/// Returns the ASCII digits of `s`, dropping everything else.
pub fn ascii_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Joins numbers into a natural-language list of alternatives:
/// `9`, `9 or 10`, `9, 10 or 11`.
pub fn join_alternatives(values: &[usize]) -> String {
    let mut joined = String::with_capacity(values.len() * 4);
    let mut buf = itoa::Buffer::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            joined.push_str(if index + 1 == values.len() {
                LAST_LIST_SEPARATOR
            } else {
                LIST_SEPARATOR
            });
        }
        joined.push_str(buf.format(*value));
    }
    joined
}

#[cfg(test)]
mod tests {
    use crate::string_util::{ascii_digits, join_alternatives};

    #[test]
    fn test_ascii_digits() {
        assert_eq!(ascii_digits("+46 (70) 123-45"), "467012345");
        assert_eq!(ascii_digits("tel:"), "");
        // full-width digits are not ASCII
        assert_eq!(ascii_digits("+４６"), "");
    }

    #[test]
    fn test_join_alternatives() {
        assert_eq!(join_alternatives(&[]), "");
        assert_eq!(join_alternatives(&[9]), "9");
        assert_eq!(join_alternatives(&[9, 10]), "9 or 10");
        assert_eq!(join_alternatives(&[9, 10, 11, 13]), "9, 10, 11 or 13");
    }
}
