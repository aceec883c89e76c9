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

use crate::catalog::PrefixRecord;

use super::{
    enums::RejectionReason,
    errors::{ExpectedLengths, ValidationError},
    helper_constants::{PLUS_SIGN, REGION_PREFIX_SEPARATOR},
};

/// Checks the subscriber digit count against the lengths permitted for
/// `record`. Reasons are tested in order: reserved code, out of range, not
/// an exact permitted length.
pub(super) fn test_local_length(
    local_length: usize,
    record: &PrefixRecord,
) -> Result<(), RejectionReason> {
    let lengths = record.local_lengths();
    let (Some(&min), Some(&max)) = (lengths.first(), lengths.last()) else {
        return Err(RejectionReason::ReservedUnsupported);
    };
    if local_length < min {
        return Err(RejectionReason::TooShort);
    }
    if local_length > max {
        return Err(RejectionReason::TooLong);
    }
    if lengths.binary_search(&local_length).is_err() {
        return Err(RejectionReason::WrongLength);
    }
    Ok(())
}

/// Builds the user facing error for a rejected candidate. Length errors
/// report total digit counts, so the digits of the prefix are added to the
/// permitted subscriber lengths.
pub(super) fn rejection_error(
    reason: RejectionReason,
    record: &PrefixRecord,
    prefix_digits: &str,
) -> ValidationError {
    let name = record.name().to_owned();
    let expected = || ExpectedLengths::new(prefix_digits.len(), record.local_lengths());
    match reason {
        RejectionReason::ReservedUnsupported => ValidationError::ReservedUnsupported {
            prefix: prefix_digits.to_owned(),
            name,
        },
        RejectionReason::TooShort => ValidationError::TooShort {
            name,
            expected: expected(),
        },
        RejectionReason::TooLong => ValidationError::TooLong {
            name,
            expected: expected(),
        },
        RejectionReason::WrongLength => ValidationError::WrongLength {
            name,
            expected: expected(),
        },
    }
}

/// `+` and the country code, then the region prefix digits after a
/// separator when the matched prefix is longer than the country code:
/// `+46`, `+1 876`.
pub(super) fn display_prefix(prefix_digits: &str, country_code: &str) -> String {
    match prefix_digits.strip_prefix(country_code) {
        Some(region_prefix) if !region_prefix.is_empty() => fast_cat::concat_str!(
            PLUS_SIGN,
            country_code,
            REGION_PREFIX_SEPARATOR,
            region_prefix
        ),
        _ => fast_cat::concat_str!(PLUS_SIGN, prefix_digits),
    }
}

/// Converts any Unicode decimal digits (full-width, Arabic-Indic, ...) to
/// their ASCII form. Other characters are kept as they are.
pub(super) fn normalize_digits(input: &str) -> String {
    dec_from_char::normalize_decimals(input).to_string()
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::{display_prefix, normalize_digits, rejection_error, test_local_length};
    use crate::{
        catalog::PrefixRecord,
        phoneprefixutil::{
            enums::{ErrorKind, RejectionReason},
            errors::ValidationError,
        },
    };

    #[test]
    fn local_length_reasons() {
        let sweden = PrefixRecord::new("46", "Sweden").with_local_lengths([7, 8, 9, 10, 12, 13]);
        assert_eq!(test_local_length(9, &sweden), Ok(()));
        assert_eq!(test_local_length(13, &sweden), Ok(()));
        assert_eq!(test_local_length(5, &sweden), Err(RejectionReason::TooShort));
        assert_eq!(test_local_length(14, &sweden), Err(RejectionReason::TooLong));
        assert_eq!(test_local_length(11, &sweden), Err(RejectionReason::WrongLength));

        let reserved = PrefixRecord::new("881", "Global Mobile Satellite System");
        assert_eq!(
            test_local_length(9, &reserved),
            Err(RejectionReason::ReservedUnsupported)
        );
    }

    #[test]
    fn rejection_errors_keep_their_kind() {
        let sweden = PrefixRecord::new("46", "Sweden").with_local_lengths([7, 8]);
        for reason in RejectionReason::iter() {
            let err = rejection_error(reason, &sweden, "46");
            assert_eq!(err.kind(), ErrorKind::from(reason));
        }
        assert_eq!(
            rejection_error(RejectionReason::TooLong, &sweden, "46").to_string(),
            "The number is too long for Sweden: it must have 9 or 10 digits"
        );
        assert_eq!(
            rejection_error(RejectionReason::ReservedUnsupported, &sweden, "46"),
            ValidationError::ReservedUnsupported {
                prefix: "46".to_owned(),
                name: "Sweden".to_owned()
            }
        );
    }

    #[test]
    fn test_display_prefix() {
        assert_eq!(display_prefix("46", "46"), "+46");
        assert_eq!(display_prefix("1876", "1"), "+1 876");
        assert_eq!(display_prefix("3906698", "39"), "+39 06698");
    }

    #[test]
    fn test_normalize_digits() {
        assert_eq!(normalize_digits("+\u{FF14}\u{FF16} 70"), "+46 70");
        assert_eq!(normalize_digits("+46-70"), "+46-70");
    }
}
