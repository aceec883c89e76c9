pub(crate) mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phoneprefixutil;
mod prefix_regexps;
pub(crate) mod prefix_trie;
mod trie_matcher;
pub(crate) mod helper_types;

use std::sync::LazyLock;

pub use enums::{ErrorKind, RejectionReason};
pub use errors::{ExpectedLengths, ValidationError};
pub use helper_types::{PrefixMatch, ValidatedNumber};
use crate::phoneprefixutil::phoneprefixutil::PhonePrefixUtil;

pub static PHONE_PREFIX_UTIL: LazyLock<PhonePrefixUtil> = LazyLock::new(|| {
    PhonePrefixUtil::new()
});
