mod interfaces;
mod phoneprefixutil;
pub mod catalog;
pub(crate) mod string_util;

/// Declarative rows of the built-in catalog read better through a macro
/// than through a builder chain per record.
mod macros;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogParseError, InvalidRecordError, PrefixRecord, RecordId};
pub use phoneprefixutil::{
    ErrorKind, ExpectedLengths, PHONE_PREFIX_UTIL, PrefixMatch, RejectionReason,
    ValidatedNumber, ValidationError,
    phoneprefixutil::{PhonePrefixUtil, Result},
};
