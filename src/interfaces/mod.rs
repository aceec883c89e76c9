use crate::phoneprefixutil::helper_types::IdMatch;

/// Internal prefix matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns the records whose digit path the input could start with, or
    /// `None` when the input has no ASCII digits at all. Non-digit
    /// characters are skipped. With `match_exact_only` only records whose
    /// path ends at a real dialable boundary are returned.
    fn match_prefix(&self, input: &str, match_exact_only: bool) -> Option<IdMatch>;
}
