/// Builds one `RawRecord` row of the compiled-in reference table.
///
/// The table has a couple of hundred rows, and a struct literal per row
/// buries the data in field names. The macro keeps each allocation on a
/// single line, in the column order of the text catalog format:
///
/// `code, [region prefixes], name, iso, international access, trunk, [local lengths], rank`
macro_rules! raw_record {
    (
        $code:literal, [$($region:literal),* $(,)?], $name:literal, $iso:expr,
        $idd:expr, $trunk:expr, [$($len:literal),* $(,)?], $rank:literal
    ) => {
        RawRecord {
            country_code: $code,
            region_prefixes: &[$($region),*],
            name: $name,
            iso_country: $iso,
            international_access_prefix: $idd,
            national_trunk_prefix: $trunk,
            local_lengths: &[$($len),*],
            rank: $rank,
        }
    };
}

pub(crate) use raw_record;
