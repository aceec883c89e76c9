/// Size of the trie alphabet: the ASCII digits `0`-`9`.
pub const DIGIT_COUNT: usize = 10;

pub const PLUS_SIGN: &str = "+";
pub const PLUS_CHARS: &str = "+\u{FF0B}";

// Placed between the country code and the region prefix in the display form
// of a prefix, e.g. "+1 876".
pub const REGION_PREFIX_SEPARATOR: &str = " ";

// Separators used when listing permitted digit counts in error messages:
// "9, 10 or 11".
pub const LIST_SEPARATOR: &str = ", ";
pub const LAST_LIST_SEPARATOR: &str = " or ";

// Punctuation accepted inside a viable phone number, as a regex class body.
// Dash characters, white space, full stops, slashes, brackets, parentheses
// and tildes, with their full-width variants. The letter 'x' is included as
// it is used as a placeholder for carrier codes.
pub const VALID_PUNCTUATION: &str = "\\-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";

pub const DIGITS: &str = r"\p{Nd}";
