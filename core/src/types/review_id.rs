use nutype::nutype;

/// Identifier of a single review document.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 64),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        Deref,
        Display,
        TryFrom,
        Into,
        Serialize,
        Deserialize,
    )
)]
pub struct ReviewId(String);
