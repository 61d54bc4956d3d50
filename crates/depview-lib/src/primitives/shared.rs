/// Generate a `FromStr` implementation for a `ValueEnum` type
///
/// Matching goes through the possible values (and their aliases), so CLI
/// parsing and settings-file parsing accept exactly the same spellings.
macro_rules! impl_fromstr_for_value_enum {
    ($enum_type:ty, $error_reason:expr) => {
        impl FromStr for $enum_type {
            type Err = $crate::primitives::ConfigError;

            fn from_str(s: &str) -> Result<Self, $crate::primitives::ConfigError> {
                for variant in Self::value_variants() {
                    if let Some(possible_value) = variant.to_possible_value() {
                        if possible_value.matches(s, true) {
                            return Ok(*variant);
                        }
                    }
                }

                Err($crate::primitives::ConfigError::ParseError {
                    value: s.to_string(),
                    reason: $error_reason.to_string(),
                })
            }
        }
    };
}

/// Route serde deserialization of a `ValueEnum` type through its `FromStr`
///
/// Use together with `#[serde(try_from = "String")]` on the enum.
macro_rules! impl_tryfrom_string_for_value_enum {
    ($enum_type:ty) => {
        impl TryFrom<String> for $enum_type {
            type Error = $crate::primitives::ConfigError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

pub(crate) use impl_fromstr_for_value_enum;
pub(crate) use impl_tryfrom_string_for_value_enum;
