//! Parsing policy for textual addresses.
//!
//! Encoding always emits bare lowercase hex. What decoding accepts beyond
//! that is chain policy, so it is an explicit value passed to the parser.

/// Which hex spellings `FixedAddress::from_hex_with` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexConfig {
    /// Accept and strip a leading `0x` or `0X`.
    pub allow_prefix: bool,
    /// Accept the digits `A`-`F`.
    pub allow_uppercase: bool,
}

impl HexConfig {
    /// Bare hex in either case. Used by `FromStr` and serde.
    pub const fn standard() -> Self {
        HexConfig {
            allow_prefix: false,
            allow_uppercase: true,
        }
    }

    /// Only the exact form the encoder emits: bare lowercase hex.
    pub const fn canonical() -> Self {
        HexConfig {
            allow_prefix: false,
            allow_uppercase: false,
        }
    }

    /// Optional `0x` prefix, either case.
    pub const fn lenient() -> Self {
        HexConfig {
            allow_prefix: true,
            allow_uppercase: true,
        }
    }

    /// Strip a permitted prefix and reject disallowed digits.
    ///
    /// # Returns
    /// The bare hex digits, or a description of the first rejected feature.
    pub(crate) fn normalize<'a>(&self, s: &'a str) -> Result<&'a str, String> {
        let digits = if self.allow_prefix {
            s.strip_prefix("0x")
                .or_else(|| s.strip_prefix("0X"))
                .unwrap_or(s)
        } else {
            s
        };
        if !self.allow_uppercase {
            if let Some((idx, c)) = digits
                .char_indices()
                .find(|(_, c)| matches!(c, 'A'..='F'))
            {
                return Err(format!("uppercase digit {:?} at index {}", c, idx));
            }
        }
        Ok(digits)
    }
}

impl Default for HexConfig {
    fn default() -> Self {
        Self::standard()
    }
}
