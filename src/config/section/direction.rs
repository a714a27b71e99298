//! `dir` key: document text direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text direction written to the `<html dir>` attribute.
///
/// Anything other than `"ltr"` or `"rtl"` fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDir {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

impl TextDir {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

impl fmt::Display for TextDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        dir: TextDir,
    }

    #[test]
    fn test_parse_known_values() {
        let ltr: Holder = toml::from_str("dir = \"ltr\"").unwrap();
        let rtl: Holder = toml::from_str("dir = \"rtl\"").unwrap();
        assert_eq!(ltr.dir, TextDir::Ltr);
        assert_eq!(rtl.dir, TextDir::Rtl);
        assert!(rtl.dir.is_rtl());
    }

    #[test]
    fn test_reject_unknown_direction() {
        assert!(toml::from_str::<Holder>("dir = \"ttb\"").is_err());
        // case matters, mirrors the HTML attribute values
        assert!(toml::from_str::<Holder>("dir = \"LTR\"").is_err());
    }
}
