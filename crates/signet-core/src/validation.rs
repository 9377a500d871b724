//! Validation mode for resolved header field types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the resolver treats an effective type that is not a basic type.
///
/// Basic types are string, int, boolean, decimal, float, and arrays of those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Keep the resolved type as is and leave any failure to the decoder.
    #[default]
    Permissive,
    /// Reject the declaration at registration time.
    Strict,
}

impl ValidationMode {
    /// Returns true for [`ValidationMode::Strict`].
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }

    /// Returns the mode name as used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown validation mode '{other}', expected 'permissive' or 'strict'"
            )),
        }
    }
}
