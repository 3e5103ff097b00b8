//! Closed presentation tokens shared by the component contracts.
//!
//! Every token maps to the stable string emitted in the `data-*` DOM contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised when parsing presentation tokens from untrusted strings.
pub enum TokenError {
    /// The value is not a known button variant.
    #[error("unknown button variant `{0}`")]
    UnknownVariant(String),
    /// The value is not a known button size.
    #[error("unknown button size `{0}`")]
    UnknownSize(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button style variants.
pub enum ButtonVariant {
    /// Emphasized default action.
    Primary,
    /// Secondary action.
    Secondary,
    /// Destructive action.
    Danger,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    /// Every variant in declaration order.
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Danger];

    /// Stable token emitted as `data-variant`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ButtonVariant {
    type Err = TokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == raw.trim())
            .ok_or_else(|| TokenError::UnknownVariant(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Small,
    /// Default button.
    Medium,
    /// Large button.
    Large,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Medium
    }
}

impl ButtonSize {
    /// Every size in declaration order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Stable token emitted as `data-size`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ButtonSize {
    type Err = TokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == raw.trim())
            .ok_or_else(|| TokenError::UnknownSize(raw.to_string()))
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_documented_tokens() {
        assert_eq!(ButtonVariant::default().token(), "primary");
        assert_eq!(ButtonSize::default().token(), "medium");
    }

    #[test]
    fn tokens_parse_back_to_their_variant() {
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.token().parse::<ButtonVariant>(), Ok(variant));
        }
        for size in ButtonSize::ALL {
            assert_eq!(size.to_string().parse::<ButtonSize>(), Ok(size));
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(
            "warning".parse::<ButtonVariant>(),
            Err(TokenError::UnknownVariant("warning".to_string()))
        );
        assert_eq!(
            "md".parse::<ButtonSize>(),
            Err(TokenError::UnknownSize("md".to_string()))
        );
        assert_eq!(
            TokenError::UnknownSize("md".to_string()).to_string(),
            "unknown button size `md`"
        );
    }

    #[test]
    fn serde_uses_the_dom_tokens() {
        let variant: ButtonVariant = serde_json::from_str("\"danger\"").expect("variant");
        assert_eq!(variant, ButtonVariant::Danger);
        assert_eq!(
            serde_json::to_string(&ButtonSize::Large).expect("size"),
            "\"large\""
        );
        assert!(serde_json::from_str::<ButtonSize>("\"huge\"").is_err());
    }
}
