//! Site-wide presentation state: brand, language label, navigation

mod navigation;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use navigation::Navigation;

pub const BRAND_NAME: &str = "Modern Real Estate";
pub const BRAND_MARK: &str = "MR";

/// Language label shown in the navigation bar
///
/// Only the label changes; page content stays in English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ar => "AR",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown language: {0}")]
pub struct UnknownLanguage(String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EN" => Ok(Language::En),
            "AR" => Ok(Language::Ar),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" AR ".parse::<Language>().unwrap(), Language::Ar);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
        assert_eq!(Language::Ar.to_string(), "AR");
    }
}
