//! Language selection for localized messages

use serde::{Deserialize, Serialize};

/// Language preference for response messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "uz")]
    Uzbek,
}

impl Language {
    /// Extract language from Accept-Language header
    pub fn from_accept_language(header: &str) -> Self {
        let header_lower = header.to_lowercase();
        if header_lower.starts_with("uz") || header_lower.contains(",uz") {
            Language::Uzbek
        } else {
            Language::English
        }
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Uzbek => "uz",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Language::English),
            "uz" | "uzb" | "uzbek" | "o'zbek" => Ok(Language::Uzbek),
            _ => Err(format!("Unsupported language: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_header() {
        assert_eq!(Language::from_accept_language("en-US,en;q=0.9"), Language::English);
        assert_eq!(Language::from_accept_language("uz-UZ,uz;q=0.9"), Language::Uzbek);
        assert_eq!(Language::from_accept_language("ru-RU,uz;q=0.8"), Language::Uzbek);
        assert_eq!(Language::from_accept_language("fr-FR"), Language::English);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("uz".parse::<Language>().unwrap(), Language::Uzbek);
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert!("zz".parse::<Language>().is_err());
    }
}
