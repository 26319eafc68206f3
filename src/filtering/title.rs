//! Title-level language filtering.
//!
//! The conversion pipeline only keeps titles written in the source language
//! of the output documents (English).
//! Matching is done on case-normalized BCP-47 tags, but is exact:
//! `en-US` does not match `en`.
use oxilangtag::{LanguageTag, LanguageTagParseError};

use super::Filter;

/// Keeps titles whose language tag is equal to a given tag.
///
/// Titles without a language tag, or with an unparseable one, never match.
pub struct SourceLanguage {
    tag: LanguageTag<String>,
}

impl SourceLanguage {
    /// Build a filter for a custom (normalized) language tag.
    pub fn new(tag: &str) -> Result<Self, LanguageTagParseError> {
        Ok(Self {
            tag: LanguageTag::parse_and_normalize(tag)?,
        })
    }

    /// Get a reference to the filter's language tag.
    pub fn tag(&self) -> &LanguageTag<String> {
        &self.tag
    }
}

impl Default for SourceLanguage {
    /// default source language is English (`en`).
    fn default() -> Self {
        Self {
            tag: LanguageTag::parse("en".to_string()).unwrap(),
        }
    }
}

impl Filter<&crate::corpus::Title> for SourceLanguage {
    fn detect(&self, title: &crate::corpus::Title) -> bool {
        match title.lang() {
            Some(lang) => match LanguageTag::parse_and_normalize(lang) {
                Ok(tag) => tag == self.tag,
                Err(_) => false,
            },
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SourceLanguage;
    use crate::corpus::Title;
    use crate::filtering::Filter;

    fn title(lang: Option<&str>) -> Title {
        Title::new(lang.map(String::from), "text".to_string())
    }

    #[test]
    fn test_default_en() {
        let f = SourceLanguage::default();
        assert_eq!(f.detect(&title(Some("en"))), true);
        assert_eq!(f.detect(&title(Some("fr"))), false);
    }

    #[test]
    fn test_case_normalization() {
        let f = SourceLanguage::default();
        assert_eq!(f.detect(&title(Some("EN"))), true);
    }

    #[test]
    fn test_subtag_is_not_en() {
        let f = SourceLanguage::default();
        assert_eq!(f.detect(&title(Some("en-US"))), false);
    }

    #[test]
    fn test_missing_or_invalid_lang() {
        let f = SourceLanguage::default();
        assert_eq!(f.detect(&title(None)), false);
        assert_eq!(f.detect(&title(Some("not a tag!"))), false);
    }

    #[test]
    fn test_custom_tag() {
        let f = SourceLanguage::new("DE").unwrap();
        assert_eq!(f.tag().as_str(), "de");
        assert_eq!(f.detect(&title(Some("de"))), true);
        assert_eq!(f.detect(&title(Some("en"))), false);
    }
}
