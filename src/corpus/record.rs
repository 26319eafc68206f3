//! Record types.
//!
//! Everything here is owned data built once by the reader and never mutated afterwards.

/// A single title, optionally tagged with a language code.
///
/// Titles without a `lang` attribute are kept in the model
/// but can never match a language filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    lang: Option<String>,
    text: String,
}

impl Title {
    pub fn new(lang: Option<String>, text: String) -> Self {
        Self { lang, text }
    }

    /// Get a reference to the title's language tag (raw, non-normalized).
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Get a reference to the title's text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An abstract: an ordered list of sentences, optionally language-tagged.
///
/// The abstract-level language is informative only,
/// sentences are collected regardless of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abstract {
    lang: Option<String>,
    sentences: Vec<String>,
}

impl Abstract {
    pub fn new(lang: Option<String>, sentences: Vec<String>) -> Self {
        Self { lang, sentences }
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }
}

/// A corpus record: id, titles and abstracts, in corpus order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: String,
    titles: Vec<Title>,
    abstracts: Vec<Abstract>,
}

impl Record {
    pub fn new(id: String, titles: Vec<Title>, abstracts: Vec<Abstract>) -> Self {
        Self {
            id,
            titles,
            abstracts,
        }
    }

    /// Get a reference to the record's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get a reference to the record's titles.
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    /// Get a reference to the record's abstracts.
    pub fn abstracts(&self) -> &[Abstract] {
        &self.abstracts
    }

    /// Iterate over every sentence of every abstract, in order.
    pub fn sentences(&self) -> impl Iterator<Item = &str> {
        self.abstracts
            .iter()
            .flat_map(|a| a.sentences().iter().map(String::as_str))
    }

    /// Total number of sentences across abstracts.
    pub fn nb_sentences(&self) -> usize {
        self.abstracts.iter().map(|a| a.sentences().len()).sum()
    }
}
