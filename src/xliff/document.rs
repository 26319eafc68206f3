//! XLIFF document model.

/// Source language of every produced document.
///
/// The corpus is English-sourced, the conversion
/// is not meant to be parameterized on this.
pub const SOURCE_LANGUAGE: &str = "en";

/// A single translation unit: a unique id and the literal source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransUnit {
    id: String,
    source: String,
}

impl TransUnit {
    pub fn new(id: String, source: String) -> Self {
        Self { id, source }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

/// One output document, corresponding to one corpus record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XliffDocument {
    original: String,
    units: Vec<TransUnit>,
}

impl XliffDocument {
    pub fn new(original: String, units: Vec<TransUnit>) -> Self {
        Self { original, units }
    }

    /// id of the corpus record this document was built from.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn units(&self) -> &[TransUnit] {
        &self.units
    }
}
