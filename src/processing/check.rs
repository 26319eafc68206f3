//! Corpus checking.
//!
//! Parses a corpus without converting it, reporting counts that can be
//! compared against the produced XLIFF files: a record with k
//! source-language titles and m sentences must yield k+m trans-units.
use std::collections::HashMap;
use std::path::Path;

use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::corpus::{CorpusReader, Record};
use crate::error::Error;
use crate::filtering::{Filter, SourceLanguage};

/// Untagged titles are counted under this key in the per-language histogram.
const UNTAGGED: &str = "untagged";

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CorpusReport {
    pub records: usize,
    pub titles: usize,
    /// titles matching the source language (`en`), i.e. future title units.
    pub source_titles: usize,
    pub abstracts: usize,
    /// sentences across all abstracts, i.e. future sentence units.
    pub sentences: usize,
    pub titles_per_lang: HashMap<String, usize>,
}

impl CorpusReport {
    pub fn from_records(records: &[Record]) -> Self {
        let filter = SourceLanguage::default();

        let titles_per_lang = records
            .iter()
            .flat_map(Record::titles)
            .map(|t| t.lang().unwrap_or(UNTAGGED).to_string())
            .counts();

        Self {
            records: records.len(),
            titles: records.iter().map(|r| r.titles().len()).sum(),
            source_titles: records
                .iter()
                .flat_map(Record::titles)
                .filter(|t| filter.detect(t))
                .count(),
            abstracts: records.iter().map(|r| r.abstracts().len()).sum(),
            sentences: records.iter().map(Record::nb_sentences).sum(),
            titles_per_lang,
        }
    }
}

/// Parse the corpus at `src` and report its counts.
pub fn check(src: &Path) -> Result<CorpusReport, Error> {
    let records = CorpusReader::from_path(src)?;
    let report = CorpusReport::from_records(&records);
    info!(
        "{} records, {} future units ({} titles + {} sentences)",
        report.records,
        report.source_titles + report.sentences,
        report.source_titles,
        report.sentences
    );
    Ok(report)
}
