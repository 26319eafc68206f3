//! Corpus-to-XLIFF conversion pipeline.
//!
//! The corpus is a flat sequence of records,
//! each record is converted to exactly one XLIFF document.
//!
//! # Processing
//! 1. The whole corpus is parsed up front. A parse failure aborts the run.
//! 1. For each record, in corpus order, one document is built: its units are
//!    the source-language (English) titles followed by every sentence of
//!    every abstract, regardless of language, each with a fresh unique id.
//! 1. Each document is written to `{n}.xliff`, `n` starting at 1, so output
//!    numbering is contiguous and follows record order.
//!
//! Everything is strictly sequential: one input file, one pass, one output
//! file per record.
use std::path::PathBuf;

use log::{info, warn};

use crate::corpus::{CorpusReader, Record};
use crate::error::Error;
use crate::filtering::{Filter, SourceLanguage};
use crate::pipelines::pipeline::Pipeline;
use crate::xliff::{TransUnit, UnitIdGenerator, XliffDocument, XliffWriter};

pub struct XliffExport {
    src: PathBuf,
    dst: PathBuf,
    filter: SourceLanguage,
    ids: UnitIdGenerator,
}

impl XliffExport {
    pub fn new(src: PathBuf, dst: PathBuf, filter: SourceLanguage, ids: UnitIdGenerator) -> Self {
        Self {
            src,
            dst,
            filter,
            ids,
        }
    }

    /// Build the output document for a single record:
    /// filtered titles first, then all sentences.
    fn build_document(&self, record: &Record) -> XliffDocument {
        let titles = record
            .titles()
            .iter()
            .filter(|title| self.filter.detect(title))
            .map(|title| title.text());

        let units = titles
            .chain(record.sentences())
            .map(|text| TransUnit::new(self.ids.generate(), text.to_string()))
            .collect();

        XliffDocument::new(record.id().to_string(), units)
    }
}

impl Pipeline<usize> for XliffExport {
    /// Run the conversion, returning the number of files written.
    fn run(&self) -> Result<usize, Error> {
        info!(
            "converting corpus {:?} into {:?}, keeping titles tagged {}",
            self.src,
            self.dst,
            self.filter.tag()
        );

        let records = CorpusReader::from_path(&self.src)?;
        let writer = XliffWriter::new(&self.dst)?;

        for (idx, record) in records.iter().enumerate() {
            let doc = self.build_document(record);
            if doc.units().is_empty() {
                warn!("record {} yields an empty document", record.id());
            }
            // files are numbered from 1
            writer.write(idx + 1, &doc)?;
        }

        info!("wrote {} xliff files", records.len());
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::io::Write;
    use std::path::PathBuf;

    use super::XliffExport;
    use crate::corpus::{Abstract, Record, Title};
    use crate::filtering::SourceLanguage;
    use crate::pipelines::Pipeline;
    use crate::xliff::UnitIdGenerator;

    fn gen_export() -> XliffExport {
        XliffExport::new(
            PathBuf::from("unused"),
            PathBuf::from("unused"),
            SourceLanguage::default(),
            UnitIdGenerator::default(),
        )
    }

    fn gen_record() -> Record {
        Record::new(
            "rec-1".to_string(),
            vec![
                Title::new(Some("en".to_string()), "First english title".to_string()),
                Title::new(Some("de".to_string()), "Deutscher Titel".to_string()),
                Title::new(Some("en".to_string()), "Second english title".to_string()),
            ],
            vec![
                Abstract::new(
                    Some("en".to_string()),
                    vec!["One.".to_string(), "Two.".to_string()],
                ),
                Abstract::new(Some("de".to_string()), vec!["Drei.".to_string()]),
            ],
        )
    }

    #[test]
    fn test_build_document_k_plus_m() {
        // k=2 english titles, m=3 sentences -> 5 units, titles first
        let doc = gen_export().build_document(&gen_record());

        let sources: Vec<&str> = doc.units().iter().map(|u| u.source()).collect();
        assert_eq!(
            sources,
            vec![
                "First english title",
                "Second english title",
                "One.",
                "Two.",
                "Drei.",
            ]
        );
    }

    #[test]
    fn test_build_document_no_english_titles() {
        let record = Record::new(
            "rec-2".to_string(),
            vec![Title::new(Some("fr".to_string()), "Titre".to_string())],
            vec![Abstract::new(None, vec!["Une phrase.".to_string()])],
        );

        let doc = gen_export().build_document(&record);
        let sources: Vec<&str> = doc.units().iter().map(|u| u.source()).collect();
        assert_eq!(sources, vec!["Une phrase."]);
    }

    #[test]
    fn test_build_document_custom_filter() {
        let export = XliffExport::new(
            PathBuf::from("unused"),
            PathBuf::from("unused"),
            SourceLanguage::new("de").unwrap(),
            UnitIdGenerator::default(),
        );

        let doc = export.build_document(&gen_record());
        let sources: Vec<&str> = doc.units().iter().map(|u| u.source()).collect();
        assert_eq!(sources, vec!["Deutscher Titel", "One.", "Two.", "Drei."]);
    }

    #[test]
    fn test_build_document_unique_ids() {
        let export = gen_export();
        let mut ids = HashSet::new();
        // same record converted twice: ids must not repeat across documents
        for _ in 0..2 {
            let doc = export.build_document(&gen_record());
            for unit in doc.units() {
                assert!(ids.insert(unit.id().to_string()));
            }
        }
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_run_numbers_files_from_1() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("corpus.xml");
        let dst = dir.path().join("output");

        let mut f = std::fs::File::create(&src).unwrap();
        write!(
            f,
            r#"<corpus>
                 <record id="a"><titles><title lang="en">t</title></titles></record>
                 <record id="b"/>
                 <record id="c"><abstracts><abstract><sentence>s</sentence></abstract></abstracts></record>
               </corpus>"#
        )
        .unwrap();

        let pipeline = XliffExport::new(
            src,
            dst.clone(),
            SourceLanguage::default(),
            UnitIdGenerator::default(),
        );
        let written = pipeline.run().unwrap();

        assert_eq!(written, 3);
        for n in 1..=3 {
            assert!(dst.join(format!("{}.xliff", n)).is_file());
        }
        assert!(!dst.join("4.xliff").exists());
    }
}
