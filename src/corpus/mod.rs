/*! Corpus data model and parsing.

A corpus is a flat sequence of records.
Each record has an id, a list of language-tagged titles and a list of abstracts,
each abstract being a sequence of sentences.
!*/
mod reader;
mod record;

pub use reader::CorpusReader;
pub use record::{Abstract, Record, Title};
