/*! Corpus-level operations that are not conversions.

Corpus checking (parse + counts) and duplicate elimination on line-aligned
bilingual files.
!*/
pub mod check;
pub mod dedup;

pub use check::{check, CorpusReport};
pub use dedup::{dedup, DedupReport};
