/*! XLIFF output.

Minimal XLIFF 1.0 documents: one `<file>` per record,
one `<trans-unit>` per collected title/sentence.
Documents are built once, serialized once and discarded.
!*/
mod document;
mod unit_id;
mod writer;

pub use document::{TransUnit, XliffDocument, SOURCE_LANGUAGE};
pub use unit_id::UnitIdGenerator;
pub use writer::XliffWriter;
