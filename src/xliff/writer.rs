//! XLIFF serialization and file naming.
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Error;
use crate::xliff::{XliffDocument, SOURCE_LANGUAGE};

/// Writes [XliffDocument]s as indented XLIFF 1.0 files.
///
/// Files are named by their (1-based) position in the corpus: `1.xliff`,
/// `2.xliff`, ... so the destination directory mirrors record order.
pub struct XliffWriter {
    dst: PathBuf,
}

impl XliffWriter {
    /// Create a writer rooted at `dst`, creating the directory if needed.
    pub fn new(dst: &Path) -> Result<Self, Error> {
        fs::create_dir_all(dst)?;
        Ok(Self {
            dst: dst.to_path_buf(),
        })
    }

    /// Serialize a document to an indented XLIFF 1.0 string.
    pub fn to_xml(doc: &XliffDocument) -> Result<String, Error> {
        let mut output = Vec::new();
        let mut writer = Writer::new_with_indent(&mut output, b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut xliff = BytesStart::new("xliff");
        xliff.push_attribute(("version", "1.0"));
        writer.write_event(Event::Start(xliff))?;

        let mut file = BytesStart::new("file");
        file.push_attribute(("original", doc.original()));
        file.push_attribute(("source-language", SOURCE_LANGUAGE));
        if doc.units().is_empty() {
            writer.write_event(Event::Empty(file))?;
        } else {
            writer.write_event(Event::Start(file))?;

            for unit in doc.units() {
                let mut trans_unit = BytesStart::new("trans-unit");
                trans_unit.push_attribute(("id", unit.id()));
                writer.write_event(Event::Start(trans_unit))?;

                let source = BytesStart::new("source");
                if unit.source().is_empty() {
                    writer.write_event(Event::Empty(source))?;
                } else {
                    writer.write_event(Event::Start(source))?;
                    writer.write_event(Event::Text(BytesText::new(unit.source())))?;
                    writer.write_event(Event::End(BytesEnd::new("source")))?;
                }

                writer.write_event(Event::End(BytesEnd::new("trans-unit")))?;
            }

            writer.write_event(Event::End(BytesEnd::new("file")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("xliff")))?;

        let mut xml = String::from_utf8(output)?;
        xml.push('\n');
        Ok(xml)
    }

    /// Write the `nth` document (1-based) to `{n}.xliff`.
    ///
    /// Returns the path of the written file.
    pub fn write(&self, nth: usize, doc: &XliffDocument) -> Result<PathBuf, Error> {
        let path = self.dst.join(format!("{}.xliff", nth));
        debug!("writing {} units to {:?}", doc.units().len(), path);
        fs::write(&path, Self::to_xml(doc)?)?;
        Ok(path)
    }
}
