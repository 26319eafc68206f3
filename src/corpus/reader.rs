//! Event-based corpus parser.
//!
//! The corpus schema is fixed and shallow, so parsing is done with a single
//! [quick_xml] event loop rather than a serde roundtrip.
//! Any XML error is fatal and aborts the whole run.
use std::fs;
use std::path::Path;

use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::corpus::{Abstract, Record, Title};
use crate::error::Error;

/// Reads a whole corpus file into memory.
///
/// Unknown elements and attributes are ignored,
/// records without an `id` attribute are rejected.
pub struct CorpusReader;

/// get an (unescaped) attribute value by name.
fn attr_value(e: &BytesStart, name: &[u8]) -> Result<Option<String>, Error> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// get the mandatory record id.
fn record_id(e: &BytesStart) -> Result<String, Error> {
    attr_value(e, b"id")?.ok_or_else(|| {
        Error::MalformedRecord("record element without an id attribute".to_string())
    })
}

impl CorpusReader {
    /// Parse a corpus file.
    pub fn from_path(path: &Path) -> Result<Vec<Record>, Error> {
        debug!("reading corpus from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a corpus from a string.
    pub fn from_str(content: &str) -> Result<Vec<Record>, Error> {
        let mut reader = Reader::from_str(content);
        // the corpus is pretty-printed: drop indentation-only text nodes.
        reader.trim_text(true);

        let mut records = Vec::new();
        let mut buf = Vec::new();

        // parser state. the schema has fixed, shallow nesting so a
        // handful of builders is enough, no need for a full element stack.
        let mut record: Option<(String, Vec<Title>, Vec<Abstract>)> = None;
        let mut title_lang: Option<Option<String>> = None;
        let mut abstr: Option<(Option<String>, Vec<String>)> = None;
        let mut in_sentence = false;
        let mut text = String::new();
        // depth of foreign elements opened inside a title/sentence,
        // whose text must not leak into the surrounding one
        let mut foreign_depth = 0usize;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"record" => {
                        record = Some((record_id(&e)?, Vec::new(), Vec::new()));
                    }
                    b"title" if record.is_some() => {
                        title_lang = Some(attr_value(&e, b"lang")?);
                        text.clear();
                    }
                    b"abstract" if record.is_some() => {
                        abstr = Some((attr_value(&e, b"lang")?, Vec::new()));
                    }
                    b"sentence" if abstr.is_some() => {
                        in_sentence = true;
                        text.clear();
                    }
                    // root element, titles/abstracts wrappers, foreign elements
                    _ => {
                        if title_lang.is_some() || in_sentence {
                            foreign_depth += 1;
                        }
                    }
                },
                Ok(Event::Text(e)) => {
                    if (title_lang.is_some() || in_sentence) && foreign_depth == 0 {
                        text.push_str(&e.unescape()?);
                    }
                }
                Ok(Event::CData(e)) => {
                    if (title_lang.is_some() || in_sentence) && foreign_depth == 0 {
                        text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    // a record with no children still counts as a record
                    b"record" => {
                        records.push(Record::new(record_id(&e)?, Vec::new(), Vec::new()));
                    }
                    b"title" => {
                        if let Some((_, titles, _)) = &mut record {
                            titles.push(Title::new(attr_value(&e, b"lang")?, String::new()));
                        }
                    }
                    b"abstract" => {
                        if let Some((_, _, abstracts)) = &mut record {
                            abstracts.push(Abstract::new(attr_value(&e, b"lang")?, Vec::new()));
                        }
                    }
                    b"sentence" => {
                        if let Some((_, sentences)) = &mut abstr {
                            sentences.push(String::new());
                        }
                    }
                    _ => (),
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"title" => {
                        if let (Some((_, titles, _)), Some(lang)) = (&mut record, title_lang.take())
                        {
                            titles.push(Title::new(lang, std::mem::take(&mut text)));
                        }
                    }
                    b"sentence" => {
                        if let Some((_, sentences)) = &mut abstr {
                            sentences.push(std::mem::take(&mut text));
                        }
                        in_sentence = false;
                    }
                    b"abstract" => {
                        if let (Some((_, _, abstracts)), Some((lang, sentences))) =
                            (&mut record, abstr.take())
                        {
                            abstracts.push(Abstract::new(lang, sentences));
                        }
                    }
                    b"record" => {
                        if let Some((id, titles, abstracts)) = record.take() {
                            records.push(Record::new(id, titles, abstracts));
                        }
                    }
                    _ => foreign_depth = foreign_depth.saturating_sub(1),
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::Xml(e)),
                _ => (),
            }
            buf.clear();
        }

        debug!("parsed {} records", records.len());
        Ok(records)
    }
}
