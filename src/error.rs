//! Error enum
use std::string::FromUtf8Error;

use quick_xml::events::attributes::AttrError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Xml(quick_xml::Error),
    XmlAttr(AttrError),
    MalformedRecord(String),
    Utf8(FromUtf8Error),
    Serde(serde_json::Error),
    Custom(String),
}

impl From<FromUtf8Error> for Error {
    fn from(e: FromUtf8Error) -> Error {
        Error::Utf8(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Error {
        Error::Xml(e)
    }
}

impl From<AttrError> for Error {
    fn from(e: AttrError) -> Error {
        Error::XmlAttr(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
