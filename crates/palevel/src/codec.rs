//! Capability traits for the level data types.
//!
//! Each type implements only what it needs:
//! - `JsonCodec` - conversion to and from a structured JSON document
//! - `RawFileCodec` - the on-disk representation inside a level folder
//! - `FolderCodec` - writing a whole level folder

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use serde_json::ser::PrettyFormatter;

use crate::config::files;
use crate::disk;
use crate::error::{Error, Result};

pub trait JsonCodec: Sized {
    /// Encode into a structured document.
    fn to_json(&self) -> Result<JsonValue>;

    /// Decode from a structured document.
    ///
    /// Missing or unknown keys are reported as [`Error::Decode`].
    fn from_json(value: JsonValue) -> Result<Self>;

    /// Tab-indented text form. Non-ASCII characters are written as-is.
    fn to_json_string(&self) -> Result<String> {
        to_pretty_string(&self.to_json()?)
    }

    fn from_json_str(text: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(text)?;
        Self::from_json(value)
    }

    /// Write `<name>.pcm` into `folder`, creating the folder if needed.
    fn write_json_file<P: AsRef<Path>>(&self, folder: P, name: &str) -> Result<PathBuf> {
        let filename = format!("{}.{}", name, files::FOLDER_DOCUMENT_EXTENSION);
        disk::override_file(folder, &filename, self.to_json_string()?.as_bytes())
    }

    fn read_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

pub trait RawFileCodec: Sized {
    fn from_raw_bytes(bytes: Vec<u8>) -> Result<Self>;

    fn to_raw_bytes(&self) -> Result<Vec<u8>>;

    fn read_raw_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_raw_bytes(bytes)
    }

    fn write_raw_file<P: AsRef<Path>>(&self, folder: P, filename: &str) -> Result<PathBuf> {
        disk::override_file(folder, filename, &self.to_raw_bytes()?)
    }
}

pub trait FolderCodec {
    /// Write every file of the bundle into `folder`.
    fn write_folder(&self, folder: &Path, themes_folder: Option<&Path>) -> Result<()>;
}

/// Serde-backed encode used by the plain data holders.
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<JsonValue> {
    Ok(serde_json::to_value(value)?)
}

/// Serde-backed decode used by the plain data holders.
pub(crate) fn decode<T: DeserializeOwned>(value: JsonValue, context: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::Decode(format!("{}: {}", context, e)))
}

fn to_pretty_string(value: &JsonValue) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| Error::Decode(e.to_string()))
}
