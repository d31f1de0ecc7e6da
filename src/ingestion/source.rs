//! Record sources: a byte origin bound to a record shape.

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;

use crate::error::{SourceError, SourceResult};
use crate::types::Record;
use crate::validation;

use super::xml::XmlPath;
use super::{csv, json, xml};

/// Format of a source, detected from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Comma-separated values.
    Csv,
    /// JSON array of objects.
    Json,
    /// XML document.
    Xml,
    /// No reader exists for this extension.
    Unknown,
}

impl SourceKind {
    /// Parse a source kind from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Self::Csv,
            "json" => Self::Json,
            "xml" => Self::Xml,
            _ => Self::Unknown,
        }
    }

    /// Detect the kind of a path. Paths without an extension are [`SourceKind::Unknown`].
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|s| s.to_str())
            .map(Self::from_extension)
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Xml => "XML",
            Self::Unknown => "UNKNOWN",
        })
    }
}

/// File-shape metadata of a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub origin: PathBuf,
    pub kind: SourceKind,
}

/// A byte origin bound to a record shape.
///
/// Implementors provide [`read`](Self::read) (raw, unvalidated records) and may override
/// [`validate`](Self::validate). Callers obtain typed records through [`super::load`], which
/// always validates what `read` returned.
pub trait RecordSource {
    /// The shape records must satisfy.
    type Record: Record;

    /// Read the origin into untyped records.
    fn read(&self) -> SourceResult<Vec<JsonValue>>;

    /// Returns `true` if `data` is a sequence of records of [`Self::Record`]'s shape.
    fn validate(&self, data: &JsonValue) -> bool {
        validation::is_record_array::<Self::Record>(data)
    }

    /// Origin and detected kind. Performs no I/O.
    fn file_info(&self) -> FileInfo;
}

/// A file on disk read with the reader matching its extension.
pub struct FileSource<T> {
    origin: PathBuf,
    kind: SourceKind,
    xml_path: XmlPath,
    _shape: PhantomData<fn() -> T>,
}

impl<T: Record> FileSource<T> {
    /// Bind `path` to the shape `T`. The kind is detected once, here.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let origin = path.as_ref().to_path_buf();
        let kind = SourceKind::from_path(&origin);
        Self {
            origin,
            kind,
            xml_path: XmlPath::default(),
            _shape: PhantomData,
        }
    }

    /// Override where records live in an XML document.
    pub fn with_xml_path(mut self, xml_path: XmlPath) -> Self {
        self.xml_path = xml_path;
        self
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }
}

impl<T> fmt::Debug for FileSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSource")
            .field("origin", &self.origin)
            .field("kind", &self.kind)
            .field("xml_path", &self.xml_path)
            .finish()
    }
}

impl<T: Record> RecordSource for FileSource<T> {
    type Record = T;

    fn read(&self) -> SourceResult<Vec<JsonValue>> {
        let origin = self.origin.as_path();
        let result = match self.kind {
            SourceKind::Csv => csv::read_csv_from_path(origin, &T::schema()),
            SourceKind::Json => json::read_json_from_path(origin),
            SourceKind::Xml => xml::read_xml_from_path(origin, &self.xml_path, &T::schema()),
            SourceKind::Unknown => {
                return Err(SourceError::UnsupportedShape {
                    origin: self.origin.clone(),
                });
            }
        };
        result.map_err(|e| SourceError::read(origin, e))
    }

    fn file_info(&self) -> FileInfo {
        FileInfo {
            origin: self.origin.clone(),
            kind: self.kind,
        }
    }
}
