//! Record sources and the load protocol.
//!
//! Most callers should build a [`FileSource`] for their record type and pass it to [`load`],
//! which:
//!
//! - reads the file with the reader matching its extension (CSV, JSON or XML)
//! - validates every record against the shape's schema
//! - returns typed records, or an error and no records at all
//! - optionally reports success/failure/alerts to a [`LoadObserver`] (see [`load_with`])
//!
//! Format-specific raw readers are also available under:
//! - [`csv`]
//! - [`json`]
//! - [`xml`]

pub mod csv;
pub mod json;
pub mod load;
pub mod observability;
pub mod source;
pub mod xml;

pub use load::{LoadOptions, load, load_with};
pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, LogObserver,
};
pub use source::{FileInfo, FileSource, RecordSource, SourceKind};
pub use xml::XmlPath;
