//! `data-analyzer` loads record files into memory, validates them against a record shape, and
//! runs chainable filter/sort/group/aggregate analyses over the typed records.
//!
//! The primary entrypoints are [`ingestion::load`] (validated records from a file) and
//! [`processing::Analyzer`] (the analysis engine).
//!
//! ## What you can load
//!
//! **File formats (detected by extension):**
//!
//! - **CSV**: `.csv` (header line skipped, cells mapped positionally onto the shape's fields)
//! - **JSON**: `.json` (a top-level array of objects)
//! - **XML**: `.xml` (`<sales><sale>…</sale></sales>`; one or many items)
//!
//! **Record shapes:**
//!
//! A shape is a Rust type implementing [`types::Record`]. Two ship with the crate:
//! [`records::Sale`] and [`records::User`]. Every field is required, and validation does not
//! coerce: a numeric string in a number field fails the whole load with
//! [`SourceError::Validation`], and no records are returned.
//!
//! ## Quick example: load and analyze
//!
//! ```no_run
//! use data_analyzer::ingestion::{load, FileSource};
//! use data_analyzer::processing::{AggregateConfig, AggregateOp, Analyzer, SortOrder};
//! use data_analyzer::records::{Sale, SaleField};
//!
//! # fn main() -> Result<(), data_analyzer::SourceError> {
//! let sales = load(&FileSource::<Sale>::new("sales.csv"))?;
//!
//! let config = AggregateConfig::new()
//!     .with(SaleField::Price, AggregateOp::Sum)
//!     .with(SaleField::Quantity, AggregateOp::Avg);
//! let result = Analyzer::new(&sales)
//!     .filter_by_field(SaleField::Category, "Electronics")
//!     .sort_by(SaleField::Price, SortOrder::Descending)
//!     .analyze(Some(&config));
//!
//! println!("records={} price_sum={:?}", result.summary().total, result.aggregate("price_sum"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: record sources, raw readers and the load protocol
//! - [`validation`]: shape predicates over untyped JSON values
//! - [`processing`]: the analysis engine and aggregations
//! - [`report`]: text/JSON rendering of analysis results
//! - [`records`]: built-in record shapes
//! - [`types`]: schema, value and record traits
//! - [`error`]: error types
//!
//! ### Aggregate operations
//!
//! - [`processing::AggregateOp::Sum`], [`processing::AggregateOp::Avg`],
//!   [`processing::AggregateOp::Min`], [`processing::AggregateOp::Max`]: operate on the
//!   numeric values of a field and ignore everything else
//! - [`processing::AggregateOp::Count`]: counts the numeric values
//!
//! Every operation returns `0.0` when there are no numeric values, including on an empty
//! working set. Check the record count to tell "no data" apart from a zero result.

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod records;
pub mod report;
pub mod types;
pub mod validation;

pub use error::{ReadFailure, ReportError, SourceError, SourceResult};
