//! In-memory analysis of typed records.
//!
//! The processing layer operates on record collections produced by [`crate::ingestion::load`]
//! (or built by hand). It is purely in-memory and single-threaded.
//!
//! - [`Analyzer`]: chainable filter/sort/limit/skip/distinct over a private working set, with
//!   grouping and aggregation, finished by [`Analyzer::analyze`]
//! - [`AggregateOp`] / [`aggregate_values`]: sum, avg, min, max and count with zero defaults
//! - [`compare_values`]: the ordering used by [`Analyzer::sort_by`]
//!
//! ## Example: filter → sort → analyze
//!
//! ```rust
//! use data_analyzer::processing::{AggregateConfig, AggregateOp, Analyzer, SortOrder};
//! use data_analyzer::records::{User, UserField, UserNumericField};
//!
//! let users = vec![
//!     User { id: 1, name: "Ada".into(), email: "ada@example.com".into(), age: 36, active: true },
//!     User { id: 2, name: "Linus".into(), email: "linus@example.com".into(), age: 54, active: false },
//!     User { id: 3, name: "Grace".into(), email: "grace@example.com".into(), age: 45, active: true },
//! ];
//!
//! let mut analyzer = Analyzer::new(&users);
//! analyzer
//!     .filter_by_field(UserField::Active, true)
//!     .filter_by_range(UserNumericField::Age, 30.0, 50.0)
//!     .sort_by(UserField::Name, SortOrder::Ascending);
//!
//! let config = AggregateConfig::new().with(UserField::Age, AggregateOp::Avg);
//! let result = analyzer.analyze(Some(&config));
//! assert_eq!(result.summary().total, 2);
//! assert_eq!(result.aggregate("age_avg"), Some(40.5));
//! ```

pub mod aggregate;
pub mod analyzer;
pub mod compare;
pub mod result;

pub use aggregate::{AggregateOp, aggregate_values};
pub use analyzer::{AggregateConfig, Analyzer, aggregate_key};
pub use compare::{SortOrder, compare_text, compare_values, values_equal};
pub use result::{AnalysisResult, Summary};
