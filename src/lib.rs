//! Library entry point for the path-size CLI.

pub mod aggregator;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod path;

pub use aggregator::{aggregate, aggregate_path};
pub use error::{AggregationError, AppError};
pub use format::{compose, format_bytes, path_size, unit_index};
pub use model::{AggregationRequest, HiddenRootPolicy, PathEntry};
pub use path::is_hidden;
