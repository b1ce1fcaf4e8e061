//! Error types for tabgen

use thiserror::Error;

/// Error type for table data ingestion
#[derive(Debug, Error)]
pub enum TableError {
	/// Bulk data ingestion received nesting deeper than two levels
	#[error(
		"add_data_array received a three-dimensional array; only one- and two-dimensional arrays are supported"
	)]
	UnsupportedDepth,
}

/// Result type for table operations
pub type Result<T> = std::result::Result<T, TableError>;
