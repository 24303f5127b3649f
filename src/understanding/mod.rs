pub mod correlation;
pub mod dataset;
pub mod labels;
pub mod metadata;
pub mod types;

pub use correlation::{CorrelationOptions, correlation_matrix, pearson};
pub use dataset::Dataset;
pub use labels::{Labels, Locale};
pub use metadata::{generate_metadata, round_fraction, summarize_dtypes};
pub use types::{ColumnKind, ColumnMetadata, CorrelationMatrix, DatasetMetadata, DtypeSummary};
