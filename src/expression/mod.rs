pub mod filter;
pub mod metrics;
pub mod record;
pub mod table;

pub use filter::AnnotationFilter;
pub use metrics::{compute, derive, DerivedMetrics, FoldChange};
pub use record::{DerivedRecord, Record};
pub use table::ExpressionTable;
