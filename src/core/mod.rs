pub mod dataset;
pub mod error;
pub mod schema;

pub use dataset::{Dataset, class_label};
pub use error::TreeError;
pub use schema::{ColumnKind, Schema};
