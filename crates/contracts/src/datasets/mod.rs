pub mod response;

pub use response::{DatasetTable, DatasetsEnvelope, DatasetsResponse};
