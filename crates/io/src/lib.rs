// File I/O operations: CSV in, partitions out

pub mod csv;
pub mod pipeline;
pub mod upload;
pub mod writer;

pub use pipeline::{hash_upload, split_uploads, HashOptions, SplitOptions};
pub use upload::{StagedUpload, Upload};
pub use writer::OutputNames;
