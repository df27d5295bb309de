pub mod file;
pub mod http;

pub use file::FileDatasetSource;
pub use http::HttpDatasetSource;
