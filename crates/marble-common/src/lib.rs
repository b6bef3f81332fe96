pub mod errors;

pub use errors::{ConfigError, MarbleError, MeshError};

pub type Result<T> = std::result::Result<T, MarbleError>;
