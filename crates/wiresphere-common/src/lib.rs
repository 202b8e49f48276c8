pub mod errors;
pub mod types;

pub use errors::{ConfigError, WireSphereError};
pub use types::{Color, Viewport};

pub type Result<T> = std::result::Result<T, WireSphereError>;
