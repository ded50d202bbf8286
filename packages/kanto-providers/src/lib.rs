mod error;
pub mod upstream;

pub use error::{Error, Result};
pub use upstream::UpstreamClient;
