pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use config::AppConfig;
pub use error::ZyntroError;
pub use result::ZyntroResult;
pub use traits::{KeyValueStore, ACTIVE_PROJECT_KEY};
