pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, InitResult};
pub use types::{Config, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
