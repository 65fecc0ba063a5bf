pub mod error;
pub mod load;
pub mod settings;

pub use error::ConfigError;
pub use load::{load_settings, SETTINGS_PATH_ENV};
pub use settings::{Settings, DEFAULT_QUERY_TIMEOUT_MS, DEFAULT_REST_BASE};
