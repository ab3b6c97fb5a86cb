pub mod model;

pub use model::{ClientConfig, LoggingConfig, Settings, load_settings, load_settings_from};
