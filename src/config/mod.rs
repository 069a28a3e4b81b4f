//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, ControlPlaneConfig, DemoConfig, EmailConfig, LogFormat, LoggingConfig, ServerConfig,
    DEFAULT_BODY_LIMIT_BYTES,
};
