use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::domain::notification::DEFAULT_SUBJECT;
use crate::domain::rate_limit::DEFAULT_COOLDOWN;
use crate::domain::DomainError;
use crate::infrastructure::notification::{DispatchMode, ResendSettings};
use crate::infrastructure::issuance::ControlPlaneSettings;

/// Default request body cap for the demo key endpoint (100 KiB)
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 100 * 1024;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub control_plane: ControlPlaneConfig,
    pub email: EmailConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
    pub max_concurrent_requests: usize,
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlPlaneConfig {
    pub url: Option<String>,
    pub admin_token: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub from: Option<String>,
    pub subject: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Return keys in the response instead of emailing them
    pub return_keys_inline: bool,
    pub cooldown_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            max_concurrent_requests: 256,
            static_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ControlPlaneConfig {
    fn default() -> Self {
        Self {
            url: None,
            admin_token: None,
            timeout_secs: 10,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: crate::infrastructure::notification::DEFAULT_RESEND_API_URL.to_string(),
            api_key: None,
            from: None,
            subject: DEFAULT_SUBJECT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            return_keys_inline: false,
            cooldown_secs: DEFAULT_COOLDOWN.as_secs(),
        }
    }
}

impl AppConfig {
    /// Load from config files, `APP__*` variables and the flat legacy variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve the legacy flat variables
    pub fn load_with<F>(lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT").and_then(|p| p.trim().parse::<i64>().ok());
        let inline = lookup("DEV_RETURN_KEYS").map(|v| v == "true");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", port)?
            .set_override_option("control_plane.url", lookup("CONTROL_PLANE_URL"))?
            .set_override_option("control_plane.admin_token", lookup("AUTHENSOR_ADMIN_TOKEN"))?
            .set_override_option("email.api_key", lookup("RESEND_API_KEY"))?
            .set_override_option("email.from", lookup("RESEND_FROM"))?
            .set_override_option("demo.return_keys_inline", inline)?
            .build()?;

        config.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, DomainError> {
        let ip = self
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| DomainError::configuration(format!("Invalid server host: {}", e)))?;

        Ok(SocketAddr::from((ip, self.server.port)))
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.demo.cooldown_secs)
    }

    pub fn dispatch_mode(&self) -> DispatchMode {
        DispatchMode::from_inline_flag(self.demo.return_keys_inline)
    }

    pub fn control_plane_settings(&self) -> ControlPlaneSettings {
        ControlPlaneSettings {
            base_url: self.control_plane.url.clone(),
            admin_token: self.control_plane.admin_token.clone(),
            timeout: Duration::from_secs(self.control_plane.timeout_secs),
        }
    }

    pub fn resend_settings(&self) -> ResendSettings {
        ResendSettings {
            api_url: self.email.api_url.clone(),
            api_key: self.email.api_key.clone(),
            from: self.email.from.clone(),
            timeout: Duration::from_secs(self.email.timeout_secs),
        }
    }

    /// Control plane address shown to users in emailed config snippets
    pub fn public_control_plane_url(&self) -> String {
        self.control_plane
            .url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_default()
    }
}
