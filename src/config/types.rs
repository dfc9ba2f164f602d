use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the ChitChat server lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL for the REST API (e.g., "http://localhost:3000").
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// How failed actions are surfaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub policy: NotifyPolicy,
    /// Snackbar text used when a request failed without any response.
    #[serde(default = "default_network_error_message")]
    pub network_error_message: String,
}

/// Whether the dispatcher raises the error snackbar on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyPolicy {
    /// Commit `ShowErrorSnackbar` for every failed action.
    #[default]
    Snackbar,
    /// Leave the snackbar alone; the caller inspects the returned error.
    Silent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (e.g., "info", "chitchat_client=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_network_error_message() -> String {
    "Unable to reach the server".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            policy: NotifyPolicy::default(),
            network_error_message: default_network_error_message(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
