use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

// =============================================================================
// Defaults
// =============================================================================

/// Manifest read when no override is given
pub const DEFAULT_MANIFEST_PATH: &str = "package.json";

/// Manifest field holding the declared version
pub const DEFAULT_VERSION_FIELD: &str = "solcVersion";

/// Shell command that makes the binding report its own version
pub const DEFAULT_BINDING_COMMAND: &str = r#"node -p "require('./index.js').version()""#;

/// Timeout for the binding command in milliseconds (30 seconds)
pub const DEFAULT_BINDING_TIMEOUT_MS: u64 = 30_000;

/// Interval between checks on a running binding command
pub const BINDING_POLL_INTERVAL_MS: u64 = 10;

// =============================================================================
// Exit codes
// =============================================================================

pub const EXIT_MATCH: u8 = 0;
pub const EXIT_MISMATCH: u8 = 1;
/// A version could not be obtained or is not a valid semantic version
pub const EXIT_ERROR: u8 = 2;

// =============================================================================
// Environment variables
// =============================================================================

pub const ENV_MANIFEST: &str = "VERSION_CHECK_MANIFEST";
pub const ENV_FIELD: &str = "VERSION_CHECK_FIELD";
pub const ENV_BINDING: &str = "VERSION_CHECK_BINDING";
pub const ENV_TIMEOUT_MS: &str = "VERSION_CHECK_TIMEOUT_MS";
pub const ENV_LOG_FORMAT: &str = "VERSION_CHECK_LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Read the format before logging exists; unknown values fall back to text.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(ENV_LOG_FORMAT).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Check configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CheckConfig {
    /// Path of the manifest declaring the version
    pub manifest_path: PathBuf,
    /// Field holding the declared version (JSON manifests only)
    pub version_field: String,
    /// Shell command printing the binding's version
    pub binding_command: String,
    pub binding_timeout: Duration,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            version_field: DEFAULT_VERSION_FIELD.to_string(),
            binding_command: DEFAULT_BINDING_COMMAND.to_string(),
            binding_timeout: Duration::from_millis(DEFAULT_BINDING_TIMEOUT_MS),
        }
    }
}

impl CheckConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    /// Unset or empty variables keep their defaults.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = var(ENV_MANIFEST) {
            config.manifest_path = PathBuf::from(path);
        }
        if let Some(field) = var(ENV_FIELD) {
            config.version_field = field.trim().to_string();
        }
        if let Some(command) = var(ENV_BINDING) {
            config.binding_command = command;
        }
        if let Some(timeout) = var(ENV_TIMEOUT_MS) {
            match timeout.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.binding_timeout = Duration::from_millis(ms),
                _ => warn!(
                    "Ignoring invalid {}={:?}, using {}ms",
                    ENV_TIMEOUT_MS, timeout, DEFAULT_BINDING_TIMEOUT_MS
                ),
            }
        }

        config
    }
}
