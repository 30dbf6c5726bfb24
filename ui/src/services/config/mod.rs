use std::sync::OnceLock;

use crate::console_warn;

pub const DEFAULT_SUBMIT_ENDPOINT: &str = "http://localhost:4000/api/form/submit";

/// Endpoint and thresholds used by the identity form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub submit_endpoint: String,
    /// Minimum age in whole calendar years
    pub minimum_age: u32,
    pub minimum_documents: usize,
    pub notification_duration_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_endpoint: DEFAULT_SUBMIT_ENDPOINT.to_string(),
            minimum_age: 18,
            minimum_documents: 2,
            notification_duration_ms: 4000,
        }
    }
}

impl FormConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.submit_endpoint = endpoint.into();
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.submit_endpoint.starts_with("http://")
            || self.submit_endpoint.starts_with("https://"))
        {
            return Err(format!(
                "submit_endpoint must be an http(s) URL, got '{}'",
                self.submit_endpoint
            ));
        }

        if self.minimum_documents == 0 {
            return Err("minimum_documents must be greater than 0".to_string());
        }

        if self.notification_duration_ms == 0 {
            return Err("notification_duration_ms must be greater than 0".to_string());
        }

        Ok(())
    }
}

static GLOBAL_CONFIG: OnceLock<FormConfig> = OnceLock::new();

/// Get the global configuration, falling back to defaults if it does not validate
pub fn get_global_config() -> FormConfig {
    GLOBAL_CONFIG
        .get_or_init(|| checked_or_default(FormConfig::default()))
        .clone()
}

fn checked_or_default(config: FormConfig) -> FormConfig {
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            console_warn!("Invalid configuration: {}", e);
            FormConfig::default()
        }
    }
}
