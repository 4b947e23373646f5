use folio_api::ContactChannels;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub environment: String,
    pub request_timeout: Duration,
    pub max_body_bytes: usize,
    pub cors_allowed_origins: Vec<String>,
    pub admin_recent_limit: usize,
    pub store_url: Option<String>,
    pub store_prefix: String,
    pub store_command_timeout: Duration,
    pub contact: ContactChannels,
    pub log_json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            request_timeout: Duration::from_secs(30),
            max_body_bytes: 10 * 1024 * 1024,
            cors_allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5500".to_string(),
                "http://127.0.0.1:3000".to_string(),
                "http://127.0.0.1:5500".to_string(),
            ],
            admin_recent_limit: 50,
            store_url: None,
            store_prefix: "folio".to_string(),
            store_command_timeout: Duration::from_millis(2000),
            contact: ContactChannels::default(),
            log_json: true,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

pub fn validate_startup_config_contract(api: &ApiConfig) -> Result<(), String> {
    if api.max_body_bytes == 0 {
        return Err("max body bytes must be > 0".to_string());
    }
    if api.request_timeout.is_zero() || api.store_command_timeout.is_zero() {
        return Err("timeouts must be > 0".to_string());
    }
    if api.admin_recent_limit == 0 {
        return Err("admin recent limit must be > 0".to_string());
    }
    if api.environment.trim().is_empty() {
        return Err("environment must be non-empty".to_string());
    }
    if api.store_url.as_deref().is_some_and(|u| u.trim().is_empty()) {
        return Err("store url, when set, must be non-empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_config_validation_rejects_zero_timeout() {
        let api = ApiConfig {
            request_timeout: Duration::ZERO,
            ..ApiConfig::default()
        };
        let err = validate_startup_config_contract(&api).expect_err("zero timeout");
        assert!(err.contains("timeouts"));
    }

    #[test]
    fn startup_config_validation_rejects_blank_store_url() {
        let api = ApiConfig {
            store_url: Some("  ".to_string()),
            ..ApiConfig::default()
        };
        let err = validate_startup_config_contract(&api).expect_err("blank url");
        assert!(err.contains("store url"));
    }

    #[test]
    fn default_config_passes_startup_contract() {
        validate_startup_config_contract(&ApiConfig::default()).expect("default config valid");
        assert!(!ApiConfig::default().is_production());
    }
}
