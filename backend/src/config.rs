use std::env;

use crate::inference::bedrock_service::DEFAULT_MODEL_ID;

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub model_id: String,
    pub frontend_dir: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

impl AppConfig {
    /// Reads settings from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let max_upload_bytes = parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?;
        if max_upload_bytes == 0 {
            return Err(ConfigError::Invalid {
                name: "MAX_UPLOAD_BYTES",
                value: "0".into(),
            });
        }

        let model_id = lookup("BEDROCK_MODEL_ID")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        let frontend_dir = lookup("FRONTEND_DIR").unwrap_or_else(|| {
            match lookup("CARGO_MANIFEST_DIR") {
                Some(manifest_dir) => format!("{}/../frontend/dist", manifest_dir),
                None => "/usr/src/app/frontend/dist".to_string(),
            }
        });

        Ok(Self {
            port,
            model_id,
            frontend_dir,
            max_upload_bytes,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.model_id, "anthropic.claude-3-sonnet-20240229-v1:0");
        assert_eq!(config.frontend_dir, "/usr/src/app/frontend/dist");
        assert_eq!(config.max_upload_bytes, 20 * 1024 * 1024);
        assert_eq!(config.bind_address(), "0.0.0.0:8081");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("BEDROCK_MODEL_ID", "anthropic.claude-3-haiku-20240307-v1:0"),
            ("CARGO_MANIFEST_DIR", "/src/backend"),
            ("MAX_UPLOAD_BYTES", "1048576"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.model_id, "anthropic.claude-3-haiku-20240307-v1:0");
        assert_eq!(config.frontend_dir, "/src/backend/../frontend/dist");
        assert_eq!(config.max_upload_bytes, 1_048_576);
    }

    #[test]
    fn explicit_frontend_dir_wins() {
        let config = config_from(&[
            ("FRONTEND_DIR", "/srv/dist"),
            ("CARGO_MANIFEST_DIR", "/src/backend"),
        ])
        .unwrap();
        assert_eq!(config.frontend_dir, "/srv/dist");
    }

    #[test]
    fn blank_model_id_falls_back_to_default() {
        let config = config_from(&[("BEDROCK_MODEL_ID", "  ")]).unwrap();
        assert_eq!(config.model_id, DEFAULT_MODEL_ID);
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(matches!(
            config_from(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));
        assert!(matches!(
            config_from(&[("MAX_UPLOAD_BYTES", "0")]),
            Err(ConfigError::Invalid {
                name: "MAX_UPLOAD_BYTES",
                ..
            })
        ));
    }
}
