use std::env;

use async_openai::config::OpenAIConfig;

use crate::core::settings::StoredSettings;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_config: OpenAIConfig,
    pub model_id: String,
    /// Show message times in the transcript (STUDY_BUDDY_SHOW_TIMESTAMPS).
    pub show_timestamps: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "OPENROUTER_API_KEY is not set (export it, add it to .env, or run `study-buddy config set-api-key`)"
    )]
    MissingApiKey,
}

/// Load configuration from the environment, falling back to the stored settings.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|name| env::var(name).ok(), StoredSettings::load())
}

/// Resolve configuration from a variable lookup. Environment values win over `stored`.
pub(crate) fn load_from<F>(lookup: F, stored: StoredSettings) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let base_url = non_empty("OPENROUTER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let api_key = non_empty("OPENROUTER_API_KEY")
        .or(stored.api_key)
        .ok_or(ConfigError::MissingApiKey)?;

    let model_id = non_empty("OPENROUTER_MODEL")
        .or(stored.model)
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let show_timestamps = non_empty("STUDY_BUDDY_SHOW_TIMESTAMPS")
        .is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"));

    let openai_config = OpenAIConfig::new()
        .with_api_base(base_url)
        .with_api_key(api_key.trim());

    Ok(Config {
        openai_config,
        model_id,
        show_timestamps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_openai::config::Config as _;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_only_key_is_set() {
        let config = load_from(
            lookup(&[("OPENROUTER_API_KEY", "sk-1")]),
            StoredSettings::default(),
        )
        .unwrap();
        assert_eq!(config.model_id, DEFAULT_MODEL);
        assert_eq!(config.openai_config.api_base(), DEFAULT_BASE_URL);
        assert!(!config.show_timestamps);
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = load_from(lookup(&[]), StoredSettings::default()).unwrap_err();
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn blank_env_key_falls_back_to_stored_key() {
        let stored = StoredSettings {
            api_key: Some("sk-stored".to_string()),
            model: None,
        };
        let config = load_from(lookup(&[("OPENROUTER_API_KEY", "  ")]), stored);
        assert!(config.is_ok());
    }

    #[test]
    fn stored_model_applies_unless_env_overrides() {
        let stored = || StoredSettings {
            api_key: Some("sk-stored".to_string()),
            model: Some("meta/llama-3".to_string()),
        };
        let config = load_from(lookup(&[]), stored()).unwrap();
        assert_eq!(config.model_id, "meta/llama-3");

        let config =
            load_from(lookup(&[("OPENROUTER_MODEL", "openai/gpt-4o")]), stored()).unwrap();
        assert_eq!(config.model_id, "openai/gpt-4o");
    }

    #[test]
    fn overrides_are_honored() {
        let config = load_from(
            lookup(&[
                ("OPENROUTER_API_KEY", "sk-1"),
                ("OPENROUTER_MODEL", "openai/gpt-4o-mini"),
                ("OPENROUTER_BASE_URL", "http://localhost:8080/v1"),
                ("STUDY_BUDDY_SHOW_TIMESTAMPS", "true"),
            ]),
            StoredSettings::default(),
        )
        .unwrap();
        assert_eq!(config.model_id, "openai/gpt-4o-mini");
        assert_eq!(config.openai_config.api_base(), "http://localhost:8080/v1");
        assert!(config.show_timestamps);
    }
}
