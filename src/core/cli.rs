//! CLI-only commands: config info and saved settings.
//!
//! These run without opening the TUI and produce plain text output.

use std::env;
use std::error::Error;
use std::io::{self, Read};

use crate::core::config::{self, DEFAULT_MODEL};
use crate::core::paths;
use crate::core::settings::{self, StoredSettings};

/// Run the `config` command: display paths, model, and API key status.
/// `model_override` is the global `-m/--model` flag.
pub fn run_config(model_override: Option<&str>) {
    let show = |p: Option<std::path::PathBuf>| {
        p.map(|p| p.display().to_string())
            .unwrap_or_else(|| "—".to_string())
    };

    let stored = StoredSettings::load();
    let env_model = env::var("OPENROUTER_MODEL").ok();
    let (model, model_source) = model_with_source(model_override, env_model, &stored);
    let api_key_status = match config::load() {
        Ok(_) => api_key_source(&stored),
        Err(_) => "not set (export OPENROUTER_API_KEY or run `study-buddy config set-api-key`)",
    };

    println!("Config:   {}", show(paths::config_dir()));
    println!("Settings: {}", show(settings::settings_path()));
    println!("Cache:    {}", show(paths::cache_dir()));
    println!("Model:    {} ({})", model, model_source);
    println!("API key:  {}", api_key_status);
}

/// Run `config set-api-key`: save the key (read from stdin when omitted).
pub fn run_config_set_api_key(api_key: Option<String>) -> Result<(), Box<dyn Error>> {
    let key = match api_key {
        Some(k) if !k.trim().is_empty() => k,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if key.trim().is_empty() {
        return Err("no API key provided".into());
    }

    let mut stored = StoredSettings::load();
    stored.set_api_key(&key);
    let path = stored.save()?;
    println!("API key saved to {}", path.display());
    Ok(())
}

/// Run `config set-model`: save the default model for later runs.
pub fn run_config_set_model(model: &str) -> Result<(), Box<dyn Error>> {
    if model.trim().is_empty() {
        return Err("no model provided".into());
    }
    let mut stored = StoredSettings::load();
    stored.set_model(model);
    let path = stored.save()?;
    println!("Model {} saved to {}", model.trim(), path.display());
    Ok(())
}

/// Model in effect and where it came from: `--model`, then OPENROUTER_MODEL, then settings.
fn model_with_source(
    model_override: Option<&str>,
    env_model: Option<String>,
    stored: &StoredSettings,
) -> (String, &'static str) {
    if let Some(m) = model_override.filter(|m| !m.trim().is_empty()) {
        return (m.to_string(), "from --model");
    }
    if let Some(m) = env_model.filter(|m| !m.trim().is_empty()) {
        return (m, "from OPENROUTER_MODEL");
    }
    match stored.model {
        Some(ref m) => (m.clone(), "from settings"),
        None => (DEFAULT_MODEL.to_string(), "default"),
    }
}

fn api_key_source(stored: &StoredSettings) -> &'static str {
    if env::var("OPENROUTER_API_KEY").is_ok_and(|k| !k.trim().is_empty()) {
        "set ✓ (OPENROUTER_API_KEY)"
    } else if stored.api_key.is_some() {
        "set ✓ (settings)"
    } else {
        "set ✓"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_model(model: &str) -> StoredSettings {
        StoredSettings {
            api_key: None,
            model: Some(model.to_string()),
        }
    }

    #[test]
    fn model_flag_wins() {
        let (model, source) = model_with_source(
            Some("x/flag"),
            Some("x/env".to_string()),
            &stored_model("x/stored"),
        );
        assert_eq!(model, "x/flag");
        assert_eq!(source, "from --model");
    }

    #[test]
    fn env_then_settings_then_default() {
        let (model, source) =
            model_with_source(None, Some("x/env".to_string()), &stored_model("x/stored"));
        assert_eq!((model.as_str(), source), ("x/env", "from OPENROUTER_MODEL"));

        let (model, source) = model_with_source(None, None, &stored_model("x/stored"));
        assert_eq!((model.as_str(), source), ("x/stored", "from settings"));

        let (model, source) =
            model_with_source(None, Some(" ".to_string()), &StoredSettings::default());
        assert_eq!((model.as_str(), source), (DEFAULT_MODEL, "default"));
    }
}
