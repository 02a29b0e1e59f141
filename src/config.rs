use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub api_base_url: Option<String>,
    pub open_command: Option<String>,
    pub header: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub api_base_url: String,
    pub open_command: Option<String>,
    pub header: Option<String>,
}

pub fn load(api_override: Option<String>) -> Result<RuntimeConfig> {
    let mut cfg = RuntimeConfig {
        api_base_url: DEFAULT_API_BASE_URL.to_string(),
        open_command: None,
        header: None,
    };

    if let Some(path) = default_config_path() {
        if path.is_file() {
            let txt = fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let parsed: AppConfig = toml::from_str(&txt)
                .with_context(|| format!("failed to parse toml: {}", path.display()))?;
            if let Some(base) = parsed.api_base_url {
                cfg.api_base_url = base;
            }
            cfg.open_command = parsed.open_command;
            cfg.header = parsed.header;
        }
    }

    // CLI flag wins over config file.
    if let Some(base) = api_override {
        cfg.api_base_url = base;
    }

    Ok(cfg)
}

fn default_config_path() -> Option<PathBuf> {
    let mut p = config_dir()?;
    p.push("config.toml");
    Some(p)
}

pub fn config_dir() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let mut p = PathBuf::from(xdg);
        p.push("snooze-cli");
        return Some(p);
    }
    if let Ok(home) = env::var("HOME") {
        let mut p = PathBuf::from(home);
        p.push(".config");
        p.push("snooze-cli");
        return Some(p);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_toml_parses_all_fields() {
        let parsed: AppConfig = toml::from_str(
            r#"
            api_base_url = "https://stories.example.com"
            open_command = "firefox"
            header = "== stories =="
            "#,
        )
        .unwrap();
        assert_eq!(
            parsed.api_base_url.as_deref(),
            Some("https://stories.example.com")
        );
        assert_eq!(parsed.open_command.as_deref(), Some("firefox"));
        assert_eq!(parsed.header.as_deref(), Some("== stories =="));
    }

    #[test]
    fn empty_config_is_valid() {
        let parsed: AppConfig = toml::from_str("").unwrap();
        assert!(parsed.api_base_url.is_none());
    }
}
