use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::settings::Settings;
use crate::env::EnvProvider;

pub const DEFAULT_SETTINGS_PATH: &str = "bt-discover.yaml";

/// Load settings from `path`, or from [`DEFAULT_SETTINGS_PATH`] when no path is given.
/// Only the default location may be absent; it then yields default settings.
pub fn load_settings(path: Option<&Path>, env: &impl EnvProvider) -> Result<Settings> {
    let (path, explicit) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_SETTINGS_PATH), false),
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound && !explicit => return Ok(Settings::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("cannot read settings file {}", path.display()))
        }
    };

    parse_settings(&expand_env_vars(&content, env)?)
        .with_context(|| format!("invalid settings file {}", path.display()))
}

pub fn parse_settings(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = serde_yaml::from_str(content)?;
    Ok(settings)
}

/// Replace `${VAR}` and `${VAR:default}` with values from `env`
fn expand_env_vars(input: &str, env: &impl EnvProvider) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}")?;
    let expanded = re.replace_all(input, |caps: &regex::Captures| {
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        env.get(&caps[1])
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_else(|| default.to_string())
    });
    Ok(expanded.into_owned())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::settings::{LogFormat, LoggingConfig, OutputFormat};
    use crate::env::MapEnv;

    #[test]
    fn full_settings_file() {
        let settings = parse_settings(
            r#"
logging:
  level: debug
  format: json
output:
  format: json
  show_path: true
"#,
        )
        .unwrap();

        assert_eq!(
            settings.logging,
            Some(LoggingConfig::new("debug".to_owned(), LogFormat::Json))
        );
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.output.show_path);
    }

    #[test]
    fn empty_and_partial_files_use_defaults() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());

        let settings = parse_settings("logging:\n  format: json\n").unwrap();
        let logging = settings.logging.unwrap();
        assert_eq!(logging.level, "warn");
        assert_eq!(logging.format, LogFormat::Json);
        assert_eq!(settings.output.format, OutputFormat::Raw);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse_settings("sources: {}\n").is_err());
    }

    #[test]
    fn misspelled_nested_keys_are_rejected() {
        assert!(parse_settings("logging:\n  lvl: debug\n").is_err());
        assert!(parse_settings("output:\n  fromat: json\n").is_err());
        assert!(parse_settings("output:\n  show-path: true\n").is_err());
    }

    #[test]
    fn env_references_are_expanded() {
        let env = MapEnv::new().with_var("BT_LOG_LEVEL", "trace");
        let expanded = expand_env_vars("level: ${BT_LOG_LEVEL}\nformat: ${BT_LOG_FORMAT:json}", &env).unwrap();
        assert_eq!(expanded, "level: trace\nformat: json");
    }

    #[test]
    fn explicit_settings_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.yaml");
        assert!(load_settings(Some(absent.as_path()), &MapEnv::new()).is_err());

        let present = dir.path().join("bt-discover.yaml");
        fs::write(&present, "output:\n  show_path: true\n").unwrap();
        let settings = load_settings(Some(present.as_path()), &MapEnv::new()).unwrap();
        assert!(settings.output.show_path);
    }
}
