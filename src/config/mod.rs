//! Configuration module for snapcrawl
//!
//! Merges three layers into one immutable [`Config`], highest precedence
//! first: command-line flags, environment variables (carried in through the
//! same [`Overrides`] struct), and an optional TOML config file.

mod parser;
mod types;
mod validation;

pub use parser::{load_file_config, FileConfig};
pub use types::{BrowserConfig, Config, LoginConfig};
pub use validation::validate;

use crate::{ConfigError, ConfigResult};
use std::path::PathBuf;
use url::Url;

/// Values supplied on the command line or through the environment
///
/// Each `None` falls through to the config file layer, then to the
/// built-in default.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub seed_url: Option<String>,
    pub max_depth: Option<u32>,
    pub output_dir: Option<PathBuf>,
    pub user_agent: Option<String>,
    pub login_enabled: Option<bool>,
    pub login_url: Option<String>,
    pub user_selector: Option<String>,
    pub pass_selector: Option<String>,
    pub submit_selector: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub chrome_path: Option<String>,
}

/// Resolves the layered configuration into a validated [`Config`]
///
/// The seed URL is the only required value; its absence is a fatal
/// startup error.
pub fn resolve(overrides: Overrides, file: Option<FileConfig>) -> ConfigResult<Config> {
    let file = file.unwrap_or_default();

    let seed_raw = overrides
        .seed_url
        .or(file.crawler.seed_url)
        .ok_or_else(|| {
            ConfigError::Validation(
                "seed URL is required (pass --url or set seed-url in the config file)".to_string(),
            )
        })?;
    let seed_url = parse_url(&seed_raw)?;

    let login_url = overrides
        .login_url
        .or(file.login.login_url)
        .map(|raw| parse_url(&raw))
        .transpose()?;

    let mut browser = BrowserConfig::default();
    if let Some(width) = file.browser.viewport_width {
        browser.viewport_width = width;
    }
    if let Some(height) = file.browser.viewport_height {
        browser.viewport_height = height;
    }
    browser.chrome_path = overrides.chrome_path.or(file.browser.chrome_path);

    let config = Config {
        seed_url,
        max_depth: overrides.max_depth.or(file.crawler.max_depth).unwrap_or(0),
        output_dir: overrides
            .output_dir
            .or(file.crawler.output_dir.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("output")),
        user_agent: overrides.user_agent.or(file.crawler.user_agent),
        login: LoginConfig {
            enabled: overrides
                .login_enabled
                .or(file.login.enabled)
                .unwrap_or(false),
            login_url,
            user_selector: overrides.user_selector.or(file.login.user_selector),
            pass_selector: overrides.pass_selector.or(file.login.pass_selector),
            submit_selector: overrides.submit_selector.or(file.login.submit_selector),
            username: overrides.username.or(file.login.username),
            password: overrides.password.or(file.login.password),
        },
        browser,
    };

    validate(&config)?;

    Ok(config)
}

fn parse_url(raw: &str) -> ConfigResult<Url> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_overrides() -> Overrides {
        Overrides {
            seed_url: Some("https://example.com/".to_string()),
            ..Overrides::default()
        }
    }

    #[test]
    fn test_resolve_minimal() {
        let config = resolve(seed_overrides(), None).unwrap();
        assert_eq!(config.seed_url.as_str(), "https://example.com/");
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert!(!config.login.enabled);
    }

    #[test]
    fn test_missing_seed_is_fatal() {
        let result = resolve(Overrides::default(), None);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_invalid_seed_is_fatal() {
        let overrides = Overrides {
            seed_url: Some("not a url".to_string()),
            ..Overrides::default()
        };
        assert!(resolve(overrides, None).is_err());
    }

    #[test]
    fn test_overrides_beat_file() {
        let file = FileConfig {
            crawler: parser::FileCrawlerSection {
                seed_url: Some("https://file.example.com/".to_string()),
                max_depth: Some(5),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut overrides = seed_overrides();
        overrides.max_depth = Some(1);

        let config = resolve(overrides, Some(file)).unwrap();
        assert_eq!(config.seed_url.as_str(), "https://example.com/");
        assert_eq!(config.max_depth, 1);
    }

    #[test]
    fn test_file_fills_gaps() {
        let file = FileConfig {
            crawler: parser::FileCrawlerSection {
                seed_url: Some("https://file.example.com/".to_string()),
                output_dir: Some("./archive".to_string()),
                ..Default::default()
            },
            login: parser::FileLoginSection {
                enabled: Some(true),
                user_selector: Some("#u".to_string()),
                pass_selector: Some("#p".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let config = resolve(Overrides::default(), Some(file)).unwrap();
        assert_eq!(config.seed_url.as_str(), "https://file.example.com/");
        assert_eq!(config.output_dir, PathBuf::from("./archive"));
        assert!(config.login.enabled);
        assert_eq!(config.login.user_selector.as_deref(), Some("#u"));
        assert_eq!(config.login.pass_selector.as_deref(), Some("#p"));
    }

    #[test]
    fn test_login_url_parsed() {
        let mut overrides = seed_overrides();
        overrides.login_url = Some("https://example.com/login".to_string());
        let config = resolve(overrides, None).unwrap();
        assert_eq!(
            config.login.login_url.as_ref().map(|u| u.as_str()),
            Some("https://example.com/login")
        );
    }
}
