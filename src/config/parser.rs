use crate::ConfigResult;
use serde::Deserialize;
use std::path::Path;

/// Raw TOML config file contents
///
/// Every field is optional; values from the command line and environment
/// take precedence during resolution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub crawler: FileCrawlerSection,
    #[serde(default)]
    pub login: FileLoginSection,
    #[serde(default)]
    pub browser: FileBrowserSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileCrawlerSection {
    #[serde(rename = "seed-url")]
    pub seed_url: Option<String>,

    #[serde(rename = "max-depth")]
    pub max_depth: Option<u32>,

    #[serde(rename = "output-dir")]
    pub output_dir: Option<String>,

    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileLoginSection {
    pub enabled: Option<bool>,

    #[serde(rename = "login-url")]
    pub login_url: Option<String>,

    #[serde(rename = "user-selector")]
    pub user_selector: Option<String>,

    #[serde(rename = "pass-selector")]
    pub pass_selector: Option<String>,

    #[serde(rename = "submit-selector")]
    pub submit_selector: Option<String>,

    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileBrowserSection {
    #[serde(rename = "viewport-width")]
    pub viewport_width: Option<u32>,

    #[serde(rename = "viewport-height")]
    pub viewport_height: Option<u32>,

    #[serde(rename = "chrome-path")]
    pub chrome_path: Option<String>,
}

/// Loads and parses a TOML config file from the given path
pub fn load_file_config(path: &Path) -> ConfigResult<FileConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let config_content = r##"
[crawler]
seed-url = "https://example.com/"
max-depth = 2
output-dir = "./captures"
user-agent = "SnapcrawlBot/1.0"

[login]
enabled = true
login-url = "https://example.com/login"
user-selector = "#username"
pass-selector = "#password"
submit-selector = "button[type=submit]"
username = "alice"
password = "secret"

[browser]
viewport-width = 1920
viewport-height = 1080
"##;

        let file = create_temp_config(config_content);
        let config = load_file_config(file.path()).unwrap();

        assert_eq!(
            config.crawler.seed_url.as_deref(),
            Some("https://example.com/")
        );
        assert_eq!(config.crawler.max_depth, Some(2));
        assert_eq!(config.login.enabled, Some(true));
        assert_eq!(config.login.user_selector.as_deref(), Some("#username"));
        assert_eq!(config.browser.viewport_width, Some(1920));
    }

    #[test]
    fn test_load_empty_sections() {
        let file = create_temp_config("");
        let config = load_file_config(file.path()).unwrap();

        assert!(config.crawler.seed_url.is_none());
        assert!(config.login.enabled.is_none());
        assert!(config.browser.chrome_path.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_file_config(Path::new("/nonexistent/snapcrawl.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_file_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
