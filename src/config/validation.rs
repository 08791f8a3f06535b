use crate::config::types::{BrowserConfig, Config};
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates a resolved configuration
///
/// Only startup-fatal problems are rejected here. Soft misconfigurations
/// (login enabled without selectors, blank credentials) are handled with
/// warnings at render time instead, so a run is never aborted by them.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_crawl_url(&config.seed_url, "seed URL")?;

    if let Some(login_url) = &config.login.login_url {
        validate_crawl_url(login_url, "login URL")?;
    }

    validate_browser(&config.browser)?;

    Ok(())
}

/// Rejects URLs the browser cannot be pointed at
fn validate_crawl_url(url: &Url, what: &str) -> ConfigResult<()> {
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "{} must use http or https, got '{}'",
            what,
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::Validation(format!(
            "{} must have a host, got '{}'",
            what, url
        )));
    }

    Ok(())
}

fn validate_browser(browser: &BrowserConfig) -> ConfigResult<()> {
    if browser.viewport_width == 0 || browser.viewport_height == 0 {
        return Err(ConfigError::Validation(format!(
            "viewport dimensions must be non-zero, got {}x{}",
            browser.viewport_width, browser.viewport_height
        )));
    }

    Ok(())
}
