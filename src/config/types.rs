use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Fully resolved configuration for a crawl run
///
/// Built once at startup by merging CLI flags, environment variables, and
/// an optional TOML config file (highest precedence first), then validated.
/// Immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed URL the crawl starts from
    pub seed_url: Url,

    /// Maximum crawl depth from the seed (0 = seed only)
    pub max_depth: u32,

    /// Directory that receives the capture artifacts
    pub output_dir: PathBuf,

    /// User agent applied to every page, if set
    pub user_agent: Option<String>,

    pub login: LoginConfig,
    pub browser: BrowserConfig,
}

/// Form-based login flow configuration
#[derive(Debug, Clone, Default)]
pub struct LoginConfig {
    /// Whether to attempt a login before rendering each page
    pub enabled: bool,

    /// Page holding the login form; falls back to the target URL
    pub login_url: Option<Url>,

    /// Selector for the username field
    pub user_selector: Option<String>,

    /// Selector for the password field
    pub pass_selector: Option<String>,

    /// Selector for the submit control; Enter is pressed if unset
    pub submit_selector: Option<String>,

    pub username: Option<String>,
    pub password: Option<String>,
}

/// Browser session tuning
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub viewport_width: u32,
    pub viewport_height: u32,

    /// Ceiling for every navigation
    pub navigation_timeout: Duration,

    /// How long to wait for the username field to appear
    pub selector_timeout: Duration,

    /// Quiet window after navigation completes, approximating network idle
    pub settle_delay: Duration,

    /// Delay between simulated keystrokes during credential entry
    pub type_delay: Duration,

    /// Path to a Chrome/Chromium executable (None for auto-detection)
    pub chrome_path: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            viewport_height: 800,
            navigation_timeout: Duration::from_secs(60),
            selector_timeout: Duration::from_secs(5),
            settle_delay: Duration::from_millis(500),
            type_delay: Duration::from_millis(50),
            chrome_path: None,
        }
    }
}
