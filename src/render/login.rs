//! Best-effort form-based login flow
//!
//! Runs before the main navigation when login is enabled. Nothing in this
//! module can fail the item: every problem is logged as a warning and the
//! renderer proceeds to the target URL regardless.
//!
//! The decision of what the flow should do is separated from the browser
//! interaction: [`login_plan`] inspects the configuration and returns a
//! plan, [`attempt_login`] executes it against the page.

use crate::config::LoginConfig;
use crate::render::browser::BrowserSession;
use crate::{Result, SnapError};
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use url::Url;

/// Poll interval while waiting for the username field to appear
const SELECTOR_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What the login flow will do for a given configuration
#[derive(Debug, PartialEq, Eq)]
enum LoginPlan<'a> {
    /// Field selectors are not configured; skip without touching the page
    SkipNoSelectors,

    /// Selectors are set but a credential is missing or blank; navigate to
    /// the login page, then skip credential entry
    SkipBlankCredentials,

    /// Navigate and fill the form
    Fill(FormFill<'a>),
}

/// Everything needed to fill and submit the form
#[derive(Debug, PartialEq, Eq)]
struct FormFill<'a> {
    user_selector: &'a str,
    pass_selector: &'a str,
    submit_selector: Option<&'a str>,
    username: &'a str,
    password: &'a str,
}

/// Decides what the login flow should do
///
/// Pure function of the configuration: both field selectors must be set
/// for any interaction, and both credentials must be present and non-blank
/// for the form to be filled.
fn login_plan(login: &LoginConfig) -> LoginPlan<'_> {
    let (Some(user_selector), Some(pass_selector)) = (
        login.user_selector.as_deref(),
        login.pass_selector.as_deref(),
    ) else {
        return LoginPlan::SkipNoSelectors;
    };

    let (Some(username), Some(password)) =
        (login.username.as_deref(), login.password.as_deref())
    else {
        return LoginPlan::SkipBlankCredentials;
    };
    if username.trim().is_empty() || password.trim().is_empty() {
        return LoginPlan::SkipBlankCredentials;
    }

    LoginPlan::Fill(FormFill {
        user_selector,
        pass_selector,
        submit_selector: login.submit_selector.as_deref(),
        username,
        password,
    })
}

/// Attempts the configured login flow on the given page
///
/// Navigates to the login URL (falling back to the target URL), fills the
/// credential fields, and submits. Skips with a warning when selectors or
/// credentials are missing.
pub async fn attempt_login(
    session: &BrowserSession,
    page: &Page,
    login: &LoginConfig,
    target: &Url,
) {
    let fill = match login_plan(login) {
        LoginPlan::SkipNoSelectors => {
            warn!("Login enabled but user/pass selectors are not configured, skipping login");
            return;
        }
        LoginPlan::SkipBlankCredentials => None,
        LoginPlan::Fill(fill) => Some(fill),
    };

    let login_url = login.login_url.clone().unwrap_or_else(|| target.clone());
    if let Err(e) = session.navigate(page, login_url.as_str()).await {
        warn!("Login page navigation failed ({e}), proceeding without login");
        return;
    }

    let Some(fill) = fill else {
        warn!("Login credentials are blank, skipping credential entry");
        return;
    };

    match fill_and_submit(session, page, &fill).await {
        Ok(()) => info!("Login form submitted"),
        Err(e) => warn!("Login interaction failed ({e}), proceeding without login"),
    }
}

/// Fills both credential fields and submits the form
///
/// With a submit selector the click and the post-submit navigation wait run
/// concurrently; without one, Enter is pressed on the password field and
/// the navigation wait is best-effort.
async fn fill_and_submit(
    session: &BrowserSession,
    page: &Page,
    fill: &FormFill<'_>,
) -> Result<()> {
    let settings = session.settings();

    let user_field =
        wait_for_element(page, fill.user_selector, settings.selector_timeout).await?;
    user_field.click().await?;
    type_slowly(&user_field, fill.username, settings.type_delay).await?;

    let pass_field = page.find_element(fill.pass_selector).await?;
    pass_field.click().await?;
    type_slowly(&pass_field, fill.password, settings.type_delay).await?;

    match fill.submit_selector {
        Some(submit_selector) => {
            let submit = page.find_element(submit_selector).await?;
            let navigation_wait = tokio::time::timeout(
                settings.navigation_timeout,
                page.wait_for_navigation(),
            );
            let (click_result, nav_result) = futures::join!(submit.click(), navigation_wait);
            click_result?;
            match nav_result {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => return Err(e.into()),
                Err(_) => {
                    return Err(SnapError::NavigationTimeout {
                        url: page.url().await?.unwrap_or_default(),
                        seconds: settings.navigation_timeout.as_secs(),
                    })
                }
            }
        }
        None => {
            pass_field.press_key("Enter").await?;
            let wait = tokio::time::timeout(
                settings.navigation_timeout,
                page.wait_for_navigation(),
            )
            .await;
            if !matches!(wait, Ok(Ok(_))) {
                debug!("Post-submit navigation wait did not complete, continuing");
            }
        }
    }

    Ok(())
}

/// Polls for an element until it appears or the timeout elapses
async fn wait_for_element(page: &Page, selector: &str, timeout: Duration) -> Result<Element> {
    let deadline = Instant::now() + timeout;
    loop {
        match page.find_element(selector).await {
            Ok(element) => return Ok(element),
            Err(_) if Instant::now() < deadline => {
                tokio::time::sleep(SELECTOR_POLL_INTERVAL).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Types text one keystroke at a time with a delay between characters
async fn type_slowly(element: &Element, text: &str, delay: Duration) -> Result<()> {
    let mut buf = [0u8; 4];
    for c in text.chars() {
        element.type_str(c.encode_utf8(&mut buf)).await?;
        tokio::time::sleep(delay).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured_login() -> LoginConfig {
        LoginConfig {
            enabled: true,
            login_url: None,
            user_selector: Some("#username".to_string()),
            pass_selector: Some("#password".to_string()),
            submit_selector: Some("button[type=submit]".to_string()),
            username: Some("alice".to_string()),
            password: Some("secret".to_string()),
        }
    }

    #[test]
    fn test_plan_skips_entirely_without_selectors() {
        assert_eq!(
            login_plan(&LoginConfig::default()),
            LoginPlan::SkipNoSelectors
        );
    }

    #[test]
    fn test_plan_requires_both_selectors() {
        let mut login = configured_login();
        login.pass_selector = None;
        assert_eq!(login_plan(&login), LoginPlan::SkipNoSelectors);
    }

    #[test]
    fn test_plan_skips_credential_entry_when_missing() {
        let mut login = configured_login();
        login.username = None;
        assert_eq!(login_plan(&login), LoginPlan::SkipBlankCredentials);
    }

    #[test]
    fn test_plan_skips_credential_entry_when_blank() {
        // Selectors are set, so the page is still navigated to the login
        // URL; only the fill step is skipped.
        let mut login = configured_login();
        login.password = Some("   ".to_string());
        assert_eq!(login_plan(&login), LoginPlan::SkipBlankCredentials);
    }

    #[test]
    fn test_plan_fills_with_complete_config() {
        assert_eq!(
            login_plan(&configured_login()),
            LoginPlan::Fill(FormFill {
                user_selector: "#username",
                pass_selector: "#password",
                submit_selector: Some("button[type=submit]"),
                username: "alice",
                password: "secret",
            })
        );
    }

    #[test]
    fn test_plan_fill_without_submit_selector() {
        let mut login = configured_login();
        login.submit_selector = None;
        match login_plan(&login) {
            LoginPlan::Fill(fill) => assert!(fill.submit_selector.is_none()),
            other => panic!("expected a fill plan, got {:?}", other),
        }
    }
}
