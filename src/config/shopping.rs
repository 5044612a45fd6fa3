//! Shopping (browser automation) configuration
//!
//! Page elements are written as `css:<selector>` or `xpath:<expression>`.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct ShoppingConfig {
    /// WebDriver server (chromedriver, geckodriver)
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    #[serde(default = "default_store_url")]
    pub store_url: String,

    #[serde(default = "default_search_box")]
    pub search_box: String,

    #[serde(default = "default_first_result")]
    pub first_result: String,

    #[serde(default = "default_add_to_cart")]
    pub add_to_cart_button: String,

    /// Longest wait for one element, in seconds
    #[serde(default = "default_wait_timeout")]
    pub wait_timeout_secs: u64,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Pause after adding to cart, in seconds
    #[serde(default = "default_settle")]
    pub settle_secs: u64,

    /// Browser profile kept between runs (logged-in store session)
    pub browser_profile_dir: Option<String>,
}

/// How a configured element is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKind {
    Css,
    XPath,
}

/// Splits `css:...` / `xpath:...` into kind and value.
pub fn parse_selector(raw: &str) -> Option<(SelectorKind, &str)> {
    let (kind, value) = raw.split_once(':')?;
    let kind = match kind.trim().to_ascii_lowercase().as_str() {
        "css" => SelectorKind::Css,
        "xpath" => SelectorKind::XPath,
        _ => return None,
    };
    let value = value.trim();
    (!value.is_empty()).then_some((kind, value))
}

impl ShoppingConfig {
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn settle(&self) -> Duration {
        Duration::from_secs(self.settle_secs)
    }

    /// Browser arguments derived from the profile setting.
    pub fn browser_args(&self) -> Vec<String> {
        self.browser_profile_dir
            .iter()
            .filter(|dir| !dir.is_empty())
            .map(|dir| format!("--user-data-dir={}", dir))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.webdriver_url.starts_with("http") {
            return Err(ValidationError::InvalidUrl("shopping.webdriver_url"));
        }
        if !self.store_url.starts_with("http") {
            return Err(ValidationError::InvalidUrl("shopping.store_url"));
        }
        for (name, raw) in [
            ("SHOPPING__SEARCH_BOX", &self.search_box),
            ("SHOPPING__FIRST_RESULT", &self.first_result),
            ("SHOPPING__ADD_TO_CART_BUTTON", &self.add_to_cart_button),
        ] {
            if parse_selector(raw).is_none() {
                return Err(ValidationError::MissingRequired(name));
            }
        }
        if self.wait_timeout_secs == 0 || self.poll_interval_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            store_url: default_store_url(),
            search_box: default_search_box(),
            first_result: default_first_result(),
            add_to_cart_button: default_add_to_cart(),
            wait_timeout_secs: default_wait_timeout(),
            poll_interval_ms: default_poll_interval(),
            settle_secs: default_settle(),
            browser_profile_dir: None,
        }
    }
}

fn default_webdriver_url() -> String {
    "http://localhost:9515".to_string()
}

fn default_store_url() -> String {
    "https://www.amazon.in/".to_string()
}

fn default_search_box() -> String {
    "css:#twotabsearchtextbox".to_string()
}

fn default_first_result() -> String {
    "xpath://div[contains(@class, 's-result-item')]//h2//a".to_string()
}

fn default_add_to_cart() -> String {
    "css:#add-to-cart-button".to_string()
}

fn default_wait_timeout() -> u64 {
    10
}

fn default_poll_interval() -> u64 {
    250
}

fn default_settle() -> u64 {
    2
}
