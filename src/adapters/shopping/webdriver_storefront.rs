//! WebDriver Storefront - adds an item to a web store's cart by driving a
//! real browser.
//!
//! Talks the W3C WebDriver wire protocol to a driver server such as
//! chromedriver or geckodriver. The flow is: open the store, search for the
//! item, open the first result, switch to the newest window, press
//! add-to-cart, wait a moment for the cart to update. The browser session
//! is always closed afterwards, whether or not the flow succeeded.

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tokio::time::sleep;

use crate::ports::{Storefront, StorefrontError};

/// Key for the element reference in WebDriver responses.
const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// WebDriver code point for the Enter key.
const ENTER_KEY: &str = "\u{E007}";

/// How to find an element on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Css(String),
    XPath(String),
}

impl Locator {
    fn strategy(&self) -> &'static str {
        match self {
            Locator::Css(_) => "css selector",
            Locator::XPath(_) => "xpath",
        }
    }

    fn value(&self) -> &str {
        match self {
            Locator::Css(v) | Locator::XPath(v) => v,
        }
    }

    fn describe(&self) -> String {
        format!("{} '{}'", self.strategy(), self.value())
    }
}

/// Store URL, page locators and timing for the add-to-cart flow.
#[derive(Debug, Clone)]
pub struct StorefrontFlow {
    pub store_url: String,
    pub search_box: Locator,
    pub first_result: Locator,
    pub add_to_cart_button: Locator,
    /// Longest wait for any one element.
    pub element_timeout: Duration,
    pub poll_interval: Duration,
    /// Pause after clicking add-to-cart.
    pub settle: Duration,
    /// Extra browser command line arguments (such as a profile directory).
    pub browser_args: Vec<String>,
}

impl Default for StorefrontFlow {
    fn default() -> Self {
        Self {
            store_url: "https://www.amazon.in/".to_string(),
            search_box: Locator::Css("#twotabsearchtextbox".to_string()),
            first_result: Locator::XPath(
                "//div[contains(@class, 's-result-item')]//h2//a".to_string(),
            ),
            add_to_cart_button: Locator::Css("#add-to-cart-button".to_string()),
            element_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(250),
            settle: Duration::from_secs(2),
            browser_args: Vec::new(),
        }
    }
}

/// Storefront adapter driving a browser over WebDriver.
pub struct WebDriverStorefront {
    webdriver_url: String,
    flow: StorefrontFlow,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    value: Value,
}

impl WebDriverStorefront {
    pub fn new(webdriver_url: impl Into<String>, flow: StorefrontFlow) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            webdriver_url: webdriver_url.into().trim_end_matches('/').to_string(),
            flow,
            client,
        }
    }

    /// Sends one WebDriver command and returns its `value`.
    async fn command(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, StorefrontError> {
        let url = format!("{}{}", self.webdriver_url, path);
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                StorefrontError::BrowserUnavailable(e.to_string())
            } else {
                StorefrontError::WebDriver(e.to_string())
            }
        })?;

        let status = response.status();
        let parsed: WireResponse = response
            .json()
            .await
            .map_err(|e| StorefrontError::WebDriver(format!("unreadable response: {}", e)))?;

        if status.is_success() {
            Ok(parsed.value)
        } else {
            let error = parsed
                .value
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            let message = parsed
                .value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("");
            Err(StorefrontError::WebDriver(format!("{}: {}", error, message)))
        }
    }

    async fn new_session(&self) -> Result<String, StorefrontError> {
        let capabilities = json!({
            "capabilities": {
                "alwaysMatch": {
                    "goog:chromeOptions": { "args": self.flow.browser_args }
                }
            }
        });
        let value = self
            .command(Method::POST, "/session", Some(capabilities))
            .await
            .map_err(|e| StorefrontError::BrowserUnavailable(e.to_string()))?;

        value
            .get("sessionId")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| StorefrontError::WebDriver("session id missing".to_string()))
    }

    async fn find(&self, session: &str, locator: &Locator) -> Result<String, StorefrontError> {
        let value = self
            .command(
                Method::POST,
                &format!("/session/{}/element", session),
                Some(json!({ "using": locator.strategy(), "value": locator.value() })),
            )
            .await?;
        value
            .get(ELEMENT_KEY)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| StorefrontError::WebDriver("element reference missing".to_string()))
    }

    /// Polls until the element exists.
    async fn wait_for(&self, session: &str, locator: &Locator) -> Result<String, StorefrontError> {
        let started = Instant::now();
        loop {
            match self.find(session, locator).await {
                Ok(element) => return Ok(element),
                Err(StorefrontError::BrowserUnavailable(e)) => {
                    return Err(StorefrontError::BrowserUnavailable(e))
                }
                Err(_) if started.elapsed() < self.flow.element_timeout => {
                    sleep(self.flow.poll_interval).await
                }
                Err(_) => return Err(StorefrontError::element_timeout(locator.describe())),
            }
        }
    }

    /// Polls until the element exists and accepts a click.
    async fn wait_and_click(
        &self,
        session: &str,
        locator: &Locator,
    ) -> Result<(), StorefrontError> {
        let started = Instant::now();
        loop {
            let element = self.wait_for(session, locator).await?;
            let clicked = self
                .command(
                    Method::POST,
                    &format!("/session/{}/element/{}/click", session, element),
                    Some(json!({})),
                )
                .await;
            match clicked {
                Ok(_) => return Ok(()),
                Err(_) if started.elapsed() < self.flow.element_timeout => {
                    sleep(self.flow.poll_interval).await
                }
                Err(_) => return Err(StorefrontError::element_timeout(locator.describe())),
            }
        }
    }

    async fn run_flow(&self, session: &str, item: &str) -> Result<(), StorefrontError> {
        self.command(
            Method::POST,
            &format!("/session/{}/url", session),
            Some(json!({ "url": self.flow.store_url })),
        )
        .await?;

        let search_box = self.wait_for(session, &self.flow.search_box).await?;
        self.command(
            Method::POST,
            &format!("/session/{}/element/{}/value", session, search_box),
            Some(json!({ "text": format!("{}{}", item, ENTER_KEY) })),
        )
        .await?;

        self.wait_and_click(session, &self.flow.first_result).await?;

        let handles = self
            .command(Method::GET, &format!("/session/{}/window/handles", session), None)
            .await?;
        if let Some(newest) = handles.as_array().and_then(|h| h.last()).and_then(Value::as_str) {
            self.command(
                Method::POST,
                &format!("/session/{}/window", session),
                Some(json!({ "handle": newest })),
            )
            .await?;
        }

        self.wait_and_click(session, &self.flow.add_to_cart_button).await?;
        sleep(self.flow.settle).await;
        Ok(())
    }
}

#[async_trait]
impl Storefront for WebDriverStorefront {
    async fn add_to_cart(&self, item: &str) -> Result<(), StorefrontError> {
        let session = self.new_session().await?;
        let result = self.run_flow(&session, item).await;

        if let Err(e) = self
            .command(Method::DELETE, &format!("/session/{}", session), None)
            .await
        {
            tracing::warn!(error = %e, "Failed to close browser session");
        }
        result
    }
}
