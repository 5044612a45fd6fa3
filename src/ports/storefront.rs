//! Storefront Port - Adds a searched item to an online shopping cart.

use async_trait::async_trait;

/// Storefront automation errors.
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// Browser automation endpoint unreachable or failing.
    #[error("browser unavailable: {0}")]
    BrowserUnavailable(String),

    /// A page element never appeared.
    #[error("timed out waiting for {what}")]
    ElementTimeout { what: String },

    /// The automation endpoint returned an error.
    #[error("webdriver error: {0}")]
    WebDriver(String),
}

impl StorefrontError {
    pub fn element_timeout(what: impl Into<String>) -> Self {
        Self::ElementTimeout { what: what.into() }
    }
}

/// Port for shopping.
#[async_trait]
pub trait Storefront: Send + Sync {
    /// Searches for `item` and adds the first result to the cart.
    async fn add_to_cart(&self, item: &str) -> Result<(), StorefrontError>;
}
