//! Shopping Adapters.
//!
//! - `WebDriverStorefront` - drives a browser through a W3C WebDriver server

mod webdriver_storefront;

pub use webdriver_storefront::{Locator, StorefrontFlow, WebDriverStorefront};
