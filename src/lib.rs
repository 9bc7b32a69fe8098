//! Page elements and explicit waits for synchronous Selenium / WebDriver UI tests.
//!
//! This crate sits between your test cases and a WebDriver session. It provides:
//!
//! - Declarative element catalogs: each page declares its elements as an enum with
//!   one locator per variant, with `%s` / `%1$s` placeholders for dynamic parts.
//! - Container chaining: elements nested in a modal or form prepend the container's
//!   locator to their own and take the container's arguments first.
//! - Blocking explicit waits for presence, visibility, clickability, invisibility,
//!   staleness and selection state, bounded by a fixed set of timeout tiers.
//! - A W3C WebDriver session over a blocking `reqwest` client. Any other driver can be
//!   used by implementing [`WebDriverCommands`].
//!
//! ## Example
//!
//! The following example assumes you have chromedriver running at localhost:4444.
//!
//! ```rust,no_run
//! use page_elements_sync::prelude::*;
//!
//! #[derive(Debug, Clone, Copy)]
//! enum Login {
//!     Username,
//!     Submit,
//! }
//!
//! impl PageElement for Login {
//!     fn descriptor(&self) -> LocatorDescriptor {
//!         match self {
//!             Login::Username => LocatorDescriptor::xpath("//input[@id='username']"),
//!             Login::Submit => LocatorDescriptor::xpath("//button[@id='submit']"),
//!         }
//!     }
//! }
//!
//! fn main() -> PageResult<()> {
//!     let driver = WebDriverSession::start("http://localhost:4444", Browser::Chrome)?;
//!     driver.get("http://localhost:8080/login")?;
//!
//!     let username = driver.wait_until().visible(&Login::Username.by()?)?;
//!     driver.send_keys(&username, "tomsmith")?;
//!
//!     let submit = driver.wait_until().timeout(TimeoutTier::Minimum).clickable(&Login::Submit.by()?)?;
//!     driver.click(&submit)?;
//!
//!     driver.quit()
//! }
//! ```

#![forbid(unsafe_code)]
#![allow(clippy::needless_doctest_main)]

pub use config::WaitConfig;
pub use driver::WebDriverCommands;
pub use error::{FormatError, PageError, PageResult};
pub use locator::{
    ContainerPageElement, LocatorDescriptor, LocatorStrategy, PageElement, ResolvedLocator,
};
pub use query::{DriverWaitable, Waiter};
pub use session::{Browser, GenericWebDriverSession, WebDriverSession};
pub use timeout::TimeoutTier;
pub use webelement::WebElement;

/// Re-export the WebDriver protocol types used in this crate's API.
pub use thirtyfour::{By, DesiredCapabilities, ElementId, SessionId};

pub mod prelude {
    pub use crate::checks::{is_element_present, is_element_visible};
    pub use crate::driver::WebDriverCommands;
    pub use crate::error::{PageError, PageResult};
    pub use crate::locator::{
        ContainerPageElement, LocatorDescriptor, PageElement, ResolvedLocator,
    };
    pub use crate::query::{DriverWaitable, Waiter};
    pub use crate::session::{Browser, WebDriverSession};
    pub use crate::timeout::TimeoutTier;
    pub use crate::webelement::WebElement;
}

pub mod checks;
pub mod config;
pub mod driver;
pub mod error;
pub mod http {
    pub mod connection_sync;
    pub mod reqwest_sync;
}
pub mod locator;
pub mod query;
mod session;
pub mod timeout;
mod webelement;
