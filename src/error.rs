use thiserror::Error;

use crate::locator::LocatorStrategy;
use crate::timeout::TimeoutTier;

pub type PageResult<T> = std::result::Result<T, PageError>;

/// Errors produced while substituting arguments into a locator pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A placeholder referenced an argument that was not supplied.
    #[error("placeholder #{index} has no argument in pattern '{pattern}'")]
    MissingArgument { index: usize, pattern: String },

    /// A supplied argument is never referenced by the pattern.
    #[error("argument #{index} of {supplied} is never used in pattern '{pattern}'")]
    UnusedArgument { index: usize, supplied: usize, pattern: String },

    /// `%<s` was used before any argument had been consumed.
    #[error("relative placeholder '%<' has no previous argument in pattern '{0}'")]
    NoPreviousArgument(String),

    #[error("unknown conversion '%{conversion}' in pattern '{pattern}'")]
    UnknownConversion { conversion: char, pattern: String },

    #[error("dangling '%' at the end of pattern '{0}'")]
    DanglingPercent(String),
}

#[derive(Debug, Error)]
pub enum PageError {
    /// The locator was declared with a strategy that cannot be templated.
    /// This is a defect in the element catalog and is never retried.
    #[error(
        "Locators with types other than xpath, css selectors and id are not supported! \
         Tried to transform locator: {strategy}: {pattern}"
    )]
    UnsupportedLocatorStrategy { strategy: LocatorStrategy, pattern: String },

    #[error("Failed to format locator: {0}")]
    Format(#[from] FormatError),

    #[error("Timed out waiting for {condition} of {target} ({tier}){message}")]
    ConditionTimeout { condition: String, target: String, tier: TimeoutTier, message: String },

    #[error("No such element: {0}")]
    NoSuchElement(String),

    #[error("Stale element reference: {0}")]
    StaleElementReference(String),

    /// Any other error returned by the remote end.
    #[error("WebDriver error ({status}) {error}: {message}")]
    WebDriver { status: u16, error: String, message: String },

    #[error("The WebDriver server returned an unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Raised by the WebDriver client layer while preparing a request.
    #[error("WebDriver client error: {0}")]
    Client(#[from] thirtyfour::error::WebDriverError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PageError {
    /// True for errors that only reflect the UI changing underneath a query.
    pub fn is_transient(&self) -> bool {
        matches!(self, PageError::NoSuchElement(_) | PageError::StaleElementReference(_))
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, PageError::StaleElementReference(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PageError::ConditionTimeout { .. })
    }

    /// Build the appropriate error from a W3C error response body.
    pub fn parse(status: u16, body: &str) -> Self {
        let value: serde_json::Value = match serde_json::from_str(body) {
            Ok(v) => v,
            Err(_) => return PageError::UnexpectedResponse(format!("{}: {}", status, body)),
        };
        let error = value["value"]["error"].as_str().unwrap_or_default().to_string();
        let message = value["value"]["message"].as_str().unwrap_or_default().to_string();
        match error.as_str() {
            "no such element" => PageError::NoSuchElement(message),
            "stale element reference" => PageError::StaleElementReference(message),
            _ => PageError::WebDriver { status, error, message },
        }
    }
}

/// Turn transient errors into `Ok(default)`, propagating everything else.
pub(crate) fn absorb_transient<T>(result: PageResult<T>, default: T) -> PageResult<T> {
    match result {
        Err(e) if e.is_transient() => Ok(default),
        other => other,
    }
}
